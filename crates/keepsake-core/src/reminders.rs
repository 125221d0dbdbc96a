//! Daily wisdom reminders: preference flag and notification planning.

use crate::error::ReminderError;
use crate::kv::KeyValueStore;
use crate::tips::random_tip;
use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use keepsake_config::RemindersConfig;
use log::{info, warn};
use std::sync::Arc;

/// Storage key holding the daily-tips preference flag.
pub const TIPS_ENABLED_KEY: &str = "tips_enabled";

/// Notification title for daily wisdom reminders.
pub const REMINDER_TITLE: &str = "Daily Parenting Wisdom 💝";

/// Content for one scheduled notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderContent {
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
}

impl ReminderContent {
    /// Build reminder content with a randomly chosen tip message.
    pub fn daily_wisdom() -> Self {
        let tip = random_tip(&mut rand::rng());
        Self {
            title: REMINDER_TITLE.to_string(),
            body: tip.message.to_string(),
        }
    }
}

#[async_trait]
/// Local notification facility provided by the embedding application.
///
/// Fire-and-forget and best-effort: no delivery acknowledgement comes
/// back to the caller.
pub trait ReminderScheduler: Send + Sync {
    /// Schedule one notification at the given wall-clock time.
    async fn schedule(
        &self,
        at: NaiveDateTime,
        content: &ReminderContent,
    ) -> Result<(), ReminderError>;

    /// Cancel every scheduled notification.
    async fn cancel_all(&self) -> Result<(), ReminderError>;
}

/// Plan wall-clock fire times, one per day for `days` days at `at`.
///
/// The first fire lands today when `at` is still ahead of `now`, else
/// tomorrow; each following fire is one day later.
pub fn plan_fire_times(now: NaiveDateTime, at: NaiveTime, days: u32) -> Vec<NaiveDateTime> {
    let mut first = now.date().and_time(at);
    if first <= now {
        first += Duration::days(1);
    }
    (0..days)
        .map(|offset| first + Duration::days(i64::from(offset)))
        .collect()
}

/// Daily wisdom reminder preference and scheduling orchestration.
///
/// Owns the `tips_enabled` flag, stored as the literal string `"true"`
/// or `"false"` under its own key, independent of the memory
/// collection.
#[derive(Clone)]
pub struct DailyTips {
    /// Injected persistence backend for the preference flag.
    backend: Arc<dyn KeyValueStore>,
    /// Injected notification facility.
    scheduler: Arc<dyn ReminderScheduler>,
    /// Fire time and day count.
    config: RemindersConfig,
}

impl DailyTips {
    /// Create the toggle with the default schedule (19:30, seven days).
    pub fn new(backend: Arc<dyn KeyValueStore>, scheduler: Arc<dyn ReminderScheduler>) -> Self {
        Self::with_config(backend, scheduler, RemindersConfig::default())
    }

    /// Create the toggle with an explicit reminder schedule.
    pub fn with_config(
        backend: Arc<dyn KeyValueStore>,
        scheduler: Arc<dyn ReminderScheduler>,
        config: RemindersConfig,
    ) -> Self {
        Self {
            backend,
            scheduler,
            config,
        }
    }

    /// Whether daily reminders are enabled. Absent, unreadable, or
    /// unrecognized values read as disabled.
    pub async fn is_enabled(&self) -> bool {
        match self.backend.get(TIPS_ENABLED_KEY).await {
            Ok(Some(value)) => value == "true",
            Ok(None) => false,
            Err(err) => {
                warn!("failed to read tips flag: {err}");
                false
            }
        }
    }

    /// Persist the flag and reconcile scheduled notifications.
    ///
    /// Enabling cancels any previously scheduled set before scheduling
    /// the replacement, one notification per planned day with its own
    /// randomly chosen tip. Disabling cancels everything. A failed flag
    /// write surfaces before any scheduling request is made.
    pub async fn set_enabled(&self, enabled: bool) -> Result<(), ReminderError> {
        let value = if enabled { "true" } else { "false" };
        self.backend.set(TIPS_ENABLED_KEY, value).await?;

        self.scheduler.cancel_all().await?;
        if !enabled {
            info!("daily tips disabled");
            return Ok(());
        }

        let at = NaiveTime::from_hms_opt(self.config.hour, self.config.minute, 0).ok_or(
            ReminderError::InvalidTime {
                hour: self.config.hour,
                minute: self.config.minute,
            },
        )?;
        let times = plan_fire_times(Local::now().naive_local(), at, self.config.days);
        for at in &times {
            let content = ReminderContent::daily_wisdom();
            self.scheduler.schedule(*at, &content).await?;
        }
        info!(
            "daily tips enabled (count={}, first_fire={})",
            times.len(),
            times.first().map_or_else(String::new, |at| at.to_string())
        );
        Ok(())
    }
}
