use async_trait::async_trait;
use chrono::NaiveDateTime;
use keepsake_core::error::ReminderError;
use keepsake_core::reminders::{ReminderContent, ReminderScheduler};
use parking_lot::Mutex;
use std::sync::Arc;

/// One call observed by the recording scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerCall {
    Schedule {
        at: NaiveDateTime,
        content: ReminderContent,
    },
    CancelAll,
}

/// Scheduler stub recording every call in order.
#[derive(Clone, Default)]
pub struct RecordingScheduler {
    calls: Arc<Mutex<Vec<SchedulerCall>>>,
    fail_schedule: Arc<Mutex<Option<String>>>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent schedule call fail with the given message.
    pub fn fail_schedule(&self, message: impl Into<String>) {
        *self.fail_schedule.lock() = Some(message.into());
    }

    /// Every observed call, in order.
    pub fn calls(&self) -> Vec<SchedulerCall> {
        self.calls.lock().clone()
    }

    /// Fire times of the scheduled notifications, in call order.
    pub fn scheduled_times(&self) -> Vec<NaiveDateTime> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                SchedulerCall::Schedule { at, .. } => Some(*at),
                SchedulerCall::CancelAll => None,
            })
            .collect()
    }

    /// Contents of the scheduled notifications, in call order.
    pub fn scheduled_contents(&self) -> Vec<ReminderContent> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                SchedulerCall::Schedule { content, .. } => Some(content.clone()),
                SchedulerCall::CancelAll => None,
            })
            .collect()
    }
}

#[async_trait]
impl ReminderScheduler for RecordingScheduler {
    async fn schedule(
        &self,
        at: NaiveDateTime,
        content: &ReminderContent,
    ) -> Result<(), ReminderError> {
        if let Some(message) = self.fail_schedule.lock().clone() {
            return Err(ReminderError::Notify(message));
        }
        self.calls.lock().push(SchedulerCall::Schedule {
            at,
            content: content.clone(),
        });
        Ok(())
    }

    async fn cancel_all(&self) -> Result<(), ReminderError> {
        self.calls.lock().push(SchedulerCall::CancelAll);
        Ok(())
    }
}
