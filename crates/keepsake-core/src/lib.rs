//! Core engine for the Keepsake memory journal.

pub mod draft;
pub mod error;
pub mod favorites;
pub mod flashback;
pub mod kv;
pub mod model;
pub mod picker;
pub mod reminders;
pub mod store;
pub mod tips;

/// Draft state and validation for new entries.
pub use draft::{DraftError, MemoryDraft};
/// Store and reminder error types.
pub use error::{ReminderError, StoreError};
/// Favorite tip ids preference.
pub use favorites::FavoriteTips;
/// Flashback filter over the journal collection.
pub use flashback::{flashbacks, is_flashback};
/// Key-value persistence contract and default file implementation.
pub use kv::{FileKeyValueStore, KeyValueStore};
/// Journal record model and category tags.
pub use model::{Category, Memory};
/// Image picker interface.
pub use picker::{ImagePicker, ImageSelection};
/// Daily reminder toggle, planning, and scheduler interface.
pub use reminders::{DailyTips, ReminderContent, ReminderScheduler, plan_fire_times};
/// Durable journal store and read snapshot.
pub use store::{MemoryStore, Snapshot};
/// Wisdom card deck and pager.
pub use tips::{TipPager, WisdomTip, random_tip, tip_by_id, wisdom_tips};
