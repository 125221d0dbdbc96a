//! Test helpers shared across Keepsake crates.

pub mod kv;
pub mod notify;
pub mod picker;

pub use kv::{FailingKeyValueStore, MemoryKeyValueStore};
pub use notify::{RecordingScheduler, SchedulerCall};
pub use picker::ScriptedImagePicker;
