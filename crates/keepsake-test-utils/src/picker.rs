use async_trait::async_trait;
use keepsake_core::error::StoreError;
use keepsake_core::picker::{ImagePicker, ImageSelection};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Image picker replaying a scripted sequence of outcomes.
///
/// Once the script runs out, every further pick reports cancellation.
#[derive(Default)]
pub struct ScriptedImagePicker {
    outcomes: Mutex<VecDeque<ImageSelection>>,
}

impl ScriptedImagePicker {
    pub fn new(outcomes: Vec<ImageSelection>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
        }
    }

    pub fn picking(uri: &str) -> Self {
        Self::new(vec![ImageSelection::Picked(uri.to_string())])
    }

    pub fn cancelling() -> Self {
        Self::new(vec![ImageSelection::Cancelled])
    }
}

#[async_trait]
impl ImagePicker for ScriptedImagePicker {
    async fn pick(&self) -> Result<ImageSelection, StoreError> {
        Ok(self
            .outcomes
            .lock()
            .pop_front()
            .unwrap_or(ImageSelection::Cancelled))
    }
}
