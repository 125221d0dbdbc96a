//! Image picker abstraction used by the add flow.

use crate::error::StoreError;
use async_trait::async_trait;

/// Outcome of an image pick request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSelection {
    /// The user picked an image; the string is an opaque local locator.
    Picked(String),
    /// The user dismissed the picker.
    Cancelled,
}

#[async_trait]
/// Image picker facility provided by the embedding application.
pub trait ImagePicker: Send + Sync {
    /// Ask the user to pick an image.
    async fn pick(&self) -> Result<ImageSelection, StoreError>;
}
