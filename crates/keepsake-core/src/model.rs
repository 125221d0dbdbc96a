//! Memory record model and category tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Persisted journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Memory {
    /// Record identifier.
    pub id: Uuid,
    /// Entry text.
    pub content: String,
    /// Category tag. Stored as a plain string; the store does not
    /// validate membership in the fixed set.
    pub category: String,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
    /// Opaque locator for an attached photo, if any.
    #[serde(rename = "imageUri", skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}

/// Fixed category set offered by the add flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A sweet moment.
    Sweet,
    /// A funny moment.
    Funny,
    /// A proud moment.
    Proud,
    /// A developmental milestone.
    Milestone,
    /// A creative moment.
    Creative,
    /// An act of kindness.
    Kind,
}

impl Category {
    /// All categories, in picker order.
    pub const ALL: [Category; 6] = [
        Category::Sweet,
        Category::Funny,
        Category::Proud,
        Category::Milestone,
        Category::Creative,
        Category::Kind,
    ];

    /// Return the category as its stored lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sweet => "sweet",
            Category::Funny => "funny",
            Category::Proud => "proud",
            Category::Milestone => "milestone",
            Category::Creative => "creative",
            Category::Kind => "kind",
        }
    }

    /// Display label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sweet => "Sweet",
            Category::Funny => "Funny",
            Category::Proud => "Proud",
            Category::Milestone => "Milestone",
            Category::Creative => "Creative",
            Category::Kind => "Kind",
        }
    }

    /// Emoji shown next to the category.
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Sweet => "💝",
            Category::Funny => "😄",
            Category::Proud => "🌟",
            Category::Milestone => "🎯",
            Category::Creative => "🎨",
            Category::Kind => "🫂",
        }
    }

    /// Parse a category from its stored tag.
    pub fn parse(value: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }

    /// Emoji for a stored category tag, with a fallback for tags
    /// outside the fixed set.
    pub fn emoji_for(value: &str) -> &'static str {
        Category::parse(value).map_or("✨", |category| category.emoji())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::parse(value).ok_or(())
    }
}
