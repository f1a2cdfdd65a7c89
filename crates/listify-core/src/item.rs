//! Item Entity
//!
//! A named record with a description, an identity and a display serial.

use std::fmt;

use serde::Serialize;

/// Identity of an item, unique for the lifetime of its list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-entered fields of an item, as captured by the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// An item in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Assigned on creation, never changes
    pub id: ItemId,
    /// 1-based position at the time the item was added
    pub serial: usize,
    pub name: String,
    pub description: String,
}

impl Item {
    pub(crate) fn from_draft(id: ItemId, serial: usize, draft: ItemDraft) -> Self {
        Self {
            id,
            serial,
            name: draft.name,
            description: draft.description,
        }
    }

    /// Current editable fields
    pub fn draft(&self) -> ItemDraft {
        ItemDraft::new(self.name.clone(), self.description.clone())
    }
}

/// Renders as `#{serial} {name}: {description}`
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}: {}", self.serial, self.name, self.description)
    }
}
