//! Item List State
//!
//! The ordered item collection and the reducer that drives it.
//! Three transitions exist: add, update in place, and erase all.

use serde::Serialize;

use crate::item::{Item, ItemDraft, ItemId};

/// Intent applied to an [`ItemList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new item
    Add(ItemDraft),
    /// Replace name and description of an existing item
    Update { id: ItemId, draft: ItemDraft },
    /// Drop every item
    EraseAll,
}

/// Ordered collection of items, insertion order preserved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemList {
    items: Vec<Item>,
    /// Next id to hand out. Survives erase-all so ids are never reused.
    #[serde(skip)]
    next_id: u64,
}

impl Default for ItemList {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Method form of [`reduce`]
    pub fn apply(self, action: Action) -> Self {
        reduce(self, action)
    }

    fn add(mut self, draft: ItemDraft) -> Self {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        let serial = self.items.len() + 1;
        log::debug!("[STORE] add item {} as #{}", id, serial);
        self.items.push(Item::from_draft(id, serial, draft));
        self
    }

    fn update(mut self, id: ItemId, draft: ItemDraft) -> Self {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.name = draft.name;
                item.description = draft.description;
                log::debug!("[STORE] updated item {} (#{})", id, item.serial);
            }
            None => log::debug!("[STORE] update ignored, no item {}", id),
        }
        self
    }

    fn erase_all(mut self) -> Self {
        log::debug!("[STORE] erase all ({} items)", self.items.len());
        self.items.clear();
        self
    }
}

/// Apply one action to the list, returning the next state
pub fn reduce(state: ItemList, action: Action) -> ItemList {
    match action {
        Action::Add(draft) => state.add(draft),
        Action::Update { id, draft } => state.update(id, draft),
        Action::EraseAll => state.erase_all(),
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
