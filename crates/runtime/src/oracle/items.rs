//! Minimal [`game_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use game_core::{DamageType, ItemDescriptor, ItemOracle};

/// ItemOracle implementation with static item descriptors
#[derive(Debug, Default)]
pub struct ItemOracleImpl {
    items: HashMap<String, ItemDescriptor>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item descriptor
    pub fn add_item(&mut self, item: ItemDescriptor) {
        self.items.insert(item.name.clone(), item);
    }

    pub fn test_items() -> Self {
        [
            ItemDescriptor::weapon("pmace", "mace", DamageType::Magical),
            ItemDescriptor::weapon("blade", "short_sword", DamageType::Physical),
        ]
        .into_iter()
        .collect()
    }
}

impl FromIterator<ItemDescriptor> for ItemOracleImpl {
    fn from_iter<I: IntoIterator<Item = ItemDescriptor>>(iter: I) -> Self {
        let mut oracle = Self::new();
        for item in iter {
            oracle.add_item(item);
        }
        oracle
    }
}

impl ItemOracle for ItemOracleImpl {
    fn item(&self, name: &str) -> Option<&ItemDescriptor> {
        self.items.get(name)
    }
}
