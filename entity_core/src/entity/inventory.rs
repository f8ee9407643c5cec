//! Inventory management

use super::Entity;
use crate::error::EntityError;
use crate::item::ItemRef;
use crate::types::ItemId;
use tracing::debug;

impl Entity {
    /// Items carried, in the order they were added
    pub fn inventory(&self) -> &[ItemRef] {
        &self.inventory
    }

    /// Append an item to the inventory
    ///
    /// There is no uniqueness check; the same item may be listed twice.
    pub fn add_item<'a>(
        &mut self,
        item: impl Into<Option<&'a ItemRef>>,
    ) -> Result<String, EntityError> {
        let item = item.into().ok_or(EntityError::InvalidReference {
            operation: "add_item",
        })?;

        self.inventory.push(ItemRef::clone(item));
        debug!(entity = %self.name, item = %item.name, "item added to inventory");
        Ok(format!("{} has been added to {}'s inventory.", item.name, self.name))
    }

    /// Remove the last inventory entry whose id matches `item`
    ///
    /// Equipment is left untouched.
    pub fn remove_item<'a>(
        &mut self,
        item: impl Into<Option<&'a ItemRef>>,
    ) -> Result<ItemRef, EntityError> {
        let item = item.into().ok_or(EntityError::InvalidReference {
            operation: "remove_item",
        })?;

        let index = self.last_index_of(item.id).ok_or_else(|| EntityError::NotFound {
            item: item.name.clone(),
            entity: self.name.clone(),
        })?;

        let removed = self.inventory.remove(index);
        debug!(entity = %self.name, item = %removed.name, index, "item removed from inventory");
        Ok(removed)
    }

    /// Last inventory entry with this id
    pub fn find_item(&self, id: ItemId) -> Option<&ItemRef> {
        self.last_index_of(id).map(|index| &self.inventory[index])
    }

    pub fn has_item(&self, id: ItemId) -> bool {
        self.last_index_of(id).is_some()
    }

    fn last_index_of(&self, id: ItemId) -> Option<usize> {
        self.inventory.iter().rposition(|current| current.id == id)
    }
}
