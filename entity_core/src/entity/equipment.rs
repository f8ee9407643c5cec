//! Equipment management
//!
//! Equipping adds an item's bonuses to the entity's stats and unequipping
//! subtracts exactly the same bonuses. Inventory membership is never touched:
//! an item may be equipped without ever having been added to the inventory.

use super::Entity;
use crate::error::{EntityError, TransitionError};
use crate::item::ItemRef;
use crate::types::EquipmentSlot;
use std::rc::Rc;
use tracing::debug;

impl Entity {
    /// Equipped items by slot
    pub fn equipment(&self) -> impl Iterator<Item = (&EquipmentSlot, &ItemRef)> {
        self.equipment.iter()
    }

    /// Item currently in `slot`
    pub fn equipped(&self, slot: &EquipmentSlot) -> Option<&ItemRef> {
        self.equipment.get(slot)
    }

    /// Equip an item into its slot
    ///
    /// Whatever occupied the slot is unequipped first and returned.
    pub fn equip<'a>(
        &mut self,
        item: impl Into<Option<&'a ItemRef>>,
    ) -> Result<Option<ItemRef>, EntityError> {
        let item = item
            .into()
            .ok_or(EntityError::InvalidReference { operation: "equip" })?;

        if item.is_equipped() {
            return Err(TransitionError::AlreadyEquipped {
                item: item.name.clone(),
            }
            .into());
        }

        let slot = item
            .equipment_slot()
            .ok_or_else(|| TransitionError::NotEquippable {
                item: item.name.clone(),
            })?
            .clone();

        let displaced = self.equipment.remove(&slot);
        if let Some(previous) = &displaced {
            previous.set_equipped(false);
            self.stats.remove_bonuses(previous.stats());
            debug!(entity = %self.name, item = %previous.name, %slot, "displaced from slot");
        }

        self.stats.apply_bonuses(item.stats());
        item.set_equipped(true);
        debug!(entity = %self.name, item = %item.name, %slot, "equipped");
        self.equipment.insert(slot, Rc::clone(item));

        Ok(displaced)
    }

    /// Take an item out of its slot on this entity
    pub fn unequip<'a>(
        &mut self,
        item: impl Into<Option<&'a ItemRef>>,
    ) -> Result<ItemRef, EntityError> {
        let item = item
            .into()
            .ok_or(EntityError::InvalidReference { operation: "unequip" })?;

        let slot = match item.equipment_slot() {
            Some(slot) if item.is_equipped() => slot,
            _ => {
                return Err(TransitionError::NotEquipped {
                    item: item.name.clone(),
                }
                .into())
            }
        };

        let not_here = || TransitionError::NotEquippedHere {
            item: item.name.clone(),
            entity: self.name.clone(),
        };

        let holds_item = self
            .equipment
            .get(slot)
            .is_some_and(|current| Rc::ptr_eq(current, item));
        if !holds_item {
            return Err(not_here().into());
        }
        let removed = self.equipment.remove(slot).ok_or_else(not_here)?;

        removed.set_equipped(false);
        self.stats.remove_bonuses(removed.stats());
        debug!(entity = %self.name, item = %removed.name, %slot, "unequipped");

        Ok(removed)
    }
}
