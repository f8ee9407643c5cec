//! Item - Things entities carry and equip

use crate::stats::Stats;
use crate::types::{EquipmentSlot, ItemId};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to an item
///
/// An item can sit in an inventory and an equipment slot at once, or in two
/// inventories after a defeat, so it is shared by identity.
pub type ItemRef = Rc<Item>;

/// An item with stat bonuses and optional equippability
///
/// Everything but the equip flag is fixed once built, so the bonuses an
/// entity received on equip are exactly the ones removed on unequip.
#[derive(Debug)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    stats: Stats,
    equipment_slot: Option<EquipmentSlot>,
    equipped: Cell<bool>,
}

impl Item {
    /// Create a plain, non-equippable item with no bonuses
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Item {
            id,
            name: name.into(),
            description: "undescribed item".to_string(),
            stats: Stats::empty(),
            equipment_slot: None,
            equipped: Cell::new(false),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a stat bonus granted while equipped
    pub fn with_stat(mut self, name: impl AsRef<str>, value: i64) -> Self {
        self.stats.set(name, value);
        self
    }

    /// Make the item equippable into `slot`
    pub fn with_slot(mut self, slot: impl Into<EquipmentSlot>) -> Self {
        self.equipment_slot = Some(slot.into());
        self
    }

    /// Wrap into a shared handle
    pub fn into_ref(self) -> ItemRef {
        Rc::new(self)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn equipment_slot(&self) -> Option<&EquipmentSlot> {
        self.equipment_slot.as_ref()
    }

    pub fn is_equippable(&self) -> bool {
        self.equipment_slot.is_some()
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped.get()
    }

    /// Only entity equip/unequip may flip this
    pub(crate) fn set_equipped(&self, equipped: bool) {
        self.equipped.set(equipped);
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.id, self.description)?;
        if !self.stats.is_empty() {
            let bonuses: Vec<String> = self
                .stats
                .iter()
                .map(|(name, value)| format!("{}: {}", name, value))
                .collect();
            write!(f, " [{}]", bonuses.join(", "))?;
        }
        if let Some(slot) = &self.equipment_slot {
            if self.is_equipped() {
                write!(f, " <equipped: {}>", slot)?;
            } else {
                write!(f, " <{}>", slot)?;
            }
        }
        Ok(())
    }
}
