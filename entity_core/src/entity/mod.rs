//! Entity - Identity, stats, equipment and inventory of a game actor

mod equipment;
mod inventory;

use crate::combat::{self, AttackReport, FightReport};
use crate::error::EntityError;
use crate::item::ItemRef;
use crate::location::LocationId;
use crate::stats::Stats;
use crate::types::{EntityId, EntityKind, EquipmentSlot, StatKind};
use std::collections::BTreeMap;
use tracing::warn;

/// A player, enemy or any other actor
///
/// Players and enemies differ only in their [`EntityKind`] tag.
#[derive(Debug)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub name: String,
    pub description: String,
    stats: Stats,
    equipment: BTreeMap<EquipmentSlot, ItemRef>,
    inventory: Vec<ItemRef>,
    location: Option<LocationId>,
}

impl Entity {
    /// Create an entity with the kind's default name and all canonical stats at 0
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Entity {
            id,
            kind,
            name: kind.default_name().to_string(),
            description: kind.default_description().to_string(),
            stats: Stats::new(),
            equipment: BTreeMap::new(),
            inventory: Vec::new(),
            location: None,
        }
    }

    pub fn player(id: EntityId) -> Self {
        Self::new(id, EntityKind::Player)
    }

    pub fn enemy(id: EntityId) -> Self {
        Self::new(id, EntityKind::Enemy)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set a base stat, dropping it with a warning if the name is not canonical
    pub fn with_stat(mut self, name: impl AsRef<str>, value: i64) -> Self {
        if let Err(err) = self.set_base_stat(name.as_ref(), value) {
            warn!(entity = %self.name, stat = name.as_ref(), "{}", err);
        }
        self
    }

    pub fn with_stats<I, S>(self, stats: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        stats
            .into_iter()
            .fold(self, |entity, (name, value)| entity.with_stat(name, value))
    }

    /// Add an item to the starting inventory
    pub fn with_item(mut self, item: &ItemRef) -> Self {
        self.inventory.push(ItemRef::clone(item));
        self
    }

    /// Equip an item at construction, logging a warning if it is rejected
    pub fn with_equipped(mut self, item: &ItemRef) -> Self {
        if let Err(err) = self.equip(item) {
            warn!(entity = %self.name, item = %item.name, "starting equipment rejected: {}", err);
        }
        self
    }

    pub fn at(mut self, location: LocationId) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the base (unequipped) value of a canonical stat
    ///
    /// Bonuses of items already equipped stay on top of the new base.
    fn set_base_stat(&mut self, name: &str, value: i64) -> Result<(), EntityError> {
        if !StatKind::is_valid(name) {
            return Err(EntityError::InvalidStatName {
                entity: self.name.clone(),
                stat: name.to_string(),
            });
        }
        let bonus = self.equipped_bonus(name);
        self.stats.set(name, value.saturating_add(bonus));
        Ok(())
    }

    // === Read access ===

    /// Current stats, equipped bonuses included
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stat(&self, name: impl AsRef<str>) -> i64 {
        self.stats.get(name)
    }

    /// Stat value with every equipped item's bonus taken off
    pub fn base_stat(&self, name: impl AsRef<str>) -> i64 {
        let name = name.as_ref();
        self.stats.get(name).saturating_sub(self.equipped_bonus(name))
    }

    fn equipped_bonus(&self, name: &str) -> i64 {
        self.equipment
            .values()
            .map(|item| item.stats().get(name))
            .fold(0, i64::saturating_add)
    }

    pub fn health(&self) -> i64 {
        self.stats.get(StatKind::Health)
    }

    /// Whether health has reached zero
    pub fn is_defeated(&self) -> bool {
        self.health() <= 0
    }

    pub fn location(&self) -> Option<LocationId> {
        self.location
    }

    /// Place the entity somewhere, or nowhere
    pub fn set_location(&mut self, location: Option<LocationId>) {
        self.location = location;
    }

    pub(crate) fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    // === Combat ===

    /// Attack `target` once under the default combat rules
    pub fn attack(&mut self, target: &mut Entity) -> AttackReport {
        combat::resolve_attack(self, target)
    }

    /// One full exchange: this entity attacks, then `target` strikes back
    pub fn fight(&mut self, target: &mut Entity) -> FightReport {
        combat::resolve_fight(self, target)
    }
}
