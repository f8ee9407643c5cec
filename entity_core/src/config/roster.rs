//! Roster configuration - Item and entity templates
//!
//! A roster lists items and the entities that start out carrying or wearing
//! them. Building it validates cross-references and produces live
//! [`Entity`] values sharing [`ItemRef`] handles.

use super::{CombatRules, ConfigError};
use crate::entity::Entity;
use crate::item::{Item, ItemRef};
use crate::location::LocationRegistry;
use crate::types::{EntityId, EntityKind, EquipmentSlot, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Item definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Bonuses granted while equipped
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
    /// Equipment slot; absent for items that cannot be equipped
    #[serde(default)]
    pub slot: Option<EquipmentSlot>,
}

impl ItemTemplate {
    pub fn build(&self) -> Item {
        let mut item = Item::new(self.id, self.name.clone());
        if let Some(description) = &self.description {
            item = item.with_description(description.clone());
        }
        if let Some(slot) = &self.slot {
            item = item.with_slot(slot.clone());
        }
        self.stats
            .iter()
            .fold(item, |item, (name, value)| item.with_stat(name, *value))
    }
}

/// Entity definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityTemplate {
    pub id: EntityId,
    #[serde(default)]
    pub kind: EntityKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Base stats; names outside the canonical set are warned about and dropped
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
    /// Item ids placed in the inventory, in order
    #[serde(default)]
    pub inventory: Vec<ItemId>,
    /// Item ids equipped at start
    #[serde(default)]
    pub equipped: Vec<ItemId>,
    /// Name of the starting location
    #[serde(default)]
    pub location: Option<String>,
}

/// Top-level roster file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub rules: CombatRules,
    #[serde(default)]
    pub items: Vec<ItemTemplate>,
    #[serde(default)]
    pub entities: Vec<EntityTemplate>,
}

/// Live entities and items built from a [`RosterConfig`]
#[derive(Debug, Default)]
pub struct Roster {
    pub rules: CombatRules,
    pub items: BTreeMap<ItemId, ItemRef>,
    pub entities: Vec<Entity>,
    pub locations: LocationRegistry,
}

impl Roster {
    pub fn item(&self, id: ItemId) -> Option<&ItemRef> {
        self.items.get(&id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    /// Remove an entity from the roster, handing ownership to the caller
    pub fn take_entity(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|entity| entity.id == id)?;
        Some(self.entities.remove(index))
    }
}

impl RosterConfig {
    /// Check ids and cross-references
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut item_ids = HashMap::new();
        for item in &self.items {
            if item_ids.insert(item.id, item).is_some() {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
        }

        let mut entity_ids = HashSet::new();
        let mut worn_by: HashMap<ItemId, EntityId> = HashMap::new();
        for entity in &self.entities {
            if !entity_ids.insert(entity.id) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate entity id {}",
                    entity.id
                )));
            }

            for id in entity.inventory.iter().chain(&entity.equipped) {
                if !item_ids.contains_key(id) {
                    return Err(ConfigError::ValidationError(format!(
                        "entity {} references unknown item {}",
                        entity.id, id
                    )));
                }
            }

            let mut slots = HashSet::new();
            for id in &entity.equipped {
                let template = item_ids[id];
                let slot = template.slot.as_ref().ok_or_else(|| {
                    ConfigError::ValidationError(format!(
                        "entity {} equips {} ({}) which has no slot",
                        entity.id, template.name, id
                    ))
                })?;
                if !slots.insert(slot) {
                    return Err(ConfigError::ValidationError(format!(
                        "entity {} equips more than one item in slot {}",
                        entity.id, slot
                    )));
                }
                if let Some(other) = worn_by.insert(*id, entity.id) {
                    return Err(ConfigError::ValidationError(format!(
                        "item {} is equipped by both entity {} and entity {}",
                        id, other, entity.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate and build live items and entities
    pub fn build(self) -> Result<Roster, ConfigError> {
        self.validate()?;

        let items: BTreeMap<ItemId, ItemRef> = self
            .items
            .iter()
            .map(|template| (template.id, template.build().into_ref()))
            .collect();

        let mut locations = LocationRegistry::new();
        let mut entities = Vec::with_capacity(self.entities.len());

        for template in &self.entities {
            let mut entity = Entity::new(template.id, template.kind);
            if let Some(name) = &template.name {
                entity = entity.named(name.clone());
            }
            if let Some(description) = &template.description {
                entity = entity.described(description.clone());
            }
            entity = entity.with_stats(template.stats.iter().map(|(k, v)| (k, *v)));

            for id in &template.inventory {
                entity = entity.with_item(&items[id]);
            }
            for id in &template.equipped {
                entity = entity.with_equipped(&items[id]);
            }
            if let Some(place) = &template.location {
                entity = entity.at(locations.find_or_register(place));
            }

            debug!(entity = %entity.name, id = %entity.id, kind = %entity.kind, "built from roster");
            entities.push(entity);
        }

        Ok(Roster {
            rules: self.rules,
            items,
            entities,
            locations,
        })
    }
}

/// The roster bundled with the crate
pub fn default_roster() -> Result<Roster, ConfigError> {
    let toml = include_str!("../../config/roster.toml");
    super::parse_roster(toml)
}
