//! Core identifiers and tags shared by items and entities

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Identifier of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named equipment position (e.g. "weapon"), holding at most one item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentSlot(pub String);

impl EquipmentSlot {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EquipmentSlot {
    fn from(s: &str) -> Self {
        EquipmentSlot(s.to_string())
    }
}

impl From<String> for EquipmentSlot {
    fn from(s: String) -> Self {
        EquipmentSlot(s)
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The canonical stats every entity carries
///
/// Order of declaration is display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    Attack,
    Defence,
    Speed,
    Health,
    Experience,
}

impl StatKind {
    /// Check whether a stat name belongs to the canonical set
    pub fn is_valid(name: &str) -> bool {
        name.parse::<StatKind>().is_ok()
    }

    /// Canonical stat names, in display order
    pub fn names() -> Vec<&'static str> {
        StatKind::iter().map(<&'static str>::from).collect()
    }
}

/// Category tag for an entity. Behaviour never differs by kind; only the
/// default name and description do.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    #[default]
    Neutral,
    Player,
    Enemy,
    Npc,
}

impl EntityKind {
    /// Name given to an entity of this kind when none is supplied
    pub fn default_name(&self) -> &'static str {
        match self {
            EntityKind::Neutral => "unnamed entity",
            EntityKind::Player => "unnamed player",
            EntityKind::Enemy => "unnamed enemy",
            EntityKind::Npc => "unnamed character",
        }
    }

    /// Description given to an entity of this kind when none is supplied
    pub fn default_description(&self) -> &'static str {
        match self {
            EntityKind::Neutral => "undescribed entity",
            EntityKind::Player => "undescribed player",
            EntityKind::Enemy => "undescribed enemy",
            EntityKind::Npc => "undescribed character",
        }
    }
}
