//! entity_core - Entity state engine for turn-based games
//!
//! This library provides:
//! - Item: stat bonuses, equippability and a shared equip flag
//! - Entity: stats, inventory and slot-exclusive equipment with reversible bonuses
//! - Combat: damage, defeat, experience and loot transfer as one state change
//! - Display: human-readable entity descriptions
//! - Config: item/entity rosters and combat rules from TOML or JSON

pub mod combat;
pub mod config;
pub mod display;
pub mod entity;
pub mod error;
pub mod item;
pub mod location;
pub mod prelude;
pub mod shape;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use combat::{AttackReport, DefeatReport, FightReport};
pub use config::{default_roster, CombatRules, ConfigError, Roster, RosterConfig};
pub use display::{AttributeSection, EntityDescription};
pub use entity::Entity;
pub use error::{EntityError, TransitionError};
pub use item::{Item, ItemRef};
pub use location::{Location, LocationId, LocationRegistry};
pub use shape::{Canvas, CanvasItemId, Rectangle, Shape};
pub use stats::Stats;
pub use types::{EntityId, EntityKind, EquipmentSlot, ItemId, StatKind};
