//! Prelude module for convenient imports
//!
//! ```rust
//! use entity_core::prelude::*;
//! ```

// Core types
pub use crate::entity::Entity;
pub use crate::item::{Item, ItemRef};
pub use crate::stats::Stats;
pub use crate::types::{EntityId, EntityKind, EquipmentSlot, ItemId, StatKind};

// Combat
pub use crate::combat::{AttackReport, FightReport};
pub use crate::config::CombatRules;

// Errors
pub use crate::error::{EntityError, TransitionError};

// Placement and display
pub use crate::display::EntityDescription;
pub use crate::location::{LocationId, LocationRegistry};
