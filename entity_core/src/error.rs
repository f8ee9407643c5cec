//! Errors raised by entity operations
//!
//! None of these are fatal: every operation that returns one has left the
//! entity exactly as it found it.

use thiserror::Error;

/// Failure of an inventory, equipment or construction operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// No item was supplied where one was required
    #[error("no item was supplied to {operation}, did you forget to pass an actual item?")]
    InvalidReference { operation: &'static str },

    /// A stat name outside the canonical set was supplied at construction
    #[error(
        "{entity} has a stat ({stat}) that is not listed in the valid stats \
         (attack, defence, speed, health, experience)"
    )]
    InvalidStatName { entity: String, stat: String },

    /// The item is in the wrong equip state for the operation
    #[error(transparent)]
    IllegalStateTransition(#[from] TransitionError),

    /// Item is not in the inventory
    #[error("{item} was not found in {entity}'s inventory")]
    NotFound { item: String, entity: String },
}

/// Rejected equip-state change
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("{item} is already equipped, did you mean to unequip it?")]
    AlreadyEquipped { item: String },

    #[error("{item} is not equipped, did you mean to equip it?")]
    NotEquipped { item: String },

    #[error("{item} has no equipment slot and is not equippable")]
    NotEquippable { item: String },

    #[error("{item} is equipped, but not by {entity}")]
    NotEquippedHere { item: String, entity: String },
}

impl EntityError {
    /// Whether this is an equip-state rejection
    pub fn is_illegal_transition(&self) -> bool {
        matches!(self, EntityError::IllegalStateTransition(_))
    }
}
