//! Combat rule toggles

use serde::{Deserialize, Serialize};

/// Tunable combat behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatRules {
    /// Re-run the defeat rewards when a target already at 0 health is hit again
    ///
    /// With this off, rewards only come from the hit that takes health from
    /// above 0 down to 0. An entity built without a `health` stat starts at 0
    /// and so never yields experience or loot.
    pub repeat_defeat: bool,
    /// Remove looted items from the loser's inventory instead of leaving a copy
    pub strip_loser_inventory: bool,
}
