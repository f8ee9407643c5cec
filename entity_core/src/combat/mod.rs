//! Combat resolution - One attack and one full exchange between entities

mod resolution;
mod result;

pub use resolution::{
    calculate_damage, resolve_attack, resolve_attack_with_rules, resolve_fight,
    resolve_fight_with_rules,
};
pub use result::{AttackReport, DefeatReport, FightReport};
