//! Attack resolution - Apply one entity's attack to another

use super::result::{AttackReport, DefeatReport, FightReport};
use crate::config::CombatRules;
use crate::entity::Entity;
use crate::types::StatKind;
use tracing::{debug, info};

/// Damage of one hit: attack minus defence, never below zero
pub fn calculate_damage(attack: i64, defence: i64) -> i64 {
    attack.saturating_sub(defence).max(0)
}

/// Resolve `attacker` hitting `target` once under the default rules
pub fn resolve_attack(attacker: &mut Entity, target: &mut Entity) -> AttackReport {
    resolve_attack_with_rules(attacker, target, &CombatRules::default())
}

/// Resolve one attack with explicit rules
///
/// 1. Damage = attacker attack - target defence, floored at 0
/// 2. Target health drops by the damage and is clamped at 0
/// 3. If health reached 0, the attacker is awarded the target's experience
///    and a copy of every item in the target's inventory; items the target
///    had equipped are unequipped from it first
/// 4. The loser's health stays at 0 even when an unequipped item carried a
///    health bonus
pub fn resolve_attack_with_rules(
    attacker: &mut Entity,
    target: &mut Entity,
    rules: &CombatRules,
) -> AttackReport {
    let mut report = AttackReport::new(attacker.name.clone(), target.name.clone());

    report.health_before = target.health();
    report.damage = calculate_damage(
        attacker.stat(StatKind::Attack),
        target.stat(StatKind::Defence),
    );
    report.remaining_health = report.health_before.saturating_sub(report.damage).max(0);
    target
        .stats_mut()
        .set(StatKind::Health, report.remaining_health);

    debug!(
        attacker = %report.attacker,
        target = %report.target,
        damage = report.damage,
        remaining = report.remaining_health,
        "attack resolved"
    );

    let already_down = report.health_before <= 0;
    if report.remaining_health == 0 && (rules.repeat_defeat || !already_down) {
        report.defeat = Some(award_defeat(attacker, target, rules));
    }

    report
}

/// Hand the loser's experience and inventory to the victor
fn award_defeat(victor: &mut Entity, loser: &mut Entity, rules: &CombatRules) -> DefeatReport {
    // Experience never decreases, even if the loser carries a negative value
    let experience_awarded = loser.stat(StatKind::Experience).max(0);
    victor
        .stats_mut()
        .add(StatKind::Experience, experience_awarded);

    let looted = loser.inventory().to_vec();
    let mut transfers = Vec::with_capacity(looted.len());

    for item in &looted {
        if item.is_equipped() {
            if let Err(err) = loser.unequip(item) {
                debug!(loser = %loser.name, item = %item.name, "left equipped: {}", err);
            }
        }
        match victor.add_item(item) {
            Ok(line) => transfers.push(line),
            Err(err) => debug!(victor = %victor.name, item = %item.name, "not transferred: {}", err),
        }
        if rules.strip_loser_inventory {
            if let Err(err) = loser.remove_item(item) {
                debug!(loser = %loser.name, item = %item.name, "not stripped: {}", err);
            }
        }
    }

    // Shedding a health bonus must not push the loser below zero
    let health = loser.health().max(0);
    loser.stats_mut().set(StatKind::Health, health);

    info!(
        victor = %victor.name,
        loser = %loser.name,
        experience = experience_awarded,
        items = looted.len(),
        "entity defeated"
    );

    DefeatReport {
        experience_awarded,
        looted,
        transfers,
    }
}

/// One full exchange under the default rules
pub fn resolve_fight(challenger: &mut Entity, defender: &mut Entity) -> FightReport {
    resolve_fight_with_rules(challenger, defender, &CombatRules::default())
}

/// The challenger attacks, then the defender strikes back unconditionally,
/// even if it was just defeated. Speed plays no part in ordering.
pub fn resolve_fight_with_rules(
    challenger: &mut Entity,
    defender: &mut Entity,
    rules: &CombatRules,
) -> FightReport {
    let first = resolve_attack_with_rules(challenger, defender, rules);
    let second = resolve_attack_with_rules(defender, challenger, rules);
    FightReport { first, second }
}
