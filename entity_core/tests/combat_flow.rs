//! Integration test: build entities -> equip -> fight -> loot
//!
//! Drives the public API the way a game loop would.

use entity_core::combat::resolve_fight_with_rules;
use entity_core::prelude::*;
use entity_core::{default_roster, EntityError};
use std::rc::Rc;

fn item(id: u32, name: &str, slot: Option<&str>, stats: &[(&str, i64)]) -> ItemRef {
    let mut item = Item::new(ItemId(id), name);
    if let Some(slot) = slot {
        item = item.with_slot(slot);
    }
    stats
        .iter()
        .fold(item, |item, (stat, value)| item.with_stat(stat, *value))
        .into_ref()
}

#[test]
fn test_attack_defeats_and_transfers() {
    let mut hero = Entity::player(EntityId(1))
        .named("Hero")
        .with_stats([("attack", 10), ("health", 20)]);
    let mut bandit = Entity::enemy(EntityId(2))
        .named("Bandit")
        .with_stats([("defence", 3), ("health", 5), ("experience", 25)]);

    let knife = item(1, "Knife", Some("weapon"), &[("attack", 1)]);
    let coin = item(2, "Coin", None, &[]);
    bandit.add_item(&knife).unwrap();
    bandit.add_item(&coin).unwrap();
    bandit.equip(&knife).unwrap();
    assert_eq!(bandit.stat(StatKind::Attack), 1);

    let report = hero.attack(&mut bandit);

    assert_eq!(report.damage, 7);
    assert_eq!(bandit.health(), 0);
    assert!(bandit.is_defeated());
    assert_eq!(hero.stat(StatKind::Experience), 25);

    let looted: Vec<ItemId> = hero.inventory().iter().map(|i| i.id).collect();
    assert_eq!(looted, vec![ItemId(1), ItemId(2)]);
    assert!(!knife.is_equipped());
    assert_eq!(bandit.stat(StatKind::Attack), 0);

    let text = report.to_string();
    assert!(text.starts_with(
        "Hero deals 7 damage to Bandit, leaving 0 in remaining health for Bandit.\n"
    ));
    assert!(text.contains("which defeats the Bandit and awards 25 experience to Hero!"));
    assert!(text.contains("Knife has been added to Hero's inventory."));
    assert!(text.contains("Coin has been added to Hero's inventory."));
}

#[test]
fn test_looted_equipment_can_be_worn_by_victor() {
    let mut hero = Entity::player(EntityId(1))
        .named("Hero")
        .with_stats([("attack", 10), ("health", 20)]);
    let mut bandit = Entity::enemy(EntityId(2)).with_stats([("health", 1)]);
    let knife = item(1, "Knife", Some("weapon"), &[("attack", 1)]);
    bandit.add_item(&knife).unwrap();
    bandit.equip(&knife).unwrap();

    hero.attack(&mut bandit);
    let looted = Rc::clone(&hero.inventory()[0]);
    hero.equip(&looted).unwrap();

    assert_eq!(hero.stat(StatKind::Attack), 11);
    assert_eq!(bandit.stat(StatKind::Attack), 0);
}

#[test]
fn test_fight_is_two_attacks_even_after_defeat() {
    let mut hero = Entity::player(EntityId(1))
        .named("Hero")
        .with_stats([("attack", 10), ("defence", 1), ("health", 20)]);
    let mut wolf = Entity::enemy(EntityId(2))
        .named("Wolf")
        .with_stats([("attack", 6), ("health", 3), ("experience", 5)]);

    let fight = hero.fight(&mut wolf);

    let attacks = fight.attacks();
    assert_eq!(attacks.len(), 2);
    assert!(attacks[0].is_defeat());
    assert_eq!(attacks[1].attacker, "Wolf");
    assert_eq!(hero.health(), 15);

    let text = fight.to_string();
    assert_eq!(text.matches("Hero attacks Wolf: ").count(), 1);
    assert_eq!(text.matches("Wolf attacks Hero: ").count(), 1);
}

#[test]
fn test_health_never_negative() {
    let mut giant = Entity::enemy(EntityId(1)).with_stats([("attack", 100)]);
    let mut mouse = Entity::enemy(EntityId(2)).with_stats([("health", 2)]);

    giant.attack(&mut mouse);
    giant.attack(&mut mouse);

    assert_eq!(mouse.health(), 0);
}

#[test]
fn test_strip_rule_moves_items() {
    let rules = CombatRules {
        strip_loser_inventory: true,
        ..CombatRules::default()
    };
    let mut hero = Entity::player(EntityId(1)).with_stats([("attack", 9), ("health", 9)]);
    let mut imp = Entity::enemy(EntityId(2)).with_stats([("health", 1)]);
    imp.add_item(&item(1, "Horn", None, &[])).unwrap();

    let fight = resolve_fight_with_rules(&mut hero, &mut imp, &rules);

    assert!(fight.any_defeat());
    assert!(imp.inventory().is_empty());
    assert_eq!(hero.inventory().len(), 1);
}

#[test]
fn test_rejections_leave_state_untouched() {
    let mut hero = Entity::player(EntityId(1)).with_stats([("attack", 4)]);
    let ring = item(1, "Ring", Some("finger"), &[("attack", 2)]);
    let before = hero.stats().clone();

    assert!(matches!(
        hero.unequip(&ring),
        Err(EntityError::IllegalStateTransition(TransitionError::NotEquipped { .. }))
    ));
    assert!(matches!(hero.equip(None), Err(EntityError::InvalidReference { .. })));
    assert!(matches!(hero.remove_item(&ring), Err(EntityError::NotFound { .. })));
    assert_eq!(hero.stats(), &before);
}

#[test]
fn test_default_roster_battle() {
    let mut roster = default_roster().unwrap();
    let player_id = roster
        .entities
        .iter()
        .find(|entity| entity.kind == EntityKind::Player)
        .map(|entity| entity.id)
        .unwrap();
    let mut player = roster.take_entity(player_id).unwrap();
    let mut goblin = roster
        .take_entity(EntityId(2))
        .expect("goblin is in the bundled roster");

    let mut rounds = 0;
    while !goblin.is_defeated() && !player.is_defeated() && rounds < 20 {
        resolve_fight_with_rules(&mut player, &mut goblin, &roster.rules);
        rounds += 1;
    }

    assert!(goblin.is_defeated());
    assert!(player.stat(StatKind::Experience) >= 15);
    assert!(player
        .describe(&roster.locations)
        .to_string()
        .contains("location: Crossroads"));
}

#[test]
fn test_troll_loses_charm_without_negative_health() {
    let mut roster = default_roster().unwrap();
    let mut troll = roster
        .take_entity(EntityId(3))
        .expect("troll is in the bundled roster");
    let charm = roster.item(ItemId(4)).cloned().unwrap();
    assert!(charm.is_equipped());

    let mut giant = Entity::player(EntityId(9))
        .named("Giant")
        .with_stats([("attack", 100)]);
    let report = giant.attack(&mut troll);

    assert!(report.is_defeat());
    assert!(!charm.is_equipped());
    assert_eq!(troll.health(), 0);
    assert_eq!(troll.equipment().count(), 0);
    assert!(giant.has_item(ItemId(4)));
}
