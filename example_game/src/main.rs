//! Example Game - A minimal command-line arena demonstrating entity_core
//!
//! This game shows:
//! - Loading a roster of items and entities (TOML or JSON)
//! - Turn-based fights between the player and each enemy
//! - Experience and loot transfer on defeat
//! - Equipping looted gear between fights

use anyhow::{bail, Context, Result};
use clap::Parser;
use entity_core::config::load_roster;
use entity_core::prelude::*;
use entity_core::{default_roster, AttributeSection, Roster};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "example_game", about = "Fight your way through a roster of enemies")]
struct Args {
    /// Roster file (.toml or .json); the bundled roster is used when omitted
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Maximum exchanges per enemy before calling it a draw
    #[arg(long, default_value_t = 10)]
    max_rounds: u32,

    /// Remove looted items from the loser's inventory
    #[arg(long)]
    strip_loot: bool,

    /// Reward hits on enemies that are already down
    #[arg(long)]
    repeat_defeat: bool,

    /// Equip the best looted weapon between fights
    #[arg(long)]
    auto_equip: bool,
}

/// Main game state
struct GameState {
    player: Entity,
    enemies: Vec<Entity>,
    rules: CombatRules,
    locations: LocationRegistry,
    kills: u32,
    messages: Vec<String>,
}

impl GameState {
    fn from_roster(mut roster: Roster) -> Result<Self> {
        let player_id = roster
            .entities
            .iter()
            .find(|entity| entity.kind == EntityKind::Player)
            .map(|entity| entity.id)
            .context("roster has no player")?;
        let player = roster
            .take_entity(player_id)
            .context("player vanished from roster")?;

        let enemies: Vec<Entity> = roster
            .entities
            .into_iter()
            .filter(|entity| entity.kind == EntityKind::Enemy)
            .collect();
        if enemies.is_empty() {
            bail!("roster has no enemies");
        }

        Ok(GameState {
            player,
            enemies,
            rules: roster.rules,
            locations: roster.locations,
            kills: 0,
            messages: Vec::new(),
        })
    }

    /// Fight one enemy until someone drops or the round limit is reached
    fn battle(&mut self, index: usize, max_rounds: u32) {
        let enemy = &mut self.enemies[index];
        if let Some(location) = enemy.location() {
            self.player.set_location(Some(location));
        }
        info!(player = %self.player.name, enemy = %enemy.name, "battle started");

        for round in 1..=max_rounds {
            let report = entity_core::combat::resolve_fight_with_rules(
                &mut self.player,
                enemy,
                &self.rules,
            );
            for attack in report.attacks() {
                debug!(round, attacker = %attack.attacker, "{}", attack.summary());
            }
            self.messages.push(format!("-- round {} --\n{}", round, report));

            if report.first.is_defeat() {
                self.kills += 1;
            }
            if enemy.is_defeated() || self.player.is_defeated() {
                return;
            }
        }
        warn!(enemy = %enemy.name, max_rounds, "battle ended in a draw");
    }

    /// Swap in the looted weapon with the highest attack bonus, if it beats the current one
    fn equip_best_weapon(&mut self) {
        let weapon = EquipmentSlot::from("weapon");
        let current = self
            .player
            .equipped(&weapon)
            .map(|item| item.stats().get(StatKind::Attack))
            .unwrap_or(0);

        let best = self
            .player
            .inventory()
            .iter()
            .filter(|item| !item.is_equipped() && item.equipment_slot() == Some(&weapon))
            .max_by_key(|item| item.stats().get(StatKind::Attack))
            .cloned();

        if let Some(item) = best {
            if item.stats().get(StatKind::Attack) > current {
                match self.player.equip(&item) {
                    Ok(_) => self
                        .messages
                        .push(format!("{} equips {}.", self.player.name, item.name)),
                    Err(err) => warn!(item = %item.name, "could not equip: {}", err),
                }
            }
        }
    }

    fn summary(&self) -> AttributeSection {
        let places: Vec<&str> = self
            .locations
            .iter()
            .map(|location| location.name.as_str())
            .collect();
        AttributeSection::titled("Campaign")
            .with("kills", self.kills)
            .with("enemies", self.enemies.len())
            .with("places", places.join(", "))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut roster = match &args.roster {
        Some(path) => load_roster(path)
            .with_context(|| format!("failed to load roster from {}", path.display()))?,
        None => default_roster().context("bundled roster is invalid")?,
    };
    roster.rules.strip_loser_inventory |= args.strip_loot;
    roster.rules.repeat_defeat |= args.repeat_defeat;

    let mut game = GameState::from_roster(roster)?;
    println!("{}", game.player.describe(&game.locations));

    for index in 0..game.enemies.len() {
        game.battle(index, args.max_rounds);
        if args.auto_equip && !game.player.is_defeated() {
            game.equip_best_weapon();
        }
        for message in game.messages.drain(..) {
            println!("{}", message);
        }
        if game.player.is_defeated() {
            println!("{} has fallen.", game.player.name);
            break;
        }
    }

    println!(
        "{}",
        game.player
            .describe(&game.locations)
            .with_section(game.summary())
    );
    for enemy in &game.enemies {
        println!("{}", enemy.describe(&game.locations));
    }

    Ok(())
}
