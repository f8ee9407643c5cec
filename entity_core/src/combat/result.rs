//! AttackReport / FightReport - Outcome of combat resolution

use crate::item::ItemRef;
use std::fmt;

/// Outcome of one entity attacking another
#[derive(Debug, Clone)]
pub struct AttackReport {
    /// Attacker's name at the time of the attack
    pub attacker: String,
    /// Target's name at the time of the attack
    pub target: String,
    /// Damage dealt after defence, never negative
    pub damage: i64,
    /// Target health before the hit
    pub health_before: i64,
    /// Target health after the hit, clamped at 0
    pub remaining_health: i64,
    /// Set when this attack defeated the target
    pub defeat: Option<DefeatReport>,
}

/// Rewards handed to the victor on defeat
#[derive(Debug, Clone, Default)]
pub struct DefeatReport {
    /// Experience added to the victor
    pub experience_awarded: i64,
    /// Items copied from the loser's inventory into the victor's
    pub looted: Vec<ItemRef>,
    /// One line per item transfer
    pub transfers: Vec<String>,
}

impl AttackReport {
    pub fn new(attacker: impl Into<String>, target: impl Into<String>) -> Self {
        AttackReport {
            attacker: attacker.into(),
            target: target.into(),
            damage: 0,
            health_before: 0,
            remaining_health: 0,
            defeat: None,
        }
    }

    /// Whether this attack defeated the target
    pub fn is_defeat(&self) -> bool {
        self.defeat.is_some()
    }

    pub fn experience_awarded(&self) -> i64 {
        self.defeat
            .as_ref()
            .map(|defeat| defeat.experience_awarded)
            .unwrap_or(0)
    }

    /// Items the attacker picked up, empty unless this was a defeat
    pub fn looted(&self) -> &[ItemRef] {
        self.defeat
            .as_ref()
            .map(|defeat| defeat.looted.as_slice())
            .unwrap_or(&[])
    }

    /// Short one-line summary
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} damage", self.damage)];
        parts.push(format!("{} health left", self.remaining_health));
        if let Some(defeat) = &self.defeat {
            parts.push(format!("DEFEATED (+{} xp)", defeat.experience_awarded));
            if !defeat.looted.is_empty() {
                parts.push(format!("{} items looted", defeat.looted.len()));
            }
        }
        parts.join(", ")
    }
}

impl fmt::Display for AttackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} deals {} damage to {}, leaving {} in remaining health for {}.",
            self.attacker, self.damage, self.target, self.remaining_health, self.target
        )?;
        if let Some(defeat) = &self.defeat {
            writeln!(
                f,
                "\twhich defeats the {} and awards {} experience to {}!",
                self.target, defeat.experience_awarded, self.attacker
            )?;
            for transfer in &defeat.transfers {
                writeln!(f, "\t{}", transfer)?;
            }
        }
        Ok(())
    }
}

/// Outcome of one full exchange: the challenger attacks, then the defender
#[derive(Debug, Clone)]
pub struct FightReport {
    pub first: AttackReport,
    pub second: AttackReport,
}

impl FightReport {
    /// Both attacks, in order
    pub fn attacks(&self) -> [&AttackReport; 2] {
        [&self.first, &self.second]
    }

    /// Whether either side was defeated during the exchange
    pub fn any_defeat(&self) -> bool {
        self.first.is_defeat() || self.second.is_defeat()
    }
}

impl fmt::Display for FightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attack in self.attacks() {
            writeln!(f, "{} attacks {}: {}", attack.attacker, attack.target, attack)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(damage: i64, remaining: i64) -> AttackReport {
        let mut report = AttackReport::new("Hero", "Slime");
        report.damage = damage;
        report.health_before = remaining + damage;
        report.remaining_health = remaining;
        report
    }

    #[test]
    fn test_plain_narration() {
        let report = hit(3, 7);
        assert_eq!(
            report.to_string(),
            "Hero deals 3 damage to Slime, leaving 7 in remaining health for Slime.\n"
        );
        assert!(!report.is_defeat());
        assert_eq!(report.experience_awarded(), 0);
        assert!(report.looted().is_empty());
    }

    #[test]
    fn test_defeat_narration() {
        let mut report = hit(5, 0);
        report.defeat = Some(DefeatReport {
            experience_awarded: 12,
            looted: Vec::new(),
            transfers: vec!["Gel has been added to Hero's inventory.".to_string()],
        });

        let text = report.to_string();
        assert!(text.contains("\twhich defeats the Slime and awards 12 experience to Hero!\n"));
        assert!(text.ends_with("\tGel has been added to Hero's inventory.\n"));
    }

    #[test]
    fn test_summary() {
        let mut report = hit(5, 0);
        assert_eq!(report.summary(), "5 damage, 0 health left");
        report.defeat = Some(DefeatReport {
            experience_awarded: 4,
            ..DefeatReport::default()
        });
        assert!(report.summary().contains("DEFEATED (+4 xp)"));
    }

    #[test]
    fn test_fight_narration_has_two_attacks() {
        let fight = FightReport {
            first: hit(2, 8),
            second: {
                let mut back = AttackReport::new("Slime", "Hero");
                back.damage = 1;
                back.remaining_health = 9;
                back
            },
        };

        let text = fight.to_string();
        assert!(text.starts_with("Hero attacks Slime: Hero deals 2 damage"));
        assert!(text.contains("Slime attacks Hero: Slime deals 1 damage"));
        assert!(!fight.any_defeat());
    }
}
