//! Human-readable entity descriptions
//!
//! Layout:
//!
//! ```text
//! Name: <name>:
//!     location: <place or "nowhere...">
//!     Description: <description>
//!     <extra sections>
//!     Stats:            (only positive stats, omitted if none)
//!     Equipment:        (omitted if empty, wrapped in banner lines)
//!     Inventory:        (omitted if empty, wrapped in banner lines)
//! ```

use crate::entity::Entity;
use crate::location::LocationRegistry;
use std::fmt;

/// Extra attributes a caller wants listed, optionally under a heading
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSection {
    pub heading: Option<String>,
    pub attributes: Vec<(Option<String>, Option<String>)>,
}

impl AttributeSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(heading: impl Into<String>) -> Self {
        AttributeSection {
            heading: Some(heading.into()),
            attributes: Vec::new(),
        }
    }

    /// Add a `name: value` line
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.attributes
            .push((Some(name.into()), Some(value.to_string())));
        self
    }

    /// Add a line with only a value
    pub fn with_value(mut self, value: impl fmt::Display) -> Self {
        self.attributes.push((None, Some(value.to_string())));
        self
    }
}

/// Formatter for an [`Entity`], resolving its location through a registry
pub struct EntityDescription<'a> {
    entity: &'a Entity,
    locations: Option<&'a LocationRegistry>,
    sections: Vec<AttributeSection>,
}

impl<'a> EntityDescription<'a> {
    pub fn new(entity: &'a Entity) -> Self {
        EntityDescription {
            entity,
            locations: None,
            sections: Vec::new(),
        }
    }

    pub fn with_locations(mut self, locations: &'a LocationRegistry) -> Self {
        self.locations = Some(locations);
        self
    }

    pub fn with_section(mut self, section: AttributeSection) -> Self {
        self.sections.push(section);
        self
    }

    fn write_location(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entity.location() {
            None => writeln!(f, "\tlocation: nowhere..."),
            Some(id) => match self.locations.and_then(|registry| registry.name_of(id)) {
                Some(name) => writeln!(f, "\tlocation: {}", name),
                None => writeln!(f, "\tlocation: unknown place {}", id),
            },
        }
    }

    fn write_sections(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            let mut indent = "\t";
            if let Some(heading) = &section.heading {
                writeln!(f, "\t{}:", heading)?;
                indent = "\t\t";
            }
            for (name, value) in &section.attributes {
                f.write_str(indent)?;
                if let Some(name) = name {
                    write!(f, "{}: ", name)?;
                }
                writeln!(f, "{}", value.as_deref().unwrap_or(""))?;
            }
        }
        Ok(())
    }

    fn write_stats(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.entity.stats();
        if !stats.any_positive() {
            return Ok(());
        }
        writeln!(f, "\tStats:")?;
        for (name, value) in stats.iter().filter(|(_, value)| *value > 0) {
            writeln!(f, "\t\t{}: {}", name, value)?;
        }
        Ok(())
    }

    fn write_equipment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.entity.name;
        let mut equipment = self.entity.equipment().peekable();
        if equipment.peek().is_none() {
            return Ok(());
        }
        writeln!(f, "\tEquipment:")?;
        writeln!(f, "_____________begin of equipment for {}________________", name)?;
        for (slot, item) in equipment {
            write!(f, "{}: {}", slot, item.name)?;
            if !item.stats().is_empty() {
                let bonuses: Vec<String> = item
                    .stats()
                    .iter()
                    .map(|(stat, value)| format!("{}: {}", stat, value))
                    .collect();
                write!(f, " ({})", bonuses.join(", "))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "_____________end of equipment for {}________________", name)
    }

    fn write_inventory(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.entity.name;
        let inventory = self.entity.inventory();
        if inventory.is_empty() {
            return Ok(());
        }
        writeln!(f, "\tInventory:")?;
        writeln!(f, "_____________begin of inventory of {}________________", name)?;
        for item in inventory {
            writeln!(f, "{}", item)?;
        }
        writeln!(f, "_____________end of inventory of {}________________", name)
    }
}

impl fmt::Display for EntityDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}:", self.entity.name)?;
        self.write_location(f)?;
        writeln!(f, "\tDescription: {}", self.entity.description)?;
        self.write_sections(f)?;
        self.write_stats(f)?;
        self.write_equipment(f)?;
        self.write_inventory(f)
    }
}

impl Entity {
    /// Describe this entity, resolving its location name through `locations`
    pub fn describe<'a>(&'a self, locations: &'a LocationRegistry) -> EntityDescription<'a> {
        EntityDescription::new(self).with_locations(locations)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&EntityDescription::new(self), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::types::{EntityId, ItemId};

    #[test]
    fn test_bare_entity() {
        let entity = Entity::player(EntityId(1)).named("Ayla").described("a sellsword");
        assert_eq!(
            entity.to_string(),
            "Name: Ayla:\n\tlocation: nowhere...\n\tDescription: a sellsword\n"
        );
    }

    #[test]
    fn test_positive_stats_only() {
        let entity = Entity::player(EntityId(1))
            .named("Ayla")
            .with_stats([("attack", 3), ("speed", -1), ("health", 10)]);
        let text = entity.to_string();
        assert!(text.contains("\tStats:\n\t\tattack: 3\n\t\thealth: 10\n"));
        assert!(!text.contains("speed"));
        assert!(!text.contains("defence"));
    }

    #[test]
    fn test_location_resolved() {
        let mut registry = LocationRegistry::new();
        let cave = registry.register("Troll Cave");
        let troll = Entity::enemy(EntityId(2)).named("Troll").at(cave);

        assert!(troll
            .describe(&registry)
            .to_string()
            .contains("\tlocation: Troll Cave\n"));
        assert!(troll.to_string().contains("\tlocation: unknown place #0\n"));
    }

    #[test]
    fn test_equipment_and_inventory_blocks() {
        let sword = Item::new(ItemId(1), "Sword")
            .with_description("sharp")
            .with_stat("attack", 2)
            .with_slot("weapon")
            .into_ref();
        let mut hero = Entity::player(EntityId(1)).named("Hero");
        hero.add_item(&sword).unwrap();
        hero.equip(&sword).unwrap();

        let text = hero.to_string();

        assert!(text.contains(
            "\tEquipment:\n\
             _____________begin of equipment for Hero________________\n\
             weapon: Sword (attack: 2)\n\
             _____________end of equipment for Hero________________\n"
        ));
        assert!(text.contains(
            "\tInventory:\n\
             _____________begin of inventory of Hero________________\n\
             Sword (#1): sharp [attack: 2] <equipped: weapon>\n\
             _____________end of inventory of Hero________________\n"
        ));
    }

    #[test]
    fn test_sections() {
        let hero = Entity::player(EntityId(1)).named("Hero");
        let text = hero
            .describe(&LocationRegistry::new())
            .with_section(AttributeSection::titled("Traits").with("mood", "grim"))
            .with_section(AttributeSection::new().with_value("unaffiliated"))
            .to_string();

        assert!(text.contains("\tTraits:\n\t\tmood: grim\n"));
        assert!(text.contains("\n\tunaffiliated\n"));
    }
}
