//! Places entities can stand in
//!
//! The registry owns every place. Entities only hold a [`LocationId`], so
//! there is no ownership cycle between an entity and where it stands.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

/// Owner of all locations
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new place and return its id
    pub fn register(&mut self, name: impl Into<String>) -> LocationId {
        let id = LocationId(self.locations.len() as u32);
        self.locations.push(Location {
            id,
            name: name.into(),
        });
        id
    }

    /// Id of the first place with this name
    pub fn find(&self, name: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .find(|location| location.name == name)
            .map(|location| location.id)
    }

    pub fn find_or_register(&mut self, name: &str) -> LocationId {
        match self.find(name) {
            Some(id) => id,
            None => self.register(name),
        }
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0 as usize)
    }

    pub fn name_of(&self, id: LocationId) -> Option<&str> {
        self.get(id).map(|location| location.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
