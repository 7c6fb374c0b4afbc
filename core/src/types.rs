//! Domain DTOs for the hero API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned hero identifier.
pub type HeroId = u32;

/// A single hero record as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

/// Request payload for creating a hero. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Key accepted by delete: either a bare id or a full record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroKey {
    Id(HeroId),
    Hero(Hero),
}

impl HeroKey {
    pub fn id(&self) -> HeroId {
        match self {
            HeroKey::Id(id) => *id,
            HeroKey::Hero(hero) => hero.id,
        }
    }
}

impl From<HeroId> for HeroKey {
    fn from(id: HeroId) -> Self {
        HeroKey::Id(id)
    }
}

impl From<Hero> for HeroKey {
    fn from(hero: Hero) -> Self {
        HeroKey::Hero(hero)
    }
}

impl From<&Hero> for HeroKey {
    fn from(hero: &Hero) -> Self {
        HeroKey::Hero(hero.clone())
    }
}
