use crate::error::AdminError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Player {
    pub id: i64,
    pub login: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    pub login: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct City {
    pub id: i64,
    pub player_id: i64,
    pub name: String,
    pub population: i64,
    pub photo_path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub player_id: i64,
    pub name: String,
    pub population: i64,
    pub photo_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct District {
    pub id: i64,
    pub city_id: i64,
    pub name: String,
    pub production_cost: i64,
    pub photo_path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDistrict {
    pub city_id: i64,
    pub name: String,
    pub production_cost: i64,
    pub photo_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Building {
    pub id: i64,
    pub district_id: i64,
    pub name: String,
    pub description: String,
    pub production: i64,
    pub production_cost: i64,
    pub food: i64,
    pub gold: i64,
    pub defense: i64,
    pub photo_path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBuilding {
    pub district_id: i64,
    pub name: String,
    pub description: String,
    pub production: i64,
    pub production_cost: i64,
    pub food: i64,
    pub gold: i64,
    pub defense: i64,
    pub photo_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Unit {
    pub id: i64,
    pub player_id: i64,
    pub name: String,
    pub description: String,
    pub damage: i64,
    pub health: i64,
    pub movement: i64,
    pub production_cost: i64,
    pub salary: i64,
    pub photo_path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUnit {
    pub player_id: i64,
    pub name: String,
    pub description: String,
    pub damage: i64,
    pub health: i64,
    pub movement: i64,
    pub production_cost: i64,
    pub salary: i64,
    pub photo_path: String,
}

/// The four browsable game entities (players are managed through auth).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    City,
    District,
    Building,
    Unit,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::City => "city",
            EntityKind::District => "district",
            EntityKind::Building => "building",
            EntityKind::Unit => "unit",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::City => "City",
            EntityKind::District => "District",
            EntityKind::Building => "Building",
            EntityKind::Unit => "Unit",
        }
    }
}

impl FromStr for EntityKind {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "city" => Ok(EntityKind::City),
            "district" => Ok(EntityKind::District),
            "building" => Ok(EntityKind::Building),
            "unit" => Ok(EntityKind::Unit),
            other => Err(AdminError::UnknownEntityType(other.to_string())),
        }
    }
}

/// Tagged union over the concrete record shapes, so list/detail rendering
/// dispatches on the variant instead of downcasting.
#[derive(Debug, Clone)]
pub enum Entity {
    City(City),
    District(District),
    Building(Building),
    Unit(Unit),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::City(_) => EntityKind::City,
            Entity::District(_) => EntityKind::District,
            Entity::Building(_) => EntityKind::Building,
            Entity::Unit(_) => EntityKind::Unit,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Entity::City(c) => c.id,
            Entity::District(d) => d.id,
            Entity::Building(b) => b.id,
            Entity::Unit(u) => u.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::City(c) => &c.name,
            Entity::District(d) => &d.name,
            Entity::Building(b) => &b.name,
            Entity::Unit(u) => &u.name,
        }
    }

    pub fn photo_path(&self) -> &str {
        match self {
            Entity::City(c) => &c.photo_path,
            Entity::District(d) => &d.photo_path,
            Entity::Building(b) => &b.photo_path,
            Entity::Unit(u) => &u.photo_path,
        }
    }

    /// One-line stat summary for the listing card.
    pub fn summary(&self) -> String {
        match self {
            Entity::City(c) => format!("Population: {}", c.population),
            Entity::District(d) => format!("Production Cost: {}", d.production_cost),
            Entity::Building(b) => {
                format!("Production: {}, Defense: {}", b.production, b.defense)
            }
            Entity::Unit(u) => format!("Damage: {}, Health: {}", u.damage, u.health),
        }
    }
}
