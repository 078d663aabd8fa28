//! Database module: per-entity stores over a shared SQLite pool.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows, plus the `Entity` union
//! - `schema.rs`: SQL DDL for initializing the database
//! - one store file per entity table

pub mod buildings;
pub mod cities;
pub mod districts;
pub mod models;
pub mod players;
pub mod schema;
pub mod units;

pub use buildings::{BuildingFilter, BuildingStore};
pub use cities::{CityFilter, CityStore};
pub use districts::{DistrictFilter, DistrictStore};
pub use models::{
    Building, City, District, Entity, EntityKind, NewBuilding, NewCity, NewDistrict, NewPlayer,
    NewUnit, Player, Unit,
};
pub use players::PlayerStore;
pub use schema::SQLITE_INIT;
pub use units::{UnitFilter, UnitStore};

use crate::error::AdminError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open (and create if missing) the SQLite database. Foreign keys are
/// enforced per connection so cascades actually fire.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AdminError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new().connect_with(opts).await?;
    Ok(pool)
}

/// All five per-entity stores over one pool; cloned into the router state.
#[derive(Clone)]
pub struct Datastores {
    pool: SqlitePool,
    pub players: PlayerStore,
    pub cities: CityStore,
    pub districts: DistrictStore,
    pub buildings: BuildingStore,
    pub units: UnitStore,
}

impl Datastores {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            players: PlayerStore::new(pool.clone()),
            cities: CityStore::new(pool.clone()),
            districts: DistrictStore::new(pool.clone()),
            buildings: BuildingStore::new(pool.clone()),
            units: UnitStore::new(pool.clone()),
            pool,
        }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), AdminError> {
        // execute statement by statement (sqlx::query rejects multi-commands)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }
}
