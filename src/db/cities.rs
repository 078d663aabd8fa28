use crate::db::SqlitePool;
use crate::db::models::{City, NewCity};
use crate::error::AdminError;
use sqlx::{QueryBuilder, Sqlite};

/// Every new city starts with a default central district, mirroring the
/// game rule that a city is never district-less.
const DEFAULT_DISTRICT_NAME: &str = "City Center";
const DEFAULT_DISTRICT_PHOTO: &str = "/static/district.png";

/// Optional predicates ANDed together by `list`.
#[derive(Debug, Clone, Default)]
pub struct CityFilter {
    pub min_population: Option<i64>,
    pub name: Option<String>,
}

#[derive(Clone)]
pub struct CityStore {
    pool: SqlitePool,
}

impl CityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a city and its default district in one transaction.
    pub async fn create(&self, city: &NewCity) -> Result<i64, AdminError> {
        let mut tx = self.pool.begin().await?;

        let res = sqlx::query(
            "INSERT INTO cities (player_id, name, population, photo_path) VALUES (?, ?, ?, ?)",
        )
        .bind(city.player_id)
        .bind(&city.name)
        .bind(city.population)
        .bind(&city.photo_path)
        .execute(&mut *tx)
        .await?;
        let id = res.last_insert_rowid();

        sqlx::query(
            "INSERT INTO districts (city_id, name, production_cost, photo_path) VALUES (?, ?, 0, ?)",
        )
        .bind(id)
        .bind(DEFAULT_DISTRICT_NAME)
        .bind(DEFAULT_DISTRICT_PHOTO)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    pub async fn read(&self, id: i64) -> Result<Option<City>, AdminError> {
        let row = sqlx::query_as::<_, City>(
            "SELECT id, player_id, name, population, photo_path FROM cities WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list(
        &self,
        filter: &CityFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<City>, AdminError> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT id, player_id, name, population, photo_path FROM cities WHERE 1=1",
        );
        if let Some(min_population) = filter.min_population {
            qb.push(" AND population >= ").push_bind(min_population);
        }
        if let Some(name) = &filter.name {
            qb.push(" AND name LIKE ").push_bind(format!("%{name}%"));
        }
        qb.push(" ORDER BY id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = qb.build_query_as::<City>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Full overwrite of all columns for the given id.
    pub async fn update(&self, id: i64, city: &NewCity) -> Result<(), AdminError> {
        sqlx::query(
            "UPDATE cities SET player_id = ?, name = ?, population = ?, photo_path = ? WHERE id = ?",
        )
        .bind(city.player_id)
        .bind(&city.name)
        .bind(city.population)
        .bind(&city.photo_path)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AdminError> {
        sqlx::query("DELETE FROM cities WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
