use crate::db::SqlitePool;
use crate::db::models::{District, NewDistrict};
use crate::error::AdminError;
use sqlx::{QueryBuilder, Sqlite};

#[derive(Debug, Clone, Default)]
pub struct DistrictFilter {
    pub city_id: Option<i64>,
    pub min_production_cost: Option<i64>,
}

#[derive(Clone)]
pub struct DistrictStore {
    pool: SqlitePool,
}

impl DistrictStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, district: &NewDistrict) -> Result<i64, AdminError> {
        let res = sqlx::query(
            "INSERT INTO districts (city_id, name, production_cost, photo_path) VALUES (?, ?, ?, ?)",
        )
        .bind(district.city_id)
        .bind(&district.name)
        .bind(district.production_cost)
        .bind(&district.photo_path)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn read(&self, id: i64) -> Result<Option<District>, AdminError> {
        let row = sqlx::query_as::<_, District>(
            "SELECT id, city_id, name, production_cost, photo_path FROM districts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list(
        &self,
        filter: &DistrictFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<District>, AdminError> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT id, city_id, name, production_cost, photo_path FROM districts WHERE 1=1",
        );
        if let Some(city_id) = filter.city_id {
            qb.push(" AND city_id = ").push_bind(city_id);
        }
        if let Some(min_cost) = filter.min_production_cost {
            qb.push(" AND production_cost >= ").push_bind(min_cost);
        }
        qb.push(" ORDER BY id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = qb.build_query_as::<District>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Full overwrite of all columns for the given id.
    pub async fn update(&self, id: i64, district: &NewDistrict) -> Result<(), AdminError> {
        sqlx::query(
            "UPDATE districts SET city_id = ?, name = ?, production_cost = ?, photo_path = ? WHERE id = ?",
        )
        .bind(district.city_id)
        .bind(&district.name)
        .bind(district.production_cost)
        .bind(&district.photo_path)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AdminError> {
        sqlx::query("DELETE FROM districts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
