use crate::db::SqlitePool;
use crate::db::models::{Building, NewBuilding};
use crate::error::AdminError;
use sqlx::{QueryBuilder, Sqlite};

#[derive(Debug, Clone, Default)]
pub struct BuildingFilter {
    pub district_id: Option<i64>,
    pub min_production: Option<i64>,
    pub min_defense: Option<i64>,
}

#[derive(Clone)]
pub struct BuildingStore {
    pool: SqlitePool,
}

impl BuildingStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, building: &NewBuilding) -> Result<i64, AdminError> {
        let res = sqlx::query(
            r#"INSERT INTO buildings (
                district_id, name, description, production, production_cost,
                food, gold, defense, photo_path
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(building.district_id)
        .bind(&building.name)
        .bind(&building.description)
        .bind(building.production)
        .bind(building.production_cost)
        .bind(building.food)
        .bind(building.gold)
        .bind(building.defense)
        .bind(&building.photo_path)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn read(&self, id: i64) -> Result<Option<Building>, AdminError> {
        let row = sqlx::query_as::<_, Building>(
            r#"SELECT id, district_id, name, description, production, production_cost,
               food, gold, defense, photo_path
               FROM buildings WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list(
        &self,
        filter: &BuildingFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Building>, AdminError> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            r#"SELECT id, district_id, name, description, production, production_cost,
               food, gold, defense, photo_path
               FROM buildings WHERE 1=1"#,
        );
        if let Some(district_id) = filter.district_id {
            qb.push(" AND district_id = ").push_bind(district_id);
        }
        if let Some(min_production) = filter.min_production {
            qb.push(" AND production >= ").push_bind(min_production);
        }
        if let Some(min_defense) = filter.min_defense {
            qb.push(" AND defense >= ").push_bind(min_defense);
        }
        qb.push(" ORDER BY id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = qb.build_query_as::<Building>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Buildings belonging to a city, counted through its districts.
    /// Shown on the city detail page.
    pub async fn count_for_city(&self, city_id: i64) -> Result<i64, AdminError> {
        let row: (i64,) = sqlx::query_as(
            r#"SELECT COUNT(*) FROM buildings b
               JOIN districts d ON b.district_id = d.id
               WHERE d.city_id = ?"#,
        )
        .bind(city_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.0)
    }

    /// Full overwrite of all columns for the given id.
    pub async fn update(&self, id: i64, building: &NewBuilding) -> Result<(), AdminError> {
        sqlx::query(
            r#"UPDATE buildings SET
                district_id = ?,
                name = ?,
                description = ?,
                production = ?,
                production_cost = ?,
                food = ?,
                gold = ?,
                defense = ?,
                photo_path = ?
              WHERE id = ?"#,
        )
        .bind(building.district_id)
        .bind(&building.name)
        .bind(&building.description)
        .bind(building.production)
        .bind(building.production_cost)
        .bind(building.food)
        .bind(building.gold)
        .bind(building.defense)
        .bind(&building.photo_path)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AdminError> {
        sqlx::query("DELETE FROM buildings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
