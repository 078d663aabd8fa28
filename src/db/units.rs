use crate::db::SqlitePool;
use crate::db::models::{NewUnit, Unit};
use crate::error::AdminError;
use sqlx::{QueryBuilder, Sqlite};

#[derive(Debug, Clone, Default)]
pub struct UnitFilter {
    pub player_id: Option<i64>,
    pub min_damage: Option<i64>,
    pub min_health: Option<i64>,
    pub min_movement: Option<i64>,
}

#[derive(Clone)]
pub struct UnitStore {
    pool: SqlitePool,
}

impl UnitStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, unit: &NewUnit) -> Result<i64, AdminError> {
        let res = sqlx::query(
            r#"INSERT INTO units (
                player_id, name, description, damage, health, movement,
                production_cost, salary, photo_path
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(unit.player_id)
        .bind(&unit.name)
        .bind(&unit.description)
        .bind(unit.damage)
        .bind(unit.health)
        .bind(unit.movement)
        .bind(unit.production_cost)
        .bind(unit.salary)
        .bind(&unit.photo_path)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn read(&self, id: i64) -> Result<Option<Unit>, AdminError> {
        let row = sqlx::query_as::<_, Unit>(
            r#"SELECT id, player_id, name, description, damage, health, movement,
               production_cost, salary, photo_path
               FROM units WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list(
        &self,
        filter: &UnitFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Unit>, AdminError> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            r#"SELECT id, player_id, name, description, damage, health, movement,
               production_cost, salary, photo_path
               FROM units WHERE 1=1"#,
        );
        if let Some(player_id) = filter.player_id {
            qb.push(" AND player_id = ").push_bind(player_id);
        }
        if let Some(min_damage) = filter.min_damage {
            qb.push(" AND damage >= ").push_bind(min_damage);
        }
        if let Some(min_health) = filter.min_health {
            qb.push(" AND health >= ").push_bind(min_health);
        }
        if let Some(min_movement) = filter.min_movement {
            qb.push(" AND movement >= ").push_bind(min_movement);
        }
        qb.push(" ORDER BY id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = qb.build_query_as::<Unit>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Full overwrite of all columns for the given id.
    pub async fn update(&self, id: i64, unit: &NewUnit) -> Result<(), AdminError> {
        sqlx::query(
            r#"UPDATE units SET
                player_id = ?,
                name = ?,
                description = ?,
                damage = ?,
                health = ?,
                movement = ?,
                production_cost = ?,
                salary = ?,
                photo_path = ?
              WHERE id = ?"#,
        )
        .bind(unit.player_id)
        .bind(&unit.name)
        .bind(&unit.description)
        .bind(unit.damage)
        .bind(unit.health)
        .bind(unit.movement)
        .bind(unit.production_cost)
        .bind(unit.salary)
        .bind(&unit.photo_path)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AdminError> {
        sqlx::query("DELETE FROM units WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
