use crate::db::SqlitePool;
use crate::db::models::{NewPlayer, Player};
use crate::error::AdminError;

#[derive(Clone)]
pub struct PlayerStore {
    pool: SqlitePool,
}

impl PlayerStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a player, returning the generated id. The UNIQUE constraint on
    /// `login` is the only duplicate detection at this level.
    pub async fn create(&self, player: &NewPlayer) -> Result<i64, AdminError> {
        let res = sqlx::query("INSERT INTO players (login, password, is_admin) VALUES (?, ?, ?)")
            .bind(&player.login)
            .bind(&player.password)
            .bind(player.is_admin)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn read(&self, id: i64) -> Result<Option<Player>, AdminError> {
        let row = sqlx::query_as::<_, Player>(
            "SELECT id, login, password, is_admin FROM players WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn find_by_login(&self, login: &str) -> Result<Option<Player>, AdminError> {
        let row = sqlx::query_as::<_, Player>(
            "SELECT id, login, password, is_admin FROM players WHERE login = ?",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Full overwrite of all columns for the given id.
    pub async fn update(&self, id: i64, player: &NewPlayer) -> Result<(), AdminError> {
        sqlx::query("UPDATE players SET login = ?, password = ?, is_admin = ? WHERE id = ?")
            .bind(&player.login)
            .bind(&player.password)
            .bind(player.is_admin)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AdminError> {
        sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
