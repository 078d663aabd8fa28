//! SQL DDL for the game-data tables.
//! SQLite-first design; foreign keys are enforced per connection (see `db::connect`).

/// One table per entity, auto-increment integer identity everywhere.
/// Ownership chains cascade on delete: Player -> City -> District -> Building,
/// Player -> Unit.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS players (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    login TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    is_admin INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS cities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    player_id INTEGER NOT NULL REFERENCES players(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    population INTEGER NOT NULL,
    photo_path TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS districts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    city_id INTEGER NOT NULL REFERENCES cities(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    production_cost INTEGER NOT NULL,
    photo_path TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS buildings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    district_id INTEGER NOT NULL REFERENCES districts(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    production INTEGER NOT NULL,
    production_cost INTEGER NOT NULL,
    food INTEGER NOT NULL,
    gold INTEGER NOT NULL,
    defense INTEGER NOT NULL,
    photo_path TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS units (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    player_id INTEGER NOT NULL REFERENCES players(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    damage INTEGER NOT NULL,
    health INTEGER NOT NULL,
    movement INTEGER NOT NULL,
    production_cost INTEGER NOT NULL,
    salary INTEGER NOT NULL,
    photo_path TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_cities_player_id ON cities(player_id);
CREATE INDEX IF NOT EXISTS idx_districts_city_id ON districts(city_id);
CREATE INDEX IF NOT EXISTS idx_buildings_district_id ON buildings(district_id);
CREATE INDEX IF NOT EXISTS idx_units_player_id ON units(player_id);
"#;
