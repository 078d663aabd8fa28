use std::time::{SystemTime, UNIX_EPOCH};

use citadel::db::models::{NewBuilding, NewCity, NewDistrict, NewPlayer, NewUnit};
use citadel::db::{BuildingFilter, CityFilter, Datastores, DistrictFilter, UnitFilter, connect};

async fn test_db() -> Datastores {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "citadel-store-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let pool = connect(&format!("sqlite:{}", temp_path.display()))
        .await
        .expect("failed to open test database");
    let db = Datastores::new(pool);
    db.init_schema().await.expect("failed to init schema");
    db
}

async fn seed_player(db: &Datastores) -> i64 {
    db.players
        .create(&NewPlayer {
            login: format!(
                "player-{}",
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .expect("system time before UNIX_EPOCH")
                    .as_nanos()
            ),
            password: "password".to_string(),
            is_admin: true,
        })
        .await
        .expect("failed to create player")
}

fn new_city(player_id: i64, name: &str, population: i64) -> NewCity {
    NewCity {
        player_id,
        name: name.to_string(),
        population,
        photo_path: String::new(),
    }
}

fn new_unit(player_id: i64, name: &str, damage: i64, health: i64, movement: i64) -> NewUnit {
    NewUnit {
        player_id,
        name: name.to_string(),
        description: "test unit".to_string(),
        damage,
        health,
        movement,
        production_cost: 100,
        salary: 10,
        photo_path: String::new(),
    }
}

fn new_building(district_id: i64, name: &str, production: i64, defense: i64) -> NewBuilding {
    NewBuilding {
        district_id,
        name: name.to_string(),
        description: "test building".to_string(),
        production,
        production_cost: 500,
        food: 1,
        gold: 2,
        defense,
        photo_path: String::new(),
    }
}

#[tokio::test]
async fn create_then_read_round_trips_every_entity() {
    let db = test_db().await;
    let player_id = seed_player(&db).await;

    let city = new_city(player_id, "Moscow", 10_000);
    let city_id = db.cities.create(&city).await.expect("create city");
    let stored = db
        .cities
        .read(city_id)
        .await
        .expect("read city")
        .expect("city should exist");
    assert_eq!(stored.name, city.name);
    assert_eq!(stored.population, city.population);
    assert_eq!(stored.player_id, player_id);

    let district = NewDistrict {
        city_id,
        name: "Campus".to_string(),
        production_cost: 800,
        photo_path: "/uploaded_photos/campus.jpg".to_string(),
    };
    let district_id = db.districts.create(&district).await.expect("create district");
    let stored = db
        .districts
        .read(district_id)
        .await
        .expect("read district")
        .expect("district should exist");
    assert_eq!(stored.name, district.name);
    assert_eq!(stored.production_cost, 800);
    assert_eq!(stored.photo_path, district.photo_path);

    let building = new_building(district_id, "Library", 200, 8);
    let building_id = db.buildings.create(&building).await.expect("create building");
    let stored = db
        .buildings
        .read(building_id)
        .await
        .expect("read building")
        .expect("building should exist");
    assert_eq!(stored.name, building.name);
    assert_eq!(stored.description, building.description);
    assert_eq!(stored.production, 200);
    assert_eq!(stored.defense, 8);

    let unit = new_unit(player_id, "Lancer", 80, 100, 90);
    let unit_id = db.units.create(&unit).await.expect("create unit");
    let stored = db
        .units
        .read(unit_id)
        .await
        .expect("read unit")
        .expect("unit should exist");
    assert_eq!(stored.name, unit.name);
    assert_eq!(stored.damage, 80);
    assert_eq!(stored.health, 100);
    assert_eq!(stored.salary, 10);
}

#[tokio::test]
async fn read_missing_row_returns_none() {
    let db = test_db().await;
    assert!(db.cities.read(9999).await.expect("read").is_none());
    assert!(db.units.read(9999).await.expect("read").is_none());
}

#[tokio::test]
async fn city_create_also_creates_default_district() {
    let db = test_db().await;
    let player_id = seed_player(&db).await;
    let city_id = db
        .cities
        .create(&new_city(player_id, "Domodedovo", 304_003))
        .await
        .expect("create city");

    let filter = DistrictFilter {
        city_id: Some(city_id),
        min_production_cost: None,
    };
    let districts = db
        .districts
        .list(&filter, 0, 10)
        .await
        .expect("list districts");
    assert_eq!(districts.len(), 1);
    assert_eq!(districts[0].name, "City Center");
    assert_eq!(districts[0].production_cost, 0);
}

#[tokio::test]
async fn update_overwrites_every_column() {
    let db = test_db().await;
    let player_id = seed_player(&db).await;
    let city_id = db
        .cities
        .create(&new_city(player_id, "Paris", 1))
        .await
        .expect("create city");
    let district_id = db
        .districts
        .create(&NewDistrict {
            city_id,
            name: "Old Town".to_string(),
            production_cost: 300,
            photo_path: String::new(),
        })
        .await
        .expect("create district");
    let building_id = db
        .buildings
        .create(&new_building(district_id, "Granary", 50, 2))
        .await
        .expect("create building");

    // Regression for the classic stale-capture bug: the updated description
    // and defense must land in the row, not the previous values.
    let mut updated = new_building(district_id, "Granary", 75, 9);
    updated.description = "rebuilt after the siege".to_string();
    db.buildings
        .update(building_id, &updated)
        .await
        .expect("update building");

    let stored = db
        .buildings
        .read(building_id)
        .await
        .expect("read building")
        .expect("building should exist");
    assert_eq!(stored.description, "rebuilt after the siege");
    assert_eq!(stored.defense, 9);
    assert_eq!(stored.production, 75);
    // Untouched columns keep their submitted values, nothing reverts.
    assert_eq!(stored.food, 1);
    assert_eq!(stored.gold, 2);
}

#[tokio::test]
async fn delete_city_cascades_to_districts_and_buildings() {
    let db = test_db().await;
    let player_id = seed_player(&db).await;
    let city_id = db
        .cities
        .create(&new_city(player_id, "Carthage", 5_000))
        .await
        .expect("create city");
    let district_id = db
        .districts
        .create(&NewDistrict {
            city_id,
            name: "Harbor".to_string(),
            production_cost: 400,
            photo_path: String::new(),
        })
        .await
        .expect("create district");
    let building_id = db
        .buildings
        .create(&new_building(district_id, "Docks", 30, 1))
        .await
        .expect("create building");

    db.cities.delete(city_id).await.expect("delete city");

    assert!(db.cities.read(city_id).await.expect("read").is_none());
    assert!(db.districts.read(district_id).await.expect("read").is_none());
    assert!(db.buildings.read(building_id).await.expect("read").is_none());
}

#[tokio::test]
async fn delete_player_cascades_to_cities_and_units() {
    let db = test_db().await;
    let player_id = seed_player(&db).await;
    let city_id = db
        .cities
        .create(&new_city(player_id, "Thebes", 2_000))
        .await
        .expect("create city");
    let unit_id = db
        .units
        .create(&new_unit(player_id, "Archer", 40, 60, 70))
        .await
        .expect("create unit");

    db.players.delete(player_id).await.expect("delete player");

    assert!(db.cities.read(city_id).await.expect("read").is_none());
    assert!(db.units.read(unit_id).await.expect("read").is_none());
}

#[tokio::test]
async fn city_filters_are_anded_together() {
    let db = test_db().await;
    let player_id = seed_player(&db).await;
    for (name, population) in [("Moscow", 10_000), ("Mostar", 500), ("Berlin", 2_000)] {
        db.cities
            .create(&new_city(player_id, name, population))
            .await
            .expect("create city");
    }

    let filter = CityFilter {
        min_population: Some(1_000),
        name: Some("Mos".to_string()),
    };
    let cities = db.cities.list(&filter, 0, 10).await.expect("list cities");
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].name, "Moscow");
}

#[tokio::test]
async fn unit_filters_are_anded_together() {
    let db = test_db().await;
    let player_a = seed_player(&db).await;
    let player_b = seed_player(&db).await;

    db.units
        .create(&new_unit(player_a, "Knight", 90, 120, 40))
        .await
        .expect("create unit");
    db.units
        .create(&new_unit(player_a, "Scout", 20, 50, 100))
        .await
        .expect("create unit");
    db.units
        .create(&new_unit(player_b, "Champion", 95, 150, 45))
        .await
        .expect("create unit");

    let filter = UnitFilter {
        player_id: Some(player_a),
        min_damage: Some(50),
        min_health: Some(100),
        min_movement: None,
    };
    let units = db.units.list(&filter, 0, 10).await.expect("list units");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "Knight");
}

#[tokio::test]
async fn building_filters_are_anded_together() {
    let db = test_db().await;
    let player_id = seed_player(&db).await;
    let city_id = db
        .cities
        .create(&new_city(player_id, "Uruk", 3_000))
        .await
        .expect("create city");
    let district_id = db
        .districts
        .create(&NewDistrict {
            city_id,
            name: "Ziggurat Quarter".to_string(),
            production_cost: 900,
            photo_path: String::new(),
        })
        .await
        .expect("create district");

    db.buildings
        .create(&new_building(district_id, "Walls", 10, 20))
        .await
        .expect("create building");
    db.buildings
        .create(&new_building(district_id, "Workshop", 60, 3))
        .await
        .expect("create building");

    let filter = BuildingFilter {
        district_id: Some(district_id),
        min_production: Some(5),
        min_defense: Some(10),
    };
    let buildings = db
        .buildings
        .list(&filter, 0, 10)
        .await
        .expect("list buildings");
    assert_eq!(buildings.len(), 1);
    assert_eq!(buildings[0].name, "Walls");
}

#[tokio::test]
async fn pagination_returns_disjoint_ordered_slices() {
    let db = test_db().await;
    let player_id = seed_player(&db).await;
    for i in 0..7 {
        db.cities
            .create(&new_city(player_id, &format!("City {i}"), 100 * i))
            .await
            .expect("create city");
    }

    let filter = CityFilter::default();
    let page1 = db.cities.list(&filter, 0, 3).await.expect("page 1");
    let page2 = db.cities.list(&filter, 3, 3).await.expect("page 2");
    let page3 = db.cities.list(&filter, 6, 3).await.expect("page 3");

    assert_eq!(page1.len(), 3);
    assert_eq!(page2.len(), 3);
    assert_eq!(page3.len(), 1);

    let mut ids: Vec<i64> = page1
        .iter()
        .chain(&page2)
        .chain(&page3)
        .map(|c| c.id)
        .collect();
    let original = ids.clone();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 7, "pages must not overlap");
    assert_eq!(original, ids, "pages come back ordered by id");
}

#[tokio::test]
async fn building_count_for_city_goes_through_districts() {
    let db = test_db().await;
    let player_id = seed_player(&db).await;
    let city_id = db
        .cities
        .create(&new_city(player_id, "Rome", 40_000))
        .await
        .expect("create city");
    let other_city = db
        .cities
        .create(&new_city(player_id, "Ostia", 4_000))
        .await
        .expect("create city");

    let district_a = db
        .districts
        .create(&NewDistrict {
            city_id,
            name: "Forum".to_string(),
            production_cost: 100,
            photo_path: String::new(),
        })
        .await
        .expect("create district");
    let district_other = db
        .districts
        .create(&NewDistrict {
            city_id: other_city,
            name: "Port".to_string(),
            production_cost: 100,
            photo_path: String::new(),
        })
        .await
        .expect("create district");

    db.buildings
        .create(&new_building(district_a, "Senate", 5, 5))
        .await
        .expect("create building");
    db.buildings
        .create(&new_building(district_a, "Basilica", 5, 5))
        .await
        .expect("create building");
    db.buildings
        .create(&new_building(district_other, "Lighthouse", 5, 5))
        .await
        .expect("create building");

    let count = db
        .buildings
        .count_for_city(city_id)
        .await
        .expect("count buildings");
    assert_eq!(count, 2);
}

#[tokio::test]
async fn player_lookup_by_login() {
    let db = test_db().await;
    let id = db
        .players
        .create(&NewPlayer {
            login: "commander".to_string(),
            password: "secret".to_string(),
            is_admin: false,
        })
        .await
        .expect("create player");

    let found = db
        .players
        .find_by_login("commander")
        .await
        .expect("lookup")
        .expect("player should exist");
    assert_eq!(found.id, id);
    assert!(!found.is_admin);

    assert!(
        db.players
            .find_by_login("nobody")
            .await
            .expect("lookup")
            .is_none()
    );
}
