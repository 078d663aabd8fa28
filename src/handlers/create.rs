use axum::extract::{Multipart, Path, State};
use axum::response::{Html, Redirect};
use tracing::info;

use crate::config::CONFIG;
use crate::db::models::{EntityKind, NewBuilding, NewCity, NewDistrict, NewUnit};
use crate::error::AdminError;
use crate::handlers::forms::{FormData, ensure_non_negative};
use crate::html;
use crate::middleware::session::AdminPlayer;
use crate::router::AdminState;
use crate::service::photos::save_photo;

/// GET /create_entity/{type} — legacy chooser path, redirects to the form.
pub async fn create_entity_redirect(Path(kind): Path<String>) -> Result<Redirect, AdminError> {
    let kind: EntityKind = kind.parse()?;
    Ok(Redirect::to(&format!("/create_{}", kind.as_str())))
}

pub async fn create_city_page() -> Html<String> {
    Html(html::forms::city_form_page(None))
}

pub async fn create_district_page() -> Html<String> {
    Html(html::forms::district_form_page(None))
}

pub async fn create_building_page() -> Html<String> {
    Html(html::forms::building_form_page(None))
}

pub async fn create_unit_page() -> Html<String> {
    Html(html::forms::unit_form_page(None))
}

async fn stored_photo_path(form: &FormData, name: &str) -> Result<String, AdminError> {
    match form.photo() {
        Some(bytes) => save_photo(&CONFIG.upload_dir, name, bytes).await,
        None => Ok(String::new()),
    }
}

pub async fn create_city(
    _player: AdminPlayer,
    State(state): State<AdminState>,
    multipart: Multipart,
) -> Result<Redirect, AdminError> {
    let form = FormData::read(multipart).await?;
    let name = form.require("name")?.to_string();
    let photo_path = stored_photo_path(&form, &name).await?;
    let city = NewCity {
        player_id: form.require_i64("playerId")?,
        population: form.require_i64("population")?,
        name,
        photo_path,
    };

    let id = state.db.cities.create(&city).await?;
    info!(id, name = %city.name, "city created");
    Ok(Redirect::to("/entities/city"))
}

pub async fn create_district(
    _player: AdminPlayer,
    State(state): State<AdminState>,
    multipart: Multipart,
) -> Result<Redirect, AdminError> {
    let form = FormData::read(multipart).await?;
    let name = form.require("name")?.to_string();
    let photo_path = stored_photo_path(&form, &name).await?;
    let district = NewDistrict {
        city_id: form.require_i64("cityId")?,
        production_cost: form.require_i64("productionCost")?,
        name,
        photo_path,
    };

    let id = state.db.districts.create(&district).await?;
    info!(id, name = %district.name, "district created");
    Ok(Redirect::to("/entities/district"))
}

pub async fn create_building(
    _player: AdminPlayer,
    State(state): State<AdminState>,
    multipart: Multipart,
) -> Result<Redirect, AdminError> {
    let form = FormData::read(multipart).await?;
    let name = form.require("name")?.to_string();
    let photo_path = stored_photo_path(&form, &name).await?;
    let building = NewBuilding {
        district_id: form.require_i64("districtId")?,
        description: form.opt("description").unwrap_or("").to_string(),
        production: form.require_i64("production")?,
        production_cost: form.require_i64("productionCost")?,
        food: form.require_i64("food")?,
        gold: form.require_i64("gold")?,
        defense: form.require_i64("defense")?,
        name,
        photo_path,
    };
    ensure_non_negative(&[
        ("production", building.production),
        ("productionCost", building.production_cost),
        ("food", building.food),
        ("gold", building.gold),
        ("defense", building.defense),
    ])?;

    let id = state.db.buildings.create(&building).await?;
    info!(id, name = %building.name, "building created");
    Ok(Redirect::to("/entities/building"))
}

pub async fn create_unit(
    _player: AdminPlayer,
    State(state): State<AdminState>,
    multipart: Multipart,
) -> Result<Redirect, AdminError> {
    let form = FormData::read(multipart).await?;
    let name = form.require("name")?.to_string();
    let photo_path = stored_photo_path(&form, &name).await?;
    let unit = NewUnit {
        player_id: form.require_i64("playerId")?,
        description: form.opt("description").unwrap_or("").to_string(),
        damage: form.require_i64("damage")?,
        health: form.require_i64("health")?,
        movement: form.require_i64("movement")?,
        production_cost: form.require_i64("productionCost")?,
        salary: form.require_i64("salary")?,
        name,
        photo_path,
    };
    ensure_non_negative(&[
        ("damage", unit.damage),
        ("health", unit.health),
        ("movement", unit.movement),
        ("productionCost", unit.production_cost),
        ("salary", unit.salary),
    ])?;

    let id = state.db.units.create(&unit).await?;
    info!(id, name = %unit.name, "unit created");
    Ok(Redirect::to("/entities/unit"))
}
