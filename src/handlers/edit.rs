use axum::extract::{Multipart, Path, State};
use axum::response::{Html, Redirect};
use tracing::info;

use crate::config::CONFIG;
use crate::db::models::{EntityKind, NewBuilding, NewCity, NewDistrict, NewUnit};
use crate::error::AdminError;
use crate::handlers::forms::FormData;
use crate::html;
use crate::middleware::session::AdminPlayer;
use crate::router::AdminState;
use crate::service::photos::save_photo;

/// GET /edit/{type}/{id} — form pre-filled from the current row.
pub async fn edit_entity_page(
    State(state): State<AdminState>,
    Path((kind, id)): Path<(String, i64)>,
) -> Result<Html<String>, AdminError> {
    let kind: EntityKind = kind.parse()?;

    let page = match kind {
        EntityKind::City => {
            let city = state
                .db
                .cities
                .read(id)
                .await?
                .ok_or(AdminError::NotFound("City"))?;
            html::forms::city_form_page(Some(&city))
        }
        EntityKind::District => {
            let district = state
                .db
                .districts
                .read(id)
                .await?
                .ok_or(AdminError::NotFound("District"))?;
            html::forms::district_form_page(Some(&district))
        }
        EntityKind::Building => {
            let building = state
                .db
                .buildings
                .read(id)
                .await?
                .ok_or(AdminError::NotFound("Building"))?;
            html::forms::building_form_page(Some(&building))
        }
        EntityKind::Unit => {
            let unit = state
                .db
                .units
                .read(id)
                .await?
                .ok_or(AdminError::NotFound("Unit"))?;
            html::forms::unit_form_page(Some(&unit))
        }
    };

    Ok(Html(page))
}

/// POST /edit/{type}/{id} — overlay the submitted fields onto the current
/// row, then write the whole row back. A field the form omits keeps its
/// stored value instead of reverting to a default.
pub async fn edit_entity(
    _player: AdminPlayer,
    State(state): State<AdminState>,
    Path((kind, id)): Path<(String, i64)>,
    multipart: Multipart,
) -> Result<Redirect, AdminError> {
    let kind: EntityKind = kind.parse()?;
    let form = FormData::read(multipart).await?;

    match kind {
        EntityKind::City => update_city(&state, id, &form).await?,
        EntityKind::District => update_district(&state, id, &form).await?,
        EntityKind::Building => update_building(&state, id, &form).await?,
        EntityKind::Unit => update_unit(&state, id, &form).await?,
    }

    info!(id, entity = kind.as_str(), "entity updated");
    Ok(Redirect::to(&format!("/details/{}/{id}", kind.as_str())))
}

async fn replacement_photo(
    form: &FormData,
    name: &str,
    current: &str,
) -> Result<String, AdminError> {
    match form.photo() {
        Some(bytes) => save_photo(&CONFIG.upload_dir, name, bytes).await,
        None => Ok(current.to_string()),
    }
}

async fn update_city(state: &AdminState, id: i64, form: &FormData) -> Result<(), AdminError> {
    let current = state
        .db
        .cities
        .read(id)
        .await?
        .ok_or(AdminError::NotFound("City"))?;

    let name = form.opt("name").unwrap_or(&current.name).to_string();
    let photo_path = replacement_photo(form, &name, &current.photo_path).await?;
    let city = NewCity {
        player_id: form.opt_i64("playerId").unwrap_or(current.player_id),
        population: form.opt_i64("population").unwrap_or(current.population),
        name,
        photo_path,
    };
    state.db.cities.update(id, &city).await
}

async fn update_district(state: &AdminState, id: i64, form: &FormData) -> Result<(), AdminError> {
    let current = state
        .db
        .districts
        .read(id)
        .await?
        .ok_or(AdminError::NotFound("District"))?;

    let name = form.opt("name").unwrap_or(&current.name).to_string();
    let photo_path = replacement_photo(form, &name, &current.photo_path).await?;
    let district = NewDistrict {
        city_id: form.opt_i64("cityId").unwrap_or(current.city_id),
        production_cost: form
            .opt_i64("productionCost")
            .unwrap_or(current.production_cost),
        name,
        photo_path,
    };
    state.db.districts.update(id, &district).await
}

async fn update_building(state: &AdminState, id: i64, form: &FormData) -> Result<(), AdminError> {
    let current = state
        .db
        .buildings
        .read(id)
        .await?
        .ok_or(AdminError::NotFound("Building"))?;

    let name = form.opt("name").unwrap_or(&current.name).to_string();
    let photo_path = replacement_photo(form, &name, &current.photo_path).await?;
    let building = NewBuilding {
        district_id: form.opt_i64("districtId").unwrap_or(current.district_id),
        description: form
            .opt("description")
            .unwrap_or(&current.description)
            .to_string(),
        production: form.opt_i64("production").unwrap_or(current.production),
        production_cost: form
            .opt_i64("productionCost")
            .unwrap_or(current.production_cost),
        food: form.opt_i64("food").unwrap_or(current.food),
        gold: form.opt_i64("gold").unwrap_or(current.gold),
        defense: form.opt_i64("defense").unwrap_or(current.defense),
        name,
        photo_path,
    };
    state.db.buildings.update(id, &building).await
}

async fn update_unit(state: &AdminState, id: i64, form: &FormData) -> Result<(), AdminError> {
    let current = state
        .db
        .units
        .read(id)
        .await?
        .ok_or(AdminError::NotFound("Unit"))?;

    let name = form.opt("name").unwrap_or(&current.name).to_string();
    let photo_path = replacement_photo(form, &name, &current.photo_path).await?;
    let unit = NewUnit {
        player_id: form.opt_i64("playerId").unwrap_or(current.player_id),
        description: form
            .opt("description")
            .unwrap_or(&current.description)
            .to_string(),
        damage: form.opt_i64("damage").unwrap_or(current.damage),
        health: form.opt_i64("health").unwrap_or(current.health),
        movement: form.opt_i64("movement").unwrap_or(current.movement),
        production_cost: form
            .opt_i64("productionCost")
            .unwrap_or(current.production_cost),
        salary: form.opt_i64("salary").unwrap_or(current.salary),
        name,
        photo_path,
    };
    state.db.units.update(id, &unit).await
}
