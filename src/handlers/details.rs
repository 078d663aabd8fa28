use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use tracing::info;

use crate::db::models::EntityKind;
use crate::error::AdminError;
use crate::html;
use crate::middleware::session::{AdminPlayer, MaybePlayer};
use crate::router::AdminState;

/// GET /details/{type}/{id} — public, but the edit/delete controls are
/// only rendered for an admin session.
pub async fn entity_details(
    player: MaybePlayer,
    State(state): State<AdminState>,
    Path((kind, id)): Path<(String, i64)>,
) -> Result<Html<String>, AdminError> {
    let kind: EntityKind = kind.parse()?;
    let is_admin = player.is_admin();

    let page = match kind {
        EntityKind::City => {
            let city = state
                .db
                .cities
                .read(id)
                .await?
                .ok_or(AdminError::NotFound("City"))?;
            let building_count = state.db.buildings.count_for_city(id).await?;
            html::details::city_details_page(&city, building_count, is_admin)
        }
        EntityKind::District => {
            let district = state
                .db
                .districts
                .read(id)
                .await?
                .ok_or(AdminError::NotFound("District"))?;
            html::details::district_details_page(&district, is_admin)
        }
        EntityKind::Building => {
            let building = state
                .db
                .buildings
                .read(id)
                .await?
                .ok_or(AdminError::NotFound("Building"))?;
            html::details::building_details_page(&building, is_admin)
        }
        EntityKind::Unit => {
            let unit = state
                .db
                .units
                .read(id)
                .await?
                .ok_or(AdminError::NotFound("Unit"))?;
            html::details::unit_details_page(&unit, is_admin)
        }
    };

    Ok(Html(page))
}

async fn delete_entity(
    state: &AdminState,
    player: &AdminPlayer,
    kind: EntityKind,
    id: i64,
) -> Result<Redirect, AdminError> {
    match kind {
        EntityKind::City => state.db.cities.delete(id).await?,
        EntityKind::District => state.db.districts.delete(id).await?,
        EntityKind::Building => state.db.buildings.delete(id).await?,
        EntityKind::Unit => state.db.units.delete(id).await?,
    }
    info!(id, entity = kind.as_str(), by = %player.0.login, "entity deleted");
    Ok(Redirect::to(&format!("/entities/{}", kind.as_str())))
}

pub async fn delete_city(
    player: AdminPlayer,
    State(state): State<AdminState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AdminError> {
    delete_entity(&state, &player, EntityKind::City, id).await
}

pub async fn delete_district(
    player: AdminPlayer,
    State(state): State<AdminState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AdminError> {
    delete_entity(&state, &player, EntityKind::District, id).await
}

pub async fn delete_building(
    player: AdminPlayer,
    State(state): State<AdminState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AdminError> {
    delete_entity(&state, &player, EntityKind::Building, id).await
}

pub async fn delete_unit(
    player: AdminPlayer,
    State(state): State<AdminState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AdminError> {
    delete_entity(&state, &player, EntityKind::Unit, id).await
}
