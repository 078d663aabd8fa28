use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use std::collections::HashMap;

use crate::config::CONFIG;
use crate::db::models::{Entity, EntityKind};
use crate::db::{BuildingFilter, CityFilter, DistrictFilter, UnitFilter};
use crate::error::AdminError;
use crate::html;
use crate::router::AdminState;

pub async fn index() -> Redirect {
    Redirect::to("/select_entity")
}

pub async fn select_entity() -> Html<String> {
    Html(html::select_entity_page())
}

/// GET /entities/{type} — filtered, paginated listing page.
///
/// Filters arrive as raw query strings; unparsable numeric values are
/// treated as absent rather than rejected.
pub async fn list_entities(
    State(state): State<AdminState>,
    Path(kind): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AdminError> {
    let kind: EntityKind = kind.parse()?;

    let page = params
        .get("page")
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(1)
        .max(1);
    let limit = CONFIG.page_size;
    // An absurd page number yields an empty page, not an overflow.
    let offset = (page - 1).saturating_mul(limit);

    let num = |name: &str| params.get(name).and_then(|v| v.trim().parse::<i64>().ok());

    let entities: Vec<Entity> = match kind {
        EntityKind::City => {
            let filter = CityFilter {
                min_population: num("minPopulation"),
                name: params.get("name").filter(|v| !v.is_empty()).cloned(),
            };
            state
                .db
                .cities
                .list(&filter, offset, limit)
                .await?
                .into_iter()
                .map(Entity::City)
                .collect()
        }
        EntityKind::District => {
            let filter = DistrictFilter {
                city_id: num("cityId"),
                min_production_cost: num("productionCost"),
            };
            state
                .db
                .districts
                .list(&filter, offset, limit)
                .await?
                .into_iter()
                .map(Entity::District)
                .collect()
        }
        EntityKind::Building => {
            let filter = BuildingFilter {
                district_id: num("districtId"),
                min_production: num("production"),
                min_defense: num("defense"),
            };
            state
                .db
                .buildings
                .list(&filter, offset, limit)
                .await?
                .into_iter()
                .map(Entity::Building)
                .collect()
        }
        EntityKind::Unit => {
            let filter = UnitFilter {
                player_id: num("playerId"),
                min_damage: num("minDamage"),
                min_health: num("minHealth"),
                min_movement: num("minMovement"),
            };
            state
                .db
                .units
                .list(&filter, offset, limit)
                .await?
                .into_iter()
                .map(Entity::Unit)
                .collect()
        }
    };

    Ok(Html(html::lists::entity_list_page(
        kind, &entities, &params, page, limit,
    )))
}
