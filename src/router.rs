use axum::Router;
use axum::extract::{DefaultBodyLimit, FromRef};
use axum::routing::{get, post};
use axum_extra::extract::cookie::Key;
use tower_http::services::ServeDir;
use tracing::warn;

use crate::config::CONFIG;
use crate::db::Datastores;
use crate::handlers::{auth, create, details, edit, entities};

/// Photo uploads dominate request size; everything else is tiny forms.
const UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AdminState {
    pub db: Datastores,
    key: Key,
}

impl AdminState {
    pub fn new(db: Datastores) -> Self {
        let key = match CONFIG.cookie_secret.as_deref() {
            Some(secret) => Key::try_from(secret.as_bytes()).unwrap_or_else(|_| {
                warn!("cookie_secret shorter than 64 bytes; generating a random session key");
                Key::generate()
            }),
            None => Key::generate(),
        };
        Self { db, key }
    }
}

// PrivateCookieJar pulls its key out of the state.
impl FromRef<AdminState> for Key {
    fn from_ref(state: &AdminState) -> Key {
        state.key.clone()
    }
}

pub fn admin_router(state: AdminState) -> Router {
    Router::new()
        .route("/", get(entities::index))
        .route("/sign_up", get(auth::sign_up_page).post(auth::sign_up))
        .route("/sign_in", get(auth::sign_in_page).post(auth::sign_in))
        .route("/sign_out", post(auth::sign_out))
        .route("/select_entity", get(entities::select_entity))
        .route("/entities/{type}", get(entities::list_entities))
        .route("/details/{type}/{id}", get(details::entity_details))
        .route("/create_entity/{type}", get(create::create_entity_redirect))
        .route(
            "/create_city",
            get(create::create_city_page).post(create::create_city),
        )
        .route(
            "/create_district",
            get(create::create_district_page).post(create::create_district),
        )
        .route(
            "/create_building",
            get(create::create_building_page).post(create::create_building),
        )
        .route(
            "/create_unit",
            get(create::create_unit_page).post(create::create_unit),
        )
        .route(
            "/edit/{type}/{id}",
            get(edit::edit_entity_page).post(edit::edit_entity),
        )
        .route("/delete_city/{id}", post(details::delete_city))
        .route("/delete_district/{id}", post(details::delete_district))
        .route("/delete_building/{id}", post(details::delete_building))
        .route("/delete_unit/{id}", post(details::delete_unit))
        .nest_service("/static", ServeDir::new(&CONFIG.static_dir))
        .nest_service("/uploaded_photos", ServeDir::new(&CONFIG.upload_dir))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .with_state(state)
}
