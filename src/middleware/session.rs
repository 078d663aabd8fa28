use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use time::Duration;

use crate::db::models::Player;
use crate::error::AdminError;
use crate::router::AdminState;

const SESSION_COOKIE: &str = "citadel_session";
const SESSION_TTL: Duration = Duration::days(7);

/// The signed-in player, resolved per request from the private session
/// cookie; anonymous requests get 401.
pub struct CurrentPlayer(pub Player);

impl FromRequestParts<AdminState> for CurrentPlayer {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AdminState,
    ) -> Result<Self, Self::Rejection> {
        // AdminState is Clone, so the key type has to be spelled out here.
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .map_err(|err| match err {})?;

        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return Err(AdminError::SignInRequired.into_response());
        };
        let id: i64 = cookie
            .value()
            .parse()
            .map_err(|_| AdminError::SignInRequired.into_response())?;

        match state.db.players.read(id).await {
            Ok(Some(player)) => Ok(Self(player)),
            Ok(None) => Err(AdminError::SignInRequired.into_response()),
            Err(e) => Err(e.into_response()),
        }
    }
}

/// Like [`CurrentPlayer`] but additionally requires the admin flag;
/// non-admin sessions are rejected with 403.
pub struct AdminPlayer(pub Player);

impl FromRequestParts<AdminState> for AdminPlayer {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AdminState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentPlayer(player) = CurrentPlayer::from_request_parts(parts, state).await?;
        if !player.is_admin {
            return Err(AdminError::AdminRequired.into_response());
        }
        Ok(Self(player))
    }
}

/// The signed-in player if there is one. Public pages use this to vary
/// what they render without turning anonymous visitors away.
pub struct MaybePlayer(pub Option<Player>);

impl MaybePlayer {
    pub fn is_admin(&self) -> bool {
        self.0.as_ref().is_some_and(|p| p.is_admin)
    }
}

impl FromRequestParts<AdminState> for MaybePlayer {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AdminState,
    ) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .map_err(|err| match err {})?;

        let Some(id) = jar
            .get(SESSION_COOKIE)
            .and_then(|c| c.value().parse::<i64>().ok())
        else {
            return Ok(Self(None));
        };
        match state.db.players.read(id).await {
            Ok(player) => Ok(Self(player)),
            Err(e) => Err(e.into_response()),
        }
    }
}

/// Cookie storing the player id; the jar encrypts and authenticates it.
pub fn session_cookie(player_id: i64) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, player_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(SESSION_TTL)
        .build()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
