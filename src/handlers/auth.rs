use axum::Form;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use subtle::ConstantTimeEq;
use tracing::info;

use crate::db::models::NewPlayer;
use crate::error::AdminError;
use crate::html;
use crate::middleware::session::{clear_session_cookie, session_cookie};
use crate::router::AdminState;

/// Sign-up/sign-in submission. Fields are optional so their absence maps to
/// a 400 rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub login: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "isAdmin")]
    pub is_admin: Option<String>,
}

impl CredentialsForm {
    fn login(&self) -> Result<&str, AdminError> {
        self.login
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(AdminError::MissingField("login"))
    }

    fn password(&self) -> Result<&str, AdminError> {
        self.password
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(AdminError::MissingField("password"))
    }
}

pub async fn sign_up_page() -> Html<String> {
    Html(html::auth::sign_up_page())
}

pub async fn sign_up(
    State(state): State<AdminState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect, AdminError> {
    let login = form.login()?;
    let password = form.password()?;

    // Pre-check so a duplicate gets a friendly 409 instead of a raw
    // constraint error from the insert.
    if state.db.players.find_by_login(login).await?.is_some() {
        return Err(AdminError::LoginTaken(login.to_string()));
    }

    let player = NewPlayer {
        login: login.to_string(),
        password: password.to_string(),
        is_admin: form.is_admin.is_some(),
    };
    let id = state.db.players.create(&player).await?;
    info!(id, login = %player.login, "player signed up");

    Ok(Redirect::to("/sign_in"))
}

pub async fn sign_in_page() -> Html<String> {
    Html(html::auth::sign_in_page())
}

pub async fn sign_in(
    State(state): State<AdminState>,
    jar: PrivateCookieJar,
    Form(form): Form<CredentialsForm>,
) -> Result<(PrivateCookieJar, Redirect), AdminError> {
    let login = form.login()?;
    let password = form.password()?;

    let Some(player) = state.db.players.find_by_login(login).await? else {
        return Err(AdminError::InvalidCredentials);
    };
    if !bool::from(player.password.as_bytes().ct_eq(password.as_bytes())) {
        return Err(AdminError::InvalidCredentials);
    }

    info!(id = player.id, login = %player.login, "player signed in");
    let jar = jar.add(session_cookie(player.id));
    Ok((jar, Redirect::to("/select_entity")))
}

pub async fn sign_out(jar: PrivateCookieJar) -> (PrivateCookieJar, Redirect) {
    (
        jar.remove(clear_session_cookie()),
        Redirect::to("/sign_in"),
    )
}
