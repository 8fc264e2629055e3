//! Admin authentication route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::session::CurrentAdmin;
use crate::models::session_keys;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Display the admin login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Handle an admin login attempt.
///
/// Success stores the admin identity in the session (under a fresh session id)
/// and redirects to the dashboard. Bad credentials re-render the login page
/// with an inline error.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match AuthService::new(state.pool())
        .login(&form.username, &form.password)
        .await
    {
        Ok(admin) => {
            // Rotate the session id on privilege change
            session.cycle_id().await?;
            session
                .insert(
                    session_keys::CURRENT_ADMIN,
                    CurrentAdmin {
                        id: admin.id,
                        username: admin.username,
                    },
                )
                .await?;

            Ok(Redirect::to("/admin").into_response())
        }
        Err(AuthError::InvalidCredentials) => Ok(LoginTemplate {
            error: Some("Identifiants invalides".to_string()),
        }
        .into_response()),
        Err(other) => Err(AppError::Auth(other)),
    }
}

/// Log the admin out.
///
/// Clears the entire session, cart included.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    session.flush().await?;
    Ok(Redirect::to("/"))
}
