//! Mock authentication handlers.
//!
//! There is no password and no identity provider: any well-formed email
//! signs the visitor in. The session carries the resulting
//! [`CurrentUser`] so the rest of the app can gate routes normally.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use forkful_core::{Email, UserId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Display the login page.
#[instrument]
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Sign the visitor in.
///
/// Validates the email shape only; a bad address re-renders the form with
/// an error, anything parseable signs in.
#[instrument(skip(_state, session, form))]
pub async fn login(
    State(_state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(e) => {
            return LoginTemplate {
                error: Some(e.to_string()),
            }
            .into_response();
        }
    };

    let name = if form.name.trim().is_empty() {
        email.local_part().to_string()
    } else {
        form.name.trim().to_string()
    };

    let user = CurrentUser {
        id: UserId::from(Uuid::new_v4().to_string()),
        email,
        name,
    };

    tracing::info!(user_id = %user.id, "mock login");

    if let Err(e) = set_current_user(&session, &user).await {
        tracing::error!("Failed to save login to session: {e}");
        return LoginTemplate {
            error: Some("Could not sign you in, please try again".to_string()),
        }
        .into_response();
    }

    Redirect::to("/").into_response()
}

/// Sign the visitor out and return home.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear login from session: {e}");
    }
    Redirect::to("/").into_response()
}
