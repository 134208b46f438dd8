//! Dashboard routes: the HTML page, its JSON twin, and the form actions the
//! page posts to.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use super::auth::AuthUser;
use crate::models::{NewPassword, PasswordFilter};
use crate::pages::dashboard::render_dashboard;
use crate::services::dashboard::{self as dashboard_svc, DashboardView};
use crate::services::passwords::{self, PasswordError};
use crate::state::AppState;
use crate::store::StoreError;

const DASHBOARD_PATH: &str = "/dashboard";

pub(crate) fn store_error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::Database(sqlx::Error::PoolTimedOut) => StatusCode::SERVICE_UNAVAILABLE,
        StoreError::Database(_) | StoreError::Fixture(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn password_error_to_status(err: &PasswordError) -> StatusCode {
    match err {
        PasswordError::Validation(_) | PasswordError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
        PasswordError::NotFound(_) => StatusCode::NOT_FOUND,
        PasswordError::Store(e) => store_error_to_status(e),
    }
}

async fn load(state: &AppState, auth: &AuthUser, filter: PasswordFilter) -> Result<DashboardView, StatusCode> {
    dashboard_svc::load_dashboard(state.store.as_ref(), auth.user.id, filter)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %auth.user.id, "dashboard load failed");
            store_error_to_status(&e)
        })
}

/// `GET /dashboard?category=&search=`: render the dashboard page.
pub async fn dashboard_page(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<PasswordFilter>,
) -> Result<Html<String>, StatusCode> {
    let view = load(&state, &auth, filter).await?;
    Ok(Html(render_dashboard(view)))
}

/// `GET /api/dashboard?category=&search=`: the dashboard view model as JSON.
pub async fn dashboard_json(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<PasswordFilter>,
) -> Result<Json<DashboardView>, StatusCode> {
    let view = load(&state, &auth, filter).await?;
    Ok(Json(view))
}

fn password_error_response(err: &PasswordError) -> Response {
    let status = password_error_to_status(err);
    if status.is_server_error() {
        tracing::error!(error = %err, "password action failed");
    } else {
        tracing::warn!(error = %err, "password action rejected");
    }
    (status, err.to_string()).into_response()
}

/// `POST /dashboard/passwords`: create an entry from the add-password form.
pub async fn create_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Form(input): Form<NewPassword>,
) -> Response {
    match passwords::create_password(state.store.as_ref(), auth.user.id, input).await {
        Ok(_) => Redirect::to(DASHBOARD_PATH).into_response(),
        Err(e) => password_error_response(&e),
    }
}

#[derive(Deserialize)]
pub struct MoveCategoryForm {
    category_id: String,
}

/// `POST /dashboard/passwords/{id}/category`: move an entry to another category.
pub async fn move_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(password_id): Path<String>,
    Form(form): Form<MoveCategoryForm>,
) -> Response {
    match passwords::move_password(state.store.as_ref(), auth.user.id, &password_id, &form.category_id).await {
        Ok(_) => Redirect::to(DASHBOARD_PATH).into_response(),
        Err(e) => password_error_response(&e),
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
