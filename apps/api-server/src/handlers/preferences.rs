//! User-preference handlers.

use actix_web::{HttpResponse, web};

use postline_core::domain::UserPreferences;
use postline_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/preferences
pub async fn load(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let preferences = state.store.load_preferences().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(preferences)))
}

/// PUT /api/preferences
pub async fn save(
    state: web::Data<AppState>,
    body: web::Json<UserPreferences>,
) -> AppResult<HttpResponse> {
    let preferences = body.into_inner();
    state.store.save_preferences(&preferences).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(preferences)))
}
