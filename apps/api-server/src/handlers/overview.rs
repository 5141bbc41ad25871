//! Dashboard overview handler.

use actix_web::{HttpResponse, web};
use chrono::Local;
use serde::Serialize;

use postline_core::domain::Post;
use postline_core::overview::StatusCounts;
use postline_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Number of upcoming posts shown on the dashboard.
const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub counts: StatusCounts,
    pub upcoming: Vec<Post>,
}

/// GET /api/overview
pub async fn overview(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.store.load().await?;
    let now = Local::now().naive_local();

    let counts = StatusCounts::tally(&posts);
    let upcoming: Vec<Post> = postline_core::overview::upcoming(&posts, now, UPCOMING_LIMIT)
        .into_iter()
        .cloned()
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(Overview { counts, upcoming })))
}
