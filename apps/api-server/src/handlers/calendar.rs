//! Calendar view handler - the fixed 6x7 month grid.

use actix_web::{HttpResponse, web};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use postline_core::calendar;
use postline_core::domain::Post;
use postline_shared::ApiResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for the leading/trailing cells of adjacent months; clients
    /// render those dimmed rather than dropping them.
    pub in_month: bool,
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub anchor: NaiveDate,
    pub cells: Vec<CalendarCell>,
}

/// GET /api/calendar/{year}/{month}
pub async fn month_grid(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32)>,
) -> AppResult<HttpResponse> {
    let (year, month) = path.into_inner();
    let anchor = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid month: {year}-{month}")))?;

    let posts = state.store.load().await?;

    let cells: Vec<CalendarCell> = calendar::days_in_grid(anchor)
        .into_iter()
        .map(|date| CalendarCell {
            date,
            in_month: date.year() == anchor.year() && date.month() == anchor.month(),
            posts: calendar::posts_on_date(&posts, date)
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CalendarMonth { anchor, cells })))
}
