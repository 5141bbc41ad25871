//! Post management handlers.

use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

use postline_core::domain::{Platform, Post, PostDraft, PostStatus, parse_hhmm};
use postline_core::error::DomainError;
use postline_core::filter::PostFilter;
use postline_core::validate;
use postline_shared::ApiResponse;
use postline_shared::dto::{CreatePostRequest, DailyLimitQuery, PostListQuery, RescheduleRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
///
/// The management list: free-text, platform, and status predicates are
/// applied as a conjunction, in stored order.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.store.load().await?;
    let filter = parse_filter(&query)?;

    let filtered: Vec<Post> = filter.apply(&posts).into_iter().cloned().collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(filtered)))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // A platform outside the closed set is a bad request, not a missing
    // field.
    if !req.platform.is_empty() && req.platform.parse::<Platform>().is_err() {
        return Err(AppError::BadRequest(format!(
            "Unknown platform: {}",
            req.platform
        )));
    }

    let draft = to_draft(&req);
    let report = validate::validate_draft(&draft, Local::now().naive_local());
    if !report.is_valid {
        return Err(AppError::Validation(report.errors));
    }

    let (Some(platform), Some(date), Some(time)) =
        (draft.platform, draft.scheduled_date, draft.scheduled_time)
    else {
        return Err(AppError::Validation(report.errors));
    };

    let posts = state.store.load().await?;

    let limit = validate::check_daily_limit(platform, date, &posts);
    if !limit.is_within_limit {
        return Err(AppError::Validation(vec![format!(
            "You can only schedule {} posts per day for {}",
            limit.max_limit,
            platform.label()
        )]));
    }

    let post = Post::new(platform, draft.caption, draft.media, date, time);

    let receipt = state.gateway.schedule_post(&post).await?;
    tracing::debug!(post_id = %receipt.post_id, "Gateway accepted post");

    let mut updated = posts;
    updated.push(post.clone());
    state.store.save(&updated).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        post,
        format!(
            "Your {} post has been scheduled successfully",
            platform.label()
        ),
    )))
}

/// GET /api/posts/daily-limit
///
/// Advisory probe so the creation form can render "N/3 used".
pub async fn daily_limit(
    state: web::Data<AppState>,
    query: web::Query<DailyLimitQuery>,
) -> AppResult<HttpResponse> {
    let platform: Platform = query.platform.parse()?;
    let date: NaiveDate = query
        .date
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid date: {}", query.date)))?;

    let posts = state.store.load().await?;
    let limit = validate::check_daily_limit(platform, date, &posts);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(limit)))
}

/// DELETE /api/posts/{id}
///
/// Removes one element and rewrites the whole sequence.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let posts = state.store.load().await?;

    let remaining: Vec<Post> = posts.iter().filter(|post| post.id != id).cloned().collect();
    if remaining.len() == posts.len() {
        return Err(DomainError::PostNotFound(id).into());
    }

    state.store.save(&remaining).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        (),
        "The scheduled post has been deleted successfully",
    )))
}

/// PUT /api/posts/{id}
///
/// Placeholder: editing is not implemented. Logs and resolves success
/// without touching the store.
pub async fn update(
    path: web::Path<Uuid>,
    body: web::Json<serde_json::Value>,
) -> AppResult<HttpResponse> {
    tracing::info!(
        post_id = %path.into_inner(),
        payload = %body.into_inner(),
        "Update post (placeholder)"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        (),
        "Editing will be available soon",
    )))
}

/// PUT /api/posts/{id}/reschedule
///
/// Placeholder: rescheduling is not implemented. Logs and resolves
/// success without touching the store.
pub async fn reschedule(
    path: web::Path<Uuid>,
    body: web::Json<RescheduleRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    tracing::info!(
        post_id = %path.into_inner(),
        date = %req.date,
        time = %req.time,
        "Reschedule post (placeholder)"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        (),
        "Reschedule functionality will be available soon",
    )))
}

fn to_draft(req: &CreatePostRequest) -> PostDraft {
    PostDraft {
        platform: req.platform.parse().ok(),
        caption: req.caption.clone(),
        media: req.media.clone().filter(|media| !media.is_empty()),
        scheduled_date: req.scheduled_date.parse().ok(),
        scheduled_time: parse_hhmm(&req.scheduled_time),
    }
}

fn parse_filter(query: &PostListQuery) -> AppResult<PostFilter> {
    let platform = match query.platform.as_deref() {
        None | Some("") | Some("all") => None,
        Some(name) => Some(name.parse::<Platform>()?),
    };
    let status = match query.status.as_deref() {
        None | Some("") | Some("all") => None,
        Some(name) => Some(name.parse::<PostStatus>()?),
    };

    Ok(PostFilter {
        query: query.query.clone().unwrap_or_default(),
        platform,
        status,
    })
}
