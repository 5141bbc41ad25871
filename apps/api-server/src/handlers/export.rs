//! Export handler - streams the spreadsheet download.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use chrono::Local;

use postline_infra::export::{ExportFormat, export_posts};
use postline_shared::dto::ExportQuery;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/export?format=xlsx|csv
///
/// Exports the full unfiltered store. The filename is stamped with the
/// export date, not any post's date.
pub async fn export(
    state: web::Data<AppState>,
    query: web::Query<ExportQuery>,
) -> AppResult<HttpResponse> {
    let format = match query.format.as_deref() {
        None | Some("") => ExportFormat::Workbook,
        Some(ext) => ExportFormat::from_extension(ext)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown export format: {ext}")))?,
    };

    let posts = state.store.load().await?;
    let file = export_posts(&posts, format, Local::now().date_naive())?;

    tracing::info!(filename = %file.filename, rows = posts.len(), "Export generated");

    Ok(HttpResponse::Ok()
        .content_type(file.content_type)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.filename),
        ))
        .body(file.bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use postline_infra::gateway::MockGateway;
    use postline_infra::store::MemoryStore;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_csv_export_carries_filename_and_header_row() {
        let state = AppState {
            store: Arc::new(MemoryStore::new()),
            gateway: Arc::new(MockGateway::new()),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/export?format=csv").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);

        let disposition = res
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("social-scheduler-posts-"));
        assert!(disposition.ends_with(".csv\""));

        let body = test::read_body(res).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with("Date & Time,Platform,Caption,Status"));
    }

    #[actix_web::test]
    async fn test_unknown_format_is_bad_request() {
        let state = AppState {
            store: Arc::new(MemoryStore::new()),
            gateway: Arc::new(MockGateway::new()),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/export?format=pdf").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 400);
    }
}
