//! Platform connection handlers - mock gateway passthrough.

use actix_web::{HttpResponse, web};

use postline_core::domain::Platform;
use postline_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/platforms/status
pub async fn status(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let status = state.gateway.platform_status().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(status)))
}

/// POST /api/platforms/{platform}/connect
pub async fn connect(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let platform: Platform = path.into_inner().parse()?;
    let receipt = state.gateway.connect(platform).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(receipt)))
}

/// POST /api/platforms/{platform}/disconnect
pub async fn disconnect(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let platform: Platform = path.into_inner().parse()?;
    state.gateway.disconnect(platform).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        (),
        format!("{} disconnected", platform.label()),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use postline_infra::gateway::MockGateway;
    use postline_infra::store::MemoryStore;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_connect_rejects_platform_outside_the_set() {
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

        let req = test::TestRequest::post()
            .uri("/api/platforms/myspace/connect")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 400);

        let req = test::TestRequest::post()
            .uri("/api/platforms/linkedin/connect")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["data"]["authUrl"],
            "https://oauth.linkedin.com/authorize"
        );
    }
}
