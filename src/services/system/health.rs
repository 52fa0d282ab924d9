use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::error;

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, ErrorCode, system::responses::HealthResponse};

pub async fn health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let now = chrono::Utc::now();

    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| (now - start.start_datetime).num_seconds())
        .unwrap_or_default();

    match storage.ping().await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            HealthResponse {
                status: "ok".to_string(),
                timestamp: now,
                database: "connected".to_string(),
                uptime_seconds,
                environment: service.get_config().app.environment.clone(),
            },
            "服务运行正常",
        ))),
        Err(e) => {
            error!("Health check failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("数据库不可用: {e}"),
                )),
            )
        }
    }
}
