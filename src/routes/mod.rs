pub mod assignments;

pub mod client;

pub mod system;

pub use assignments::configure_assignments_routes;
pub use client::configure_client_routes;
pub use system::configure_system_routes;

use actix_web::HttpResponse;

use crate::models::{ApiResponse, ErrorCode};

/// 未匹配任何路由时的兜底响应
pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, "接口不存在"))
}
