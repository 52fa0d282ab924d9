use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::client::requests::ClientDataParams;
use crate::services::ClientService;
use crate::utils::SafeSlug;

// 懒加载的全局 ClientService 实例
static CLIENT_SERVICE: Lazy<ClientService> = Lazy::new(ClientService::new_lazy);

// 客户看板
pub async fn get_dashboard(req: HttpRequest, slug: SafeSlug) -> ActixResult<HttpResponse> {
    CLIENT_SERVICE.get_dashboard(&req, slug.0).await
}

// 客户数据
pub async fn get_client_data(
    req: HttpRequest,
    slug: SafeSlug,
    query: web::Query<ClientDataParams>,
) -> ActixResult<HttpResponse> {
    CLIENT_SERVICE
        .get_client_data(&req, slug.0, query.into_inner())
        .await
}

// 配置路由
pub fn configure_client_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/client")
            .route("/{slug}", web::get().to(get_dashboard))
            .route("/{slug}/data", web::get().to(get_client_data)),
    );
}
