use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClientService, attach_scores};
use crate::models::client::{requests::ClientDataParams, responses::ClientDataResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_client_data(
    service: &ClientService,
    request: &HttpRequest,
    client_slug: String,
    params: ClientDataParams,
) -> ActixResult<HttpResponse> {
    let query = match params.into_query(client_slug) {
        Ok(query) => query,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("日期格式应为 YYYY-MM-DD: {e}"),
            )));
        }
    };

    let storage = service.get_storage(request);
    let calculator = service.get_calculator(request);

    match storage.list_client_assignments(query).await {
        Ok(assignments) => {
            let items = attach_scores(&calculator, assignments).await;
            let total = items.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ClientDataResponse { items, total },
                "获取客户数据成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取客户数据失败: {e}"),
            )),
        ),
    }
}
