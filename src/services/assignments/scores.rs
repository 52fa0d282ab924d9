use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_assignment_scores(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let calculator = service.get_calculator(request);

    match calculator.compute_scores(assignment_id).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(report, "获取得分成功"))),
        Err(e) if e.is_not_found() => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::AssignmentNotFound, "分配不存在"),
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("计算得分失败: {e}"),
            )),
        ),
    }
}
