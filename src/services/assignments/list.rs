use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::AssignmentService;
use crate::models::assignments::{
    requests::{AssignmentListParams, AssignmentListQuery},
    responses::{AssignmentListItem, AssignmentListResponse},
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    params: AssignmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let calculator = service.get_calculator(request);

    let page = match storage
        .list_assignments_with_pagination(AssignmentListQuery::from(params))
        .await
    {
        Ok(page) => page,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取分配列表失败: {e}"),
                )),
            );
        }
    };

    // 只有已提交及之后的状态才计分
    let scored_ids: Vec<i64> = page
        .items
        .iter()
        .filter(|a| a.status.is_scored())
        .map(|a| a.id)
        .collect();
    let mut totals = std::collections::HashMap::with_capacity(scored_ids.len());
    for (id, result) in scored_ids
        .iter()
        .zip(calculator.compute_many(&scored_ids).await)
    {
        match result {
            Ok(report) => {
                totals.insert(*id, report.total_score);
            }
            Err(e) => warn!("Failed to compute score for assignment {}: {}", id, e),
        }
    }

    let items = page
        .items
        .into_iter()
        .map(|assignment| AssignmentListItem {
            total_score: totals.get(&assignment.id).copied(),
            assignment,
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssignmentListResponse {
            items,
            pagination: page.pagination,
        },
        "获取分配列表成功",
    )))
}
