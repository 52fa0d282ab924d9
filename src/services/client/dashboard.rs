use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClientService, zip_scores};
use crate::models::assignments::entities::Assignment;
use crate::models::client::{requests::ClientAssignmentQuery, responses::ClientDashboardResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::scoring::ScoreCalculator;

pub async fn get_dashboard(
    service: &ClientService,
    request: &HttpRequest,
    client_slug: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let calculator = service.get_calculator(request);

    let assignments = match storage
        .list_client_assignments(ClientAssignmentQuery::shared_with(client_slug.clone()))
        .await
    {
        Ok(assignments) => assignments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取客户看板失败: {e}"),
                )),
            );
        }
    };

    if assignments.is_empty() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClientDashboardNotFound,
            "没有已分享给该客户的评估",
        )));
    }

    // 每个分配只计算一次，汇总复用同一批结果
    let ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
    let results = calculator.compute_many(&ids).await;
    let summary = ScoreCalculator::summarize_results(&ids, &results);
    let dates = distinct_dates(&assignments);
    let assignments = zip_scores(assignments, results);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ClientDashboardResponse {
            client_slug,
            assignments,
            dates,
            summary,
        },
        "获取客户看板成功",
    )))
}

/// 分配创建日期去重，保持输入顺序
fn distinct_dates(assignments: &[Assignment]) -> Vec<String> {
    let mut dates: Vec<String> = Vec::new();
    for assignment in assignments {
        let date = assignment.created_at.format("%Y-%m-%d").to_string();
        if !dates.contains(&date) {
            dates.push(date);
        }
    }
    dates
}
