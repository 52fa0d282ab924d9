pub mod dashboard;
pub mod data;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::warn;

use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::client::{requests::ClientDataParams, responses::ScoredAssignment};
use crate::models::scoring::responses::ScoreReport;
use crate::services::scoring::ScoreCalculator;
use crate::storage::Storage;

pub struct ClientService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClientService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_calculator(&self, request: &HttpRequest) -> ScoreCalculator {
        ScoreCalculator::new(self.get_storage(request))
    }

    // 客户看板
    pub async fn get_dashboard(
        &self,
        request: &HttpRequest,
        client_slug: String,
    ) -> ActixResult<HttpResponse> {
        dashboard::get_dashboard(self, request, client_slug).await
    }

    // 客户数据（可按状态和日期筛选）
    pub async fn get_client_data(
        &self,
        request: &HttpRequest,
        client_slug: String,
        params: ClientDataParams,
    ) -> ActixResult<HttpResponse> {
        data::get_client_data(self, request, client_slug, params).await
    }
}

/// 为每个分配附上得分报告，计分失败的记为 None
pub(crate) async fn attach_scores(
    calculator: &ScoreCalculator,
    assignments: Vec<Assignment>,
) -> Vec<ScoredAssignment> {
    let ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
    let results = calculator.compute_many(&ids).await;
    zip_scores(assignments, results)
}

/// 按顺序把计分结果配对到分配上
pub(crate) fn zip_scores(
    assignments: Vec<Assignment>,
    results: Vec<Result<ScoreReport>>,
) -> Vec<ScoredAssignment> {
    assignments
        .into_iter()
        .zip(results)
        .map(|(assignment, result)| {
            let scores = match result {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!("Failed to compute score for assignment {}: {}", assignment.id, e);
                    None
                }
            };
            ScoredAssignment { assignment, scores }
        })
        .collect()
}
