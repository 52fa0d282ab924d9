use crate::models::assignments::entities::Assignment;
use crate::models::scoring::responses::{ScoreReport, ScoreSummary};
use serde::Serialize;
use ts_rs::TS;

/// 分配及其得分报告，计分失败时报告为 null
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/client.ts")]
pub struct ScoredAssignment {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub scores: Option<ScoreReport>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/client.ts")]
pub struct ClientDashboardResponse {
    pub client_slug: String,
    pub assignments: Vec<ScoredAssignment>,
    /// 评估日期（YYYY-MM-DD），去重，最新在前
    #[serde(rename = "fechas")]
    pub dates: Vec<String>,
    pub summary: ScoreSummary,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/client.ts")]
pub struct ClientDataResponse {
    pub items: Vec<ScoredAssignment>,
    pub total: i64,
}
