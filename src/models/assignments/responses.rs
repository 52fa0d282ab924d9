use crate::models::assignments::entities::Assignment;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

/// 管理端列表项：分配本身加上总分
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    /// 未提交或计分失败时为 null
    #[serde(rename = "puntajeTotal")]
    pub total_score: Option<f64>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<AssignmentListItem>,
    pub pagination: PaginationInfo,
}

// 存储层返回的分页结果，计分由服务层补充
#[derive(Debug, Clone)]
pub struct AssignmentPage {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}
