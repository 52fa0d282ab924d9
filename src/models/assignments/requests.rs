use crate::models::assignments::entities::AssignmentStatus;
use crate::models::common::pagination::{PaginationQuery, deserialize_optional_i64};
use serde::Deserialize;
use ts_rs::TS;

/// 管理端分配列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<AssignmentStatus>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub form_id: Option<i64>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct AssignmentListQuery {
    pub page: u64,
    pub size: u64,
    pub status: Option<AssignmentStatus>,
    pub form_id: Option<i64>,
}

impl From<AssignmentListParams> for AssignmentListQuery {
    fn from(params: AssignmentListParams) -> Self {
        let (page, size) = params.pagination.normalized();
        Self {
            page,
            size,
            status: params.status,
            form_id: params.form_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_into_query() {
        let params: AssignmentListParams =
            serde_json::from_str(r#"{"page":"2","size":"500","status":"APROBADO","form_id":"3"}"#).unwrap();
        let query = AssignmentListQuery::from(params);
        assert_eq!(query.page, 2);
        assert_eq!(query.size, 100);
        assert_eq!(query.status, Some(AssignmentStatus::Approved));
        assert_eq!(query.form_id, Some(3));
    }
}
