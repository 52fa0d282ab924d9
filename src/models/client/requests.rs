use crate::errors::Result;
use crate::models::assignments::entities::AssignmentStatus;
use chrono::{Days, NaiveDate};
use serde::Deserialize;
use ts_rs::TS;

/// 客户数据查询参数（HTTP 请求），日期格式为 YYYY-MM-DD，两端都包含
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/client.ts")]
pub struct ClientDataParams {
    pub status: Option<AssignmentStatus>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

// 用于存储层的内部查询参数，时间为 unix 秒，区间左闭右开
#[derive(Debug, Clone, Default)]
pub struct ClientAssignmentQuery {
    pub client_slug: String,
    pub status: Option<AssignmentStatus>,
    pub created_from: Option<i64>,
    pub created_before: Option<i64>,
}

impl ClientAssignmentQuery {
    /// 客户看板只展示已分享给客户的分配
    pub fn shared_with(client_slug: impl Into<String>) -> Self {
        Self {
            client_slug: client_slug.into(),
            status: Some(AssignmentStatus::SharedWithClient),
            ..Default::default()
        }
    }
}

impl ClientDataParams {
    /// 转换为存储层查询，日期结束边界换算为次日零点
    pub fn into_query(self, client_slug: impl Into<String>) -> Result<ClientAssignmentQuery> {
        let created_from = self
            .date_from
            .as_deref()
            .map(|s| parse_date(s).map(start_of_day))
            .transpose()?;
        let created_before = self
            .date_to
            .as_deref()
            .map(|s| parse_date(s).map(start_of_next_day))
            .transpose()?;

        Ok(ClientAssignmentQuery {
            client_slug: client_slug.into(),
            status: self.status,
            created_from,
            created_before,
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?)
}

fn start_of_day(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}

fn start_of_next_day(date: NaiveDate) -> i64 {
    start_of_day(date.checked_add_days(Days::new(1)).unwrap_or(date))
}
