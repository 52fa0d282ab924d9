//! 数据模型定义
//!
//! - `assignments`: 分配及其工作流状态
//! - `scoring`: 计分引擎的输入结构与输出报告
//! - `client`: 客户看板
//! - `system`: 健康检查

pub mod assignments;
pub mod client;
pub mod common;
pub mod scoring;
pub mod system;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误码，写入 `ApiResponse.code`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 1000,
    NotFound = 1004,
    AssignmentNotFound = 3001,
    ClientDashboardNotFound = 3101,
    InternalServerError = 5000,
}

/// 程序启动时间，用于健康检查中的运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
