use serde::Serialize;
use ts_rs::TS;

/// 健康检查响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String,                                 // ok / degraded
    pub timestamp: chrono::DateTime<chrono::Utc>,       // 当前时间
    pub database: String,                               // connected / unavailable
    pub uptime_seconds: i64,                            // 运行时长
    pub environment: String,                            // 运行环境
}
