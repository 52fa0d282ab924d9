use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分配状态（状态流转由问卷系统负责，这里只读）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentStatus {
    #[serde(rename = "BORRADOR")]
    Draft, // 草稿
    #[serde(rename = "ENVIADO")]
    Submitted, // 已提交
    #[serde(rename = "EN_REVISION")]
    InReview, // 审核中
    #[serde(rename = "NECESITA_REVISION")]
    NeedsRevision, // 退回修改
    #[serde(rename = "APROBADO")]
    Approved, // 已通过
    #[serde(rename = "LISTO_PARA_COMPARTIR")]
    ReadyToShare, // 待分享
    #[serde(rename = "COMPARTIDO_CON_CLIENTE")]
    SharedWithClient, // 已分享给客户
}

impl AssignmentStatus {
    pub const DRAFT: &'static str = "BORRADOR";
    pub const SUBMITTED: &'static str = "ENVIADO";
    pub const IN_REVIEW: &'static str = "EN_REVISION";
    pub const NEEDS_REVISION: &'static str = "NECESITA_REVISION";
    pub const APPROVED: &'static str = "APROBADO";
    pub const READY_TO_SHARE: &'static str = "LISTO_PARA_COMPARTIR";
    pub const SHARED_WITH_CLIENT: &'static str = "COMPARTIDO_CON_CLIENTE";

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Draft => Self::DRAFT,
            AssignmentStatus::Submitted => Self::SUBMITTED,
            AssignmentStatus::InReview => Self::IN_REVIEW,
            AssignmentStatus::NeedsRevision => Self::NEEDS_REVISION,
            AssignmentStatus::Approved => Self::APPROVED,
            AssignmentStatus::ReadyToShare => Self::READY_TO_SHARE,
            AssignmentStatus::SharedWithClient => Self::SHARED_WITH_CLIENT,
        }
    }

    /// 管理端列表中需要附带总分的状态
    pub fn scored_statuses() -> &'static [AssignmentStatus] {
        &[
            AssignmentStatus::Submitted,
            AssignmentStatus::InReview,
            AssignmentStatus::Approved,
            AssignmentStatus::ReadyToShare,
            AssignmentStatus::SharedWithClient,
        ]
    }

    pub fn is_scored(&self) -> bool {
        Self::scored_statuses().contains(self)
    }
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的分配状态: '{s}'. 支持的状态: BORRADOR, ENVIADO, EN_REVISION, \
                 NECESITA_REVISION, APROBADO, LISTO_PARA_COMPARTIR, COMPARTIDO_CON_CLIENTE"
            ))
        })
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AssignmentStatus::DRAFT => Ok(AssignmentStatus::Draft),
            AssignmentStatus::SUBMITTED => Ok(AssignmentStatus::Submitted),
            AssignmentStatus::IN_REVIEW => Ok(AssignmentStatus::InReview),
            AssignmentStatus::NEEDS_REVISION => Ok(AssignmentStatus::NeedsRevision),
            AssignmentStatus::APPROVED => Ok(AssignmentStatus::Approved),
            AssignmentStatus::READY_TO_SHARE => Ok(AssignmentStatus::ReadyToShare),
            AssignmentStatus::SHARED_WITH_CLIENT => Ok(AssignmentStatus::SharedWithClient),
            _ => Err(format!("Invalid assignment status: {s}")),
        }
    }
}

// 分配实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub form_id: i64,
    pub shopper_email: String,
    pub shopper_slug: String,
    pub client_slug: Option<String>,
    pub status: AssignmentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
