use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment, requests::AssignmentListQuery, responses::AssignmentPage,
    },
    client::requests::ClientAssignmentQuery,
    scoring::entities::{RecordedAnswer, ScoringModule, ScoringQuestion},
};

use crate::errors::Result;

#[cfg(test)]
pub(crate) mod memory;
pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 计分所需的只读查询
    // 通过ID获取分配
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 列出表单下的模块（按展示顺序）
    async fn list_modules_by_form(&self, form_id: i64) -> Result<Vec<ScoringModule>>;
    // 列出模块下的问题（按展示顺序）
    async fn list_questions_by_module(&self, module_id: i64) -> Result<Vec<ScoringQuestion>>;
    // 列出分配在指定问题上的回答记录
    async fn list_answers_for_questions(
        &self,
        assignment_id: i64,
        question_ids: &[i64],
    ) -> Result<Vec<RecordedAnswer>>;

    /// 分配列表
    // 管理端分页列出分配（最新在前）
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentPage>;
    // 列出某个客户的分配（最新在前）
    async fn list_client_assignments(&self, query: ClientAssignmentQuery)
    -> Result<Vec<Assignment>>;

    /// 系统
    // 数据库连通性检查
    async fn ping(&self) -> Result<()>;
    // 表单数量，用于判断是否需要写入演示数据
    async fn count_forms(&self) -> Result<u64>;
    // 写入演示表单与分配
    async fn seed_demo_data(&self) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
