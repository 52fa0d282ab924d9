//! 回答存储操作

use super::SeaOrmStorage;
use crate::entity::answers::{Column, Entity as Answers};
use crate::errors::{MysteryShopperError, Result};
use crate::models::scoring::entities::RecordedAnswer;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

impl SeaOrmStorage {
    /// 获取分配在指定问题上的回答记录
    pub async fn list_answers_for_questions_impl(
        &self,
        assignment_id: i64,
        question_ids: &[i64],
    ) -> Result<Vec<RecordedAnswer>> {
        if question_ids.is_empty() {
            return Ok(Vec::new());
        }

        let answers = Answers::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::QuestionId.is_in(question_ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| MysteryShopperError::database_operation(format!("查询回答失败: {e}")))?;

        Ok(answers
            .into_iter()
            .map(|a| a.into_recorded_answer())
            .collect())
    }
}
