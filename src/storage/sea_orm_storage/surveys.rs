//! 表单结构存储操作（模块与问题）

use super::SeaOrmStorage;
use crate::entity::forms::Entity as Forms;
use crate::entity::modules::{Column as ModuleColumn, Entity as Modules};
use crate::entity::questions::{Column as QuestionColumn, Entity as Questions};
use crate::errors::{MysteryShopperError, Result};
use crate::models::scoring::entities::{ScoringModule, ScoringQuestion};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 列出表单下的模块，按展示顺序排列
    pub async fn list_modules_by_form_impl(&self, form_id: i64) -> Result<Vec<ScoringModule>> {
        let modules = Modules::find()
            .filter(ModuleColumn::FormId.eq(form_id))
            .order_by_asc(ModuleColumn::DisplayOrder)
            .order_by_asc(ModuleColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| MysteryShopperError::database_operation(format!("查询模块列表失败: {e}")))?;

        Ok(modules.into_iter().map(|m| m.into_scoring_module()).collect())
    }

    /// 列出模块下的问题，按展示顺序排列
    pub async fn list_questions_by_module_impl(
        &self,
        module_id: i64,
    ) -> Result<Vec<ScoringQuestion>> {
        let questions = Questions::find()
            .filter(QuestionColumn::ModuleId.eq(module_id))
            .order_by_asc(QuestionColumn::DisplayOrder)
            .order_by_asc(QuestionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| MysteryShopperError::database_operation(format!("查询问题列表失败: {e}")))?;

        Ok(questions
            .into_iter()
            .map(|q| q.into_scoring_question())
            .collect())
    }

    /// 统计表单数量
    pub async fn count_forms_impl(&self) -> Result<u64> {
        Forms::find()
            .count(&self.db)
            .await
            .map_err(|e| MysteryShopperError::database_operation(format!("查询表单数量失败: {e}")))
    }
}
