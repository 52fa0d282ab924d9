//! 加权计分引擎
//!
//! `ScoreCalculator` 只负责从存储层读取表单结构和回答，运算在 `compute` 与 `summary` 中完成。

pub mod compute;
pub mod rounding;
pub mod summary;

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::debug;

use crate::errors::{MysteryShopperError, Result};
use crate::models::scoring::entities::{AnswerSheet, ModuleStructure};
use crate::models::scoring::responses::{ScoreReport, ScoreSummary};
use crate::storage::Storage;

#[derive(Clone)]
pub struct ScoreCalculator {
    storage: Arc<dyn Storage>,
}

impl ScoreCalculator {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 计算单次分配的得分报告，分配不存在时返回 NotFound
    pub async fn compute_scores(&self, assignment_id: i64) -> Result<ScoreReport> {
        let assignment = self
            .storage
            .get_assignment_by_id(assignment_id)
            .await?
            .ok_or_else(|| MysteryShopperError::not_found(format!("分配不存在: {assignment_id}")))?;

        let structure = self.load_form_structure(assignment.form_id).await?;

        let question_ids: Vec<i64> = structure
            .iter()
            .flat_map(|m| m.questions.iter().map(|q| q.id))
            .collect();
        let answers = self
            .storage
            .list_answers_for_questions(assignment_id, &question_ids)
            .await?;
        let sheet = AnswerSheet::from_records(answers);

        Ok(compute::score_assignment(assignment_id, &structure, &sheet))
    }

    /// 汇总多次分配，失败的分配直接跳过
    pub async fn summarize(&self, assignment_ids: &[i64]) -> ScoreSummary {
        let results = self.compute_many(assignment_ids).await;
        Self::summarize_results(assignment_ids, &results)
    }

    /// 汇总 `compute_many` 已经得到的结果，`results` 与 `assignment_ids` 一一对应
    pub fn summarize_results(
        assignment_ids: &[i64],
        results: &[Result<ScoreReport>],
    ) -> ScoreSummary {
        let reports: Vec<ScoreReport> = assignment_ids
            .iter()
            .zip(results)
            .filter_map(|(id, result)| match result {
                Ok(report) => Some(report.clone()),
                Err(e) => {
                    debug!("Skipping assignment {} in summary: {}", id, e);
                    None
                }
            })
            .collect();

        summary::summarize_reports(&reports)
    }

    /// 并发计算多次分配，结果与输入顺序一致
    pub async fn compute_many(&self, assignment_ids: &[i64]) -> Vec<Result<ScoreReport>> {
        join_all(assignment_ids.iter().map(|id| self.compute_scores(*id))).await
    }

    async fn load_form_structure(&self, form_id: i64) -> Result<Vec<ModuleStructure>> {
        let modules = self.storage.list_modules_by_form(form_id).await?;
        let mut structure = Vec::with_capacity(modules.len());
        for module in modules {
            let questions = self.storage.list_questions_by_module(module.id).await?;
            structure.push(ModuleStructure { module, questions });
        }
        Ok(structure)
    }
}
