//! 计分引擎的输入结构
//!
//! 这些类型由 Storage 层从数据库实体转换而来，计分逻辑只依赖它们。

use std::collections::HashMap;

/// 单个问题在某次分配中的回答状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    /// 没有回答记录
    Unanswered,
    /// 有记录但得分为空，表示该问题不适用
    NotApplicable,
    /// 有记录且有得分
    Answered(i32),
}

impl AnswerState {
    /// 把一条已存在的回答记录的得分列转换为回答状态
    pub fn from_points(points_earned: Option<i32>) -> Self {
        match points_earned {
            Some(points) => AnswerState::Answered(points),
            None => AnswerState::NotApplicable,
        }
    }
}

/// 数据库中的一条回答记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedAnswer {
    pub question_id: i64,
    pub points_earned: Option<i32>,
}

/// 一次分配的全部回答，按问题 ID 索引
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    answers: HashMap<i64, AnswerState>,
}

impl AnswerSheet {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RecordedAnswer>,
    {
        let answers = records
            .into_iter()
            .map(|r| (r.question_id, AnswerState::from_points(r.points_earned)))
            .collect();
        Self { answers }
    }

    /// 查询某个问题的回答状态，没有记录即为未回答
    pub fn state_of(&self, question_id: i64) -> AnswerState {
        self.answers
            .get(&question_id)
            .copied()
            .unwrap_or(AnswerState::Unanswered)
    }
}

/// 计分用的模块定义
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringModule {
    pub id: i64,
    pub title: String,
    pub weight: f64,
}

/// 计分用的问题定义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringQuestion {
    pub id: i64,
    pub max_points: i32,
}

/// 模块及其问题（均按展示顺序）
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleStructure {
    pub module: ScoringModule,
    pub questions: Vec<ScoringQuestion>,
}
