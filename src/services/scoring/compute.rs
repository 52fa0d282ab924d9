//! 单次分配的加权计分
//!
//! 每一步都先保留一位小数再参与下一步运算，结果与先求和再取整不同。

use super::rounding::round1;
use crate::models::scoring::entities::{AnswerSheet, AnswerState, ModuleStructure};
use crate::models::scoring::responses::{ModuleScore, ScoreReport};

/// 总分上限
pub const MAX_TOTAL_SCORE: f64 = 100.0;

/// 计算单个模块的得分明细，归一化字段先按未归一化填写
pub fn score_module(structure: &ModuleStructure, sheet: &AnswerSheet) -> ModuleScore {
    let mut points_earned: i64 = 0;
    let mut points_possible: i64 = 0;
    let mut answered_count = 0u32;
    let mut not_applicable_count = 0u32;

    for question in &structure.questions {
        match sheet.state_of(question.id) {
            AnswerState::Unanswered => {}
            AnswerState::NotApplicable => not_applicable_count += 1,
            AnswerState::Answered(points) => {
                points_earned += i64::from(points);
                points_possible += i64::from(question.max_points);
                answered_count += 1;
            }
        }
    }

    let raw_percentage = if points_possible > 0 {
        points_earned as f64 / points_possible as f64 * 100.0
    } else {
        0.0
    };
    let weight = structure.module.weight;
    let weighted_score = round1(raw_percentage / 100.0 * weight);

    ModuleScore {
        module_id: structure.module.id,
        title: structure.module.title.clone(),
        weight,
        points_earned,
        points_possible,
        answered_count,
        not_applicable_count,
        question_count: structure.questions.len() as u32,
        percentage: round1(raw_percentage),
        weighted_score,
        normalized_weight: weight,
        normalized_weighted_score: weighted_score,
    }
}

/// 根据表单结构和回答计算完整的得分报告
pub fn score_assignment(
    assignment_id: i64,
    structure: &[ModuleStructure],
    sheet: &AnswerSheet,
) -> ScoreReport {
    let mut module_scores: Vec<ModuleScore> = structure
        .iter()
        .map(|module| score_module(module, sheet))
        .collect();

    // 只统计至少有一道题给出得分的模块
    let total_weight_used: f64 = module_scores
        .iter()
        .filter(|score| score.has_answers())
        .map(|score| score.weight)
        .sum();

    let total = if total_weight_used > 0.0 && total_weight_used < 100.0 {
        // 部分模块不适用，按已用权重放大到 100
        let factor = 100.0 / total_weight_used;
        let mut total = 0.0;
        for score in &mut module_scores {
            if score.has_answers() {
                score.normalized_weight = round1(score.weight * factor);
                score.normalized_weighted_score = round1(score.weighted_score * factor);
                total += score.normalized_weighted_score;
            } else {
                score.normalized_weight = 0.0;
                score.normalized_weighted_score = 0.0;
            }
        }
        total
    } else {
        module_scores.iter().map(|score| score.weighted_score).sum()
    };

    let total_weights = structure.iter().map(|m| m.module.weight).sum();

    ScoreReport {
        assignment_id,
        module_scores,
        total_score: round1(total).min(MAX_TOTAL_SCORE),
        total_weight_used,
        total_weights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scoring::entities::{RecordedAnswer, ScoringModule, ScoringQuestion};
    use proptest::prelude::*;

    // 构造模块：问题 ID 为 module_id * 100 + 序号
    fn module(id: i64, title: &str, weight: f64, max_points: &[i32]) -> ModuleStructure {
        ModuleStructure {
            module: ScoringModule {
                id,
                title: title.to_string(),
                weight,
            },
            questions: max_points
                .iter()
                .enumerate()
                .map(|(i, max)| ScoringQuestion {
                    id: id * 100 + i as i64,
                    max_points: *max,
                })
                .collect(),
        }
    }

    fn sheet(answers: &[(i64, Option<i32>)]) -> AnswerSheet {
        AnswerSheet::from_records(answers.iter().map(|(qid, points)| RecordedAnswer {
            question_id: *qid,
            points_earned: *points,
        }))
    }

    fn restaurant_form() -> Vec<ModuleStructure> {
        vec![
            module(1, "Baño", 30.0, &[10, 10, 10]),
            module(2, "Atención del personal", 40.0, &[10, 10, 10]),
            module(3, "Calidad de la comida", 30.0, &[10, 10, 10]),
        ]
    }

    #[test]
    fn test_bathroom_module_breakdown() {
        let form = restaurant_form();
        let answers = sheet(&[(100, Some(10)), (101, Some(10)), (102, Some(5))]);
        let score = score_module(&form[0], &answers);

        assert_eq!(score.points_earned, 25);
        assert_eq!(score.points_possible, 30);
        assert_eq!(score.answered_count, 3);
        assert_eq!(score.question_count, 3);
        assert_eq!(score.percentage, 83.3);
        assert_eq!(score.weighted_score, 25.0);
    }

    #[test]
    fn test_full_coverage_is_not_rescaled() {
        let form = restaurant_form();
        let answers = sheet(&[
            (100, Some(10)),
            (101, Some(10)),
            (102, Some(5)),
            (200, Some(10)),
            (201, Some(5)),
            (202, Some(0)),
            (300, Some(10)),
            (301, Some(10)),
            (302, Some(10)),
        ]);
        let report = score_assignment(7, &form, &answers);

        assert_eq!(report.assignment_id, 7);
        assert_eq!(report.total_weight_used, 100.0);
        assert_eq!(report.total_weights, 100.0);

        let weighted: Vec<f64> = report
            .module_scores
            .iter()
            .map(|s| s.weighted_score)
            .collect();
        assert_eq!(weighted, vec![25.0, 20.0, 30.0]);
        assert_eq!(report.total_score, 75.0);

        for score in &report.module_scores {
            assert_eq!(score.normalized_weight, score.weight);
            assert_eq!(score.normalized_weighted_score, score.weighted_score);
        }
    }

    #[test]
    fn test_total_equals_weighted_average_when_weights_sum_to_100() {
        let form = vec![
            module(1, "A", 25.0, &[10, 10]),
            module(2, "B", 75.0, &[4]),
        ];
        let answers = sheet(&[(100, Some(10)), (101, Some(6)), (200, Some(2))]);
        let report = score_assignment(1, &form, &answers);

        // 80% * 25 + 50% * 75 = 57.5
        assert_eq!(report.module_scores[0].percentage, 80.0);
        assert_eq!(report.module_scores[1].percentage, 50.0);
        assert_eq!(report.total_score, 57.5);
    }

    #[test]
    fn test_nothing_answered_scores_zero() {
        let form = restaurant_form();
        let answers = sheet(&[(100, None), (201, None)]);
        let report = score_assignment(1, &form, &answers);

        assert_eq!(report.total_score, 0.0);
        assert_eq!(report.total_weight_used, 0.0);
        assert_eq!(report.total_weights, 100.0);
        for score in &report.module_scores {
            assert_eq!(score.percentage, 0.0);
            assert_eq!(score.normalized_weighted_score, 0.0);
        }
    }

    #[test]
    fn test_total_is_clamped_to_100() {
        let form = vec![
            module(1, "A", 50.0, &[10]),
            module(2, "B", 50.0, &[10]),
            module(3, "C", 50.0, &[10]),
        ];
        let answers = sheet(&[(100, Some(10)), (200, Some(10)), (300, Some(10))]);
        let report = score_assignment(1, &form, &answers);

        assert_eq!(report.total_weight_used, 150.0);
        assert_eq!(report.total_weights, 150.0);
        assert_eq!(report.total_score, 100.0);
        assert_eq!(report.module_scores[2].normalized_weight, 50.0);
    }

    #[test]
    fn test_single_answered_module_is_rescaled_to_full_weight() {
        let form = vec![module(1, "A", 50.0, &[10, 10]), module(2, "B", 50.0, &[10])];
        let answers = sheet(&[(100, Some(10)), (101, Some(5))]);
        let report = score_assignment(1, &form, &answers);

        let answered = &report.module_scores[0];
        assert_eq!(answered.percentage, 75.0);
        assert_eq!(answered.weighted_score, 37.5);
        assert_eq!(answered.normalized_weight, 100.0);
        assert_eq!(answered.normalized_weighted_score, 75.0);

        let skipped = &report.module_scores[1];
        assert_eq!(skipped.normalized_weight, 0.0);
        assert_eq!(skipped.normalized_weighted_score, 0.0);

        assert_eq!(report.total_weight_used, 50.0);
        assert_eq!(report.total_score, answered.percentage);
    }

    #[test]
    fn test_not_applicable_is_counted_but_not_scored() {
        let form = vec![module(1, "A", 100.0, &[10, 10, 10])];

        let without = score_module(&form[0], &sheet(&[(100, Some(10)), (101, Some(0))]));
        let with = score_module(
            &form[0],
            &sheet(&[(100, Some(10)), (101, Some(0)), (102, None)]),
        );

        assert_eq!(with.not_applicable_count, without.not_applicable_count + 1);
        assert_eq!(with.answered_count, without.answered_count);
        assert_eq!(with.points_earned, without.points_earned);
        assert_eq!(with.points_possible, without.points_possible);
        assert_eq!(with.percentage, 50.0);
    }

    #[test]
    fn test_module_with_only_not_applicable_contributes_no_weight() {
        let form = vec![module(1, "A", 60.0, &[10]), module(2, "B", 40.0, &[10])];
        let answers = sheet(&[(100, None), (200, Some(10))]);
        let report = score_assignment(1, &form, &answers);

        assert_eq!(report.total_weight_used, 40.0);
        assert_eq!(report.module_scores[0].normalized_weight, 0.0);
        assert_eq!(report.module_scores[1].normalized_weight, 100.0);
        assert_eq!(report.total_score, 100.0);
    }

    #[test]
    fn test_rounding_is_applied_per_stage() {
        // 各模块 1/3 得分，放大前后逐步取整
        let form = vec![module(1, "A", 30.0, &[3]), module(2, "B", 30.0, &[3])];
        let answers = sheet(&[(100, Some(1)), (200, Some(1))]);
        let report = score_assignment(1, &form, &answers);

        let first = &report.module_scores[0];
        assert_eq!(first.percentage, 33.3);
        assert_eq!(first.weighted_score, 10.0);
        assert_eq!(first.normalized_weight, 50.0);
        assert_eq!(first.normalized_weighted_score, 16.7);
        assert_eq!(report.total_score, 33.4);
    }

    #[test]
    fn test_empty_form() {
        let report = score_assignment(3, &[], &AnswerSheet::default());
        assert!(report.module_scores.is_empty());
        assert_eq!(report.total_score, 0.0);
        assert_eq!(report.total_weights, 0.0);
    }

    #[test]
    fn test_module_without_questions() {
        let form = vec![module(1, "Vacío", 20.0, &[])];
        let report = score_assignment(1, &form, &AnswerSheet::default());
        assert_eq!(report.module_scores[0].question_count, 0);
        assert_eq!(report.module_scores[0].percentage, 0.0);
        assert_eq!(report.total_score, 0.0);
    }

    // 0: 未回答, 1: 不适用, 2: 已回答
    fn arb_module() -> impl Strategy<Value = (f64, Vec<(i32, u8, i32)>)> {
        (
            0.0f64..200.0,
            prop::collection::vec((1i32..20, 0u8..3, 0i32..20), 0..6),
        )
    }

    proptest! {
        #[test]
        fn prop_total_score_stays_within_bounds(
            modules in prop::collection::vec(arb_module(), 0..6)
        ) {
            let mut structure = Vec::new();
            let mut answers = Vec::new();
            for (mi, (weight, questions)) in modules.iter().enumerate() {
                let module_id = mi as i64 + 1;
                let maxes: Vec<i32> = questions.iter().map(|(max, _, _)| *max).collect();
                structure.push(module(module_id, "M", *weight, &maxes));
                for (qi, (max, kind, points)) in questions.iter().enumerate() {
                    let qid = module_id * 100 + qi as i64;
                    match kind {
                        1 => answers.push((qid, None)),
                        2 => answers.push((qid, Some(*points.min(max)))),
                        _ => {}
                    }
                }
            }

            let report = score_assignment(1, &structure, &sheet(&answers));
            prop_assert!(report.total_score >= 0.0);
            prop_assert!(report.total_score <= MAX_TOTAL_SCORE);
            for score in &report.module_scores {
                prop_assert!(score.percentage >= 0.0 && score.percentage <= 100.0);
                prop_assert!(score.answered_count + score.not_applicable_count <= score.question_count);
            }
        }
    }
}
