//! 多次分配的汇总

use super::rounding::round1;
use crate::models::scoring::responses::{
    ModuleAverage, ScoreDistribution, ScoreReport, ScoreSummary,
};

pub const EXCELLENT_THRESHOLD: f64 = 90.0;
pub const GOOD_THRESHOLD: f64 = 70.0;
pub const FAIR_THRESHOLD: f64 = 50.0;

impl ScoreDistribution {
    /// 把一个总分计入对应档位
    pub fn record(&mut self, total_score: f64) {
        if total_score >= EXCELLENT_THRESHOLD {
            self.excellent += 1;
        } else if total_score >= GOOD_THRESHOLD {
            self.good += 1;
        } else if total_score >= FAIR_THRESHOLD {
            self.fair += 1;
        } else {
            self.poor += 1;
        }
    }
}

struct ModuleAccumulator {
    module_id: i64,
    title: String,
    sum: f64,
    count: u32,
}

/// 汇总已经算好的报告，空输入返回全零结果
pub fn summarize_reports(reports: &[ScoreReport]) -> ScoreSummary {
    if reports.is_empty() {
        return ScoreSummary::default();
    }

    let count = reports.len();
    let average_total =
        reports.iter().map(|r| r.total_score).sum::<f64>() / count as f64;

    // 按模块 ID 分组，保留首次出现的顺序和标题
    let mut groups: Vec<ModuleAccumulator> = Vec::new();
    for score in reports.iter().flat_map(|r| &r.module_scores) {
        match groups.iter_mut().find(|g| g.module_id == score.module_id) {
            Some(group) => {
                group.sum += score.percentage;
                group.count += 1;
            }
            None => groups.push(ModuleAccumulator {
                module_id: score.module_id,
                title: score.title.clone(),
                sum: score.percentage,
                count: 1,
            }),
        }
    }

    let module_averages = groups
        .into_iter()
        .map(|g| ModuleAverage {
            module_id: g.module_id,
            title: g.title,
            average: round1(g.sum / f64::from(g.count)),
        })
        .collect();

    let mut distribution = ScoreDistribution::default();
    for report in reports {
        distribution.record(report.total_score);
    }

    ScoreSummary {
        average_total: round1(average_total),
        module_averages,
        distribution,
        evaluation_count: count as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scoring::responses::ModuleScore;

    fn module_score(module_id: i64, title: &str, percentage: f64) -> ModuleScore {
        ModuleScore {
            module_id,
            title: title.to_string(),
            weight: 50.0,
            points_earned: 0,
            points_possible: 0,
            answered_count: 1,
            not_applicable_count: 0,
            question_count: 1,
            percentage,
            weighted_score: 0.0,
            normalized_weight: 50.0,
            normalized_weighted_score: 0.0,
        }
    }

    fn report(id: i64, total: f64, modules: Vec<ModuleScore>) -> ScoreReport {
        ScoreReport {
            assignment_id: id,
            module_scores: modules,
            total_score: total,
            total_weight_used: 100.0,
            total_weights: 100.0,
        }
    }

    #[test]
    fn test_empty_reports_give_default() {
        let summary = summarize_reports(&[]);
        assert_eq!(summary, ScoreSummary::default());
        assert_eq!(summary.distribution.total(), 0);
        assert_eq!(summary.evaluation_count, 0);
    }

    #[test]
    fn test_bucket_boundaries() {
        let cases = [
            (90.0, ScoreDistribution { excellent: 1, ..Default::default() }),
            (89.9, ScoreDistribution { good: 1, ..Default::default() }),
            (70.0, ScoreDistribution { good: 1, ..Default::default() }),
            (69.9, ScoreDistribution { fair: 1, ..Default::default() }),
            (50.0, ScoreDistribution { fair: 1, ..Default::default() }),
            (49.9, ScoreDistribution { poor: 1, ..Default::default() }),
            (100.0, ScoreDistribution { excellent: 1, ..Default::default() }),
            (0.0, ScoreDistribution { poor: 1, ..Default::default() }),
        ];
        for (total, expected) in cases {
            let mut distribution = ScoreDistribution::default();
            distribution.record(total);
            assert_eq!(distribution, expected, "total = {total}");
        }
    }

    #[test]
    fn test_average_and_module_grouping() {
        let reports = vec![
            report(
                1,
                80.0,
                vec![module_score(1, "Baño", 100.0), module_score(2, "Atención", 60.0)],
            ),
            report(
                2,
                65.0,
                vec![module_score(2, "Atención renombrada", 70.0), module_score(1, "Baño", 55.0)],
            ),
            report(3, 91.0, vec![module_score(3, "Comida", 33.3)]),
        ];
        let summary = summarize_reports(&reports);

        // (80 + 65 + 91) / 3 = 78.666...
        assert_eq!(summary.average_total, 78.7);
        assert_eq!(summary.evaluation_count, 3);

        let ids: Vec<i64> = summary.module_averages.iter().map(|m| m.module_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(summary.module_averages[0].average, 77.5);
        assert_eq!(summary.module_averages[1].title, "Atención");
        assert_eq!(summary.module_averages[1].average, 65.0);
        assert_eq!(summary.module_averages[2].average, 33.3);

        assert_eq!(
            summary.distribution,
            ScoreDistribution {
                excellent: 1,
                good: 1,
                fair: 1,
                poor: 0
            }
        );
        assert_eq!(summary.distribution.total(), summary.evaluation_count);
    }
}
