//! 计分报告
//!
//! JSON 字段名沿用客户看板已经在用的西语字段。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 单个模块的得分明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ModuleScore {
    #[serde(rename = "moduloId")]
    pub module_id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "puntosObtenidos")]
    pub points_earned: i64,
    #[serde(rename = "puntosMaximos")]
    pub points_possible: i64,
    #[serde(rename = "preguntasRespondidas")]
    pub answered_count: u32,
    #[serde(rename = "preguntasNA")]
    pub not_applicable_count: u32,
    #[serde(rename = "preguntasTotal")]
    pub question_count: u32,
    #[serde(rename = "porcentaje")]
    pub percentage: f64,
    #[serde(rename = "puntajeConPeso")]
    pub weighted_score: f64,
    #[serde(rename = "pesoNormalizado")]
    pub normalized_weight: f64,
    #[serde(rename = "puntajeConPesoNormalizado")]
    pub normalized_weighted_score: f64,
}

impl ModuleScore {
    /// 至少有一个问题给出了实际得分
    pub fn has_answers(&self) -> bool {
        self.answered_count > 0
    }
}

/// 一次分配的得分报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ScoreReport {
    #[serde(rename = "asignacionId")]
    pub assignment_id: i64,
    #[serde(rename = "moduleScores")]
    pub module_scores: Vec<ModuleScore>,
    #[serde(rename = "puntajeTotal")]
    pub total_score: f64,
    #[serde(rename = "totalWeightUsed")]
    pub total_weight_used: f64,
    #[serde(rename = "pesosTotales")]
    pub total_weights: f64,
}

/// 跨分配的模块平均分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ModuleAverage {
    #[serde(rename = "moduloId")]
    pub module_id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "promedio")]
    pub average: f64,
}

/// 总分分布（四档）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ScoreDistribution {
    #[serde(rename = "excelente")]
    pub excellent: u32,
    #[serde(rename = "bueno")]
    pub good: u32,
    #[serde(rename = "regular")]
    pub fair: u32,
    #[serde(rename = "malo")]
    pub poor: u32,
}

impl ScoreDistribution {
    pub fn total(&self) -> u32 {
        self.excellent + self.good + self.fair + self.poor
    }
}

/// 多次分配的汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ScoreSummary {
    #[serde(rename = "promedioTotal")]
    pub average_total: f64,
    #[serde(rename = "promediosPorModulo")]
    pub module_averages: Vec<ModuleAverage>,
    #[serde(rename = "distribucion")]
    pub distribution: ScoreDistribution,
    #[serde(rename = "totalEvaluaciones")]
    pub evaluation_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_default_wire_shape() {
        let value = serde_json::to_value(ScoreSummary::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "promedioTotal": 0.0,
                "promediosPorModulo": [],
                "distribucion": {"excelente": 0, "bueno": 0, "regular": 0, "malo": 0},
                "totalEvaluaciones": 0
            })
        );
    }

    #[test]
    fn test_module_score_field_names() {
        let score = ModuleScore {
            module_id: 1,
            title: "Baño".to_string(),
            weight: 30.0,
            points_earned: 25,
            points_possible: 30,
            answered_count: 3,
            not_applicable_count: 0,
            question_count: 3,
            percentage: 83.3,
            weighted_score: 25.0,
            normalized_weight: 30.0,
            normalized_weighted_score: 25.0,
        };
        let value = serde_json::to_value(&score).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "moduloId",
            "titulo",
            "peso",
            "puntosObtenidos",
            "puntosMaximos",
            "preguntasRespondidas",
            "preguntasNA",
            "preguntasTotal",
            "porcentaje",
            "puntajeConPeso",
            "pesoNormalizado",
            "puntajeConPesoNormalizado",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 12);
    }
}
