//! 测评维度目录与分档规则

use crate::models::record::{CandidateRecord, ScoreTable};
use phf::phf_map;
use std::fmt;

/// 评分下限
pub const SCORE_MIN: f64 = 1.0;
/// 评分上限
pub const SCORE_MAX: f64 = 5.0;
/// High 档下限
pub const HIGH_MIN: f64 = 3.5;
/// Moderate 档下限
pub const MODERATE_MIN: f64 = 2.5;
/// 优势阈值（含）
pub const STRENGTH_MIN: f64 = 4.0;
/// 待发展阈值（含）
pub const DEVELOPMENT_MAX: f64 = 2.0;

/// 输入表头，按模板要求的顺序
pub const EXPECTED_COLUMNS: [&str; 34] = [
    "Name",
    "Gender",
    "Overall Leadership",
    "Reasoning & Problem Solving",
    "Drive Potential",
    "Contribution",
    "Purpose",
    "Achievement",
    "Learning Potential",
    "Mastery",
    "Growth",
    "Insightful",
    "People Potential",
    "Collaboration",
    "Empathy",
    "Sociable",
    "Strategic Potential",
    "Awareness",
    "Autonomy",
    "Perspective",
    "Execution Potential",
    "Resourcefulness",
    "Efficacy",
    "Resilience",
    "Change Potential",
    "Agility",
    "Ambiguity",
    "Venturesome",
    "Steers Changes",
    "Manages Stakeholders",
    "Drives Results",
    "Thinks Strategically",
    "Solves Challenges",
    "Develops Talent",
];

/// 列的类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// 姓名、性别
    Identity,
    /// 核心能力
    CoreCompetency,
    /// 商业模拟（BS）能力
    BusinessSimulation,
    /// 成长指数（TI）潜力
    ThrivingIndexPotential,
    /// 潜力下属因子
    Factor,
}

impl ColumnKind {
    /// 是否为评分列
    pub fn is_scored(self) -> bool {
        !matches!(self, ColumnKind::Identity)
    }

    /// 词典中是否有对应的行为描述
    pub fn has_dictionary_entry(self) -> bool {
        matches!(
            self,
            ColumnKind::CoreCompetency
                | ColumnKind::BusinessSimulation
                | ColumnKind::ThrivingIndexPotential
        )
    }
}

static COLUMN_KINDS: phf::Map<&'static str, ColumnKind> = phf_map! {
    "Name" => ColumnKind::Identity,
    "Gender" => ColumnKind::Identity,
    "Overall Leadership" => ColumnKind::CoreCompetency,
    "Reasoning & Problem Solving" => ColumnKind::CoreCompetency,
    "Drive Potential" => ColumnKind::ThrivingIndexPotential,
    "Contribution" => ColumnKind::Factor,
    "Purpose" => ColumnKind::Factor,
    "Achievement" => ColumnKind::Factor,
    "Learning Potential" => ColumnKind::ThrivingIndexPotential,
    "Mastery" => ColumnKind::Factor,
    "Growth" => ColumnKind::Factor,
    "Insightful" => ColumnKind::Factor,
    "People Potential" => ColumnKind::ThrivingIndexPotential,
    "Collaboration" => ColumnKind::Factor,
    "Empathy" => ColumnKind::Factor,
    "Sociable" => ColumnKind::Factor,
    "Strategic Potential" => ColumnKind::ThrivingIndexPotential,
    "Awareness" => ColumnKind::Factor,
    "Autonomy" => ColumnKind::Factor,
    "Perspective" => ColumnKind::Factor,
    "Execution Potential" => ColumnKind::ThrivingIndexPotential,
    "Resourcefulness" => ColumnKind::Factor,
    "Efficacy" => ColumnKind::Factor,
    "Resilience" => ColumnKind::Factor,
    "Change Potential" => ColumnKind::ThrivingIndexPotential,
    "Agility" => ColumnKind::Factor,
    "Ambiguity" => ColumnKind::Factor,
    "Venturesome" => ColumnKind::Factor,
    "Steers Changes" => ColumnKind::BusinessSimulation,
    "Manages Stakeholders" => ColumnKind::BusinessSimulation,
    "Drives Results" => ColumnKind::BusinessSimulation,
    "Thinks Strategically" => ColumnKind::BusinessSimulation,
    "Solves Challenges" => ColumnKind::BusinessSimulation,
    "Develops Talent" => ColumnKind::BusinessSimulation,
};

/// 查询列类别，未知列返回 `None`
pub fn column_kind(column: &str) -> Option<ColumnKind> {
    COLUMN_KINDS.get(column).copied()
}

/// 分档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    High,
    Moderate,
    Low,
}

impl ScoreBand {
    /// 按固定阈值分档：High ≥ 3.5，Moderate ≥ 2.5，其余为 Low
    pub fn classify(score: f64) -> Self {
        if score >= HIGH_MIN {
            ScoreBand::High
        } else if score >= MODERATE_MIN {
            ScoreBand::Moderate
        } else {
            ScoreBand::Low
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreBand::High => "High",
            ScoreBand::Moderate => "Moderate",
            ScoreBand::Low => "Low",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn is_strength(score: f64) -> bool {
    score >= STRENGTH_MIN
}

pub fn is_development_area(score: f64) -> bool {
    score <= DEVELOPMENT_MAX
}

pub fn in_scale(score: f64) -> bool {
    (SCORE_MIN..=SCORE_MAX).contains(&score)
}

/// 一条记录的分档概览（仅用于详细日志）
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BandProfile {
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    /// 有词典条目的维度及其分档
    pub bands: Vec<(String, ScoreBand)>,
}

impl BandProfile {
    pub fn of(record: &CandidateRecord) -> Self {
        let mut profile = BandProfile::default();

        for (column, value) in record.iter() {
            let Some(kind) = column_kind(column) else {
                continue;
            };
            if !kind.is_scored() {
                continue;
            }
            let Some(score) = value.as_f64() else {
                continue;
            };

            if kind.has_dictionary_entry() {
                profile.bands.push((column.to_string(), ScoreBand::classify(score)));
            }
            if is_strength(score) {
                profile.strengths.push(column.to_string());
            } else if is_development_area(score) {
                profile.development_areas.push(column.to_string());
            }
        }

        profile
    }
}

/// 表中缺失的预期列
pub fn missing_columns(table: &ScoreTable) -> Vec<&'static str> {
    EXPECTED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !table.has_column(column))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::CellValue;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(ScoreBand::classify(5.0), ScoreBand::High);
        assert_eq!(ScoreBand::classify(3.5), ScoreBand::High);
        assert_eq!(ScoreBand::classify(3.49), ScoreBand::Moderate);
        assert_eq!(ScoreBand::classify(2.5), ScoreBand::Moderate);
        assert_eq!(ScoreBand::classify(2.49), ScoreBand::Low);
        assert_eq!(ScoreBand::classify(1.0), ScoreBand::Low);
    }

    #[test]
    fn test_strength_and_development_cutoffs() {
        assert!(is_strength(4.0));
        assert!(!is_strength(3.99));
        assert!(is_development_area(2.0));
        assert!(!is_development_area(2.01));
    }

    #[test]
    fn test_every_expected_column_has_a_kind() {
        for column in EXPECTED_COLUMNS {
            assert!(column_kind(column).is_some(), "{}", column);
        }
        assert_eq!(COLUMN_KINDS.len(), EXPECTED_COLUMNS.len());
        assert_eq!(column_kind("Unknown"), None);
    }

    #[test]
    fn test_band_profile() {
        let record = CandidateRecord::new(vec![
            ("Name".to_string(), CellValue::from("Po")),
            ("Drive Potential".to_string(), CellValue::Number(3.0)),
            ("Sociable".to_string(), CellValue::Number(1.0)),
            ("Steers Changes".to_string(), CellValue::Number(4.0)),
            ("Extra".to_string(), CellValue::Number(5.0)),
        ]);

        let profile = BandProfile::of(&record);
        assert_eq!(profile.strengths, vec!["Steers Changes"]);
        assert_eq!(profile.development_areas, vec!["Sociable"]);
        assert_eq!(
            profile.bands,
            vec![
                ("Drive Potential".to_string(), ScoreBand::Moderate),
                ("Steers Changes".to_string(), ScoreBand::High),
            ]
        );
    }

    #[test]
    fn test_missing_columns() {
        let table = ScoreTable::from_rows(vec!["Name".to_string(), "Gender".to_string()], vec![]);
        let missing = missing_columns(&table);
        assert_eq!(missing.len(), 32);
        assert!(!missing.contains(&"Name"));
        assert!(missing.contains(&"Develops Talent"));
    }
}
