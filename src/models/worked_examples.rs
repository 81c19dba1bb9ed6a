//! 模板中三个示例候选人的原始评分
//!
//! 用于生成示例模板表格，也便于核对编译结果。

use crate::models::competency::EXPECTED_COLUMNS;
use crate::models::record::{CandidateRecord, CellValue, ScoreTable};

/// 示例候选人
#[derive(Debug, Clone, Copy)]
pub struct WorkedExample {
    pub name: &'static str,
    pub gender: &'static str,
    /// 按 `EXPECTED_COLUMNS[2..]` 的顺序排列
    pub scores: [f64; 32],
}

pub const DIPSY: WorkedExample = WorkedExample {
    name: "Dipsy",
    gender: "M",
    scores: [
        4.0, 3.0, 4.0, 3.0, 4.0, 4.0, 3.0, 3.0, 2.0, 4.0, 4.0, 3.0, 4.0, 4.0, 3.0, 2.0, 3.0, 3.0,
        3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0, 2.0, 3.0, 4.0, 3.0, 2.0, 3.0, 4.0,
    ],
};

pub const PO: WorkedExample = WorkedExample {
    name: "Po",
    gender: "M",
    scores: [
        3.0, 2.0, 3.0, 2.0, 4.0, 2.0, 4.0, 3.0, 4.0, 4.0, 2.0, 3.0, 2.0, 1.0, 3.0, 3.0, 4.0, 3.0,
        4.0, 3.0, 4.0, 4.0, 3.0, 2.0, 3.0, 3.0, 4.0, 2.0, 3.0, 4.0, 2.0, 4.0,
    ],
};

pub const TINKY_WINKY: WorkedExample = WorkedExample {
    name: "Tinky Winky",
    gender: "F",
    scores: [
        2.0, 3.0, 1.0, 2.0, 1.0, 1.0, 2.0, 3.0, 2.0, 2.0, 4.0, 3.0, 4.0, 4.0, 2.0, 3.0, 2.0, 2.0,
        3.0, 3.0, 3.0, 2.0, 2.0, 1.0, 2.0, 2.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0,
    ],
};

pub const ALL: [WorkedExample; 3] = [DIPSY, PO, TINKY_WINKY];

impl WorkedExample {
    /// 一行单元格，顺序与 `EXPECTED_COLUMNS` 一致
    pub fn row(&self) -> Vec<CellValue> {
        let mut row = vec![CellValue::from(self.name), CellValue::from(self.gender)];
        row.extend(self.scores.iter().map(|&score| CellValue::Number(score)));
        row
    }

    pub fn to_record(&self) -> CandidateRecord {
        let fields = EXPECTED_COLUMNS
            .iter()
            .map(|column| column.to_string())
            .zip(self.row())
            .collect();
        CandidateRecord::new(fields)
    }
}

/// 由若干示例组成的评分表
pub fn table_of(examples: &[WorkedExample]) -> ScoreTable {
    ScoreTable::from_rows(
        EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        examples.iter().map(WorkedExample::row).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_matches_template_input_line() {
        let record = DIPSY.to_record();
        assert_eq!(record.len(), EXPECTED_COLUMNS.len());
        assert_eq!(record.get("Name"), Some(&CellValue::from("Dipsy")));
        assert_eq!(record.get("Venturesome"), Some(&CellValue::Number(2.0)));
        assert_eq!(record.get("Develops Talent"), Some(&CellValue::Number(4.0)));
    }

    #[test]
    fn test_table_of_all_examples() {
        let table = table_of(&ALL);
        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[2].get("Name"), Some(&CellValue::from("Tinky Winky")));
        assert_eq!(table.records()[1].get("Sociable"), Some(&CellValue::Number(1.0)));
    }
}
