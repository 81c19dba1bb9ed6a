//! 评分表数据模型
//!
//! 按列名动态遍历，不固定候选人字段结构。

use std::fmt;

/// 单元格值
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// 数值形式（文本能解析为数字时也返回）
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 空单元格与表格读取库的缺失值写法一致
            CellValue::Empty => write!(f, "nan"),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// 候选人记录（表格中的一行）
///
/// 字段顺序即表头顺序。`Name` 只用于展示，不保证唯一。
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRecord {
    fields: Vec<(String, CellValue)>,
}

impl CandidateRecord {
    pub fn new(fields: Vec<(String, CellValue)>) -> Self {
        Self { fields }
    }

    /// 按列名取值
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// 按表头顺序遍历 (列名, 值)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 展示用名称，缺少 `Name` 列时退化为行号
    pub fn display_name(&self, index: usize) -> String {
        match self.get("Name") {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => format!("Row {}", index + 1),
        }
    }

    fn push(&mut self, column: String, value: CellValue) {
        self.fields.push((column, value));
    }
}

/// 评分表
///
/// 所有记录共享同一组列；整个会话只在结束时追加一列生成结果。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreTable {
    columns: Vec<String>,
    records: Vec<CandidateRecord>,
}

impl ScoreTable {
    /// 由表头和原始行构建，行宽不足时补空，超出部分丢弃
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let records = rows
            .into_iter()
            .map(|row| {
                let mut values = row.into_iter();
                let fields = columns
                    .iter()
                    .map(|column| (column.clone(), values.next().unwrap_or(CellValue::Empty)))
                    .collect();
                CandidateRecord::new(fields)
            })
            .collect();

        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// 追加一列
    ///
    /// 第 i 个值对应第 i 行；值不足的行补空，多余的值被忽略。
    pub fn append_column(&mut self, column: impl Into<String>, values: Vec<CellValue>) {
        let column = column.into();
        let mut values = values.into_iter();
        for record in &mut self.records {
            record.push(column.clone(), values.next().unwrap_or(CellValue::Empty));
        }
        self.columns.push(column);
    }

    /// 按列取出所有值
    pub fn column_values(&self, column: &str) -> Vec<&CellValue> {
        self.records
            .iter()
            .filter_map(|record| record.get(column))
            .collect()
    }
}
