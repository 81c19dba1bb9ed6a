use crate::error::{AppError, AppResult, FormatError};
use crate::models::competency::{self, column_kind};
use crate::models::record::{CellValue, ScoreTable};
use calamine::{Data, Reader, Xlsx};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// 从 xlsx 字节流加载评分表
///
/// 读取第一个工作表，首行作为表头。不做结构校验：
/// 缺列、多列、越界分数都原样放行，只记录警告。
pub fn load_score_table(bytes: &[u8]) -> Result<ScoreTable, FormatError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(FormatError::NoWorksheet)??;

    // Range 从第一个非空单元格开始，左侧空列需要补回
    let lead = range.start().map_or(0, |(_, col)| col as usize);
    let pad = |row: &[Data]| -> Vec<Data> {
        std::iter::repeat(Data::Empty)
            .take(lead)
            .chain(row.iter().cloned())
            .collect()
    };

    let mut rows = range.rows();
    let header = rows.next().ok_or(FormatError::EmptySheet)?;
    let columns = header_names(&pad(header));

    let records: Vec<Vec<CellValue>> = rows
        .map(|row| pad(row).iter().map(to_cell).collect())
        .collect();

    debug!("读取到 {} 列, {} 行", columns.len(), records.len());

    let table = ScoreTable::from_rows(columns, records);
    report_anomalies(&table);

    Ok(table)
}

/// 从文件加载评分表
pub async fn load_score_table_from_path(path: &Path) -> AppResult<ScoreTable> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| AppError::io(path.display().to_string(), e))?;

    Ok(load_score_table(&bytes)?)
}

fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::Text(other.to_string()),
    }
}

/// 表头命名：空表头记为 `Unnamed: <列号>`，重名依次加 `.1`、`.2` 后缀
fn header_names(header: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let base = match to_cell(cell) {
                CellValue::Empty => format!("Unnamed: {}", idx),
                value => value.to_string(),
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}.{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

fn report_anomalies(table: &ScoreTable) {
    let missing = competency::missing_columns(table);
    if !missing.is_empty() {
        warn!("⚠️ 缺少 {} 个预期列: {}", missing.len(), missing.join(", "));
    }

    for (row_idx, record) in table.records().iter().enumerate() {
        for (column, value) in record.iter() {
            if !column_kind(column).is_some_and(|kind| kind.is_scored()) {
                continue;
            }
            match value.as_f64() {
                Some(score) if !competency::in_scale(score) => {
                    warn!("⚠️ 第 {} 行 {} 分数 {} 超出 1.0-5.0 范围", row_idx + 1, column, score);
                }
                None => {
                    warn!("⚠️ 第 {} 行 {} 不是数值: {}", row_idx + 1, column, value);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompt_compiler::compile;
    use crate::services::prompt_template::PROMPT_TEMPLATE;
    use crate::services::result_exporter::write_table;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn test_out_of_range_and_text_scores_pass_through() {
        let table = ScoreTable::from_rows(
            vec!["Name".to_string(), "Growth".to_string()],
            vec![
                vec!["Dipsy".into(), 7.5.into()],
                vec!["Po".into(), "N/A".into()],
            ],
        );
        let bytes = write_table(&table, "Sheet1").unwrap();

        let loaded = load_score_table(&bytes).unwrap();

        assert_eq!(loaded.records()[0].get("Growth"), Some(&CellValue::Number(7.5)));
        assert_eq!(loaded.records()[1].get("Growth"), Some(&CellValue::from("N/A")));
        assert!(compile(PROMPT_TEMPLATE, &loaded.records()[0]).contains("# Growth: 7.5\n"));
        assert!(compile(PROMPT_TEMPLATE, &loaded.records()[1]).contains("# Growth: N/A\n"));
    }

    #[test]
    fn test_leading_empty_column_is_kept() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 1, "Name").unwrap();
        sheet.write_string(0, 2, "Growth").unwrap();
        sheet.write_string(1, 1, "Po").unwrap();
        sheet.write_number(1, 2, 3.0).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let loaded = load_score_table(&bytes).unwrap();

        assert_eq!(loaded.columns(), ["Unnamed: 0", "Name", "Growth"]);
        assert_eq!(loaded.records()[0].get("Unnamed: 0"), Some(&CellValue::Empty));
        assert_eq!(loaded.records()[0].get("Growth"), Some(&CellValue::Number(3.0)));
    }

    #[test]
    fn test_garbage_bytes_are_a_format_error() {
        let result = load_score_table(b"definitely not a zip archive");
        assert!(matches!(result, Err(FormatError::Unreadable(_))));
    }

    #[test]
    fn test_header_names_dedupe_and_unnamed() {
        let header = vec![
            Data::String("Name".to_string()),
            Data::Empty,
            Data::String("Name".to_string()),
            Data::Float(2024.0),
        ];
        assert_eq!(
            header_names(&header),
            vec!["Name", "Unnamed: 1", "Name.1", "2024"]
        );
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(to_cell(&Data::Int(3)), CellValue::Number(3.0));
        assert_eq!(to_cell(&Data::Float(3.5)), CellValue::Number(3.5));
        assert_eq!(to_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(to_cell(&Data::String("F".to_string())), CellValue::from("F"));
    }
}
