//! 结果导出 - 业务能力层
//!
//! 把追加了摘要列的评分表编码为 xlsx，另外提供示例模板表格

use crate::error::ExportError;
use crate::models::record::{CellValue, ScoreTable};
use crate::models::worked_examples;
use rust_xlsxwriter::{Format, Workbook};
use tracing::warn;

/// 结果工作表名称
pub const RESULTS_SHEET: &str = "Results_v11";
/// 追加的摘要列表头
pub const SUMMARY_COLUMN: &str = "Generated Summary (v11)";
/// 示例模板工作表名称
pub const SAMPLE_SHEET: &str = "Candidates";
/// Excel 单元格字符串上限（字符数）
pub const CELL_TEXT_LIMIT: usize = 32_767;

/// 导出结果表格
///
/// `results[i]` 写入第 i 行的摘要列，原有列和行序不变。
pub fn export(table: &ScoreTable, results: &[String]) -> Result<Vec<u8>, ExportError> {
    let mut augmented = table.clone();
    augmented.append_column(
        SUMMARY_COLUMN,
        results.iter().cloned().map(CellValue::Text).collect(),
    );
    write_table(&augmented, RESULTS_SHEET)
}

/// 示例模板：预期表头加一行示例数据
pub fn sample_template() -> Result<Vec<u8>, ExportError> {
    let table = worked_examples::table_of(&[worked_examples::TINKY_WINKY]);
    write_table(&table, SAMPLE_SHEET)
}

/// 将评分表写为单工作表 xlsx，首行加粗表头，不写行索引
pub fn write_table(table: &ScoreTable, sheet_name: &str) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, column) in table.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, column, &header_format)?;
    }

    for (row_idx, record) in table.records().iter().enumerate() {
        let row = row_idx as u32 + 1;
        for (col, (column, value)) in record.iter().enumerate() {
            let col = col as u16;
            match value {
                CellValue::Empty => {}
                CellValue::Text(s) if s.chars().count() > CELL_TEXT_LIMIT => {
                    warn!(
                        "⚠️ 第 {} 行 \"{}\" 列超过 {} 字符，已截断",
                        row_idx + 1,
                        column,
                        CELL_TEXT_LIMIT
                    );
                    let truncated: String = s.chars().take(CELL_TEXT_LIMIT).collect();
                    worksheet.write_string(row, col, &truncated)?;
                }
                CellValue::Text(s) => {
                    worksheet.write_string(row, col, s)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(row, col, *n)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row, col, *b)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
