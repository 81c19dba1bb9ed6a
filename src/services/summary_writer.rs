//! 摘要日志写入服务 - 业务能力层
//!
//! 逐条追加生成结果，批处理进行中即可查看

use crate::error::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::debug;

/// 摘要日志写入服务
///
/// 职责：
/// - 新建日志文件并写入带时间戳的表头
/// - 每条记录完成后追加其摘要或错误文本
pub struct SummaryWriter {
    log_file_path: String,
}

impl SummaryWriter {
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            log_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.log_file_path
    }

    /// 初始化日志文件（覆盖旧内容）
    pub fn init(&self) -> AppResult<()> {
        let log_header = format!(
            "{}\nLeadership summary log - {}\n{}\n\n",
            "=".repeat(60),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );
        fs::write(&self.log_file_path, log_header).map_err(|e| AppError::io(&self.log_file_path, e))
    }

    /// 追加一条摘要
    pub fn append(&self, name: &str, index: usize, total: usize, text: &str) -> AppResult<()> {
        debug!("写入摘要: {} ({}/{}) | 长度: {}", name, index, total, text.len());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)
            .map_err(|e| AppError::io(&self.log_file_path, e))?;

        let entry = format!(
            "Generated Summary for {} ({}/{})\n{}\n{}\n\n",
            name,
            index,
            total,
            "-".repeat(60),
            text
        );

        file.write_all(entry.as_bytes())
            .map_err(|e| AppError::io(&self.log_file_path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_then_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summaries.txt");
        let writer = SummaryWriter::with_path(path.display().to_string());

        writer.init().unwrap();
        writer.append("Dipsy", 1, 2, "first").unwrap();
        writer.append("Po", 2, 2, "second").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&"=".repeat(60)));
        let first = content.find("Generated Summary for Dipsy (1/2)").unwrap();
        let second = content.find("Generated Summary for Po (2/2)").unwrap();
        assert!(first < second);
        assert!(content.contains("second"));
    }

    #[test]
    fn test_init_truncates_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summaries.txt");
        let writer = SummaryWriter::with_path(path.display().to_string());

        writer.init().unwrap();
        writer.append("Old", 1, 1, "stale").unwrap();
        writer.init().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
    }
}
