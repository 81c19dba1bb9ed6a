/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use crate::config::Config;
use crate::models::record::ScoreTable;
use crate::orchestrator::BatchStats;
use crate::workflow::RecordCtx;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认 `info`，详细模式为 `debug`。重复调用无副作用。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🏆 领导力评估摘要生成");
    info!("🤖 模型: {}", config.llm_model_name);
    info!("📂 输入: {}", config.input_file);
    info!("{}", "=".repeat(60));
}

/// 记录评分表加载信息，并预览前几行
pub fn log_table_loaded(table: &ScoreTable) {
    info!("✓ 文件加载成功: {} 行, {} 列", table.len(), table.columns().len());
    for (idx, record) in table.records().iter().take(5).enumerate() {
        info!("  {}. {}", idx + 1, record.display_name(idx));
    }
    if table.len() > 5 {
        info!("  ... 共 {} 行", table.len());
    }
}

/// 记录单行开始
pub fn log_record_start(ctx: &RecordCtx) {
    info!(
        "🔍 Analyzing {} ({}/{})... [{:.0}%]",
        ctx.name,
        ctx.position(),
        ctx.total,
        ctx.fraction() * 100.0
    );
}

/// 显示单行生成结果
pub fn log_summary(ctx: &RecordCtx, text: &str, verbose: bool) {
    info!("{}", "─".repeat(60));
    info!("📝 Generated Summary for {}", ctx.name);
    if verbose {
        info!("{}", text);
    } else {
        info!("{}", truncate_text(text, 200));
    }
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &BatchStats, output_file: &str, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.completed, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("⬇️ 结果已保存至: {}", output_file);
    info!("摘要日志: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("领导力评估", 2), "领导...");
    }
}
