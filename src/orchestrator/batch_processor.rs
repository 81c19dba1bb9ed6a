//! 应用生命周期 - 编排层
//!
//! ## 核心功能
//!
//! 1. **示例模板**：输入文件不存在时写出示例模板并结束
//! 2. **加载**：读取评分表，格式错误直接终止
//! 3. **凭据**：批处理开始前解析一次，缺失直接终止
//! 4. **运行**：委托 batch_runner 顺序处理
//! 5. **导出**：写出追加了摘要列的表格

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::loaders::load_score_table_from_path;
use crate::models::record::ScoreTable;
use crate::orchestrator::batch_runner::{self, BatchEvent, BatchStats, ProgressSink};
use crate::services::{result_exporter, LlmService, PromptCompiler, SummaryGenerator, SummaryWriter};
use crate::utils::logging;
use crate::workflow::RecordState;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// 输入文件不存在，已写出示例模板
    TemplateWritten { path: PathBuf },
    /// 已生成并导出结果
    Generated { output_file: PathBuf, stats: BatchStats },
}

/// 应用主结构
pub struct App {
    config: Config,
    compiler: PromptCompiler,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        logging::log_startup(&config);
        Self {
            config,
            compiler: PromptCompiler::new(),
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<RunOutcome> {
        let input = Path::new(&self.config.input_file);
        if !input.exists() {
            return self.write_sample_template().await;
        }

        let table = self.load_table().await?;

        // 凭据在处理任何一行之前解析
        let service = LlmService::new(&self.config)?;

        self.generate_with(table, &service).await
    }

    /// 加载评分表
    pub async fn load_table(&self) -> AppResult<ScoreTable> {
        info!("\n📁 正在读取评分表...");
        let table = load_score_table_from_path(Path::new(&self.config.input_file)).await?;
        logging::log_table_loaded(&table);
        Ok(table)
    }

    /// 使用给定的生成能力处理整张表并导出
    pub async fn generate_with<G: SummaryGenerator + ?Sized>(
        &self,
        table: ScoreTable,
        generator: &G,
    ) -> AppResult<RunOutcome> {
        if table.is_empty() {
            warn!("⚠️ 评分表没有任何数据行");
        }

        let writer = SummaryWriter::with_path(&self.config.output_log_file);
        writer.init()?;

        let mut progress = TerminalProgress {
            writer: &writer,
            verbose: self.config.verbose_logging,
        };
        let report = batch_runner::run_batch(
            table,
            &self.compiler,
            generator,
            self.config.verbose_logging,
            &mut progress,
        )
        .await;

        let bytes = result_exporter::export(&report.table, &report.results())?;
        let output_file = PathBuf::from(&self.config.output_file);
        fs::write(&output_file, bytes)
            .await
            .map_err(|e| AppError::io(&self.config.output_file, e))?;

        logging::print_final_stats(&report.stats, &self.config.output_file, writer.path());

        Ok(RunOutcome::Generated {
            output_file,
            stats: report.stats,
        })
    }

    /// 写出示例模板
    async fn write_sample_template(&self) -> AppResult<RunOutcome> {
        let path = PathBuf::from(&self.config.sample_template_file);
        let bytes = result_exporter::sample_template()?;
        fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::io(&self.config.sample_template_file, e))?;

        warn!("⚠️ 未找到输入文件: {}", self.config.input_file);
        info!("📥 已写出示例模板: {}", path.display());
        info!("💡 按模板填写候选人数据后保存为 {} 再运行", self.config.input_file);

        Ok(RunOutcome::TemplateWritten { path })
    }
}

/// 终端进度：日志 + 摘要日志文件
struct TerminalProgress<'a> {
    writer: &'a SummaryWriter,
    verbose: bool,
}

impl ProgressSink for TerminalProgress<'_> {
    fn on_event(&mut self, event: &BatchEvent<'_>) {
        match event {
            BatchEvent::Started { total } => {
                info!("✨ 开始生成 {} 份摘要", total);
            }
            BatchEvent::RecordState {
                ctx,
                state: RecordState::Pending,
            } => logging::log_record_start(ctx),
            BatchEvent::RecordState { .. } => {}
            BatchEvent::RecordFinished { ctx, outcome } => {
                logging::log_summary(ctx, outcome.text(), self.verbose);
                if let Err(e) = self
                    .writer
                    .append(&ctx.name, ctx.position(), ctx.total, outcome.text())
                {
                    warn!("写入摘要日志失败: {}", e);
                }
            }
            BatchEvent::Finished { .. } => {
                info!("✅ All summaries generated!");
            }
        }
    }
}
