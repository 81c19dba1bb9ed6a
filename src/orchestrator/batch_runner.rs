//! 批量记录处理器 - 编排层
//!
//! ## 职责
//!
//! 按表格顺序逐行处理：编译提示词 → 等待远程响应 → 收集结果 → 固定间隔后处理下一行。
//!
//! ## 设计特点
//!
//! - **严格顺序**：每次远程调用都在这里挂起等待，不并发
//! - **故障隔离**：单行失败只影响自己的结果文本
//! - **顺序保证**：第 i 个结果对应第 i 行
//! - **不可取消**：一旦开始只能等待完成

use crate::models::record::ScoreTable;
use crate::services::{PromptCompiler, SummaryGenerator};
use crate::workflow::{RecordCtx, RecordFlow, RecordOutcome, RecordState};
use std::time::Duration;
use tracing::info;

/// 两次请求之间的固定间隔
pub const REQUEST_DELAY: Duration = Duration::from_secs(2);

/// 批处理状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Running,
    Done,
}

/// 批处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
}

/// 进度事件
#[derive(Debug)]
pub enum BatchEvent<'a> {
    Started { total: usize },
    RecordState { ctx: &'a RecordCtx, state: RecordState },
    RecordFinished { ctx: &'a RecordCtx, outcome: &'a RecordOutcome },
    Finished { stats: &'a BatchStats },
}

/// 进度接收方（终端日志、测试记录等）
pub trait ProgressSink {
    fn on_event(&mut self, event: &BatchEvent<'_>);
}

/// 丢弃所有进度事件
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_event(&mut self, _event: &BatchEvent<'_>) {}
}

/// 批处理结果
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// 原始评分表
    pub table: ScoreTable,
    /// 与行一一对应的结果
    pub outcomes: Vec<RecordOutcome>,
    pub stats: BatchStats,
}

impl BatchReport {
    /// 结果列文本
    pub fn results(&self) -> Vec<String> {
        self.outcomes.iter().map(|o| o.text().to_string()).collect()
    }
}

/// 批量记录处理器
pub struct BatchRunner<'a, G: SummaryGenerator + ?Sized> {
    flow: RecordFlow<'a, G>,
    state: BatchState,
}

impl<'a, G: SummaryGenerator + ?Sized> BatchRunner<'a, G> {
    pub fn new(compiler: &'a PromptCompiler, generator: &'a G, verbose_logging: bool) -> Self {
        Self {
            flow: RecordFlow::new(compiler, generator, verbose_logging),
            state: BatchState::Idle,
        }
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    /// 顺序处理整张表，返回与行一一对应的结果
    pub async fn run(
        &mut self,
        table: &ScoreTable,
        sink: &mut dyn ProgressSink,
    ) -> (Vec<RecordOutcome>, BatchStats) {
        let total = table.len();
        let mut outcomes = Vec::with_capacity(total);
        let mut stats = BatchStats {
            total,
            ..Default::default()
        };

        self.state = BatchState::Running;
        sink.on_event(&BatchEvent::Started { total });

        for (index, record) in table.records().iter().enumerate() {
            let ctx = RecordCtx::new(index, total, record.display_name(index));
            sink.on_event(&BatchEvent::RecordState {
                ctx: &ctx,
                state: RecordState::Pending,
            });

            let outcome = self
                .flow
                .run(record, &ctx, |state| {
                    sink.on_event(&BatchEvent::RecordState { ctx: &ctx, state })
                })
                .await;

            if outcome.is_failed() {
                stats.failed += 1;
            } else {
                stats.completed += 1;
            }
            sink.on_event(&BatchEvent::RecordFinished {
                ctx: &ctx,
                outcome: &outcome,
            });
            outcomes.push(outcome);

            tokio::time::sleep(REQUEST_DELAY).await;
        }

        self.state = BatchState::Done;
        info!("✅ 批处理完成: 成功 {}/{}", stats.completed, stats.total);
        sink.on_event(&BatchEvent::Finished { stats: &stats });

        (outcomes, stats)
    }
}

/// 处理整张表并返回报告
pub async fn run_batch<G: SummaryGenerator + ?Sized>(
    table: ScoreTable,
    compiler: &PromptCompiler,
    generator: &G,
    verbose_logging: bool,
    sink: &mut dyn ProgressSink,
) -> BatchReport {
    let mut runner = BatchRunner::new(compiler, generator, verbose_logging);
    let (outcomes, stats) = runner.run(&table, sink).await;

    BatchReport {
        table,
        outcomes,
        stats,
    }
}
