//! 记录处理流程 - 流程层
//!
//! 核心职责：定义"一行"的完整处理流程
//!
//! 状态顺序：
//! Pending → Compiling → AwaitingResponse → Completed | Failed

use tracing::{debug, warn};

use crate::models::competency::BandProfile;
use crate::models::record::CandidateRecord;
use crate::services::{PromptCompiler, SummaryGenerator};
use crate::workflow::record_ctx::RecordCtx;

/// 单条记录的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    Pending,
    Compiling,
    AwaitingResponse,
    Completed,
    Failed,
}

impl RecordState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RecordState::Completed | RecordState::Failed)
    }
}

/// 单条记录的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// 生成成功
    Completed { text: String },
    /// 调用失败，`text` 为可导出的错误说明
    Failed { text: String },
}

impl RecordOutcome {
    /// 写入结果列的文本（成功或错误都一样导出）
    pub fn text(&self) -> &str {
        match self {
            RecordOutcome::Completed { text } | RecordOutcome::Failed { text } => text,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RecordOutcome::Failed { .. })
    }

    pub fn state(&self) -> RecordState {
        match self {
            RecordOutcome::Completed { .. } => RecordState::Completed,
            RecordOutcome::Failed { .. } => RecordState::Failed,
        }
    }
}

/// 记录处理流程
///
/// - 编排 编译 → 调用 → 收集 的过程
/// - 调用失败就地转为错误文本，不向上传播
/// - 不持有任何资源，只借用编译器和生成能力
pub struct RecordFlow<'a, G: SummaryGenerator + ?Sized> {
    compiler: &'a PromptCompiler,
    generator: &'a G,
    verbose_logging: bool,
}

impl<'a, G: SummaryGenerator + ?Sized> RecordFlow<'a, G> {
    pub fn new(compiler: &'a PromptCompiler, generator: &'a G, verbose_logging: bool) -> Self {
        Self {
            compiler,
            generator,
            verbose_logging,
        }
    }

    /// 处理一条记录
    ///
    /// `on_state` 在每次状态切换时被调用。
    pub async fn run(
        &self,
        record: &CandidateRecord,
        ctx: &RecordCtx,
        mut on_state: impl FnMut(RecordState),
    ) -> RecordOutcome {
        if self.verbose_logging {
            self.log_profile(ctx, record);
        }

        on_state(RecordState::Compiling);
        let prompt = self.compiler.compile(record);
        debug!("{} 提示词长度: {} 字符", ctx, prompt.len());

        on_state(RecordState::AwaitingResponse);
        let outcome = match self.generator.generate(&prompt).await {
            Ok(text) => RecordOutcome::Completed { text },
            Err(e) => {
                warn!("{} ❌ 生成失败: {}", ctx, e);
                RecordOutcome::Failed {
                    text: format!("Error generating summary for {}: {}", ctx.name, e),
                }
            }
        };

        on_state(outcome.state());
        outcome
    }

    fn log_profile(&self, ctx: &RecordCtx, record: &CandidateRecord) {
        let profile = BandProfile::of(record);
        for (column, band) in &profile.bands {
            debug!("{}   {}: {}", ctx, column, band);
        }
        debug!("{} 优势候选: {}", ctx, profile.strengths.join(", "));
        debug!("{} 待发展候选: {}", ctx, profile.development_areas.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::models::worked_examples;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl SummaryGenerator for Echo {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            Ok(format!("len={}", prompt.len()))
        }
    }

    struct AlwaysEmpty;

    #[async_trait]
    impl SummaryGenerator for AlwaysEmpty {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::EmptyContent {
                model: "test-model".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_success_walks_all_states() {
        let compiler = PromptCompiler::new();
        let flow = RecordFlow::new(&compiler, &Echo, true);
        let record = worked_examples::DIPSY.to_record();
        let ctx = RecordCtx::new(0, 1, "Dipsy".to_string());

        let mut states = Vec::new();
        let outcome = flow.run(&record, &ctx, |s| states.push(s)).await;

        let expected_len = compiler.compile(&record).len();
        assert_eq!(outcome, RecordOutcome::Completed { text: format!("len={}", expected_len) });
        assert_eq!(
            states,
            vec![RecordState::Compiling, RecordState::AwaitingResponse, RecordState::Completed]
        );
    }

    #[tokio::test]
    async fn test_failure_becomes_error_text() {
        let compiler = PromptCompiler::new();
        let flow = RecordFlow::new(&compiler, &AlwaysEmpty, false);
        let record = worked_examples::PO.to_record();
        let ctx = RecordCtx::new(0, 1, "Po".to_string());

        let mut last = RecordState::Pending;
        let outcome = flow.run(&record, &ctx, |s| last = s).await;

        assert!(outcome.is_failed());
        assert_eq!(last, RecordState::Failed);
        assert!(last.is_terminal());
        assert_eq!(
            outcome.text(),
            "Error generating summary for Po: model test-model returned no text"
        );
    }
}
