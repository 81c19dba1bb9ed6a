//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 应用生命周期
//! - 加载评分表（格式错误直接终止）
//! - 解析凭据（缺失直接终止，一行都不处理）
//! - 运行批处理并导出结果
//!
//! ### `batch_runner` - 批量记录处理器
//! - 顺序遍历 `ScoreTable` 的每一行
//! - 委托 `RecordFlow` 处理单行
//! - 固定间隔、进度事件、统计
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (App)
//!     ↓
//! batch_runner (处理 ScoreTable)
//!     ↓
//! workflow::RecordFlow (处理单个 CandidateRecord)
//!     ↓
//! services (能力层：compiler / llm / exporter / summary_writer)
//! ```

pub mod batch_processor;
pub mod batch_runner;

pub use batch_processor::{App, RunOutcome};
pub use batch_runner::{
    run_batch, BatchEvent, BatchReport, BatchRunner, BatchState, BatchStats, NoProgress,
    ProgressSink, REQUEST_DELAY,
};
