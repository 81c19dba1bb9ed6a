//! # Leadership Summary
//!
//! 读取候选人测评分数表，逐行生成领导力潜力评估摘要，并导出为新的表格
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `ScoreTable` / `CandidateRecord`，维度目录与分档规则
//! - `models/loaders` - xlsx 评分表加载
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 只处理单条记录或单张表
//! - `PromptCompiler` - 记录代入固定模板
//! - `LlmService` - 远程文本生成
//! - `result_exporter` - 追加摘要列并导出 xlsx
//! - `SummaryWriter` - 逐条写摘要日志
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一行"的完整处理流程
//! - `RecordCtx` - 上下文封装（行号 + 总数 + 名称）
//! - `RecordFlow` - 流程编排（compile → generate → outcome）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_runner` - 顺序遍历整张表，固定间隔，进度事件
//! - `orchestrator/batch_processor` - 应用生命周期（加载 → 凭据 → 运行 → 导出）
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{CandidateRecord, CellValue, ScoreTable};
pub use orchestrator::{run_batch, App, RunOutcome};
pub use services::{LlmService, PromptCompiler, SummaryGenerator};
pub use workflow::{RecordCtx, RecordFlow, RecordOutcome, RecordState};
