pub mod llm_service;
pub mod prompt_compiler;
pub mod prompt_template;
pub mod result_exporter;
pub mod summary_writer;

pub use llm_service::{LlmService, SummaryGenerator};
pub use prompt_compiler::PromptCompiler;
pub use summary_writer::SummaryWriter;
