//! 提示词编译 - 业务能力层
//!
//! 只负责"一行数据 → 一段提示词"，纯函数，没有失败分支。

use crate::models::record::CandidateRecord;
use crate::services::prompt_template::{PLACEHOLDER, PROMPT_TEMPLATE};

/// 候选人数据块的首行
pub const SCORES_HEADER: &str = "# INPUT SCORES:";

/// 把记录序列化为 `# <列名>: <值>` 行块，顺序同表头
pub fn candidate_block(record: &CandidateRecord) -> String {
    let mut block = String::with_capacity(32 * record.len());
    block.push_str(SCORES_HEADER);
    block.push('\n');
    for (column, value) in record.iter() {
        block.push_str(&format!("# {}: {}\n", column, value));
    }
    block
}

/// 将记录代入模板
///
/// 只替换占位符，模板其余内容保持不变。
pub fn compile(template: &str, record: &CandidateRecord) -> String {
    template.replacen(PLACEHOLDER, &candidate_block(record), 1)
}

/// 提示词编译器
#[derive(Debug, Clone, Copy)]
pub struct PromptCompiler {
    template: &'static str,
}

impl PromptCompiler {
    /// 使用内置模板
    pub fn new() -> Self {
        Self {
            template: PROMPT_TEMPLATE,
        }
    }

    pub fn with_template(template: &'static str) -> Self {
        Self { template }
    }

    pub fn compile(&self, record: &CandidateRecord) -> String {
        compile(self.template, record)
    }
}

impl Default for PromptCompiler {
    fn default() -> Self {
        Self::new()
    }
}
