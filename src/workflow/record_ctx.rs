//! 记录处理上下文
//!
//! 封装"我正在处理第几行、是谁"这一信息

use std::fmt::Display;

/// 记录处理上下文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCtx {
    /// 行索引（从0开始，与结果顺序一致）
    pub index: usize,

    /// 记录总数
    pub total: usize,

    /// 展示用名称（不保证唯一）
    pub name: String,
}

impl RecordCtx {
    pub fn new(index: usize, total: usize, name: String) -> Self {
        Self { index, total, name }
    }

    /// 从1开始的序号，用于进度显示
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// 完成比例
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position() as f64 / self.total as f64
    }
}

impl Display for RecordCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {}/{}]", self.name, self.position(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_and_fraction() {
        let ctx = RecordCtx::new(1, 4, "Po".to_string());
        assert_eq!(ctx.position(), 2);
        assert_eq!(ctx.fraction(), 0.5);
        assert_eq!(ctx.to_string(), "[Po 2/4]");
    }
}
