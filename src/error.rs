// ============================================================================
// FigArt - 错误类型
// ============================================================================
//
// 文件: src/error.rs
// 职责: 统一的错误类型定义
// 边界:
//   - ✅ 错误分类枚举
//   - ✅ 错误信息格式化
//   - ❌ 不应包含错误恢复逻辑
//   - ❌ 不应包含日志输出
//
// ============================================================================

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// FigArt 错误类型
#[derive(Debug, Error)]
pub enum ArtError {
    /// 非交互模式下未提供文本
    #[error("No text provided in non-interactive mode")]
    NoText,

    /// 输出文件写入失败
    #[error("Error saving to file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 标准输入读取失败
    #[error("Error reading input: {0}")]
    ReadInput(#[source] io::Error),

    /// 标准输入已关闭
    #[error("Error reading input: input stream closed")]
    InputClosed,

    /// 字体渲染失败
    #[error("Failed to render text with font '{font}': {reason}")]
    Render { font: String, reason: String },

    /// 选择重试次数耗尽
    #[error("No valid {what} selected")]
    SelectionExhausted { what: &'static str },

    /// 终端输出失败
    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),

    /// 配置文件无效
    #[error("Invalid config file {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

pub type ArtResult<T> = Result<T, ArtError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(_: &str) -> ArtResult<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))?;
        Ok(())
    }

    #[test]
    fn test_io_error_becomes_output() {
        let err = emit("art").unwrap_err();
        assert!(matches!(err, ArtError::Output(_)));
        assert_eq!(err.to_string(), "Error writing output: pipe closed");
    }
}
