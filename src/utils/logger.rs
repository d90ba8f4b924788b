// ============================================================================
// FigArt - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 用户可见状态输出与诊断日志初始化
// 边界:
//   - ✅ 错误消息格式化输出
//   - ✅ tracing 订阅器初始化
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//
// ============================================================================

use tracing_subscriber::EnvFilter;

use super::colors::Colors;

/// 诊断日志过滤环境变量
pub const LOG_ENV: &str = "FIGART_LOG";

/// 简单的日志工具
pub struct Logger;

impl Logger {
    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Colors::error("[ERROR]"), msg.as_ref());
    }

    /// 初始化 tracing 诊断日志（输出到 stderr）
    ///
    /// 优先读取 `FIGART_LOG`，否则 verbose 为 debug，默认 warn。
    pub fn init_tracing(verbose: bool) {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_target(false)
            .try_init();
    }
}
