// ============================================================================
// FigArt - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 参数解析、日志初始化与退出码处理
// 边界:
//   - ✅ 日志初始化
//   - ✅ 错误输出与退出码
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use clap::Parser;

use figart::cli::{run_cli, Cli};
use figart::utils::logger::Logger;

fn main() {
    let cli = Cli::parse();
    Logger::init_tracing(cli.verbose);

    if let Err(e) = run_cli(cli) {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
