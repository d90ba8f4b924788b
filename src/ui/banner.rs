// ============================================================================
// FigArt - 欢迎横幅
// ============================================================================
//
// 文件: src/ui/banner.rs
// 职责: 启动欢迎横幅显示
// 边界:
//   - ✅ 横幅艺术字渲染
//   - ✅ 副标题边框格式化
//   - ❌ 不应包含交互逻辑
//
// ============================================================================

use std::io::{self, Write};

use crate::core::FontEngine;
use crate::utils::colors::Colors;
use crate::utils::constants::{banner, prompts};

/// 输出欢迎横幅
///
/// 横幅字体渲染失败时退回纯文本标题。
pub fn print_welcome_banner<E: FontEngine, W: Write>(engine: &E, out: &mut W) -> io::Result<()> {
    let title = engine
        .render(banner::TITLE, banner::FONT)
        .unwrap_or_else(|e| {
            tracing::warn!("banner render failed: {}", e);
            banner::TITLE.to_string()
        });

    writeln!(out, "{}", Colors::heading(&title))?;
    writeln!(
        out,
        "{}",
        Colors::accent(&banner::FRAME_TOP.replace("{}", banner::SUBTITLE))
    )?;
    writeln!(out, "{}", Colors::accent(banner::FRAME_BOTTOM))?;
    writeln!(out)?;
    writeln!(out, "{}", prompts::QUIT_HINT)?;
    writeln!(out)?;
    out.flush()
}
