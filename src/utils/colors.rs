// ============================================================================
// FigArt - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 界面文本颜色格式化
// 边界:
//   - ✅ 日志级别颜色
//   - ✅ 列表 / 横幅颜色
//   - ❌ 不应包含配色方案数据
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use colored::{Color, Colorize};

/// 日志级别颜色主题
pub mod log_colors {
    use colored::Color;

    /// 错误日志颜色 (红色)
    pub const ERROR: Color = Color::Red;

    /// 成功日志颜色 (绿色)
    pub const SUCCESS: Color = Color::Green;
}

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 为文本添加颜色
    pub fn colorize(text: &str, color: Color) -> String {
        text.color(color).to_string()
    }

    /// 错误颜色
    pub fn error(text: &str) -> String {
        Self::colorize(text, log_colors::ERROR)
    }

    /// 成功颜色
    pub fn success(text: &str) -> String {
        Self::colorize(text, log_colors::SUCCESS)
    }

    /// 标题颜色
    pub fn heading(text: &str) -> String {
        Self::colorize(text, Color::Cyan)
    }

    /// 分类名称颜色
    pub fn category(text: &str) -> String {
        Self::colorize(text, Color::Blue)
    }

    /// 描述颜色
    pub fn description(text: &str) -> String {
        Self::colorize(text, Color::Yellow)
    }

    /// 高亮颜色
    pub fn highlight(text: &str) -> String {
        Self::colorize(text, Color::BrightWhite)
    }

    /// 次要文本颜色
    pub fn muted(text: &str) -> String {
        Self::colorize(text, Color::BrightBlack)
    }

    /// 横幅副标题颜色
    pub fn accent(text: &str) -> String {
        Self::colorize(text, Color::BrightYellow)
    }
}
