// ============================================================================
// FigArt - 配色数据模型
// ============================================================================
//
// 文件: src/models/color.rs
// 职责: 颜色标记与三色配色方案定义
// 边界:
//   - ✅ 颜色标记枚举
//   - ✅ 单行文本着色
//   - ✅ 配色方案结构
//   - ❌ 不应包含多行着色逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use colored::{Color, Colorize};

/// 终端颜色标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl ColorToken {
    /// 对应的 colored 颜色
    pub fn color(&self) -> Color {
        match self {
            ColorToken::Black => Color::Black,
            ColorToken::Red => Color::Red,
            ColorToken::Green => Color::Green,
            ColorToken::Yellow => Color::Yellow,
            ColorToken::Blue => Color::Blue,
            ColorToken::Magenta => Color::Magenta,
            ColorToken::Cyan => Color::Cyan,
            ColorToken::White => Color::White,
            ColorToken::BrightRed => Color::BrightRed,
            ColorToken::BrightGreen => Color::BrightGreen,
            ColorToken::BrightYellow => Color::BrightYellow,
            ColorToken::BrightBlue => Color::BrightBlue,
            ColorToken::BrightMagenta => Color::BrightMagenta,
            ColorToken::BrightCyan => Color::BrightCyan,
            ColorToken::BrightWhite => Color::BrightWhite,
        }
    }

    /// 为一段文本着色
    pub fn paint(&self, text: &str) -> String {
        text.color(self.color()).to_string()
    }
}

/// 三色配色方案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub name: String,
    pub primary: ColorToken,
    pub secondary: ColorToken,
    pub tertiary: ColorToken,
}

impl ColorScheme {
    pub fn new(name: &str, primary: ColorToken, secondary: ColorToken, tertiary: ColorToken) -> Self {
        Self {
            name: name.to_string(),
            primary,
            secondary,
            tertiary,
        }
    }

    /// 按行号循环选色 (0 → 主色, 1 → 次色, 2 → 第三色)
    pub fn token_for_line(&self, index: usize) -> ColorToken {
        match index % 3 {
            0 => self.primary,
            1 => self.secondary,
            _ => self.tertiary,
        }
    }
}
