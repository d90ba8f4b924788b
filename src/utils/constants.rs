// ============================================================================
// FigArt - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 装饰字符定义
//   - ✅ 提示与消息文本
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 阴影字符
pub const SHADOW_GLYPH: char = '░';

/// 阴影行左侧偏移
pub const SHADOW_OFFSET: usize = 2;

/// 欢迎横幅
pub mod banner {
    /// 横幅文本
    pub const TITLE: &str = "ASCII Art";
    /// 横幅字体
    pub const FONT: &str = "big";
    /// 副标题
    pub const SUBTITLE: &str = "Generator";
    /// 副标题上框，`{}` 为副标题
    pub const FRAME_TOP: &str = "═══╡ {} ╞═══";
    /// 副标题下框
    pub const FRAME_BOTTOM: &str = "═════════════";
}

/// 交互提示文本
pub mod prompts {
    pub const ENTER_TEXT: &str = "Enter your text: ";
    pub const QUIT_HINT: &str = "Type 'q' to quit or Ctrl+C to exit";
    pub const CONTINUE: &str = "Press Enter to continue or type 'q' to quit: ";
    pub const INVALID_SELECTION: &str = "Invalid selection. Please try again.";
    pub const GOODBYE: &str = "Goodbye! Thanks for using ASCII Art Generator!";
    pub const RESULT_HEADER: &str = "Your ASCII Art:";
    pub const SAVED_TO: &str = "ASCII art saved to:";
}

/// 退出指令
pub const QUIT_COMMAND: &str = "q";
