// ============================================================================
// FigArt - 配色引擎
// ============================================================================
//
// 文件: src/core/colorizer.rs
// 职责: 按行循环应用三色配色方案
// 边界:
//   - ✅ 多行文本逐行着色
//   - ❌ 不应包含配色方案定义
//   - ❌ 不应包含终端输出
//
// ============================================================================

use crate::models::color::ColorScheme;

/// 按行号循环使用配色方案中的三种颜色
pub fn apply_color_scheme(text: &str, scheme: &ColorScheme) -> String {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| scheme.token_for_line(i).paint(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::color::ColorToken;

    fn ocean() -> ColorScheme {
        ColorScheme::new(
            "Ocean",
            ColorToken::Blue,
            ColorToken::Cyan,
            ColorToken::BrightBlue,
        )
    }

    #[test]
    fn test_lines_colored_cyclically() {
        colored::control::set_override(true);
        assert_ne!(ColorToken::Blue.paint("x"), ColorToken::Cyan.paint("x"));

        let scheme = ocean();
        let text = "same\nsame\nsame\nsame\nsame";
        let result = apply_color_scheme(text, &scheme);
        let expected = [
            ColorToken::Blue.paint("same"),
            ColorToken::Cyan.paint("same"),
            ColorToken::BrightBlue.paint("same"),
            ColorToken::Blue.paint("same"),
            ColorToken::Cyan.paint("same"),
        ]
        .join("\n");
        assert_eq!(result, expected);
    }

    #[test]
    fn test_line_count_preserved() {
        let result = apply_color_scheme("a\n\nb\n", &ocean());
        assert_eq!(result.split('\n').count(), 4);
    }
}
