// ============================================================================
// FigArt - 装饰器引擎
// ============================================================================
//
// 文件: src/core/decorator.rs
// 职责: 边框绘制与阴影效果
// 边界:
//   - ✅ 多行文本边框绘制
//   - ✅ 逐行阴影效果
//   - ❌ 不应包含字体渲染
//   - ❌ 不应包含颜色处理
//   - ❌ 不应包含终端输出
//
// ============================================================================

use crate::models::style::Decorator;
use crate::utils::constants::{SHADOW_GLYPH, SHADOW_OFFSET};

/// 文本可见宽度（按字符计数，多字节字符计为 1）
pub fn visual_width(line: &str) -> usize {
    line.chars().count()
}

/// 为多行文本绘制边框
///
/// 每行右侧补空格至最大宽度，上下边框长度为 `最大宽度 + 2`。
/// 调用方负责在装饰器没有任何边框时跳过该步骤。
pub fn apply_decorator(text: &str, decorator: &Decorator) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let max_width = lines.iter().map(|l| visual_width(l)).max().unwrap_or(0);
    let corners = &decorator.corners;

    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(format!(
        "{}{}{}",
        corners.top_left,
        decorator.top.repeat(max_width + 2),
        corners.top_right
    ));

    for line in &lines {
        let padding = " ".repeat(max_width - visual_width(line));
        rows.push(format!(
            "{} {}{} {}",
            decorator.left, line, padding, decorator.right
        ));
    }

    rows.push(format!(
        "{}{}{}",
        corners.bottom_left,
        decorator.bottom.repeat(max_width + 2),
        corners.bottom_right
    ));

    rows.join("\n")
}

/// 为每行（最后一行除外）在其下方追加阴影行
pub fn add_shadow(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len().saturating_sub(1);
    let offset = " ".repeat(SHADOW_OFFSET);

    let mut result = Vec::with_capacity(lines.len() * 2);
    for (i, line) in lines.iter().enumerate() {
        result.push(line.to_string());
        if i < last {
            result.push(format!("{}{}", offset, shadow_line(line)));
        }
    }

    result.join("\n")
}

fn shadow_line(line: &str) -> String {
    line.chars()
        .map(|c| if c == ' ' { ' ' } else { SHADOW_GLYPH })
        .collect()
}
