// ============================================================================
// FigArt - 字体引擎
// ============================================================================
//
// 文件: src/core/font.rs
// 职责: 将纯文本渲染为 FIGlet 艺术字
// 边界:
//   - ✅ 字体引擎 trait 定义
//   - ✅ FIGlet 字体加载与回退
//   - ✅ 渲染结果整理
//   - ❌ 不应包含边框与颜色处理
//   - ❌ 不应包含样式目录数据
//
// ============================================================================

use figlet_rs::FIGfont;
use std::path::PathBuf;

use crate::error::{ArtError, ArtResult};

/// 内置字体名称
pub const STANDARD_FONT: &str = "standard";

/// 随程序打包的字体
const BUNDLED_FONTS: &[(&str, &str)] = &[
    ("big", include_str!("../../assets/fonts/big.flf")),
    ("block", include_str!("../../assets/fonts/block.flf")),
    ("bubble", include_str!("../../assets/fonts/bubble.flf")),
    ("script", include_str!("../../assets/fonts/script.flf")),
    ("shadow", include_str!("../../assets/fonts/shadow.flf")),
    ("slim", include_str!("../../assets/fonts/slim.flf")),
    ("small", include_str!("../../assets/fonts/small.flf")),
];

/// 打包字体的 `.flf` 内容
pub fn bundled_font(name: &str) -> Option<&'static str> {
    BUNDLED_FONTS
        .iter()
        .find(|(bundled, _)| *bundled == name)
        .map(|(_, content)| *content)
}

/// 字体引擎：文本 × 字体名 → 多行艺术字
pub trait FontEngine {
    fn render(&self, text: &str, font: &str) -> ArtResult<String>;
}

/// 基于 figlet-rs 的字体引擎
///
/// 查找顺序：`fonts_dir/<name>.flf` → 打包字体 → 内置 `standard`。
/// 未知字体回退到 `standard` 并记录警告。
#[derive(Debug, Clone)]
pub struct FigletEngine {
    fonts_dir: PathBuf,
}

impl FigletEngine {
    pub fn new<P: Into<PathBuf>>(fonts_dir: P) -> Self {
        Self {
            fonts_dir: fonts_dir.into(),
        }
    }

    fn load_font(&self, font: &str) -> ArtResult<FIGfont> {
        let path = self.fonts_dir.join(format!("{}.flf", font));
        if path.is_file() {
            match FIGfont::from_file(&path.to_string_lossy()) {
                Ok(loaded) => return Ok(loaded),
                Err(reason) => {
                    tracing::warn!("ignoring font file {}: {}", path.display(), reason);
                }
            }
        }

        if let Some(content) = bundled_font(font) {
            return FIGfont::from_content(content).map_err(|reason| ArtError::Render {
                font: font.to_string(),
                reason,
            });
        }

        if font != STANDARD_FONT {
            tracing::warn!("unknown font '{}', falling back to {}", font, STANDARD_FONT);
        }
        FIGfont::standard().map_err(|reason| ArtError::Render {
            font: STANDARD_FONT.to_string(),
            reason,
        })
    }
}

impl FontEngine for FigletEngine {
    fn render(&self, text: &str, font: &str) -> ArtResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let figfont = self.load_font(font)?;
        let figure = figfont.convert(text).ok_or_else(|| ArtError::Render {
            font: font.to_string(),
            reason: "text contains no renderable characters".to_string(),
        })?;

        Ok(trim_trailing_blank_lines(&figure.to_string()))
    }
}

/// 去掉末尾的空白行
pub fn trim_trailing_blank_lines(rendered: &str) -> String {
    let mut lines: Vec<&str> = rendered.split('\n').collect();
    while lines.len() > 1 && lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.len() == 1 && lines[0].trim().is_empty() {
        return String::new();
    }
    lines.join("\n")
}
