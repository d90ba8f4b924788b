// ============================================================================
// FigArt - 艺术字生成器
// ============================================================================
//
// 文件: src/core/generator.rs
// 职责: 编排字体渲染、装饰与着色流水线
// 边界:
//   - ✅ 固定顺序的生成流水线
//   - ✅ 各阶段可选跳过
//   - ❌ 不应包含交互选择逻辑
//   - ❌ 不应包含文件写入
//
// ============================================================================

use tracing::debug;

use super::colorizer::apply_color_scheme;
use super::decorator::apply_decorator;
use super::font::FontEngine;
use crate::error::ArtResult;
use crate::models::color::ColorScheme;
use crate::models::style::Style;

/// 艺术字生成器
pub struct ArtGenerator<E: FontEngine> {
    engine: E,
}

impl<E: FontEngine> ArtGenerator<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// 生成艺术字
    ///
    /// 顺序：字体 → 前置效果 → 边框 → 后置效果 → 配色，每一步均可跳过。
    pub fn generate(
        &self,
        text: &str,
        style: &Style,
        scheme: Option<&ColorScheme>,
    ) -> ArtResult<String> {
        let mut art = match style.font.as_deref() {
            Some(font) => {
                debug!("rendering with font '{}'", font);
                self.engine.render(text, font)?
            }
            None => text.to_string(),
        };

        if let Some(decorator) = &style.decorator {
            if let Some(pre) = decorator.pre {
                debug!("applying pre effect {:?}", pre);
                art = pre.apply(&art);
            }
            if decorator.has_border() {
                debug!("drawing border for style '{}'", style.name);
                art = apply_decorator(&art, decorator);
            }
            if let Some(post) = decorator.post {
                debug!("applying post effect {:?}", post);
                art = post.apply(&art);
            }
        }

        if let Some(scheme) = scheme {
            debug!("applying color scheme '{}'", scheme.name);
            art = apply_color_scheme(&art, scheme);
        }

        Ok(art)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::color::ColorToken;
    use crate::models::style::{self, Decorator, Effect};
    use std::cell::RefCell;

    /// 记录调用并返回固定渲染结果
    struct StubEngine {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl StubEngine {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl FontEngine for StubEngine {
        fn render(&self, text: &str, font: &str) -> ArtResult<String> {
            self.calls
                .borrow_mut()
                .push((text.to_string(), font.to_string()));
            Ok(format!("[{}]\n{}", font, text.to_uppercase()))
        }
    }

    #[test]
    fn test_noop_style_round_trip() {
        let generator = ArtGenerator::new(StubEngine::new());
        let style = Style::plain("Standard", "Classic ASCII art");
        let text = "Hello, world!\n  second line";
        assert_eq!(generator.generate(text, &style, None).expect("generate"), text);
        assert!(generator.engine().calls.borrow().is_empty());
    }

    #[test]
    fn test_single_box_scenario() {
        let generator = ArtGenerator::new(StubEngine::new());
        let style = Style::new("Single Box", "Single-line border", "", Some(style::single_box()));
        let art = generator.generate("Hi", &style, None).expect("generate");
        assert_eq!(art, "┌────┐\n│ Hi │\n└────┘");
    }

    #[test]
    fn test_font_engine_receives_text_and_font() {
        let generator = ArtGenerator::new(StubEngine::new());
        let style = Style::new("Big", "Large block letters", "big", None);
        let art = generator.generate("hey", &style, None).expect("generate");
        assert_eq!(art, "[big]\nHEY");
        assert_eq!(
            generator.engine().calls.borrow().as_slice(),
            &[("hey".to_string(), "big".to_string())]
        );
    }

    #[test]
    fn test_effect_only_decorator_skips_border() {
        let generator = ArtGenerator::new(StubEngine::new());
        let style = Style::new(
            "Block 3D",
            "Solid 3D blocks",
            "",
            Some(Decorator::effect_only(Some(Effect::Shadow), None)),
        );
        let art = generator.generate("ab\ncd", &style, None).expect("generate");
        assert_eq!(art, "ab\n  ░░\ncd");
    }

    #[test]
    fn test_pre_effect_runs_before_border() {
        let generator = ArtGenerator::new(StubEngine::new());
        let style = Style::new("Stars", "Starred border", "", Some(style::stars_3d()));
        let art = generator.generate("ab\ncd", &style, None).expect("generate");
        let rows: Vec<&str> = art.split('\n').collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], "★★★★★★★★");
        assert_eq!(rows[2], "★   ░░ ★");
    }

    #[test]
    fn test_post_effect_runs_after_border() {
        let generator = ArtGenerator::new(StubEngine::new());
        let decorator = Decorator {
            post: Some(Effect::Shadow),
            ..style::single_box()
        };
        let style = Style::new("Shaded Box", "Box with shadow", "", Some(decorator));
        let art = generator.generate("Hi", &style, None).expect("generate");
        assert_eq!(art, "┌────┐\n  ░░░░░░\n│ Hi │\n  ░ ░░ ░\n└────┘");
    }

    #[test]
    fn test_color_scheme_applied_last() {
        colored::control::set_override(true);
        let generator = ArtGenerator::new(StubEngine::new());
        let style = Style::new("Single Box", "Single-line border", "", Some(style::single_box()));
        let scheme = crate::models::ColorScheme::new(
            "Rainbow",
            ColorToken::Red,
            ColorToken::Green,
            ColorToken::Blue,
        );
        let art = generator.generate("Hi", &style, Some(&scheme)).expect("generate");
        let expected = [
            ColorToken::Red.paint("┌────┐"),
            ColorToken::Green.paint("│ Hi │"),
            ColorToken::Blue.paint("└────┘"),
        ]
        .join("\n");
        assert_eq!(art, expected);
    }
}
