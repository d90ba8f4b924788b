// ============================================================================
// FigArt - 内置目录
// ============================================================================
//
// 文件: src/models/catalog.rs
// 职责: 样式分类与配色方案的内置目录
// 边界:
//   - ✅ 内置样式分类数据
//   - ✅ 内置配色方案数据
//   - ✅ 1 起始编号查找
//   - ❌ 不应包含交互选择逻辑
//   - ❌ 不应包含渲染逻辑
//
// ============================================================================

use super::color::{ColorScheme, ColorToken};
use super::style::{self, Decorator, Effect, Style, StyleCategory};

/// 应用目录：启动时构建一次，之后只读
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub categories: Vec<StyleCategory>,
    pub colors: Vec<ColorScheme>,
}

impl AppConfig {
    /// 构建内置目录
    pub fn builtin() -> Self {
        Self {
            categories: builtin_categories(),
            colors: builtin_color_schemes(),
        }
    }

    /// 按 1 起始编号获取分类
    pub fn category(&self, index: usize) -> Option<&StyleCategory> {
        index.checked_sub(1).and_then(|i| self.categories.get(i))
    }

    /// 按 1 起始编号获取分类与样式，任一越界返回 None
    pub fn style(&self, category: usize, style: usize) -> Option<(&StyleCategory, &Style)> {
        let found = self.category(category)?;
        found.style(style).map(|s| (found, s))
    }

    /// 按 1 起始编号获取配色方案
    pub fn color_scheme(&self, index: usize) -> Option<&ColorScheme> {
        index.checked_sub(1).and_then(|i| self.colors.get(i))
    }
}

fn builtin_categories() -> Vec<StyleCategory> {
    vec![
        StyleCategory::new(
            "Classic",
            "Traditional ASCII art styles",
            vec![
                Style::plain("Standard", "Classic ASCII art"),
                Style::new("Big", "Large block letters", "big", None),
                Style::new("Slim", "Thin elegant letters", "slim", None),
                Style::new("Small", "Compact letters", "small", None),
            ],
        ),
        StyleCategory::new(
            "Boxed",
            "Styles with different types of borders",
            vec![
                Style::new("Single Box", "Single-line border", "", Some(style::single_box())),
                Style::new("Double Box", "Double-line border", "", Some(style::double_box())),
                Style::new("Round Box", "Rounded corners", "", Some(style::round_box())),
                Style::new("Dotted Box", "Dotted border style", "", Some(style::dotted_box())),
            ],
        ),
        StyleCategory::new(
            "3D Effects",
            "Three-dimensional looking styles",
            vec![
                Style::new("Shadow", "Letters with shadow", "shadow", None),
                Style::new("Deep 3D", "Enhanced 3D effect", "standard", Some(style::stars_3d())),
                Style::new(
                    "Block 3D",
                    "Solid 3D blocks",
                    "block",
                    Some(Decorator::effect_only(Some(Effect::Shadow), None)),
                ),
            ],
        ),
        StyleCategory::new(
            "Decorative",
            "Fancy and ornamental styles",
            vec![
                Style::new("Wavy", "Wavy border style", "", Some(style::wavy())),
                // 与 Deep 3D 共用同一星形装饰器
                Style::new("Stars", "Starred border", "", Some(style::stars_3d())),
                Style::new("Script", "Cursive style", "script", None),
                Style::new("Bubble", "Rounded bubble letters", "bubble", Some(style::round_box())),
            ],
        ),
    ]
}

fn builtin_color_schemes() -> Vec<ColorScheme> {
    use ColorToken::*;

    vec![
        ColorScheme::new("Ocean", Blue, Cyan, BrightBlue),
        ColorScheme::new("Forest", Green, BrightGreen, White),
        ColorScheme::new("Sunset", Red, Yellow, BrightRed),
        ColorScheme::new("Royal", Magenta, BrightMagenta, White),
        ColorScheme::new("Monochrome", White, BrightWhite, Black),
        ColorScheme::new("Neon", BrightGreen, BrightYellow, BrightCyan),
        ColorScheme::new("Rainbow", Red, Green, Blue),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_never_empty() {
        let config = AppConfig::builtin();
        assert_eq!(config.categories.len(), 4);
        assert_eq!(config.colors.len(), 7);
        assert!(config.categories.iter().all(|c| !c.styles.is_empty()));
    }

    #[test]
    fn test_style_lookup_out_of_range() {
        let config = AppConfig::builtin();
        assert!(config.style(0, 1).is_none());
        assert!(config.style(1, 0).is_none());
        assert!(config.style(5, 1).is_none());
        assert!(config.style(3, 4).is_none());

        let (category, style) = config.style(2, 1).expect("single box");
        assert_eq!(category.name, "Boxed");
        assert_eq!(style.name, "Single Box");
    }

    #[test]
    fn test_stars_decorator_is_shared() {
        let config = AppConfig::builtin();
        let (_, deep) = config.style(3, 2).expect("deep 3d");
        let (_, stars) = config.style(4, 2).expect("stars");
        assert_eq!(deep.decorator, stars.decorator);
        assert_ne!(deep.font, stars.font);
    }

    #[test]
    fn test_color_scheme_lookup() {
        let config = AppConfig::builtin();
        assert_eq!(config.color_scheme(1).map(|c| c.name.as_str()), Some("Ocean"));
        assert_eq!(config.color_scheme(7).map(|c| c.name.as_str()), Some("Rainbow"));
        assert!(config.color_scheme(0).is_none());
        assert!(config.color_scheme(8).is_none());
    }
}
