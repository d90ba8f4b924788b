// ============================================================================
// FigArt - 样式数据模型
// ============================================================================
//
// 文件: src/models/style.rs
// 职责: 样式分类、样式与装饰器的数据结构定义
// 边界:
//   - ✅ 样式分类 / 样式 / 装饰器结构定义
//   - ✅ 预定义装饰器
//   - ✅ 文本效果枚举
//   - ❌ 不应包含边框绘制逻辑
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含终端输出
//
// ============================================================================

use crate::core::decorator;

/// 样式分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCategory {
    /// 分类名称
    pub name: String,
    /// 分类描述
    pub description: String,
    /// 分类下的样式（至少一个）
    pub styles: Vec<Style>,
}

impl StyleCategory {
    pub fn new(name: &str, description: &str, styles: Vec<Style>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            styles,
        }
    }

    /// 按 1 起始编号获取样式
    pub fn style(&self, index: usize) -> Option<&Style> {
        index.checked_sub(1).and_then(|i| self.styles.get(i))
    }
}

/// 艺术字样式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// 样式名称
    pub name: String,
    /// 样式描述
    pub description: String,
    /// FIGlet 字体名称（None 表示原样输出文本）
    pub font: Option<String>,
    /// 装饰器（None 表示不装饰）
    pub decorator: Option<Decorator>,
}

impl Style {
    pub fn new(name: &str, description: &str, font: &str, decorator: Option<Decorator>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            font: if font.is_empty() {
                None
            } else {
                Some(font.to_string())
            },
            decorator,
        }
    }

    /// 不使用字体和装饰器的样式
    pub fn plain(name: &str, description: &str) -> Self {
        Self::new(name, description, "", None)
    }
}

/// 文本效果（装饰器的前置 / 后置处理）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// 逐行阴影
    Shadow,
}

impl Effect {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Effect::Shadow => decorator::add_shadow(text),
        }
    }
}

/// 边框四角字符
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Corners {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

impl Corners {
    pub fn new(top_left: &str, top_right: &str, bottom_left: &str, bottom_right: &str) -> Self {
        Self {
            top_left: top_left.to_string(),
            top_right: top_right.to_string(),
            bottom_left: bottom_left.to_string(),
            bottom_right: bottom_right.to_string(),
        }
    }

    /// 四角使用同一字符
    pub fn uniform(glyph: &str) -> Self {
        Self::new(glyph, glyph, glyph, glyph)
    }
}

/// 装饰器：边框与前后处理效果
///
/// 四条边全部为空时不绘制边框，四角字符也随之忽略。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decorator {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub corners: Corners,
    /// 绘制边框前应用的效果
    pub pre: Option<Effect>,
    /// 绘制边框后应用的效果
    pub post: Option<Effect>,
}

impl Decorator {
    /// 构造带边框的装饰器
    pub fn bordered(top: &str, bottom: &str, left: &str, right: &str, corners: Corners) -> Self {
        Self {
            top: top.to_string(),
            bottom: bottom.to_string(),
            left: left.to_string(),
            right: right.to_string(),
            corners,
            pre: None,
            post: None,
        }
    }

    /// 仅包含效果、不绘制边框的装饰器
    pub fn effect_only(pre: Option<Effect>, post: Option<Effect>) -> Self {
        Self {
            pre,
            post,
            ..Self::default()
        }
    }

    pub fn with_pre(mut self, effect: Effect) -> Self {
        self.pre = Some(effect);
        self
    }

    /// 是否声明了任意一条边框
    pub fn has_border(&self) -> bool {
        !(self.top.is_empty()
            && self.bottom.is_empty()
            && self.left.is_empty()
            && self.right.is_empty())
    }
}

// ============================================================================
// 预定义装饰器
// ============================================================================

/// 单线边框
pub fn single_box() -> Decorator {
    Decorator::bordered("─", "─", "│", "│", Corners::new("┌", "┐", "└", "┘"))
}

/// 双线边框
pub fn double_box() -> Decorator {
    Decorator::bordered("═", "═", "║", "║", Corners::new("╔", "╗", "╚", "╝"))
}

/// 圆角边框
pub fn round_box() -> Decorator {
    Decorator::bordered("─", "─", "│", "│", Corners::new("╭", "╮", "╰", "╯"))
}

/// 点线边框
pub fn dotted_box() -> Decorator {
    Decorator::bordered("┈", "┈", "┊", "┊", Corners::uniform("·"))
}

/// 星形边框 + 阴影
pub fn stars_3d() -> Decorator {
    Decorator::bordered("★", "★", "★", "★", Corners::uniform("★")).with_pre(Effect::Shadow)
}

/// 波浪边框
pub fn wavy() -> Decorator {
    Decorator::bordered("～", "～", "※", "※", Corners::uniform("∿"))
}
