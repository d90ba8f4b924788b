// ============================================================================
// FigArt - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 文本变换核心模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体变换实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 相关逻辑
//
// ============================================================================

pub mod colorizer;
pub mod decorator;
pub mod font;
pub mod generator;

// 重新导出常用类型
pub use colorizer::apply_color_scheme;
pub use decorator::{add_shadow, apply_decorator};
pub use font::{FigletEngine, FontEngine};
pub use generator::ArtGenerator;
