// ============================================================================
// FigArt - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型模块入口和导出
// 边界:
//   - ✅ 子模块导出
//   - ❌ 不应包含具体实现
//
// ============================================================================

pub mod catalog;
pub mod color;
pub mod config;
pub mod style;

pub use catalog::AppConfig;
pub use color::{ColorScheme, ColorToken};
pub use config::{RuntimeArgs, Settings};
pub use style::{Corners, Decorator, Effect, Style, StyleCategory};
