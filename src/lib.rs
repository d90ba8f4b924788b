// ============================================================================
// FigArt - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明与公共接口导出
// 边界:
//   - ✅ 模块声明
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::{ArtGenerator, FigletEngine, FontEngine};
pub use crate::error::{ArtError, ArtResult};
pub use crate::models::{AppConfig, ColorScheme, Decorator, Effect, Style, StyleCategory};
