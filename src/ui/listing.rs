// ============================================================================
// FigArt - 目录列表与预览
// ============================================================================
//
// 文件: src/ui/listing.rs
// 职责: 样式目录列表、配色列表与样式预览显示
// 边界:
//   - ✅ 分类 / 样式编号列表
//   - ✅ 配色方案列表
//   - ✅ 全部样式预览
//   - ❌ 不应包含选择逻辑
//   - ❌ 不应包含生成流水线实现
//
// ============================================================================

use anyhow::Result;
use std::io::{self, Write};

use crate::core::{ArtGenerator, FontEngine};
use crate::models::AppConfig;
use crate::utils::colors::Colors;

/// 输出分类与样式编号菜单
pub fn print_style_menu<W: Write>(config: &AppConfig, out: &mut W) -> io::Result<()> {
    for (i, category) in config.categories.iter().enumerate() {
        writeln!(
            out,
            "\n{}. {} - {}",
            i + 1,
            Colors::category(&category.name),
            Colors::description(&category.description)
        )?;
        for (j, style) in category.styles.iter().enumerate() {
            writeln!(
                out,
                "   {}.{} {} - {}",
                i + 1,
                j + 1,
                Colors::highlight(&style.name),
                Colors::muted(&style.description)
            )?;
        }
    }
    Ok(())
}

/// 输出配色方案编号菜单（名称使用各自主色）
pub fn print_color_menu<W: Write>(config: &AppConfig, out: &mut W) -> io::Result<()> {
    for (i, scheme) in config.colors.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, scheme.primary.paint(&scheme.name))?;
    }
    Ok(())
}

/// 列出全部分类、样式与配色方案
pub fn list_available_styles<W: Write>(config: &AppConfig, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", Colors::heading("\nAvailable Style Categories:"))?;
    print_style_menu(config, out)?;
    writeln!(out, "{}", Colors::heading("\nAvailable Color Schemes:"))?;
    print_color_menu(config, out)?;
    out.flush()
}

/// 用示例文本预览全部样式（不着色）
pub fn preview_styles<E: FontEngine, W: Write>(
    config: &AppConfig,
    generator: &ArtGenerator<E>,
    sample_text: &str,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", Colors::heading("\nStyle Previews:"))?;

    for category in &config.categories {
        writeln!(
            out,
            "\n{} - {}",
            Colors::category(&category.name),
            Colors::description(&category.description)
        )?;

        for style in &category.styles {
            writeln!(
                out,
                "\n{} ({}):",
                Colors::highlight(&style.name),
                Colors::muted(&style.description)
            )?;
            let art = generator.generate(sample_text, style, None)?;
            writeln!(out, "{}", art)?;
        }
    }

    out.flush()?;
    Ok(())
}
