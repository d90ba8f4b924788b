// ============================================================================
// FigArt - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口定义和流程分发
// 边界:
//   - ✅ CLI 参数结构定义
//   - ✅ 配置加载与运行时参数合并
//   - ✅ 列表 / 预览 / 会话分发
//   - ✅ 子模块导出
//   - ❌ 不应包含变换引擎实现
//   - ❌ 不应包含目录数据定义
//
// ============================================================================

pub mod prompt;
pub mod session;

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::core::{ArtGenerator, FigletEngine};
use crate::models::{AppConfig, RuntimeArgs, Settings};
use crate::ui::banner::print_welcome_banner;
use crate::ui::listing::{list_available_styles, preview_styles};
use prompt::Prompter;
use session::{Session, SessionOptions};

/// FigArt - ASCII art text generator
#[derive(Debug, Parser)]
#[command(name = "figart")]
#[command(about = "Render text as decorated, colorized ASCII art")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Output file path (prints to the terminal when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable colored output (`--color` or `--color=false`)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub color: Option<bool>,

    /// List all available styles and color schemes
    #[arg(long)]
    pub list: bool,

    /// Preview all styles with sample text
    #[arg(long)]
    pub preview: bool,

    /// Style category number (1-based)
    #[arg(long, default_value_t = 0)]
    pub category: usize,

    /// Style number within the category (1-based)
    #[arg(long, default_value_t = 0)]
    pub style: usize,

    /// Color scheme number (1-based)
    #[arg(long, default_value_t = 0)]
    pub colorscheme: usize,

    /// Interactive mode (`--interactive` or `--interactive=false`)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub interactive: bool,

    /// Config file path (defaults to ./figart.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing .flf FIGlet fonts
    #[arg(long)]
    pub fonts_dir: Option<PathBuf>,

    /// Verbose diagnostic logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Text to render (used in non-interactive mode)
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,
}

impl Cli {
    /// 构建运行时参数用于覆盖配置
    fn runtime_args(&self) -> RuntimeArgs {
        RuntimeArgs {
            colored: self.color,
            fonts_dir: self.fonts_dir.clone(),
        }
    }

    /// 构建会话选项
    fn session_options(&self, settings: &Settings) -> SessionOptions {
        SessionOptions {
            output: self.output.clone(),
            colored: settings.output.colored,
            category: self.category,
            style: self.style,
            color_scheme: self.colorscheme,
            interactive: self.interactive,
            text: self.text.clone(),
        }
    }
}

/// 使用标准输入输出运行 CLI
pub fn run_cli(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(cli, stdin.lock(), stdout.lock())
}

/// 使用指定的输入输出运行 CLI
pub fn run_with_io<R: BufRead, W: Write>(cli: Cli, reader: R, mut writer: W) -> Result<()> {
    // 列表模式不依赖配置，配置无效时使用默认值
    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) if cli.list => {
            tracing::warn!("{}, listing with default settings", err);
            Settings::default()
        }
        Err(err) => return Err(err.into()),
    };
    settings.merge_runtime_args(cli.runtime_args());

    let config = AppConfig::builtin();
    let generator = ArtGenerator::new(FigletEngine::new(settings.fonts.dir.clone()));

    print_welcome_banner(generator.engine(), &mut writer)?;

    if cli.list {
        list_available_styles(&config, &mut writer)?;
        return Ok(());
    }

    if cli.preview {
        preview_styles(
            &config,
            &generator,
            &settings.preview.sample_text,
            &mut writer,
        )?;
        return Ok(());
    }

    let options = cli.session_options(&settings);
    let prompter = Prompter::new(reader, writer);
    let mut session = Session::new(&config, &generator, prompter, options);
    session.run()?;
    Ok(())
}
