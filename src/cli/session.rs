// ============================================================================
// FigArt - 会话流程
// ============================================================================
//
// 文件: src/cli/session.rs
// 职责: 样式 / 配色选择与生成-显示-保存循环
// 边界:
//   - ✅ 样式与配色选择（参数优先，否则交互）
//   - ✅ 交互 / 非交互主循环
//   - ✅ 结果显示与文件保存
//   - ❌ 不应包含命令行参数定义
//   - ❌ 不应包含变换引擎实现
//
// ============================================================================

use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::prompt::Prompter;
use crate::core::{ArtGenerator, FontEngine};
use crate::error::{ArtError, ArtResult};
use crate::models::{AppConfig, ColorScheme, Style};
use crate::ui::listing::{print_color_menu, print_style_menu};
use crate::utils::colors::Colors;
use crate::utils::constants::{prompts, QUIT_COMMAND};

/// 会话选项（来自命令行与配置合并结果）
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// 输出文件路径（None 表示输出到终端）
    pub output: Option<PathBuf>,
    /// 是否着色
    pub colored: bool,
    /// 1 起始分类编号，0 表示未指定
    pub category: usize,
    /// 1 起始样式编号，0 表示未指定
    pub style: usize,
    /// 1 起始配色编号，0 表示未指定
    pub color_scheme: usize,
    /// 是否进入交互循环
    pub interactive: bool,
    /// 位置参数文本
    pub text: Vec<String>,
}

/// 单次处理后的流程走向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 生成会话
pub struct Session<'a, E: FontEngine, R, W> {
    config: &'a AppConfig,
    generator: &'a ArtGenerator<E>,
    prompter: Prompter<R, W>,
    options: SessionOptions,
}

impl<'a, E: FontEngine, R: BufRead, W: Write> Session<'a, E, R, W> {
    pub fn new(
        config: &'a AppConfig,
        generator: &'a ArtGenerator<E>,
        prompter: Prompter<R, W>,
        options: SessionOptions,
    ) -> Self {
        Self {
            config,
            generator,
            prompter,
            options,
        }
    }

    /// 运行主循环
    ///
    /// 非交互模式只处理一次位置参数文本；交互模式反复读取文本，输入 `q` 退出。
    pub fn run(&mut self) -> ArtResult<()> {
        if !self.options.interactive {
            let text = self.options.text.join(" ");
            if text.is_empty() {
                return Err(ArtError::NoText);
            }
            self.process_text(&text)?;
            return Ok(());
        }

        loop {
            let text = self.read_text()?;
            if is_quit(&text) {
                self.say_goodbye()?;
                return Ok(());
            }

            match self.process_text(&text) {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                // 当前输入无法渲染时提示后继续循环
                Err(err @ ArtError::Render { .. }) => {
                    tracing::debug!("render failed for {:?}", text);
                    writeln!(self.prompter.writer(), "{}", Colors::error(&err.to_string()))?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn read_text(&mut self) -> ArtResult<String> {
        let answer = self.prompter.ask(&Colors::success(prompts::ENTER_TEXT))?;
        Ok(answer.trim().to_string())
    }

    /// 处理一段文本：选择样式与配色、生成并输出
    pub fn process_text(&mut self, text: &str) -> ArtResult<Flow> {
        let style = self.resolve_style()?;
        let scheme = self.resolve_color_scheme()?;
        debug!(
            "generating '{}' with style '{}' and scheme {:?}",
            text,
            style.name,
            scheme.map(|s| s.name.as_str())
        );

        let art = self.generator.generate(text, style, scheme)?;

        if let Some(path) = self.options.output.clone() {
            save_to_file(&path, &art)?;
            info!("wrote {} bytes to {}", art.len(), path.display());
            writeln!(
                self.prompter.writer(),
                "{} {}",
                prompts::SAVED_TO,
                path.display()
            )?;
            return Ok(Flow::Continue);
        }

        let out = self.prompter.writer();
        writeln!(out, "\n{}", prompts::RESULT_HEADER)?;
        writeln!(out, "{}", art)?;

        if !self.options.interactive {
            out.flush()?;
            return Ok(Flow::Quit);
        }

        let answer = self.prompter.ask(&format!("\n{}", prompts::CONTINUE))?;
        if is_quit(&answer) {
            self.say_goodbye()?;
            return Ok(Flow::Quit);
        }
        Ok(Flow::Continue)
    }

    /// 解析样式：参数编号合法时直接使用，否则显示菜单交互选择
    pub fn resolve_style(&mut self) -> ArtResult<&'a Style> {
        let config = self.config;
        if let Some((_, style)) = config.style(self.options.category, self.options.style) {
            return Ok(style);
        }

        let out = self.prompter.writer();
        writeln!(out, "\nAvailable style categories:")?;
        print_style_menu(config, out)?;

        let category_index =
            self.prompter
                .select("\nSelect category", config.categories.len(), "category")?;
        let category = &config.categories[category_index - 1];

        let style_index = self
            .prompter
            .select("Select style", category.styles.len(), "style")?;
        Ok(&category.styles[style_index - 1])
    }

    /// 解析配色：关闭着色时返回 None，不进行提示
    pub fn resolve_color_scheme(&mut self) -> ArtResult<Option<&'a ColorScheme>> {
        if !self.options.colored {
            return Ok(None);
        }

        let config = self.config;
        if let Some(scheme) = config.color_scheme(self.options.color_scheme) {
            return Ok(Some(scheme));
        }

        let out = self.prompter.writer();
        writeln!(out, "\nAvailable color schemes:")?;
        print_color_menu(config, out)?;

        let index = self
            .prompter
            .select("\nSelect color scheme", config.colors.len(), "color scheme")?;
        Ok(Some(&config.colors[index - 1]))
    }

    fn say_goodbye(&mut self) -> ArtResult<()> {
        let out = self.prompter.writer();
        writeln!(out, "\n{}", prompts::GOODBYE)?;
        out.flush()?;
        Ok(())
    }
}

/// 去掉首尾空白后不区分大小写的 `q`
pub fn is_quit(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(QUIT_COMMAND)
}

/// 写入输出文件（覆盖已有文件）
pub fn save_to_file(path: &Path, content: &str) -> ArtResult<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let write_err = |source: std::io::Error| ArtError::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    Ok(())
}
