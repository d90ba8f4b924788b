// ============================================================================
// FigArt - 交互提示
// ============================================================================
//
// 文件: src/cli/prompt.rs
// 职责: 行式输入读取与编号选择
// 边界:
//   - ✅ 提示输出与行读取
//   - ✅ 编号范围校验与重新提示
//   - ✅ 可选的重试上限
//   - ❌ 不应包含目录数据
//   - ❌ 不应包含生成逻辑
//
// ============================================================================

use std::io::{BufRead, Write};

use crate::error::{ArtError, ArtResult};
use crate::utils::colors::Colors;
use crate::utils::constants::prompts;

/// 交互提示器
///
/// 默认无限次重新提示，直到输入合法编号为止。
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    max_attempts: Option<usize>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_attempts: None,
        }
    }

    /// 设置选择的最大尝试次数
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// 读取一行（去掉行尾换行符）
    pub fn read_line(&mut self) -> ArtResult<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(ArtError::ReadInput)?;
        if read == 0 {
            return Err(ArtError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// 输出提示并读取一行
    pub fn ask(&mut self, prompt: &str) -> ArtResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    /// 在 `1..=count` 范围内选择编号
    pub fn select(&mut self, label: &str, count: usize, what: &'static str) -> ArtResult<usize> {
        let mut attempts = 0;
        loop {
            let answer = self.ask(&format!("{} (1-{}): ", label, count))?;
            if let Some(choice) = parse_choice(&answer, count) {
                return Ok(choice);
            }

            tracing::debug!("rejected {} selection {:?}", what, answer);
            writeln!(self.writer, "{}", Colors::error(prompts::INVALID_SELECTION))?;

            attempts += 1;
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(ArtError::SelectionExhausted { what });
            }
        }
    }
}

/// 解析 1 起始编号，非数字或越界返回 None
pub fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=count).contains(choice))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("2", 4), Some(2));
        assert_eq!(parse_choice(" 4 ", 4), Some(4));
        assert_eq!(parse_choice("0", 4), None);
        assert_eq!(parse_choice("5", 4), None);
        assert_eq!(parse_choice("-1", 4), None);
        assert_eq!(parse_choice("two", 4), None);
        assert_eq!(parse_choice("", 4), None);
    }

    #[test]
    fn test_select_reprompts_until_valid() {
        let input: &[u8] = b"abc\n9\n0\n3\n";
        let mut out = Vec::new();
        let mut prompter = Prompter::new(input, &mut out);
        let choice = prompter.select("Select category", 4, "category").expect("select");
        assert_eq!(choice, 3);

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.matches("Select category (1-4): ").count(), 4);
        assert_eq!(text.matches(prompts::INVALID_SELECTION).count(), 3);
    }

    #[test]
    fn test_select_respects_attempt_cap() {
        let input: &[u8] = b"x\ny\nz\n1\n";
        let mut out = Vec::new();
        let mut prompter = Prompter::new(input, &mut out).with_max_attempts(2);
        let err = prompter.select("Select style", 3, "style").unwrap_err();
        assert!(matches!(err, ArtError::SelectionExhausted { what: "style" }));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let input: &[u8] = b"";
        let mut out = Vec::new();
        let mut prompter = Prompter::new(input, &mut out);
        assert!(matches!(prompter.read_line(), Err(ArtError::InputClosed)));
        assert!(matches!(
            prompter.select("Select category", 4, "category"),
            Err(ArtError::InputClosed)
        ));
    }

    #[test]
    fn test_read_line_strips_line_ending() {
        let input: &[u8] = b"hello world\r\nnext\n";
        let mut prompter = Prompter::new(input, Vec::new());
        assert_eq!(prompter.read_line().expect("line"), "hello world");
        assert_eq!(prompter.read_line().expect("line"), "next");
    }
}
