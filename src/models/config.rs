// ============================================================================
// FigArt - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和加载
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置反序列化
//   - ✅ 配置默认值
//   - ✅ 运行时参数合并
//   - ❌ 不应包含样式目录数据
//   - ❌ 不应包含 CLI 参数定义
//   - ❌ 不应包含渲染逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ArtError, ArtResult};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "figart.toml";

/// FigArt 配置文件结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 字体配置
    #[serde(default)]
    pub fonts: FontsConfig,
    /// 预览配置
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否彩色输出
    #[serde(default = "Settings::default_colored")]
    pub colored: bool,
}

/// 字体配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontsConfig {
    /// `.flf` 字体文件目录
    #[serde(default = "Settings::default_fonts_dir")]
    pub dir: PathBuf,
}

/// 预览配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// 预览示例文本
    #[serde(default = "Settings::default_sample_text")]
    pub sample_text: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub colored: Option<bool>,
    pub fonts_dir: Option<PathBuf>,
}

/// 配置默认值 trait
pub trait ConfigDefaults {
    fn default_colored() -> bool {
        true
    }

    fn default_fonts_dir() -> PathBuf {
        PathBuf::from("fonts")
    }

    fn default_sample_text() -> String {
        "Hello!".to_string()
    }
}

impl ConfigDefaults for Settings {}

impl Settings {
    /// 加载配置文件
    ///
    /// 显式指定的路径必须存在；未指定时读取当前目录下的 `figart.toml`，
    /// 文件不存在则使用默认配置。
    pub fn load(path: Option<&Path>) -> ArtResult<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !config_path.exists() {
            if required {
                return Err(ArtError::Config {
                    path: config_path,
                    reason: "file not found".to_string(),
                });
            }
            tracing::debug!("no config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ArtError::Config {
            path: config_path.clone(),
            reason: e.to_string(),
        })?;
        let settings = Self::from_toml(&content).map_err(|reason| ArtError::Config {
            path: config_path.clone(),
            reason,
        })?;
        tracing::debug!("loaded config from {}", config_path.display());
        Ok(settings)
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(dir) = args.fonts_dir {
            self.fonts.dir = dir;
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            fonts: FontsConfig::default(),
            preview: PreviewConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            colored: Settings::default_colored(),
        }
    }
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            dir: Settings::default_fonts_dir(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            sample_text: Settings::default_sample_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = Settings::from_toml("").expect("empty toml");
        assert_eq!(settings, Settings::default());
        assert!(settings.output.colored);
        assert_eq!(settings.preview.sample_text, "Hello!");
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml(
            r#"
            [output]
            colored = false

            [fonts]
            dir = "/usr/share/figlet"
            "#,
        )
        .expect("partial toml");
        assert!(!settings.output.colored);
        assert_eq!(settings.fonts.dir, PathBuf::from("/usr/share/figlet"));
        assert_eq!(settings.preview.sample_text, "Hello!");
    }

    #[test]
    fn test_runtime_args_override() {
        let mut settings = Settings::default();
        settings.merge_runtime_args(RuntimeArgs {
            colored: Some(false),
            fonts_dir: None,
        });
        assert!(!settings.output.colored);
        assert_eq!(settings.fonts.dir, PathBuf::from("fonts"));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[preview]\nsample_text = \"Hey\"").expect("write config");
        let settings = Settings::load(Some(file.path())).expect("load config");
        assert_eq!(settings.preview.sample_text, "Hey");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.toml");
        let err = Settings::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ArtError::Config { .. }));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[output\ncolored = ").expect("write config");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ArtError::Config { .. }));
    }
}
