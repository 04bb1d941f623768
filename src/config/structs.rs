use std::path::Path;

use serde::{Deserialize, Serialize};

/// 默认配置文件（当前工作目录下，可选）
pub const DEFAULT_CONFIG_FILE: &str = "mmeson.toml";

/// 环境变量前缀，例如 MMESON__MESON__BINARY=meson-dev
pub const ENV_PREFIX: &str = "MMESON";

/// 应用配置
///
/// 优先级：ENV > mmeson.toml > 默认值
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub meson: MesonConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// `path` 为 `None` 时读取可选的 `mmeson.toml`；显式指定的文件必须存在。
    /// 加载失败时打印错误并回退到默认值。
    pub fn load(path: Option<&Path>) -> Self {
        use config::{Config, Environment, File};

        let _ = dotenvy::dotenv();

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        let builder = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<AppConfig>() {
                Ok(config) => {
                    if path.exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path.display());
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }
}

/// Meson 相关配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MesonConfig {
    #[serde(default = "default_meson_binary")]
    pub binary: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// text | json
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

/// 终端界面配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// 有未应用修改时，按 q 退出前先确认
    #[serde(default)]
    pub confirm_discard: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_meson_binary() -> String {
    "meson".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_enable_rotation() -> bool {
    false
}

fn default_max_backups() -> u32 {
    5
}

impl Default for MesonConfig {
    fn default() -> Self {
        Self {
            binary: default_meson_binary(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            enable_rotation: default_enable_rotation(),
            max_backups: default_max_backups(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.meson.binary, "meson");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "text");
        assert!(config.logging.file.is_none());
        assert!(!config.tui.confirm_discard);
    }

    #[test]
    fn test_load_from_file_with_partial_sections() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mmeson.toml");
        fs::write(
            &path,
            "[meson]\nbinary = \"/opt/meson/bin/meson\"\n\n[tui]\nconfirm_discard = true\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path));
        assert_eq!(config.meson.binary, "/opt/meson/bin/meson");
        assert!(config.tui.confirm_discard);
        // 未出现的段使用默认值
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(Some(&temp.path().join("absent.toml")));
        assert_eq!(config.tui, TuiConfig::default());
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = AppConfig::generate_sample_config();
        assert!(sample.contains("[meson]"));
        assert!(sample.contains("[logging]"));
        let parsed: AppConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
