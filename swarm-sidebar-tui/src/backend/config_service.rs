//! 配置服务
//!
//! 从 `config.toml` 读取配置；文件不存在时使用默认值，
//! 文件损坏时记录警告并回退到默认值。

use std::path::{Path, PathBuf};

use serde::Deserialize;
use swarm_sidebar_core::types::{MenuMode, StylesheetLinks};
use swarm_sidebar_core::{CoreError, CoreResult};

/// 环境变量：覆盖后端地址
pub const API_URL_ENV: &str = "SWARM_SIDEBAR_API_URL";

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swarm-sidebar")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端 API 根地址
    pub api_base_url: String,
    /// 资源池列表刷新间隔（秒）
    pub refresh_interval_secs: u64,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 启动时的菜单模式
    pub menu_mode: MenuMode,
    /// 界面语言代码
    pub language: String,
    /// 启动时的布局皮肤
    pub layout: String,
    /// 启动时的主题
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            refresh_interval_secs: 30,
            request_timeout_secs: 10,
            menu_mode: MenuMode::default(),
            language: "en-US".to_string(),
            layout: StylesheetLinks::DEFAULT_LAYOUT.to_string(),
            theme: StylesheetLinks::DEFAULT_THEME.to_string(),
        }
    }
}

impl AppConfig {
    /// 从 TOML 文本解析
    pub fn from_toml(content: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CoreError::ConfigError(e.to_string()))?;
        if config.refresh_interval_secs == 0 {
            return Err(CoreError::ConfigError(
                "refresh_interval_secs must be greater than 0".to_string(),
            ));
        }
        Ok(config)
    }

    /// 应用环境变量覆盖
    #[must_use]
    pub fn with_env_overrides(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> AppConfig;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(config_dir().join("config.toml"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> AppConfig {
        let config = match std::fs::read_to_string(&self.path) {
            Ok(content) => AppConfig::from_toml(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid config {}: {e}", self.path.display());
                AppConfig::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
            Err(e) => {
                log::warn!("Failed to read config {}: {e}", self.path.display());
                AppConfig::default()
            }
        };

        config.with_env_overrides(std::env::var(API_URL_ENV).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            api_base_url = "http://swarm.intranet/api"
            menu_mode = "horizontal"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://swarm.intranet/api");
        assert_eq!(config.menu_mode, MenuMode::Horizontal);
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.theme, "bluegrey");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = AppConfig::from_toml("refresh_interval_secs = 0").unwrap_err();
        assert!(matches!(err, CoreError::ConfigError(_)));
    }

    #[test]
    fn env_override_wins_unless_blank() {
        let config = AppConfig::default().with_env_overrides(Some("http://other/api".into()));
        assert_eq!(config.api_base_url, "http://other/api");

        let config = AppConfig::default().with_env_overrides(Some("  ".into()));
        assert_eq!(config.api_base_url, AppConfig::default().api_base_url);
    }

    #[test]
    fn missing_or_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("missing.toml"));
        assert_eq!(service.load().refresh_interval_secs, 30);

        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "menu_mode = [").unwrap();
        let service = LocalConfigService::with_path(&path);
        assert_eq!(service.load().menu_mode, MenuMode::Static);
    }
}
