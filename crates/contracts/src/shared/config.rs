use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    /// Сколько последних уведомлений хранить; 0 - без ограничения
    #[serde(default)]
    pub max_retained: usize,
    /// Сколько непрочитанных уведомлений показывать тостами
    #[serde(default = "default_toast_limit")]
    pub toast_limit: usize,
}

impl NotificationsConfig {
    pub fn retention(&self) -> Option<usize> {
        (self.max_retained > 0).then_some(self.max_retained)
    }
}

fn default_toast_limit() -> usize {
    5
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[app]
title = "Admin Panel"

[notifications]
max_retained = 0
toast_limit = 5
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection {
                title: "Admin Panel".to_string(),
            },
            notifications: NotificationsConfig {
                max_retained: 0,
                toast_limit: default_toast_limit(),
            },
        }
    }
}

/// Load configuration
///
/// Uses the override document when one is provided (the frontend keeps it in
/// local storage), otherwise falls back to the embedded default config.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    if let Some(contents) = override_toml.filter(|c| !c.trim().is_empty()) {
        log::info!("Loading config from override");
        let config: AppConfig = toml::from_str(contents)?;
        return Ok(config);
    }

    log::info!("Using default embedded configuration");
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.notifications.retention(), None);
    }

    #[test]
    fn test_override_config() {
        let config = load_config(Some(
            r#"
            [app]
            title = "Ops"

            [notifications]
            max_retained = 20
            "#,
        ))
        .unwrap();
        assert_eq!(config.app.title, "Ops");
        assert_eq!(config.notifications.retention(), Some(20));
        assert_eq!(config.notifications.toast_limit, 5);
    }

    #[test]
    fn test_invalid_override_is_error() {
        assert!(load_config(Some("[app]\ntitle = 3")).is_err());
        assert!(load_config(Some("   ")).is_ok());
    }
}
