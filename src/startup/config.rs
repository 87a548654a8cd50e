//! Shell configuration.
//!
//! Every setting has a default and an optional environment override.
//! Invalid overrides are ignored; the reason is kept in
//! [`ShellConfig::warnings`] so it can be logged once tracing is up.

use std::path::PathBuf;
use std::time::Duration;

use crate::notifications::DEFAULT_DURATION;
use crate::ui::theme::ThemeId;

pub const ENV_NOTIFY_MS: &str = "DASHSHELL_NOTIFY_MS";
pub const ENV_QUIT_GRACE_MS: &str = "DASHSHELL_QUIT_GRACE_MS";
pub const ENV_THEME: &str = "DASHSHELL_THEME";
pub const ENV_LOG_FILE: &str = "DASHSHELL_LOG_FILE";

/// Configuration for the shell.
///
/// # Example
///
/// ```ignore
/// use dashshell::startup::ShellConfig;
///
/// let config = ShellConfig::default()
///     .with_initial_theme(ThemeId::Dark)
///     .with_quit_grace(Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// How long a notification stays visible (default: 3000 ms)
    pub notification_duration: Duration,
    /// Delay between showing the goodbye overlay and exiting (default: 1000 ms)
    pub quit_grace: Duration,
    /// Theme at startup (default: light)
    pub initial_theme: ThemeId,
    /// Redraw poll interval (default: 250 ms)
    pub tick_rate: Duration,
    /// Log destination. `None` disables logging.
    pub log_file: Option<PathBuf>,
    /// Rejected environment overrides.
    pub warnings: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            notification_duration: DEFAULT_DURATION,
            quit_grace: Duration::from_millis(1000),
            initial_theme: ThemeId::Light,
            tick_rate: Duration::from_millis(250),
            log_file: default_log_file(),
            warnings: Vec::new(),
        }
    }
}

/// `<cache dir>/dashshell/dashshell.log`, if the platform has a cache dir.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("dashshell").join("dashshell.log"))
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_duration = duration;
        self
    }

    pub fn with_quit_grace(mut self, grace: Duration) -> Self {
        self.quit_grace = grace;
        self
    }

    pub fn with_initial_theme(mut self, theme: ThemeId) -> Self {
        self.initial_theme = theme;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Create config from `DASHSHELL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_NOTIFY_MS) {
            match parse_millis(&raw) {
                Some(duration) => config.notification_duration = duration,
                None => config.reject(ENV_NOTIFY_MS, &raw),
            }
        }

        if let Some(raw) = lookup(ENV_QUIT_GRACE_MS) {
            match parse_millis(&raw) {
                Some(duration) => config.quit_grace = duration,
                None => config.reject(ENV_QUIT_GRACE_MS, &raw),
            }
        }

        if let Some(raw) = lookup(ENV_THEME) {
            match ThemeId::from_name(&raw) {
                Some(theme) => config.initial_theme = theme,
                None => config.reject(ENV_THEME, &raw),
            }
        }

        if let Some(raw) = lookup(ENV_LOG_FILE) {
            if raw.trim().is_empty() {
                config.reject(ENV_LOG_FILE, &raw);
            } else {
                config.log_file = Some(PathBuf::from(raw));
            }
        }

        config
    }

    fn reject(&mut self, key: &str, raw: &str) {
        self.warnings
            .push(format!("Ignoring invalid {}={:?}; using default", key, raw));
    }
}

fn parse_millis(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_shell_config_default() {
        let config = ShellConfig::default();
        assert_eq!(config.notification_duration, Duration::from_millis(3000));
        assert_eq!(config.quit_grace, Duration::from_millis(1000));
        assert_eq!(config.initial_theme, ThemeId::Light);
        assert_eq!(config.tick_rate, Duration::from_millis(250));
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_shell_config_builder() {
        let config = ShellConfig::new()
            .with_notification_duration(Duration::from_millis(10))
            .with_quit_grace(Duration::ZERO)
            .with_initial_theme(ThemeId::Dark)
            .with_tick_rate(Duration::from_millis(16))
            .with_log_file(None);

        assert_eq!(config.notification_duration, Duration::from_millis(10));
        assert_eq!(config.quit_grace, Duration::ZERO);
        assert_eq!(config.initial_theme, ThemeId::Dark);
        assert_eq!(config.tick_rate, Duration::from_millis(16));
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ShellConfig::from_lookup(lookup(&[
            (ENV_NOTIFY_MS, "500"),
            (ENV_QUIT_GRACE_MS, " 20 "),
            (ENV_THEME, "Dark"),
            (ENV_LOG_FILE, "/tmp/shell.log"),
        ]));
        assert_eq!(config.notification_duration, Duration::from_millis(500));
        assert_eq!(config.quit_grace, Duration::from_millis(20));
        assert_eq!(config.initial_theme, ThemeId::Dark);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/shell.log")));
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = ShellConfig::from_lookup(lookup(&[
            (ENV_NOTIFY_MS, "soon"),
            (ENV_QUIT_GRACE_MS, "-1"),
            (ENV_THEME, "solarized"),
        ]));
        assert_eq!(config.notification_duration, DEFAULT_DURATION);
        assert_eq!(config.quit_grace, Duration::from_millis(1000));
        assert_eq!(config.initial_theme, ThemeId::Light);
        assert_eq!(config.warnings.len(), 3);
        assert!(config.warnings[2].contains(ENV_THEME));
    }
}
