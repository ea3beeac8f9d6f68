use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub packages_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads settings through `get` instead of the process environment so
    /// tests never touch global state.
    ///
    /// `FITNESS_TRACKER_LOG_LEVEL` wins over `RUST_LOG`; both default to `info`.
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let log_level = get("FITNESS_TRACKER_LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.into());
        let packages_path = get("FITNESS_TRACKER_PACKAGES")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Self {
            log_level,
            packages_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_env_with(|_| None);
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.packages_path.is_none());
    }

    #[test]
    fn own_log_level_wins_over_rust_log() {
        let get = |k: &str| match k {
            "FITNESS_TRACKER_LOG_LEVEL" => Some("debug".into()),
            "RUST_LOG" => Some("warn".into()),
            _ => None,
        };
        assert_eq!(Config::from_env_with(get).log_level, "debug");
    }

    #[test]
    fn falls_back_to_rust_log() {
        let get = |k: &str| match k {
            "RUST_LOG" => Some("trace".into()),
            "FITNESS_TRACKER_PACKAGES" => Some("/tmp/p.json".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get);
        assert_eq!(cfg.log_level, "trace");
        assert_eq!(cfg.packages_path, Some(PathBuf::from("/tmp/p.json")));
    }
}
