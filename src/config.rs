// Runtime configuration. The tool takes no command line arguments, so the
// few knobs it has are read from the environment.

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Filter handed to `env_logger`, e.g. `debug` or `student_roster=info`.
    pub log_filter: String,
    /// Whether messages are printed with ANSI colours.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Build the configuration from `ROSTER_LOG` and `NO_COLOR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("ROSTER_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());
        // https://no-color.org: any non-empty value disables colour.
        let color = lookup("NO_COLOR").map_or(true, |v| v.is_empty());
        Config { log_filter, color }
    }
}
