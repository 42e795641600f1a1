// Logger setup. Diagnostics go to stderr through `env_logger` and stay
// quiet by default so they do not clutter the interactive menu.

use crate::config::Config;
use anyhow::{Context, Result};

pub fn init(config: &Config) -> Result<()> {
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .format_timestamp(None)
        .try_init()
        .context("Failed to initialise logger")?;
    log::debug!("logger initialised with filter {:?}", config.log_filter);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_refused() {
        let config = Config {
            log_filter: "not a=valid=filter".into(),
            ..Config::default()
        };
        init(&config).unwrap();
        let err = init(&Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to initialise logger");
    }
}
