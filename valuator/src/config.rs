use std::path::PathBuf;

pub(crate) const DEFAULT_PORT: u16 = 8080;

/// Server settings, read once at startup.
#[derive(Clone, Debug)]
pub(crate) struct Config {
    pub(crate) port: u16,
    pub(crate) static_dir: PathBuf,
    /// Output directory of the wasm client build.
    pub(crate) pkg_dir: PathBuf,
    pub(crate) environment: String,
    /// Turns off browser caching of static files.
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let environment = lookup("VALUATOR_ENV").unwrap_or_else(|| "development".to_string());
        let debug = match lookup("VALUATOR_DEBUG") {
            Some(flag) => matches!(flag.as_str(), "1" | "true" | "True"),
            None => environment == "development",
        };
        Self {
            port,
            static_dir: lookup("VALUATOR_STATIC_DIR")
                .unwrap_or_else(|| "./valuator/static".to_string())
                .into(),
            pkg_dir: lookup("VALUATOR_PKG_DIR")
                .unwrap_or_else(|| "./target/site/pkg".to_string())
                .into(),
            environment,
            debug,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("./valuator/static"));
        assert_eq!(config.pkg_dir, PathBuf::from("./target/site/pkg"));
        assert_eq!(config.environment, "development");
        assert!(config.debug);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("PORT", "3000"),
            ("VALUATOR_ENV", "production"),
            ("VALUATOR_STATIC_DIR", "/srv/static"),
        ]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert!(!config.debug);

        assert!(self::config(&[("VALUATOR_ENV", "production"), ("VALUATOR_DEBUG", "true")]).debug);
        assert!(!self::config(&[("VALUATOR_DEBUG", "0")]).debug);
        assert_eq!(self::config(&[("PORT", "http")]).port, DEFAULT_PORT);
    }
}
