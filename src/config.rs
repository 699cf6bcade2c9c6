//! Configuration loading from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::DEFAULT_CATALOG_URL;

pub const ENV_CATALOG_URL: &str = "PRODUCT_BROWSER_CATALOG_URL";
pub const ENV_DATA_DIR: &str = "PRODUCT_BROWSER_DATA_DIR";
pub const ENV_TIMEOUT_SECS: &str = "PRODUCT_BROWSER_TIMEOUT_SECS";

const DEFAULT_DATA_DIR: &str = "~/.cache/product-browser";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the product browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog_url: String,
    /// Directory the favorites file lives in.
    pub data_dir: PathBuf,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as unset; an unparsable timeout falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let catalog_url = var(ENV_CATALOG_URL).unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let data_dir = var(ENV_DATA_DIR).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let timeout_secs = match var(ENV_TIMEOUT_SECS) {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid {ENV_TIMEOUT_SECS}; using default");
                DEFAULT_TIMEOUT_SECS
            }),
        };

        Self {
            catalog_url,
            data_dir: expand_tilde(&data_dir, resolve_home_dir(&var)),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn expand_tilde(path: &str, home: Option<PathBuf>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };
    if path == "~" {
        return home;
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

fn resolve_home_dir(var: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    var("HOME")
        .or_else(|| var("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[("HOME", "/home/u")]));
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(
            config.data_dir,
            PathBuf::from("/home/u/.cache/product-browser")
        );
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_and_fallbacks() {
        let config = Config::from_lookup(lookup(&[
            (ENV_CATALOG_URL, "http://127.0.0.1:9/products"),
            (ENV_DATA_DIR, "/tmp/pb"),
            (ENV_TIMEOUT_SECS, "5"),
        ]));
        assert_eq!(config.catalog_url, "http://127.0.0.1:9/products");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/pb"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        let config = Config::from_lookup(lookup(&[
            (ENV_CATALOG_URL, "  "),
            (ENV_TIMEOUT_SECS, "soon"),
            ("USERPROFILE", "C:/Users/u"),
        ]));
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(
            config.data_dir,
            PathBuf::from("C:/Users/u").join(".cache/product-browser")
        );
    }

    #[test]
    fn tilde_without_home_is_kept_verbatim() {
        let config = Config::from_lookup(lookup(&[(ENV_DATA_DIR, "~/data")]));
        assert_eq!(config.data_dir, PathBuf::from("~/data"));
    }
}
