use anyhow::Context;

/// Runtime settings, read once from the environment at startup.
///
/// | variable | default |
/// |----------|---------|
/// | `BIND_ADDR` | [`abv_core::DEFAULT_BIND_ADDR`] |
/// | `ABV_WORKERS` | [`abv_core::DEFAULT_WORKERS`] |
/// | `ABV_MAX_SESSIONS` | [`abv_core::DEFAULT_MAX_SESSIONS`] |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub workers: usize,
    pub sessions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: abv_core::DEFAULT_BIND_ADDR.to_string(),
            workers: abv_core::DEFAULT_WORKERS,
            sessions: abv_core::DEFAULT_MAX_SESSIONS,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let count = |key: &str, default: usize| -> anyhow::Result<usize> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .with_context(|| format!("{} must be a positive integer, got {:?}", key, raw)),
            }
        };
        Ok(Self {
            bind: lookup("BIND_ADDR").unwrap_or(defaults.bind),
            workers: count("ABV_WORKERS", defaults.workers)?,
            sessions: count("ABV_MAX_SESSIONS", defaults.sessions)?,
        })
    }
}
