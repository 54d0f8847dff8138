//! Environment bootstrap for host processes.
//!
//! The host calls [`bootstrap_env`] once during startup, before any tool
//! runs, so that configuration from a local `.env` file is available as
//! process environment variables. Loading is explicit and idempotent:
//! variables already present in the environment are never overridden.

use std::{collections::HashMap, fs, path::Path};

/// Parsed configuration, key to value.
pub type ConfigMap = HashMap<String, String>;

/// Environment bootstrap error.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse env-file content into a [`ConfigMap`].
///
/// Accepts `KEY=VALUE` lines with optional `export ` prefix and optional
/// single or double quotes around the value. Blank lines and `#` comments
/// are ignored. Lines without `=` are skipped with a warning.
#[must_use]
pub fn parse_env(content: &str) -> ConfigMap {
    let mut map = ConfigMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            tracing::warn!(line, "skipping env line without '='");
            continue;
        };

        map.insert(key.trim().to_owned(), unquote(value.trim()).to_owned());
    }

    map
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 {
        let stripped = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
        if let Some(inner) = stripped {
            return inner;
        }
    }
    value
}

/// Load and parse an env file.
///
/// # Errors
/// Returns error if the file cannot be read.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<ConfigMap, EnvError> {
    Ok(parse_env(&fs::read_to_string(path)?))
}

/// Apply a [`ConfigMap`] to the process environment.
///
/// Variables already set in the environment win; applying the same map
/// twice leaves the environment unchanged. Must be called during
/// single-threaded startup.
#[allow(unsafe_code)]
pub fn apply_env(map: &ConfigMap) {
    for (key, value) in map {
        if std::env::var_os(key).is_none() {
            // SAFETY: contract above restricts calls to single-threaded startup.
            unsafe { std::env::set_var(key, value) };
        }
    }
}

/// Read `./.env` if present and apply it to the process environment.
///
/// A missing file is a no-op. Returns the parsed map so hosts can log or
/// inspect what was loaded.
///
/// # Errors
/// Returns error if the file exists but cannot be read.
pub fn bootstrap_env() -> Result<ConfigMap, EnvError> {
    bootstrap_env_from(".")
}

/// Read `.env` from `dir` if present and apply it to the process
/// environment. See [`bootstrap_env`].
///
/// # Errors
/// Returns error if the file exists but cannot be read.
pub fn bootstrap_env_from(dir: impl AsRef<Path>) -> Result<ConfigMap, EnvError> {
    let path = dir.as_ref().join(".env");
    if !path.exists() {
        return Ok(ConfigMap::new());
    }

    let map = load_env_file(&path)?;
    apply_env(&map);
    tracing::debug!(entries = map.len(), "environment bootstrapped from .env");
    Ok(map)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let map = parse_env("FOO=bar\nBAZ=qux\n");
        assert_eq!(map.get("FOO").map(String::as_str), Some("bar"));
        assert_eq!(map.get("BAZ").map(String::as_str), Some("qux"));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let map = parse_env("# comment\n\nFOO=bar\n   \n# another\n");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_parse_export_prefix_and_quotes() {
        let map = parse_env("export TOKEN=\"abc 123\"\nNAME='alice'\n");
        assert_eq!(map.get("TOKEN").map(String::as_str), Some("abc 123"));
        assert_eq!(map.get("NAME").map(String::as_str), Some("alice"));
    }

    #[test]
    fn test_parse_skips_lines_without_equals() {
        let map = parse_env("NOT A PAIR\nFOO=bar\n");
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("FOO"));
    }

    #[test]
    fn test_parse_keeps_empty_value() {
        let map = parse_env("EMPTY=\n");
        assert_eq!(map.get("EMPTY").map(String::as_str), Some(""));
    }

    #[test]
    fn test_load_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "FROM_FILE=yes").unwrap();

        let map = load_env_file(file.path()).unwrap();
        assert_eq!(map.get("FROM_FILE").map(String::as_str), Some("yes"));
    }

    #[test]
    fn test_load_env_file_missing_is_error() {
        assert!(load_env_file("/nonexistent/.env").is_err());
    }

    #[test]
    fn test_apply_env_sets_and_never_overrides() {
        let key = format!("SESSION_TOOLS_TEST_{}", std::process::id());

        let mut map = ConfigMap::new();
        map.insert(key.clone(), "first".to_owned());
        apply_env(&map);
        assert_eq!(std::env::var(&key).unwrap(), "first");

        map.insert(key.clone(), "second".to_owned());
        apply_env(&map);
        assert_eq!(std::env::var(&key).unwrap(), "first");
    }

    #[test]
    fn test_bootstrap_without_env_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();

        let map = bootstrap_env_from(dir.path()).unwrap();

        assert!(map.is_empty());
    }

    #[test]
    fn test_bootstrap_loads_and_applies_env_file() {
        let key = format!("SESSION_TOOLS_BOOTSTRAP_{}", std::process::id());
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), format!("{key}=from-file\n")).unwrap();

        let map = bootstrap_env_from(dir.path()).unwrap();

        assert_eq!(map.get(&key).map(String::as_str), Some("from-file"));
        assert_eq!(std::env::var(&key).unwrap(), "from-file");
    }

    #[test]
    fn test_apply_env_respects_existing_vars() {
        // PATH is always present; apply_env must leave it alone.
        let before = std::env::var_os("PATH").unwrap();

        let mut map = ConfigMap::new();
        map.insert("PATH".to_owned(), "/bogus".to_owned());
        apply_env(&map);

        assert_eq!(std::env::var_os("PATH").unwrap(), before);
    }
}
