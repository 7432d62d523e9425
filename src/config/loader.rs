//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PracticeLogError, PracticeLogResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "practice-log.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from, `None` for built-in defaults
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PracticeLogResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PracticeLogError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load the configuration, then apply environment overrides
///
/// An explicit path must exist. Without one, `./practice-log.toml` is tried,
/// then the user config file, then built-in defaults.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> PracticeLogResult<LoadedConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(PracticeLogError::InvalidConfig {
                    file: path.to_path_buf(),
                    message: "file not found".to_string(),
                });
            }
            Some(path.to_path_buf())
        }
        None => std::iter::once(cwd.join(PROJECT_CONFIG_FILE))
            .chain(user_config_path())
            .find(|p| p.exists()),
    };

    let (config, warnings) = match &path {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        path,
        warnings,
    })
}

/// Apply environment variable overrides (PRACTICE_LOG_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup; empty values are ignored
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(root) = get("PRACTICE_LOG_ROOT") {
        config.scan.root = PathBuf::from(root);
    }

    if let Some(ext) = get("PRACTICE_LOG_EXTENSION") {
        config.scan.extension = ext;
    }

    if let Some(dir) = get("PRACTICE_LOG_OUTPUT_DIR") {
        config.output.dir = PathBuf::from(dir);
    }

    if let Some(remote) = get("PRACTICE_LOG_REMOTE") {
        config.deploy.remote = remote;
    }

    if let Some(branch) = get("PRACTICE_LOG_BRANCH") {
        config.deploy.branch = branch;
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("practice-log").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "scan",
        "root",
        "extension",
        "default_tag",
        "output",
        "dir",
        "filename",
        "deploy",
        "remote",
        "branch",
        "commit_prefix",
        "publish",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_basic() {
        assert_eq!(levenshtein("branch", "branch"), 0);
        assert_eq!(levenshtein("brnch", "branch"), 1);
        assert_eq!(levenshtein("", "dir"), 3);
    }

    #[test]
    fn suggest_key_close_match() {
        assert_eq!(suggest_key("extention"), Some("extension".to_string()));
        assert_eq!(suggest_key("completely_unrelated"), None);
    }
}
