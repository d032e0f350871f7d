//! Configuration discovery and effective settings resolution.
//!
//! mdstyle reads `mdstyle.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults. Fix mode is a CLI-only
//! switch; no config key enables it.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: [&str; 3] = ["mdstyle.toml", "mdstyle.yaml", "mdstyle.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `mdstyle.toml|yaml`.
pub struct MdstyleConfig {
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub output: String,
    pub fix: bool,
    /// Set when a config file exists but could not be parsed.
    pub config_error: Option<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when an `mdstyle.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `MdstyleConfig` from the first config file present under `root`.
///
/// `Ok(None)` when no file exists; `Err` carries a parse/read message.
pub fn load_config(root: &Path) -> Result<Option<MdstyleConfig>, String> {
    for name in CONFIG_FILES {
        let p = root.join(name);
        if !p.exists() {
            continue;
        }
        let s = fs::read_to_string(&p).map_err(|e| format!("{}: {}", p.display(), e))?;
        let cfg = if name.ends_with(".toml") {
            toml::from_str::<MdstyleConfig>(&s).map_err(|e| format!("{}: {}", p.display(), e))?
        } else {
            serde_yaml::from_str::<MdstyleConfig>(&s)
                .map_err(|e| format!("{}: {}", p.display(), e))?
        };
        return Ok(Some(cfg));
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_fix: bool,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (cfg, config_error) = match load_config(&repo_root) {
        Ok(c) => (c.unwrap_or_default(), None),
        Err(e) => (MdstyleConfig::default(), Some(e)),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        output,
        fix: cli_fix,
        config_error,
    }
}
