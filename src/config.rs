//! Configuration Management Module for rcz
//!
//! This module handles all configuration-related functionality, including
//! - Locating and reading the commit-type configuration file
//! - Falling back to the embedded default document
//! - Exposing a deterministic view of the configured commit types
//!
//! # Configuration Structure
//!
//! The configuration is a JSON document mapping commit-type keys to their
//! metadata, plus an optional list of allowed scopes:
//!
//! ```json
//! {
//!   "types": { "feat": { "title": "🚀 Enhancements", "semver": "minor" } },
//!   "scopes": ["cli", "core"]
//! }
//! ```
//!
//! # Search Order
//!
//! 1. `changelog.config.json` in the current working directory
//! 2. `.changelog.config.json` in the user's home directory
//! 3. The embedded default document (13 bilingual types)
//!
//! Unreadable candidates are skipped silently; only a parse failure of the
//! winning bytes is reported as an error.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::PathBuf};

use crate::errors::{ConfigError, Result};

/// Config file name looked up in the current working directory.
pub const LOCAL_CONFIG_FILE: &str = "changelog.config.json";

/// Config file name looked up in the user's home directory.
pub const HOME_CONFIG_FILE: &str = ".changelog.config.json";

/// Embedded fallback configuration, parsed on demand when no config file
/// exists at either search location.
const DEFAULT_CONFIG: &str = r#"{
  "types": {
    "build": {
      "semver": "patch",
      "title": "📦 构建相关 / Build"
    },
    "chore": {
      "title": "🏡 杂务处理 / Chore"
    },
    "ci": {
      "title": "🤖 持续集成 / CI"
    },
    "docs": {
      "semver": "patch",
      "title": "📖 文档更新 / Documentation"
    },
    "examples": {
      "title": "🏀 示例更新 / Examples"
    },
    "feat": {
      "semver": "minor",
      "title": "🚀 增强功能 / Enhancements"
    },
    "fix": {
      "semver": "patch",
      "title": "🩹 修复问题 / Fixes"
    },
    "perf": {
      "semver": "patch",
      "title": "🔥 性能优化 / Performance"
    },
    "refactor": {
      "semver": "patch",
      "title": "💅 代码重构 / Refactors"
    },
    "style": {
      "title": "🎨 代码风格 / Styles"
    },
    "test": {
      "title": "✅ 测试用例 / Tests"
    },
    "types": {
      "semver": "patch",
      "title": "🌊 类型定义 / Types"
    },
    "wip": {
      "title": "🚧 未完成 / Work in Progress"
    }
  }
}"#;

/// Declared semantic-versioning impact of a commit type.
///
/// Carried through from the configuration for display/tooling purposes;
/// rcz itself performs no version computation.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SemverImpact {
    Patch,
    Minor,
    Major,
}

/// Metadata attached to a single commit-type key.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CommitType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    /// Label shown in the type picker. Its first character doubles as the
    /// emoji prefix in the rendered commit message.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semver: Option<SemverImpact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed configuration: commit types keyed by their short identifier, plus
/// an ordered list of configured scopes.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    pub types: HashMap<String, CommitType>,

    #[serde(default)]
    pub scopes: Vec<String>,
}

impl Config {
    /// Returns the commit types sorted by key.
    ///
    /// Map iteration order is not reproducible, so the picker always presents
    /// types in sorted-key order.
    #[must_use]
    pub fn sorted_types(&self) -> Vec<(&str, &CommitType)> {
        let mut types: Vec<_> = self
            .types
            .iter()
            .map(|(key, commit_type)| (key.as_str(), commit_type))
            .collect();
        types.sort_by_key(|(key, _)| *key);

        types
    }
}

/// Locates and loads the configuration from its search path.
pub struct ConfigStore {
    cwd: PathBuf,
    home: Option<PathBuf>,
}

impl ConfigStore {
    /// Creates a store rooted at the process working directory and the
    /// user's home directory.
    #[must_use]
    pub fn new() -> Self {
        ConfigStore {
            cwd: PathBuf::from("."),
            home: dirs::home_dir(),
        }
    }

    /// Creates a store with explicit roots, so tests never depend on the
    /// process working directory or environment.
    pub fn with_paths(cwd: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        ConfigStore {
            cwd: cwd.into(),
            home,
        }
    }

    /// Loads the configuration from the first readable candidate, falling
    /// back to the embedded default document.
    ///
    /// # Errors
    /// * If the winning bytes are not valid JSON matching the `Config` shape
    pub fn load(&self) -> Result<Config> {
        let raw = self
            .candidate_paths()
            .into_iter()
            .find_map(|path| fs::read_to_string(path).ok())
            .unwrap_or_else(|| DEFAULT_CONFIG.to_string());

        let config = serde_json::from_str(&raw).map_err(ConfigError::Parse)?;

        Ok(config)
    }

    fn candidate_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.cwd.join(LOCAL_CONFIG_FILE)];

        if let Some(home) = &self.home {
            paths.push(home.join(HOME_CONFIG_FILE));
        }

        paths
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
