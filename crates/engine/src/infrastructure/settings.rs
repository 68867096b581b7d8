//! Environment-driven engine settings.
//!
//! Values come from the process environment, after `.env.local` / `.env` at the
//! repo root have been loaded with [`load_dotenv_from_repo_root`].
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `MODELGRAPH_SNAPSHOT` | path to a JSON snapshot | `modelgraph.json` |
//! | `MODELGRAPH_KIND` | `all`, `content`, `media`, `member` | `all` |
//! | `MODELGRAPH_OUTPUT` | `summary`, `json` | `summary` |

use std::path::PathBuf;

use modelgraph_domain::ItemKind;

pub const SNAPSHOT_VAR: &str = "MODELGRAPH_SNAPSHOT";
pub const KIND_VAR: &str = "MODELGRAPH_KIND";
pub const OUTPUT_VAR: &str = "MODELGRAPH_OUTPUT";

const DEFAULT_SNAPSHOT: &str = "modelgraph.json";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{variable} has invalid value \"{value}\" (expected one of: {expected})")]
    InvalidValue {
        variable: &'static str,
        value: String,
        expected: &'static str,
    },
}

// ============================================================================
// Build scope
// ============================================================================

/// Which definitions a run builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildScope {
    /// Content, media and member together
    #[default]
    All,
    /// A single collection
    Kind(ItemKind),
}

impl std::fmt::Display for BuildScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildScope::All => write!(f, "all"),
            BuildScope::Kind(kind) => write!(f, "{}", kind.as_str()),
        }
    }
}

impl std::str::FromStr for BuildScope {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(BuildScope::All),
            // Elements have no collection of their own
            other => match other.parse::<ItemKind>() {
                Ok(kind) if kind.category().is_some() => Ok(BuildScope::Kind(kind)),
                _ => Err(()),
            },
        }
    }
}

// ============================================================================
// Output format
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per type
    #[default]
    Summary,
    /// The model graph as JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Summary => write!(f, "summary"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" | "text" | "" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub snapshot_path: PathBuf,
    pub scope: BuildScope,
    pub output: OutputFormat,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT),
            scope: BuildScope::default(),
            output: OutputFormat::default(),
        }
    }
}

impl EngineSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        if let Some(path) = lookup(SNAPSHOT_VAR).filter(|p| !p.trim().is_empty()) {
            settings.snapshot_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(KIND_VAR) {
            settings.scope = value.parse().map_err(|_| SettingsError::InvalidValue {
                variable: KIND_VAR,
                value,
                expected: "all, content, media, member",
            })?;
        }

        if let Some(value) = lookup(OUTPUT_VAR) {
            settings.output = value.parse().map_err(|_| SettingsError::InvalidValue {
                variable: OUTPUT_VAR,
                value,
                expected: "summary, json",
            })?;
        }

        Ok(settings)
    }

    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = path.into();
        self
    }
}

/// Load `.env.local` then `.env` from the repo root, if present.
///
/// Variables already set in the environment win.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
