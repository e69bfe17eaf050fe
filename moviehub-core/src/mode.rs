//! Runtime mode selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which collaborators back the view.
///
/// Both modes expose the same seams; only the implementations behind
/// [`MovieCatalog`](crate::MovieCatalog) and
/// [`TrendingStore`](crate::TrendingStore) differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    /// TMDB catalog and the configured trending datastore
    #[default]
    Production,
    /// Offline demo catalog and in-memory trending store
    Development,
}

impl RuntimeMode {
    /// Maps the CLI `--demo` switch to a mode.
    pub fn from_demo_flag(demo: bool) -> Self {
        if demo {
            Self::Development
        } else {
            Self::Production
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Development => write!(f, "development"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_flag_selects_development() {
        assert_eq!(RuntimeMode::from_demo_flag(true), RuntimeMode::Development);
        assert_eq!(RuntimeMode::from_demo_flag(false), RuntimeMode::Production);
        assert_eq!(RuntimeMode::default(), RuntimeMode::Production);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_string(&RuntimeMode::Development).unwrap(),
            "\"development\""
        );
        assert_eq!(RuntimeMode::Production.to_string(), "production");
    }
}
