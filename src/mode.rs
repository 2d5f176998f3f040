use serde::{Deserialize, Serialize};

/// the production/development toggle for a single invocation
///
/// set once from the cli and passed down explicitly, never read back out of
/// the environment

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Production,
    #[default]
    Development,
}

impl BuildMode {
    pub fn from_flag(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// prefix for urls in the emitted pages
    pub fn public_path(&self) -> &'static str {
        match self {
            Self::Production => "./",
            Self::Development => "/",
        }
    }

    pub fn minify(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn hot_reload(&self) -> bool {
        matches!(self, Self::Development)
    }
}
