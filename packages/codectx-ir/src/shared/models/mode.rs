//! Pruning mode for resolved imports

use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Pruning policy controlling how much of a resolved import is retained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Keep everything, including the import's own import list
    Full,
    /// Drop declarations whose name starts with an underscore
    #[default]
    Intelligent,
    /// Keep only the names bound by the triggering from-import
    Pruned,
}

impl Mode {
    /// Lenient parse: unrecognized input silently coerces to `Intelligent`
    pub fn from_cli(input: &str) -> Mode {
        match input.to_ascii_lowercase().as_str() {
            "full" => Mode::Full,
            "intelligent" => Mode::Intelligent,
            "pruned" => Mode::Pruned,
            other => {
                tracing::debug!(mode = other, "unrecognized mode, using intelligent");
                Mode::Intelligent
            }
        }
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::from_cli(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Full => "full",
            Mode::Intelligent => "intelligent",
            Mode::Pruned => "pruned",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_modes() {
        assert_eq!(Mode::from_cli("full"), Mode::Full);
        assert_eq!(Mode::from_cli("PRUNED"), Mode::Pruned);
        assert_eq!(Mode::from_cli("intelligent"), Mode::Intelligent);
    }

    #[test]
    fn test_unrecognized_mode_defaults_to_intelligent() {
        assert_eq!(Mode::from_cli("aggressive"), Mode::Intelligent);
        assert_eq!(Mode::from_cli(""), Mode::Intelligent);
    }
}
