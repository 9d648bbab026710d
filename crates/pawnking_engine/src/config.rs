//! Engine configuration
//!
//! Settings a collaborator may tune per game. With the `serde` feature the
//! struct can be embedded in a settings file; missing fields take their
//! defaults.

use crate::constants::{DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};
use crate::error::{EngineError, EngineResult};
use crate::move_gen::GeneratorConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Plies searched below each root move
    pub depth: u32,
    /// Let bishops, rooks and queens move
    pub sliding_pieces: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_SEARCH_DEPTH,
            sliding_pieces: false,
        }
    }
}

impl EngineConfig {
    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            sliding_pieces: self.sliding_pieces,
        }
    }

    /// Reject depths the search cannot finish in reasonable time
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidDepth`] when `depth` exceeds [`MAX_SEARCH_DEPTH`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.depth > MAX_SEARCH_DEPTH {
            return Err(EngineError::InvalidDepth {
                depth: self.depth,
                max: MAX_SEARCH_DEPTH,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.depth, 5);
        assert!(!config.generator().sliding_pieces);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_depth_above_maximum_is_rejected() {
        let config = EngineConfig {
            depth: MAX_SEARCH_DEPTH + 1,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(EngineError::InvalidDepth {
                depth: MAX_SEARCH_DEPTH + 1,
                max: MAX_SEARCH_DEPTH
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_missing_fields_take_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"sliding_pieces": true}"#).unwrap();
        assert_eq!(config.depth, DEFAULT_SEARCH_DEPTH);
        assert!(config.sliding_pieces);
    }
}
