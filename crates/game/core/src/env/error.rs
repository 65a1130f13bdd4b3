//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing knowledge-base data.
///
/// A missing oracle means the runtime was assembled without it. A missing
/// entry only means the current decision has no candidate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("SkillOracle not available")]
    SkillsNotAvailable,

    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("MapOracle not available")]
    MapsNotAvailable,

    #[error("skill '{0}' not found")]
    SkillNotFound(String),

    #[error("item '{0}' not found")]
    ItemNotFound(String),

    #[error("map '{0}' not found")]
    MapNotFound(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            SkillsNotAvailable | ItemsNotAvailable | MapsNotAvailable => ErrorSeverity::Fatal,
            SkillNotFound(_) | ItemNotFound(_) | MapNotFound(_) => ErrorSeverity::Skipped,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SkillsNotAvailable => "ORACLE_SKILLS_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            MapsNotAvailable => "ORACLE_MAPS_NOT_AVAILABLE",
            SkillNotFound(_) => "ORACLE_SKILL_NOT_FOUND",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            MapNotFound(_) => "ORACLE_MAP_NOT_FOUND",
        }
    }
}
