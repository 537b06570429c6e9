use thiserror::Error;

use super::point::Point;

/// Errors raised while building galaxy data or resolving sectors.
#[derive(Error, Debug)]
pub enum NavError {
    /// System name not present in the registry
    #[error("unknown system '{0}'; short system name expected")]
    UnknownSystem(String),
    /// Point outside the sector grid
    #[error("sector ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: i32, y: i32, size: i32 },
    /// Unparseable sector notation
    #[error("invalid sector '{0}'")]
    InvalidSector(String),
    /// Legacy numeric id that maps to no registered system
    #[error("invalid sector id {0}")]
    InvalidSectorId(i32),
    /// Galaxy content failed validation
    #[error("inconsistent galaxy: {0}")]
    InconsistentGalaxy(String),
    /// Galaxy content file could not be parsed
    #[error("galaxy file error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    NoRoute(#[from] NoRoute),
}

/// Type alias for Results using NavError
pub type NavResult<T> = Result<T, NavError>;

/// Why a planning call produced no route.
///
/// None of these are faults: planning is deterministic, so retrying with the
/// same inputs gives the same answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoRoute {
    #[error("no jump route from {from} to {to}")]
    Disconnected { from: String, to: String },
    #[error("no clear path in {system} from {from} to {to}")]
    Blocked { system: String, from: Point, to: Point },
    #[error("route search deadline exceeded")]
    DeadlineExceeded,
    #[error("itinerary has no stops")]
    EmptyItinerary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_system_message_names_system() {
        let err = NavError::UnknownSystem("vulcan".to_string());
        assert_eq!(
            err.to_string(),
            "unknown system 'vulcan'; short system name expected"
        );
    }

    #[test]
    fn blocked_message_names_leg() {
        let err = NoRoute::Blocked {
            system: "dau".to_string(),
            from: Point::new(1, 2),
            to: Point::new(3, 4),
        };
        assert_eq!(err.to_string(), "no clear path in dau from (1, 2) to (3, 4)");
    }

    #[test]
    fn no_route_converts_into_nav_error() {
        let err: NavError = NoRoute::EmptyItinerary.into();
        assert!(matches!(err, NavError::NoRoute(NoRoute::EmptyItinerary)));
        assert_eq!(err.to_string(), "itinerary has no stops");
    }
}
