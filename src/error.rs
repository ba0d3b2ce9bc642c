use thiserror::Error;

/// Errors raised while building or querying the LED wiring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    /// The selected stencil has no rows
    #[error("stencil has no rows")]
    EmptyStencil,

    /// The first stencil row is empty, so the grid has no columns
    #[error("stencil rows are empty")]
    EmptyRow,

    /// A stencil row does not match the width of the first row
    #[error("stencil row {row} is {found} bytes long, expected {expected}")]
    RaggedStencil {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The configured language has no stencil
    #[error("no stencil configured for language '{0}'")]
    UnknownLanguage(String),

    /// Coordinate outside the layout table
    #[error("invalid coordinate ({x}, {y}) for a {width}x{height} display")]
    InvalidCoordinate {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Linear position outside the visible grid
    #[error("invalid linear index {index}, display has {led_count} LEDs")]
    InvalidLinearIndex { index: usize, led_count: usize },

    /// Minute marker outside 1..=4
    #[error("invalid minute marker {0}, expected 1-4")]
    InvalidMinute(u8),
}

pub type Result<T> = std::result::Result<T, WiringError>;
