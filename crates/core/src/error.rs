use thiserror::Error;

/// Errors that can occur while constructing hex coordinates. These are always
/// caused by the caller handing us inconsistent data, so there's no way to
/// recover from them within this crate.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum HexError {
    /// A fully-specified cube coordinate didn't land on the plane
    /// `q + r + s = 0`. Components are stored as floats so that both integer
    /// and fractional constructors can report the offending values.
    #[error(
        "Invalid cube coordinate ({q}, {r}, {s}); must satisfy q + r + s = 0"
    )]
    InvalidCoordinate { q: f64, r: f64, s: f64 },

    /// A raw direction index outside of `0..6`
    #[error("Invalid hex direction index {0}; must be in [0, 6)")]
    InvalidDirection(usize),
}
