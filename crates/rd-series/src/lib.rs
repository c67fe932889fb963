//! rd-series: standard resistor series tables and value lookup.
//!
//! Models the seven IEC 60063 E-series (E3 through E192) as two shared base
//! tables sampled at a fixed stride, and provides the two lookup operations
//! the divider solver needs:
//! - decade normalization of an arbitrary positive resistance into the
//!   table's native window, and
//! - bracket search for the adjacent standard values around a target.

pub mod bracket;
pub mod error;
pub mod normalize;
pub mod series;

// Re-exports
pub use bracket::Bracket;
pub use error::{SeriesError, SeriesResult};
pub use normalize::NormalizedValue;
pub use series::{ParseSeriesError, Series, SeriesTable};
