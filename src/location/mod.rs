//! Correlation inputs: edge-snapped locations and the trusted shape.
//!
//! Candidate correlation itself is upstream of this crate; the types
//! here only carry its result — a set of plausible directed edges per
//! input location, each with a fractional offset along the edge.

#[doc(hidden)]
pub mod path;
#[doc(hidden)]
pub mod shape;

#[doc(inline)]
pub use path::*;
#[doc(inline)]
pub use shape::*;
