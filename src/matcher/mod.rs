//! The edge-walking matcher.
//!
//! Reconstructs the exact directed-edge sequence behind a trusted route
//! shape by walking the graph from each origin candidate, comparing
//! edge end-node positions against the shape within a length-bounded
//! tolerance window, and backtracking on dead ends. At most one
//! consistent sequence is produced; anything else is a no-match, left
//! for the caller's tolerant fallback.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod former;
#[doc(hidden)]
pub mod path;
#[doc(hidden)]
pub(crate) mod termination;
#[doc(hidden)]
pub mod tolerance;
#[doc(hidden)]
pub(crate) mod walker;

#[doc(inline)]
pub use error::*;
#[doc(inline)]
pub use former::*;
#[doc(inline)]
pub use path::*;
#[doc(inline)]
pub use tolerance::*;
