//! Pluggable per-mode traversal costing.
//!
//! The matcher prices edges as it commits them, through a [`CostModel`]
//! selected by [`TravelMode`] from the [`ModeCosting`] registry. You may
//! register your own model per mode; the defaults are deliberately
//! simple speed-based models.
//!
//! ```rust
//! use retrace::costing::{ModeCosting, TravelMode};
//!
//! // Default strategies, one model per mode
//! let costing = ModeCosting::default();
//! assert!(costing.model(TravelMode::Bicycle).is_some());
//! ```

#[doc(hidden)]
pub mod default;
#[doc(hidden)]
pub mod mode;
#[doc(hidden)]
pub mod model;
#[doc(hidden)]
#[cfg(test)]
mod test;

#[doc(inline)]
pub use default::*;
#[doc(inline)]
pub use mode::*;
#[doc(inline)]
pub use model::*;
