//! The tiled road-network graph model.
//!
//! Graph data is paged in immutable [`GraphTile`]s addressed by
//! [`GraphId`], and reaches the matcher through the read-only
//! [`TileReader`] boundary. Tiles outside the paged region are simply
//! absent; absence is an expected outcome, not a failure.

#[doc(hidden)]
pub mod edge;
#[doc(hidden)]
pub mod id;
#[doc(hidden)]
pub mod node;
#[doc(hidden)]
pub mod reader;
#[doc(hidden)]
#[cfg(test)]
mod test;
#[doc(hidden)]
pub mod tile;

#[doc(inline)]
pub use edge::*;
#[doc(inline)]
pub use id::*;
#[doc(inline)]
pub use node::*;
#[doc(inline)]
pub use reader::*;
#[doc(inline)]
pub use tile::*;
