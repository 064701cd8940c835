#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod costing;
pub mod graph;
pub mod location;
pub mod matcher;
pub mod util;

pub use graph::{GraphId, TileReader, TileSet};
pub use matcher::{MatchError, PathInfo, RouteMatcher};
