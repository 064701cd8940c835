use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Travel mode a path is priced for. Selects the [`CostModel`] used
/// while matching.
///
/// [`CostModel`]: crate::costing::CostModel
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum TravelMode {
    #[default]
    Car,
    Bicycle,
    Pedestrian,
}
