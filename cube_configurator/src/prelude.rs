//! Minimal prelude for SDK consumers.

pub use crate::config::{window_config, ConfiguratorSettings, WindowConfig};
pub use crate::sdk::ConfiguratorBuilder;
pub use crate::tiling::{place_segments, tile_width, PlacedSegment};
pub use crate::ui::{Axis, DimensionInputs, DimensionsChanged};
pub use crate::BlockList;
