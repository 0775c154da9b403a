//! Cube configurator — width, height and depth inputs tiled into a row of
//! fixed-size 3D blocks with alternating colors.
//!
//! Library root: tiling, scene reconciliation, UI and the app builder.

mod camera;
pub mod config;
mod scene;
pub mod tiling;
mod ui;

pub mod prelude;
pub mod sdk;

use bevy::prelude::*;

pub use camera::{OrbitCamera, ViewportSize};
pub use scene::{
    reconcile_block_list, scene_plugin, BlockList, BlockPlacement, ConfiguratorBlock,
    DisplayedBlock, ReconcileStats,
};
pub use sdk::ConfiguratorBuilder;
pub use ui::{
    apply_panel_edits, clamp_dimension, parse_dimension, Axis, DimensionInputs, Dimensions,
    DimensionsChanged, InputError, PanelEdit, PanelEdits,
};

/// Per-frame ordering: inputs settle, the block list is reconciled, then the
/// camera and viewport update. Rendering follows `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfiguratorSet {
    Input,
    Reconcile,
    View,
}
