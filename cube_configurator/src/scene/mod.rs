pub(crate) mod blocks;
pub(crate) mod materials;
pub(crate) mod reconcile;
mod setup;

use bevy::prelude::*;

use crate::config::ConfiguratorSettings;
use crate::ui::{DimensionInputs, DimensionsChanged};
use crate::ConfiguratorSet;

pub use blocks::{BlockPlacement, ConfiguratorBlock, DisplayedBlock};
pub use reconcile::{reconcile_block_list, reconcile_blocks, BlockList, ReconcileStats};
pub use setup::{request_initial_build, setup_scene};

/// Settings, inputs, block list and the reconcile system. Needs no window.
pub fn scene_plugin(app: &mut App) {
    app.init_resource::<ConfiguratorSettings>()
        .init_resource::<DimensionInputs>()
        .init_resource::<BlockList>()
        .add_event::<DimensionsChanged>()
        .configure_sets(
            Update,
            (
                ConfiguratorSet::Input,
                ConfiguratorSet::Reconcile,
                ConfiguratorSet::View,
            )
                .chain(),
        )
        .add_systems(Startup, (setup_scene, request_initial_build, log_settings))
        .add_systems(Update, reconcile_blocks.in_set(ConfiguratorSet::Reconcile));
}

fn log_settings(settings: Res<ConfiguratorSettings>) {
    info!(
        "configurator: unit {} spacing {} floor {} default {}",
        settings.unit_size, settings.spacing, settings.min_dimension, settings.default_dimension
    );
}
