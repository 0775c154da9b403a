//! Keeps the displayed block list index-aligned with the current segments.

use bevy::prelude::*;

use crate::config::ConfiguratorSettings;
use crate::scene::blocks::{despawn_block, spawn_block, DisplayedBlock};
use crate::tiling::{place_segments, tile_width, PlacedSegment};
use crate::ui::{DimensionInputs, DimensionsChanged};

/// Ordered list of live blocks. `blocks[i]` always covers segment `i`.
#[derive(Resource, Default, Debug)]
pub struct BlockList {
    pub blocks: Vec<DisplayedBlock>,
}

impl BlockList {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Counts from one reconciliation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub spawned: usize,
    pub replaced: usize,
    pub trimmed: usize,
}

/// Appends, replaces and trims blocks until `list` matches `segments`.
///
/// Every block still covered by a segment is replaced, even if its geometry
/// is unchanged. Trimmed and replaced blocks release their assets first.
#[allow(clippy::too_many_arguments)]
pub fn reconcile_block_list(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &ConfiguratorSettings,
    list: &mut BlockList,
    segments: &[PlacedSegment],
    height: u32,
    depth: u32,
) -> ReconcileStats {
    let mut stats = ReconcileStats::default();
    let mut previous = std::mem::take(&mut list.blocks).into_iter();

    for segment in segments {
        match previous.next() {
            Some(old) => {
                despawn_block(commands, meshes, materials, old);
                stats.replaced += 1;
            }
            None => stats.spawned += 1,
        }
        let block = spawn_block(commands, meshes, materials, settings, segment, height, depth);
        list.blocks.push(block);
    }

    for old in previous {
        despawn_block(commands, meshes, materials, old);
        stats.trimmed += 1;
    }

    stats
}

/// Rebuilds the row whenever the dimension inputs change.
pub fn reconcile_blocks(
    mut commands: Commands,
    mut events: EventReader<DimensionsChanged>,
    inputs: Res<DimensionInputs>,
    settings: Res<ConfiguratorSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut list: ResMut<BlockList>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let dims = inputs.dimensions();
    let widths = tile_width(dims.width, settings.unit_size);
    let segments = place_segments(&widths, settings.spacing);

    let stats = reconcile_block_list(
        &mut commands,
        &mut meshes,
        &mut materials,
        &settings,
        &mut list,
        &segments,
        dims.height,
        dims.depth,
    );

    debug!(
        "reconciled {}x{}x{} into {} segments (spawned {}, replaced {}, trimmed {})",
        dims.width,
        dims.height,
        dims.depth,
        segments.len(),
        stats.spawned,
        stats.replaced,
        stats.trimmed,
    );
}
