//! Block factory: spawns and despawns one renderable block per segment.

use bevy::prelude::*;

use crate::config::ConfiguratorSettings;
use crate::scene::materials::block_material;
use crate::tiling::PlacedSegment;

/// Marker + data for block entities.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct ConfiguratorBlock {
    pub index: usize,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub offset: u32,
}

/// Where a block sits and how it looks, derived from its segment.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockPlacement {
    pub index: usize,
    pub size: Vec3,
    pub translation: Vec3,
    pub palette_slot: usize,
}

impl BlockPlacement {
    /// Left edge at the segment offset, base resting on y = 0, centered on z.
    pub fn from_segment(segment: &PlacedSegment, height: u32, depth: u32) -> Self {
        let size = Vec3::new(segment.width as f32, height as f32, depth as f32);
        Self {
            index: segment.index,
            size,
            translation: Vec3::new(segment.offset as f32 + size.x / 2.0, size.y / 2.0, 0.0),
            palette_slot: segment.index % 2,
        }
    }
}

/// A live block and the assets it owns.
#[derive(Debug)]
pub struct DisplayedBlock {
    pub entity: Entity,
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub placement: BlockPlacement,
}

pub fn spawn_block(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &ConfiguratorSettings,
    segment: &PlacedSegment,
    height: u32,
    depth: u32,
) -> DisplayedBlock {
    let placement = BlockPlacement::from_segment(segment, height, depth);
    let mesh = meshes.add(Cuboid::from_size(placement.size));
    let material = block_material(
        materials,
        settings.color_for(placement.palette_slot),
        settings.roughness,
    );

    let entity = commands
        .spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(placement.translation),
            Visibility::Visible,
            ConfiguratorBlock {
                index: segment.index,
                width: segment.width,
                height,
                depth,
                offset: segment.offset,
            },
        ))
        .id();

    DisplayedBlock {
        entity,
        mesh,
        material,
        placement,
    }
}

/// Releases the block's mesh and material before despawning it.
pub fn despawn_block(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    block: DisplayedBlock,
) {
    meshes.remove(block.mesh.id());
    materials.remove(block.material.id());
    commands.entity(block.entity).despawn();
}
