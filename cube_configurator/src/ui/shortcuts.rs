//! Keyboard shortcuts. `R` resets all dimensions.

use bevy::prelude::*;

use crate::ui::inputs::{DimensionInputs, DimensionsChanged};
use crate::ConfiguratorSet;

pub fn shortcut_plugin(app: &mut App) {
    app.add_systems(Update, reset_shortcut_system.in_set(ConfiguratorSet::Input));
}

fn reset_shortcut_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut inputs: ResMut<DimensionInputs>,
    mut changed: EventWriter<DimensionsChanged>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    inputs.reset();
    changed.send(DimensionsChanged);
}
