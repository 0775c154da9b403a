//! Control panel: dimension sliders, readouts, text entry, reset and stats.

use std::collections::HashMap;

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::camera::ViewportSize;
use crate::config::ConfiguratorSettings;
use crate::scene::BlockList;
use crate::ui::inputs::{Axis, DimensionInputs, DimensionsChanged};
use crate::ConfiguratorSet;

/// Set while the pointer is over the panel so camera drags are ignored.
#[derive(Resource, Default, Debug)]
pub struct UiPointerCapture(pub bool);

/// One user action on the panel.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEdit {
    Slider(Axis, u32),
    Text(Axis, String),
    Reset,
}

/// Edits collected by the panel this frame, applied by `apply_panel_edits_system`.
#[derive(Resource, Default, Debug)]
pub struct PanelEdits(pub Vec<PanelEdit>);

pub fn panel_plugin(app: &mut App) {
    app.add_plugins(EguiPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .init_resource::<UiPointerCapture>()
        .add_systems(Update, panel_system.in_set(ConfiguratorSet::Input))
        .add_plugins(panel_edits_plugin);
}

/// Applies queued panel edits. Needs no egui context.
pub fn panel_edits_plugin(app: &mut App) {
    app.init_resource::<PanelEdits>().add_systems(
        Update,
        apply_panel_edits_system
            .after(panel_system)
            .in_set(ConfiguratorSet::Input),
    );
}

/// Applies `edits` in order. Returns whether anything was applied.
pub fn apply_panel_edits(
    inputs: &mut DimensionInputs,
    edits: impl IntoIterator<Item = PanelEdit>,
) -> bool {
    let mut dirty = false;
    for edit in edits {
        match edit {
            PanelEdit::Slider(axis, value) => {
                inputs.set(axis, f64::from(value));
            }
            PanelEdit::Text(axis, text) => {
                inputs.set_text(axis, &text);
            }
            PanelEdit::Reset => inputs.reset(),
        }
        dirty = true;
    }
    dirty
}

fn apply_panel_edits_system(
    mut edits: ResMut<PanelEdits>,
    mut inputs: ResMut<DimensionInputs>,
    mut changed: EventWriter<DimensionsChanged>,
) {
    if edits.0.is_empty() {
        return;
    }
    if apply_panel_edits(&mut inputs, edits.0.drain(..)) {
        changed.send(DimensionsChanged);
    }
}

#[allow(clippy::too_many_arguments)]
fn panel_system(
    mut contexts: EguiContexts,
    settings: Res<ConfiguratorSettings>,
    inputs: Res<DimensionInputs>,
    mut drafts: Local<HashMap<Axis, String>>,
    list: Res<BlockList>,
    viewport: Option<Res<ViewportSize>>,
    diagnostics: Res<DiagnosticsStore>,
    mut capture: ResMut<UiPointerCapture>,
    mut edits: ResMut<PanelEdits>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    let ctx = contexts.ctx_mut();

    egui::Window::new("Configurator")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(250, 250, 250, 230))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(ctx, |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(40, 40, 50));

            egui::Grid::new("dimensions")
                .num_columns(4)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    for axis in Axis::ALL {
                        ui.label(axis.id());

                        let mut value = inputs.get(axis);
                        let slider = ui.add(
                            egui::Slider::new(&mut value, 0..=settings.slider_max)
                                .show_value(false),
                        );
                        if slider.changed() {
                            edits.0.push(PanelEdit::Slider(axis, value));
                        }

                        ui.push_id(format!("{}-value", axis.id()), |ui| {
                            ui.label(
                                egui::RichText::new(inputs.readout(axis))
                                    .color(egui::Color32::from_rgb(30, 90, 200)),
                            );
                        });

                        let draft = drafts
                            .entry(axis)
                            .or_insert_with(|| inputs.readout(axis).to_string());
                        let entry = ui.add(
                            egui::TextEdit::singleline(draft)
                                .id_salt(format!("{}-entry", axis.id()))
                                .desired_width(48.0),
                        );
                        if entry.lost_focus() && draft.as_str() != inputs.readout(axis) {
                            edits.0.push(PanelEdit::Text(axis, draft.clone()));
                        }
                        if !entry.has_focus() {
                            draft.clear();
                            draft.push_str(inputs.readout(axis));
                        }

                        ui.end_row();
                    }
                });

            ui.add_space(6.0);
            let reset = ui.push_id("reset-btn", |ui| ui.button("Reset")).inner;
            if reset.clicked() {
                edits.0.push(PanelEdit::Reset);
            }

            ui.separator();
            ui.label(format!("Blocks  {}", list.len()));
            if let Some(size) = viewport.filter(|v| v.width > 0.0) {
                ui.label(format!("View  {:.0}x{:.0}", size.width, size.height));
            }
            ui.label(format!("FPS  {fps:.0}"));
        });

    capture.0 = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
}
