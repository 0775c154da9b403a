mod inputs;
mod panel;
mod shortcuts;

pub use inputs::{
    clamp_dimension, parse_dimension, Axis, DimensionInputs, Dimensions, DimensionsChanged,
    InputError,
};
pub use panel::{
    apply_panel_edits, panel_edits_plugin, panel_plugin, PanelEdit, PanelEdits, UiPointerCapture,
};
pub use shortcuts::shortcut_plugin;
