//! SDK entry point and builder for composing the configurator app.

use bevy::prelude::*;

use crate::camera::{orbit_camera_plugin, viewport_plugin};
use crate::config::{ConfiguratorSettings, WindowConfig};
use crate::scene::scene_plugin;
use crate::ui::{panel_plugin, shortcut_plugin};

/// Builder for constructing a configurator app with customizable plugins.
pub struct ConfiguratorBuilder {
    settings: ConfiguratorSettings,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_panel: bool,
    enable_orbit_camera: bool,
    enable_shortcuts: bool,
}

impl Default for ConfiguratorBuilder {
    fn default() -> Self {
        let window = WindowConfig::default();
        Self {
            settings: ConfiguratorSettings::default(),
            window_title: window.title,
            window_resolution: window.resolution,
            clear_color: Color::srgb_u8(0xf0, 0xf0, 0xf0),
            enable_panel: true,
            enable_orbit_camera: true,
            enable_shortcuts: true,
        }
    }
}

impl ConfiguratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the compiled-in unit size, spacing, palette and limits.
    pub fn settings(mut self, settings: ConfiguratorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Apply a window title and resolution, e.g. from [`crate::config::window_config`].
    pub fn window(mut self, window: WindowConfig) -> Self {
        self.window_title = window.title;
        self.window_resolution = window.resolution;
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_panel(mut self) -> Self {
        self.enable_panel = false;
        self
    }

    pub fn disable_orbit_camera(mut self) -> Self {
        self.enable_orbit_camera = false;
        self
    }

    pub fn disable_shortcuts(mut self) -> Self {
        self.enable_shortcuts = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                // On the web the canvas tracks its parent, i.e. the page viewport.
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(self.settings)
        .add_plugins((scene_plugin, viewport_plugin));

        if self.enable_panel {
            app.add_plugins(panel_plugin);
        }
        if self.enable_orbit_camera {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_shortcuts {
            app.add_plugins(shortcut_plugin);
        }

        app
    }
}
