//! Keeps the camera aspect ratio in step with the window size.
//!
//! Bevy's `camera_system` derives the same aspect from the render target, but
//! only in `PostUpdate`. Setting it here lets `Update` systems see the new
//! aspect in the frame the resize arrives.

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::ConfiguratorSet;

/// Last known window size in logical pixels. Shown in the panel footer.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

pub fn viewport_plugin(app: &mut App) {
    app.add_event::<WindowResized>()
        .init_resource::<ViewportSize>()
        .add_systems(Update, track_viewport_system.in_set(ConfiguratorSet::View));
}

fn track_viewport_system(
    mut resized: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    for event in resized.read() {
        // Minimized windows report zero.
        if event.width <= 0.0 || event.height <= 0.0 {
            continue;
        }
        *viewport = ViewportSize {
            width: event.width,
            height: event.height,
        };
        for mut projection in &mut projections {
            if let Projection::Perspective(ref mut perspective) = *projection {
                perspective.aspect_ratio = event.width / event.height;
            }
        }
        debug!("viewport resized to {}x{}", event.width, event.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(viewport_plugin);
        app.world_mut().spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection::default()),
        ));
        app
    }

    fn aspect(app: &mut App) -> f32 {
        let world = app.world_mut();
        match world.query::<&Projection>().single(world) {
            Projection::Perspective(p) => p.aspect_ratio,
            _ => panic!("expected perspective projection"),
        }
    }

    #[test]
    fn resize_updates_aspect_and_size() {
        let mut app = test_app();

        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width: 1600.0,
            height: 800.0,
        });
        app.update();

        assert_eq!(aspect(&mut app), 2.0);
        assert_eq!(
            *app.world().resource::<ViewportSize>(),
            ViewportSize {
                width: 1600.0,
                height: 800.0
            }
        );
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut app = test_app();
        let before = aspect(&mut app);

        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width: 1600.0,
            height: 0.0,
        });
        app.update();

        assert_eq!(aspect(&mut app), before);
        assert_eq!(*app.world().resource::<ViewportSize>(), ViewportSize::default());
    }
}
