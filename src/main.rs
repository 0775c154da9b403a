//! Cube configurator. Runs the cube_configurator app.

use bevy::app::AppExit;
use cube_configurator::{config, ConfiguratorBuilder};

fn main() -> AppExit {
    let _ = dotenvy::dotenv();

    ConfiguratorBuilder::new()
        .window(config::window_config())
        .build()
        .run()
}
