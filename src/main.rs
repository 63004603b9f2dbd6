use bevy::prelude::*;
use nectar_garden::plugins::core::CorePlugin;
use nectar_garden::plugins::garden::GardenPlugin;
use nectar_garden::plugins::physics::PhysicsPlugin;
use nectar_garden::resources::CliArgs;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .insert_resource(CliArgs::parse())
        .add_plugins(CorePlugin)
        .add_plugins(PhysicsPlugin)
        // Reads CliArgs to build the garden config, so it goes after logging is up
        .add_plugins(GardenPlugin)
        .run();
}
