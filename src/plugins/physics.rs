use avian2d::prelude::*;
use bevy::prelude::*;

/// Avian physics for a top-down garden: no gravity, fixed 60Hz step.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsPlugins::default())
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .insert_resource(Gravity(Vec2::ZERO));
    }
}
