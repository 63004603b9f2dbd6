use bevy::prelude::*;

use crate::components::{Dormant, Flower, FlowerState, NectarCollider, PetalCollider};
use crate::events::{
    FeedFlowerEvent, FlowerDepletedEvent, FlowerResetEvent, NectarTakenEvent, ResetFlowerEvent,
};
use crate::systems::flower::{feed_flower_system, reset_flower_system};

/// Systems that apply feed and reset requests. Anything reacting to
/// depletion or resets should run after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlowerSet;

/// Registers flower events and the systems that handle them.
/// Expects `Assets<ColorMaterial>` to exist (normally from `DefaultPlugins`).
pub struct FlowerPlugin;

impl Plugin for FlowerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Flower>()
            .register_type::<FlowerState>()
            .register_type::<PetalCollider>()
            .register_type::<NectarCollider>()
            .register_type::<Dormant>();

        app.add_event::<FeedFlowerEvent>()
            .add_event::<NectarTakenEvent>()
            .add_event::<FlowerDepletedEvent>()
            .add_event::<ResetFlowerEvent>()
            .add_event::<FlowerResetEvent>();

        app.add_systems(
            Update,
            (feed_flower_system, reset_flower_system)
                .chain()
                .in_set(FlowerSet),
        );
    }
}
