use bevy::prelude::*;

use crate::events::ResetGardenEvent;
use crate::plugins::flower::{FlowerPlugin, FlowerSet};
use crate::resources::{CliArgs, GardenConfig, NectarIndex};
use crate::systems::garden::{
    index_new_flowers_system, plant_garden_system, regrowth_system, reset_garden_system,
    schedule_regrowth_system, unindex_removed_flowers_system,
};

/// Plants the garden at startup and keeps it running afterwards, including
/// whole-garden resets and timed regrowth.
///
/// Uses the [`GardenConfig`] resource if one was inserted. Otherwise the
/// config is built from [`CliArgs`] when present, or defaults.
pub struct GardenPlugin;

impl Plugin for GardenPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FlowerPlugin>() {
            app.add_plugins(FlowerPlugin);
        }

        if !app.world().contains_resource::<GardenConfig>() {
            let config = app
                .world()
                .get_resource::<CliArgs>()
                .map(GardenConfig::from_cli)
                .unwrap_or_default();
            app.insert_resource(config);
        }

        app.init_resource::<NectarIndex>()
            .add_event::<ResetGardenEvent>();

        app.add_systems(Startup, plant_garden_system);
        app.add_systems(
            Update,
            (
                (index_new_flowers_system, unindex_removed_flowers_system),
                (
                    reset_garden_system,
                    schedule_regrowth_system,
                    regrowth_system,
                )
                    .chain()
                    .after(FlowerSet),
            ),
        );
    }
}
