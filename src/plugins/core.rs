use bevy::prelude::*;
use rand::seq::SliceRandom;

use crate::events::ResetGardenEvent;
use crate::systems::flower::Flowers;

/// Nectar taken by the debug feed hotkey.
const DEBUG_FEED_AMOUNT: f32 = 0.25;

/// Camera and debug hotkeys for the standalone garden.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, (debug_reset_garden, debug_feed_random_flower));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(0.0, 0.0, 100.0)));
}

/// R refills the whole garden.
fn debug_reset_garden(keys: Res<ButtonInput<KeyCode>>, mut resets: EventWriter<ResetGardenEvent>) {
    if keys.just_pressed(KeyCode::KeyR) {
        resets.send(ResetGardenEvent);
    }
}

/// Space takes a sip from a random flower that still has nectar.
fn debug_feed_random_flower(keys: Res<ButtonInput<KeyCode>>, mut flowers: Flowers) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }

    let blooming: Vec<Entity> = flowers
        .entities()
        .into_iter()
        .filter(|&flower| flowers.has_nectar(flower).unwrap_or(false))
        .collect();

    let Some(&flower) = blooming.choose(&mut rand::thread_rng()) else {
        info!("No flower has nectar left");
        return;
    };

    match flowers.feed(flower, DEBUG_FEED_AMOUNT) {
        Ok(taken) => info!(
            "Took {:.2} nectar from {:?} ({:.2} left)",
            taken,
            flower,
            flowers.nectar_amount(flower).unwrap_or(0.0)
        ),
        Err(e) => warn!("{}", e),
    }
}
