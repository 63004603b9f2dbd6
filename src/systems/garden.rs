use avian2d::prelude::*;
use bevy::prelude::*;

use crate::components::{
    Flower, FlowerBuildError, FlowerParts, FlowerPartsBuilder, NectarCollider, PetalCollider,
    Regrowth,
};
use crate::events::{FlowerDepletedEvent, ResetGardenEvent};
use crate::resources::{GardenConfig, NectarIndex};
use crate::systems::flower::Flowers;
use crate::utils::procgen::scatter_positions;

/// Spawns a flower at `position` with its petal and nectar colliders as
/// children and a material of its own, so it can be tinted independently.
///
/// Returns the flower root entity.
pub fn spawn_flower(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    position: Vec2,
    config: &GardenConfig,
) -> Result<Entity, FlowerBuildError> {
    let surface = materials.add(ColorMaterial::from(config.full_color()));

    let petal = commands
        .spawn((
            Name::new("Petals"),
            PetalCollider,
            Collider::circle(config.petal_radius),
            Transform::default(),
        ))
        .id();

    let nectar = commands
        .spawn((
            Name::new("Nectar"),
            NectarCollider,
            Collider::circle(config.nectar_radius),
            Sensor,
            // slightly in front so the sensor sits on top of the petals
            Transform::from_xyz(0.0, 0.0, 0.1),
        ))
        .id();

    let parts = FlowerPartsBuilder::new()
        .petal(petal)
        .nectar(nectar)
        .surface(surface.clone())
        .build()?;

    let flower = commands
        .spawn((
            Name::new("Flower"),
            Flower::new(config.full_color(), config.empty_color()),
            parts,
            Mesh2d(meshes.add(Circle::new(config.petal_radius))),
            MeshMaterial2d(surface),
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
        ))
        .add_children(&[petal, nectar])
        .id();

    Ok(flower)
}

/// Startup system that plants the garden described by [`GardenConfig`].
pub fn plant_garden_system(
    mut commands: Commands,
    config: Res<GardenConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mut planted = 0;
    for position in scatter_positions(&config) {
        match spawn_flower(&mut commands, &mut meshes, &mut materials, position, &config) {
            Ok(_) => planted += 1,
            Err(e) => error!("Failed to plant flower at {}: {}", position, e),
        }
    }
    info!(
        "Planted {} flowers within {} units (seed {})",
        planted, config.radius, config.seed
    );
}

/// Registers newly built flowers in the [`NectarIndex`].
pub fn index_new_flowers_system(
    mut index: ResMut<NectarIndex>,
    added: Query<(Entity, &FlowerParts), Added<FlowerParts>>,
) {
    for (flower, parts) in &added {
        index.insert(parts.nectar(), flower);
    }
}

/// Drops despawned flowers from the [`NectarIndex`].
pub fn unindex_removed_flowers_system(
    mut index: ResMut<NectarIndex>,
    mut removed: RemovedComponents<FlowerParts>,
) {
    for flower in removed.read() {
        index.remove_flower(flower);
    }
}

/// Starts a regrowth countdown on freshly depleted flowers when the garden
/// is configured to regrow. Flowers refilled since they ran dry are skipped.
pub fn schedule_regrowth_system(
    mut commands: Commands,
    config: Res<GardenConfig>,
    mut depleted: EventReader<FlowerDepletedEvent>,
    flowers: Query<&Flower>,
) {
    let Some(delay) = config.regrow_after else {
        depleted.clear();
        return;
    };

    for event in depleted.read() {
        if !flowers.get(event.flower).is_ok_and(Flower::is_depleted) {
            continue;
        }
        if let Some(mut flower) = commands.get_entity(event.flower) {
            flower.insert(Regrowth::new(delay));
        }
    }
}

/// Ticks regrowth countdowns and refills flowers whose time is up.
pub fn regrowth_system(
    time: Res<Time>,
    mut growing: Query<(Entity, &mut Regrowth)>,
    mut flowers: Flowers,
) {
    let mut ready = Vec::new();
    for (entity, mut regrowth) in &mut growing {
        if regrowth.tick(time.delta()) {
            ready.push(entity);
        }
    }

    for flower in ready {
        match flowers.reset(flower) {
            Ok(()) => debug!("Flower {:?} regrew", flower),
            Err(e) => warn!("Regrowth skipped: {}", e),
        }
    }
}

/// Refills every flower when a garden reset is requested.
pub fn reset_garden_system(mut requests: EventReader<ResetGardenEvent>, mut flowers: Flowers) {
    if requests.read().count() == 0 {
        return;
    }
    let count = flowers.reset_all();
    info!("Garden reset: {} flowers refilled", count);
}
