//! Flower feeding and resetting inside the ECS.
//!
//! [`Flowers`] is the entry point for gameplay code: it pairs each
//! [`Flower`] with its [`FlowerParts`] and turns the state changes into
//! collider and material updates.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use thiserror::Error;

use crate::components::{
    Activatable, ColorSettable, Dormant, Flower, FlowerParts, NectarCollider, PartRig, Regrowth,
};
use crate::events::{
    FeedFlowerEvent, FlowerDepletedEvent, FlowerResetEvent, NectarTakenEvent, ResetFlowerEvent,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowerError {
    #[error("{0:?} is not a flower")]
    NotAFlower(Entity),
    #[error("flower {0:?} has lost its nectar collider")]
    MissingPart(Entity),
}

/// Activation for a collider child, applied through `Commands` once the
/// flower itself has been updated.
#[derive(Debug)]
pub struct ColliderSwitch {
    entity: Entity,
    active: Option<bool>,
}

impl ColliderSwitch {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            active: None,
        }
    }

    fn apply(self, commands: &mut Commands) {
        let Some(active) = self.active else {
            return;
        };
        let Some(mut entity) = commands.get_entity(self.entity) else {
            warn!("Collider {:?} no longer exists", self.entity);
            return;
        };

        if active {
            entity
                .insert((Visibility::Inherited, CollisionLayers::default()))
                .remove::<Dormant>();
        } else {
            entity.insert((Visibility::Hidden, CollisionLayers::NONE, Dormant));
        }
    }
}

impl Activatable for ColliderSwitch {
    fn set_active(&mut self, active: bool) {
        self.active = Some(active);
    }
}

/// Colour requested for a flower's surface material.
#[derive(Debug, Default)]
pub struct SurfaceTint(Option<Color>);

impl SurfaceTint {
    fn apply(self, materials: &mut Assets<ColorMaterial>, surface: &Handle<ColorMaterial>) {
        let Some(color) = self.0 else {
            return;
        };
        match materials.get_mut(surface) {
            Some(material) => material.set_color(color),
            None => warn!("Flower surface material {:?} is missing", surface.id()),
        }
    }
}

impl ColorSettable for SurfaceTint {
    fn set_color(&mut self, color: Color) {
        self.0 = Some(color);
    }
}

type EcsRig = PartRig<ColliderSwitch, SurfaceTint>;

fn rig_for(parts: &FlowerParts) -> EcsRig {
    PartRig {
        petal: ColliderSwitch::new(parts.petal()),
        nectar: ColliderSwitch::new(parts.nectar()),
        surface: SurfaceTint::default(),
    }
}

/// Read and mutate flowers by entity.
#[derive(SystemParam)]
pub struct Flowers<'w, 's> {
    commands: Commands<'w, 's>,
    flowers: Query<'w, 's, (Entity, &'static mut Flower, &'static FlowerParts)>,
    nectar_transforms: Query<'w, 's, &'static GlobalTransform, With<NectarCollider>>,
    materials: ResMut<'w, Assets<ColorMaterial>>,
    depleted: EventWriter<'w, FlowerDepletedEvent>,
    refilled: EventWriter<'w, FlowerResetEvent>,
}

impl Flowers<'_, '_> {
    /// Takes up to `amount` nectar from `flower`, returning what was taken.
    pub fn feed(&mut self, flower: Entity, amount: f32) -> Result<f32, FlowerError> {
        let (_, mut state, parts) = self
            .flowers
            .get_mut(flower)
            .map_err(|_| FlowerError::NotAFlower(flower))?;

        if amount < 0.0 {
            warn!("Negative feed of {} on {:?} adds nectar", amount, flower);
        }

        let was_depleted = state.is_depleted();
        let mut rig = rig_for(parts);
        let taken = state.feed(amount, &mut rig);
        debug!(
            "Flower {:?} fed {:.3}, {:.3} remaining",
            flower,
            taken,
            state.nectar_amount()
        );

        if !was_depleted && state.is_depleted() {
            self.depleted.send(FlowerDepletedEvent { flower });
        }

        let surface = parts.surface().clone();
        rig.petal.apply(&mut self.commands);
        rig.nectar.apply(&mut self.commands);
        rig.surface.apply(&mut self.materials, &surface);

        Ok(taken)
    }

    /// Refills `flower` and reactivates its colliders. Cancels any pending regrowth.
    pub fn reset(&mut self, flower: Entity) -> Result<(), FlowerError> {
        let (_, mut state, parts) = self
            .flowers
            .get_mut(flower)
            .map_err(|_| FlowerError::NotAFlower(flower))?;

        let mut rig = rig_for(parts);
        state.reset(&mut rig);

        let surface = parts.surface().clone();
        rig.petal.apply(&mut self.commands);
        rig.nectar.apply(&mut self.commands);
        rig.surface.apply(&mut self.materials, &surface);

        if let Some(mut entity) = self.commands.get_entity(flower) {
            entity.remove::<Regrowth>();
        }
        self.refilled.send(FlowerResetEvent { flower });

        Ok(())
    }

    /// Resets every flower, returning how many there were.
    pub fn reset_all(&mut self) -> usize {
        let all: Vec<Entity> = self.flowers.iter().map(|(entity, ..)| entity).collect();
        for &flower in &all {
            if let Err(e) = self.reset(flower) {
                warn!("Garden reset skipped a flower: {}", e);
            }
        }
        all.len()
    }

    /// Every flower entity, in query order.
    pub fn entities(&self) -> Vec<Entity> {
        self.flowers.iter().map(|(entity, ..)| entity).collect()
    }

    pub fn nectar_amount(&self, flower: Entity) -> Result<f32, FlowerError> {
        self.flower(flower).map(Flower::nectar_amount)
    }

    pub fn has_nectar(&self, flower: Entity) -> Result<bool, FlowerError> {
        self.flower(flower).map(Flower::has_nectar)
    }

    /// World position of the flower's nectar volume.
    pub fn center_position(&self, flower: Entity) -> Result<Vec3, FlowerError> {
        self.nectar_transform(flower).map(|nectar| Flower::center_position(nectar))
    }

    /// Direction pointing straight out of the flower.
    pub fn up_vector(&self, flower: Entity) -> Result<Vec3, FlowerError> {
        self.nectar_transform(flower).map(|nectar| Flower::up_vector(nectar))
    }

    fn flower(&self, flower: Entity) -> Result<&Flower, FlowerError> {
        self.flowers
            .get(flower)
            .map(|(_, state, _)| state)
            .map_err(|_| FlowerError::NotAFlower(flower))
    }

    fn nectar_transform(&self, flower: Entity) -> Result<&GlobalTransform, FlowerError> {
        let (_, _, parts) = self
            .flowers
            .get(flower)
            .map_err(|_| FlowerError::NotAFlower(flower))?;
        self.nectar_transforms
            .get(parts.nectar())
            .map_err(|_| FlowerError::MissingPart(flower))
    }
}

/// System that applies queued feed requests and reports what was taken.
pub fn feed_flower_system(
    mut requests: EventReader<FeedFlowerEvent>,
    mut flowers: Flowers,
    mut taken_events: EventWriter<NectarTakenEvent>,
) {
    for request in requests.read() {
        match flowers.feed(request.flower, request.amount) {
            Ok(taken) => {
                let remaining = flowers.nectar_amount(request.flower).unwrap_or(0.0);
                taken_events.send(NectarTakenEvent {
                    flower: request.flower,
                    consumer: request.consumer,
                    taken,
                    remaining,
                });
            }
            Err(e) => warn!("Feed request ignored: {}", e),
        }
    }
}

/// System that applies queued single-flower resets.
pub fn reset_flower_system(mut requests: EventReader<ResetFlowerEvent>, mut flowers: Flowers) {
    for request in requests.read() {
        if let Err(e) = flowers.reset(request.flower) {
            warn!("Reset request ignored: {}", e);
        }
    }
}
