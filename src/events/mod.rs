use bevy::prelude::*;

/// Request to take nectar from a flower.
#[derive(Event, Debug, Clone, Copy)]
pub struct FeedFlowerEvent {
    /// The flower root entity.
    pub flower: Entity,
    /// Nectar requested.
    pub amount: f32,
    /// Who is feeding, if anyone cares to say.
    pub consumer: Option<Entity>,
}

/// Emitted after a feed request has been applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct NectarTakenEvent {
    pub flower: Entity,
    pub consumer: Option<Entity>,
    /// Nectar actually removed (never more than was available).
    pub taken: f32,
    /// Nectar left in the flower afterwards.
    pub remaining: f32,
}

/// Emitted when a flower runs out of nectar.
#[derive(Event, Debug, Clone, Copy)]
pub struct FlowerDepletedEvent {
    pub flower: Entity,
}

/// Request to refill a single flower.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetFlowerEvent {
    pub flower: Entity,
}

/// Emitted after a flower has been refilled.
#[derive(Event, Debug, Clone, Copy)]
pub struct FlowerResetEvent {
    pub flower: Entity,
}

/// Request to refill every flower in the garden.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetGardenEvent;
