use bevy::prelude::*;

/// Nectar held by a freshly grown or reset flower.
pub const FULL_NECTAR: f32 = 1.0;

/// Something that can be switched on and off, such as a collision volume.
pub trait Activatable {
    fn set_active(&mut self, active: bool);
}

/// Something with a world-space placement.
pub trait Positioned {
    /// World position of the origin.
    fn world_position(&self) -> Vec3;
    /// Local +Y expressed in world space.
    fn world_up(&self) -> Vec3;
}

/// A renderable surface whose tint can be changed.
pub trait ColorSettable {
    fn set_color(&mut self, color: Color);
}

impl Positioned for GlobalTransform {
    fn world_position(&self) -> Vec3 {
        self.translation()
    }

    fn world_up(&self) -> Vec3 {
        self.up().as_vec3()
    }
}

impl Positioned for Transform {
    fn world_position(&self) -> Vec3 {
        self.translation
    }

    fn world_up(&self) -> Vec3 {
        self.up().as_vec3()
    }
}

impl ColorSettable for ColorMaterial {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// The parts a flower drives when it changes state: the solid petal volume,
/// the nectar trigger volume and the surface that shows how full it is.
#[derive(Debug)]
pub struct PartRig<A, S> {
    pub petal: A,
    pub nectar: A,
    pub surface: S,
}

/// Whether a flower can still be fed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum FlowerState {
    /// Nectar remains; colliders active, surface shows the full colour.
    Blooming,
    /// No nectar; colliders inactive, surface shows the empty colour.
    Depleted,
}

/// A single flower offering a depletable amount of nectar.
///
/// Nectar lives in `[0, 1]` under normal use. A flower starts full; feeding
/// it down to zero switches its colliders off and tints it with
/// `empty_color` until [`Flower::reset`] is called.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Flower {
    nectar_amount: f32,
    /// Surface colour while nectar remains.
    pub full_color: Color,
    /// Surface colour once depleted.
    pub empty_color: Color,
}

impl Default for Flower {
    fn default() -> Self {
        Self::new(Color::srgb(1.0, 0.0, 0.3), Color::srgb(0.5, 0.0, 1.0))
    }
}

impl Flower {
    /// Creates a full flower with the given display colours.
    pub fn new(full_color: Color, empty_color: Color) -> Self {
        Self {
            nectar_amount: FULL_NECTAR,
            full_color,
            empty_color,
        }
    }

    /// Amount of nectar remaining.
    pub fn nectar_amount(&self) -> f32 {
        self.nectar_amount
    }

    pub fn has_nectar(&self) -> bool {
        self.nectar_amount > 0.0
    }

    pub fn is_depleted(&self) -> bool {
        !self.has_nectar()
    }

    pub fn state(&self) -> FlowerState {
        if self.has_nectar() {
            FlowerState::Blooming
        } else {
            FlowerState::Depleted
        }
    }

    /// Removes up to `amount` nectar and returns how much was actually taken.
    ///
    /// The balance is reduced by the raw `amount` and floored at zero, so a
    /// negative request adds nectar while reporting nothing taken. Reaching
    /// zero deactivates both volumes and tints the surface with
    /// `empty_color`. NaN and negative-infinite requests are ignored.
    pub fn feed<A: Activatable, S: ColorSettable>(
        &mut self,
        amount: f32,
        rig: &mut PartRig<A, S>,
    ) -> f32 {
        if amount.is_nan() || amount == f32::NEG_INFINITY {
            return 0.0;
        }

        // nectar_amount is never negative here, so the bounds are ordered
        let taken = amount.clamp(0.0, self.nectar_amount);

        self.nectar_amount -= amount;
        if self.nectar_amount <= 0.0 {
            self.nectar_amount = 0.0;
            rig.petal.set_active(false);
            rig.nectar.set_active(false);
            rig.surface.set_color(self.empty_color);
        }

        taken
    }

    /// Refills the flower and switches its volumes and colour back on.
    pub fn reset<A: Activatable, S: ColorSettable>(&mut self, rig: &mut PartRig<A, S>) {
        self.nectar_amount = FULL_NECTAR;
        rig.petal.set_active(true);
        rig.nectar.set_active(true);
        rig.surface.set_color(self.full_color);
    }

    /// Direction pointing straight out of the flower, taken from the nectar volume.
    pub fn up_vector(nectar: &impl Positioned) -> Vec3 {
        nectar.world_up()
    }

    /// Centre of the nectar volume; the point consumers approach.
    pub fn center_position(nectar: &impl Positioned) -> Vec3 {
        nectar.world_position()
    }
}
