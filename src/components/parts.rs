//! The pieces a flower entity is assembled from.
//!
//! A flower root owns a [`FlowerParts`] naming its petal collider child, its
//! nectar sensor child and its surface material. Parts are handed in at
//! construction through [`FlowerPartsBuilder`] rather than looked up later.

use bevy::prelude::*;
use thiserror::Error;

/// Marker for the solid collider that represents a flower's petals.
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PetalCollider;

/// Marker for the trigger volume consumers feed from.
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct NectarCollider;

/// Present on a collider child while it is switched off.
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Dormant;

/// Handles to the entities and material a flower drives.
#[derive(Component, Debug, Clone)]
pub struct FlowerParts {
    petal: Entity,
    nectar: Entity,
    surface: Handle<ColorMaterial>,
}

impl FlowerParts {
    pub fn petal(&self) -> Entity {
        self.petal
    }

    pub fn nectar(&self) -> Entity {
        self.nectar
    }

    pub fn surface(&self) -> &Handle<ColorMaterial> {
        &self.surface
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowerBuildError {
    #[error("flower has no petal collider")]
    MissingPetal,
    #[error("flower has no nectar collider")]
    MissingNectar,
    #[error("flower has no surface material")]
    MissingSurface,
    #[error("petal and nectar colliders are the same entity {0:?}")]
    SharedCollider(Entity),
}

/// Collects a flower's parts and validates them into a [`FlowerParts`].
#[derive(Debug, Default)]
pub struct FlowerPartsBuilder {
    petal: Option<Entity>,
    nectar: Option<Entity>,
    surface: Option<Handle<ColorMaterial>>,
}

impl FlowerPartsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn petal(mut self, entity: Entity) -> Self {
        self.petal = Some(entity);
        self
    }

    pub fn nectar(mut self, entity: Entity) -> Self {
        self.nectar = Some(entity);
        self
    }

    pub fn surface(mut self, material: Handle<ColorMaterial>) -> Self {
        self.surface = Some(material);
        self
    }

    /// Fails if any part is missing or both colliders point at one entity.
    pub fn build(self) -> Result<FlowerParts, FlowerBuildError> {
        let petal = self.petal.ok_or(FlowerBuildError::MissingPetal)?;
        let nectar = self.nectar.ok_or(FlowerBuildError::MissingNectar)?;
        let surface = self.surface.ok_or(FlowerBuildError::MissingSurface)?;

        if petal == nectar {
            return Err(FlowerBuildError::SharedCollider(petal));
        }

        Ok(FlowerParts {
            petal,
            nectar,
            surface,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities() -> (Entity, Entity) {
        (Entity::from_raw(1), Entity::from_raw(2))
    }

    #[test]
    fn test_build_with_all_parts() {
        let (petal, nectar) = entities();
        let parts = FlowerPartsBuilder::new()
            .petal(petal)
            .nectar(nectar)
            .surface(Handle::default())
            .build()
            .expect("all parts supplied");

        assert_eq!(parts.petal(), petal);
        assert_eq!(parts.nectar(), nectar);
    }

    #[test]
    fn test_missing_parts_are_reported() {
        let (petal, nectar) = entities();

        let err = FlowerPartsBuilder::new()
            .nectar(nectar)
            .surface(Handle::default())
            .build()
            .unwrap_err();
        assert_eq!(err, FlowerBuildError::MissingPetal);

        let err = FlowerPartsBuilder::new()
            .petal(petal)
            .surface(Handle::default())
            .build()
            .unwrap_err();
        assert_eq!(err, FlowerBuildError::MissingNectar);

        let err = FlowerPartsBuilder::new()
            .petal(petal)
            .nectar(nectar)
            .build()
            .unwrap_err();
        assert_eq!(err, FlowerBuildError::MissingSurface);
    }

    #[test]
    fn test_shared_collider_rejected() {
        let (petal, _) = entities();
        let err = FlowerPartsBuilder::new()
            .petal(petal)
            .nectar(petal)
            .surface(Handle::default())
            .build()
            .unwrap_err();
        assert_eq!(err, FlowerBuildError::SharedCollider(petal));
    }
}
