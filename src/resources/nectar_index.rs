use bevy::prelude::*;
use bevy::utils::HashMap;

/// Maps nectar trigger volumes back to the flower that owns them, so a
/// consumer touching a nectar collider can find which flower to feed from.
#[derive(Resource, Debug, Default)]
pub struct NectarIndex {
    by_nectar: HashMap<Entity, Entity>,
    by_flower: HashMap<Entity, Entity>,
}

impl NectarIndex {
    pub fn insert(&mut self, nectar: Entity, flower: Entity) {
        if let Some(previous) = self.by_flower.insert(flower, nectar) {
            self.by_nectar.remove(&previous);
        }
        self.by_nectar.insert(nectar, flower);
    }

    /// Forgets a flower and its nectar collider.
    pub fn remove_flower(&mut self, flower: Entity) -> Option<Entity> {
        let nectar = self.by_flower.remove(&flower)?;
        self.by_nectar.remove(&nectar);
        Some(nectar)
    }

    /// The flower owning the given nectar collider.
    pub fn flower_for(&self, nectar: Entity) -> Option<Entity> {
        self.by_nectar.get(&nectar).copied()
    }

    pub fn nectar_for(&self, flower: Entity) -> Option<Entity> {
        self.by_flower.get(&flower).copied()
    }

    pub fn len(&self) -> usize {
        self.by_flower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_flower.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_ways() {
        let mut index = NectarIndex::default();
        let (flower, nectar) = (Entity::from_raw(10), Entity::from_raw(11));
        index.insert(nectar, flower);

        assert_eq!(index.flower_for(nectar), Some(flower));
        assert_eq!(index.nectar_for(flower), Some(nectar));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_reinsert_replaces_stale_nectar() {
        let mut index = NectarIndex::default();
        let flower = Entity::from_raw(1);
        index.insert(Entity::from_raw(2), flower);
        index.insert(Entity::from_raw(3), flower);

        assert_eq!(index.flower_for(Entity::from_raw(2)), None);
        assert_eq!(index.flower_for(Entity::from_raw(3)), Some(flower));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_remove_flower() {
        let mut index = NectarIndex::default();
        let (flower, nectar) = (Entity::from_raw(4), Entity::from_raw(5));
        index.insert(nectar, flower);

        assert_eq!(index.remove_flower(flower), Some(nectar));
        assert!(index.is_empty());
        assert_eq!(index.flower_for(nectar), None);
        assert_eq!(index.remove_flower(flower), None);
    }
}
