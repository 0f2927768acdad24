use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use excavar_shapes::ShapeId;

use crate::actor::ActorId;

/// What an actor sends along when pressing the trigger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorPrefs {
    pub only_while_sneaking: bool,
    pub preserve_tool: bool,
    pub shape: ShapeId,
}

/// Actors currently holding the trigger, with the prefs they pressed with.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    active: HashMap<ActorId, ActorPrefs>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the prefs of a previous press that was never released.
    pub fn press(&mut self, id: ActorId, prefs: ActorPrefs) -> Option<ActorPrefs> {
        self.active.insert(id, prefs)
    }

    pub fn release(&mut self, id: ActorId) -> Option<ActorPrefs> {
        self.active.remove(&id)
    }

    pub fn get(&self, id: ActorId) -> Option<&ActorPrefs> {
        self.active.get(&id)
    }

    pub fn is_active(&self, id: ActorId) -> bool {
        self.active.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(path: &str) -> ActorPrefs {
        ActorPrefs {
            only_while_sneaking: false,
            preserve_tool: true,
            shape: ShapeId::builtin(path),
        }
    }

    #[test]
    fn press_and_release_are_per_actor() {
        let mut s = SessionStore::new();
        assert!(s.press(ActorId(1), prefs("tunnel")).is_none());
        assert!(s.press(ActorId(2), prefs("wall")).is_none());
        assert_eq!(s.len(), 2);

        assert_eq!(s.release(ActorId(1)), Some(prefs("tunnel")));
        assert!(!s.is_active(ActorId(1)));
        assert_eq!(s.get(ActorId(2)), Some(&prefs("wall")));
        assert!(s.release(ActorId(1)).is_none());
    }

    #[test]
    fn repress_replaces_prefs() {
        let mut s = SessionStore::new();
        s.press(ActorId(7), prefs("tunnel"));
        let old = s.press(ActorId(7), prefs("stairs_down"));
        assert_eq!(old, Some(prefs("tunnel")));
        assert_eq!(s.get(ActorId(7)).map(|p| p.shape.path()), Some("stairs_down"));
        assert_eq!(s.len(), 1);
    }
}
