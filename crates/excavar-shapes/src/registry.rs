use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::Arc;

use crate::builtin::{Cube, StairsDown, Tunnel, Wall};
use crate::id::ShapeId;
use crate::shape::Shape;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape `{0}`")]
pub struct UnknownShape(pub ShapeId);

/// Catalogue of shapes plus the currently selected one.
///
/// Never empty: it is created with a default entry and entries are only ever
/// added or replaced. Cycling follows ascending [`ShapeId`] order.
#[derive(Clone)]
pub struct ShapeRegistry {
    shapes: BTreeMap<ShapeId, Arc<dyn Shape>>,
    selected: ShapeId,
}

impl ShapeRegistry {
    pub fn new(default_id: ShapeId, default_shape: Arc<dyn Shape>) -> Self {
        let mut shapes: BTreeMap<ShapeId, Arc<dyn Shape>> = BTreeMap::new();
        shapes.insert(default_id.clone(), default_shape);
        Self {
            shapes,
            selected: default_id,
        }
    }

    /// Registry holding the built-in shapes, with `excavar:shapeless` selected.
    pub fn with_builtin() -> Self {
        let mut reg = Self::new(ShapeId::builtin(Cube::SHAPELESS), Arc::new(Cube::new(1)));
        reg.register(ShapeId::builtin(Tunnel::ID), Arc::new(Tunnel));
        reg.register(ShapeId::builtin(Wall::ID), Arc::new(Wall));
        reg.register(ShapeId::builtin(StairsDown::ID), Arc::new(StairsDown));
        reg
    }

    /// Adds or replaces a shape. Returns the previous shape under that id.
    pub fn register(&mut self, id: ShapeId, shape: Arc<dyn Shape>) -> Option<Arc<dyn Shape>> {
        self.shapes.insert(id, shape)
    }

    pub fn get(&self, id: &ShapeId) -> Result<Arc<dyn Shape>, UnknownShape> {
        self.shapes
            .get(id)
            .cloned()
            .ok_or_else(|| UnknownShape(id.clone()))
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    pub fn current(&self) -> &ShapeId {
        &self.selected
    }

    pub fn current_shape(&self) -> Arc<dyn Shape> {
        // `selected` always names a registered entry
        Arc::clone(&self.shapes[&self.selected])
    }

    pub fn select(&mut self, id: &ShapeId) -> Result<(), UnknownShape> {
        if !self.shapes.contains_key(id) {
            return Err(UnknownShape(id.clone()));
        }
        self.selected = id.clone();
        Ok(())
    }

    /// Selects the id after the current one, wrapping to the first.
    pub fn select_next(&mut self) -> &ShapeId {
        let next = self
            .shapes
            .range::<ShapeId, _>((Excluded(&self.selected), Unbounded))
            .next()
            .or_else(|| self.shapes.iter().next())
            .map(|(id, _)| id.clone());
        if let Some(id) = next {
            self.selected = id;
        }
        &self.selected
    }

    /// Selects the id before the current one, wrapping to the last.
    pub fn select_previous(&mut self) -> &ShapeId {
        let prev = self
            .shapes
            .range::<ShapeId, _>(..&self.selected)
            .next_back()
            .or_else(|| self.shapes.iter().next_back())
            .map(|(id, _)| id.clone());
        if let Some(id) = prev {
            self.selected = id;
        }
        &self.selected
    }

    /// Registered ids in cycling order.
    pub fn ids(&self) -> impl Iterator<Item = &ShapeId> + '_ {
        self.shapes.keys()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeRegistry")
            .field("ids", &self.shapes.keys().collect::<Vec<_>>())
            .field("selected", &self.selected)
            .finish()
    }
}
