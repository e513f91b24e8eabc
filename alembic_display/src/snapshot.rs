// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity positions handed from the simulation thread to the renderer.
//!
//! The stepping thread replaces the whole snapshot after each step; the
//! renderer reads it once per frame. Both sides take the same lock, so a
//! reader never sees a half-written snapshot.

use core::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use alembic_view2d::Wormhole;
use hashbrown::HashMap;
use kurbo::Point;

/// One entity as of the last simulation step.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityState<Id> {
    /// Entity identifier.
    pub id: Id,
    /// Position in environment space.
    pub position: Point,
    /// Identifiers of the entities in its neighborhood.
    pub neighbors: Vec<Id>,
}

impl<Id> EntityState<Id> {
    /// An entity without neighbors.
    #[must_use]
    pub fn new(id: Id, position: Point) -> Self {
        Self {
            id,
            position,
            neighbors: Vec::new(),
        }
    }

    /// Sets the neighborhood.
    #[must_use]
    pub fn with_neighbors(mut self, neighbors: impl IntoIterator<Item = Id>) -> Self {
        self.neighbors = neighbors.into_iter().collect();
        self
    }
}

/// The latest entity positions, shared between threads.
///
/// Share it behind an `Arc`. A lock poisoned by a panicking writer is
/// recovered: the contents are replaced wholesale on the next step anyway.
#[derive(Debug)]
pub struct EntitySnapshot<Id> {
    entities: Mutex<Vec<EntityState<Id>>>,
}

impl<Id> Default for EntitySnapshot<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id> EntitySnapshot<Id> {
    /// An empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<EntityState<Id>>> {
        self.entities.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clears the snapshot and refills it from `entities` under one lock.
    pub fn replace(&self, entities: impl IntoIterator<Item = EntityState<Id>>) {
        let mut guard = self.lock();
        guard.clear();
        guard.extend(entities);
    }

    /// Runs `f` over the current entities while holding the lock.
    pub fn with_entities<R>(&self, f: impl FnOnce(&[EntityState<Id>]) -> R) -> R {
        f(&self.lock())
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if there are no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Maps every entity to view space and keeps the ones inside the view.
///
/// This is the per-frame forward-mapping loop.
pub fn project_visible<Id, W>(snapshot: &EntitySnapshot<Id>, transform: &W) -> Vec<(Id, Point)>
where
    Id: Clone,
    W: Wormhole + ?Sized,
{
    snapshot.with_entities(|entities| {
        entities
            .iter()
            .map(|e| (e.id.clone(), transform.to_view(e.position)))
            .filter(|(_, p)| transform.is_inside_view(*p))
            .collect()
    })
}

/// View-space segments between neighbors, each pair once.
///
/// A link is kept if at least one end is inside the view. Neighbors missing
/// from the snapshot are skipped.
pub fn project_links<Id, W>(snapshot: &EntitySnapshot<Id>, transform: &W) -> Vec<(Point, Point)>
where
    Id: Eq + Hash + Ord,
    W: Wormhole + ?Sized,
{
    snapshot.with_entities(|entities| {
        let positions: HashMap<&Id, Point> = entities
            .iter()
            .map(|e| (&e.id, transform.to_view(e.position)))
            .collect();
        let mut links = Vec::new();
        for e in entities {
            let Some(&from) = positions.get(&e.id) else {
                continue;
            };
            for n in e.neighbors.iter().filter(|n| e.id < **n) {
                if let Some(&to) = positions.get(n)
                    && (transform.is_inside_view(from) || transform.is_inside_view(to))
                {
                    links.push((from, to));
                }
            }
        }
        links
    })
}

/// The entity closest to `view_point` on screen, within `max_distance`
/// pixels.
pub fn closest_in_view<Id, W>(
    snapshot: &EntitySnapshot<Id>,
    transform: &W,
    view_point: Point,
    max_distance: f64,
) -> Option<Id>
where
    Id: Clone,
    W: Wormhole + ?Sized,
{
    snapshot.with_entities(|entities| {
        entities
            .iter()
            .map(|e| (e, transform.to_view(e.position).distance(view_point)))
            .filter(|&(_, d)| d <= max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(e, _)| e.id.clone())
    })
}
