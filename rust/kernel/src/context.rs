// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion context - per-session unit scale and geometry caches
//!
//! One context per conversion session. The caches memoize geometry for
//! entities referenced from multiple paths, keyed by entity id; entries
//! are created on first successful conversion and never invalidated,
//! since the graph is immutable for the session's lifetime. Concurrent
//! sessions must each own their own context.

use crate::shape::Shape;
use nalgebra::Point3;
use repcast_core::{length_unit_scale, EntityGraph, EntityKind};
use rustc_hash::FxHashMap;
use std::cell::RefCell;

/// Unit scale and memoization state for one conversion session
#[derive(Debug)]
pub struct ConversionContext {
    /// Multiplier from raw model units to canonical meters
    unit_scale: f64,
    /// Cache for converted points, keyed by entity id
    points: RefCell<FxHashMap<u32, Point3<f64>>>,
    /// Cache for converted curves, keyed by entity id
    curves: RefCell<FxHashMap<u32, Vec<Point3<f64>>>>,
    /// Cache for converted shapes, keyed by entity id
    shapes: RefCell<FxHashMap<u32, Shape>>,
}

impl ConversionContext {
    /// Create a context with no unit scaling
    pub fn new() -> Self {
        Self {
            unit_scale: 1.0,
            points: RefCell::new(FxHashMap::default()),
            curves: RefCell::new(FxHashMap::default()),
            shapes: RefCell::new(FxHashMap::default()),
        }
    }

    /// Create a context with a pre-calculated unit scale
    pub fn with_scale(unit_scale: f64) -> Self {
        let mut context = Self::new();
        context.unit_scale = unit_scale;
        context
    }

    /// Create a context with the unit scale extracted from the graph's
    /// project entity. Defaults to 1.0 when the graph has no project or
    /// no length unit.
    pub fn with_units(graph: &EntityGraph) -> Self {
        let mut scale = 1.0;

        if let Some(project) = graph.iter_kind(EntityKind::Project).next() {
            if let Ok(s) = length_unit_scale(graph, project.id) {
                scale = s;
            }
        }

        Self::with_scale(scale)
    }

    /// Get the current unit scale factor
    #[inline]
    pub fn unit_scale(&self) -> f64 {
        self.unit_scale
    }

    /// Look up a cached point
    #[inline]
    pub fn cached_point(&self, entity_id: u32) -> Option<Point3<f64>> {
        self.points.borrow().get(&entity_id).copied()
    }

    /// Cache a converted point
    #[inline]
    pub fn cache_point(&self, entity_id: u32, point: Point3<f64>) {
        self.points.borrow_mut().insert(entity_id, point);
    }

    /// Look up a cached curve
    #[inline]
    pub fn cached_curve(&self, entity_id: u32) -> Option<Vec<Point3<f64>>> {
        self.curves.borrow().get(&entity_id).cloned()
    }

    /// Cache a converted curve
    #[inline]
    pub fn cache_curve(&self, entity_id: u32, curve: Vec<Point3<f64>>) {
        self.curves.borrow_mut().insert(entity_id, curve);
    }

    /// Look up a cached shape
    #[inline]
    pub fn cached_shape(&self, entity_id: u32) -> Option<Shape> {
        self.shapes.borrow().get(&entity_id).cloned()
    }

    /// Cache a converted shape
    #[inline]
    pub fn cache_shape(&self, entity_id: u32, shape: Shape) {
        self.shapes.borrow_mut().insert(entity_id, shape);
    }
}

impl Default for ConversionContext {
    fn default() -> Self {
        Self::new()
    }
}
