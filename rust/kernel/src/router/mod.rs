// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape Router - dispatch from representation items to shape converters
//!
//! Walks a representation's item list, flattens nested item groups, and
//! routes each leaf to the converter registered for its kind.

mod conversion;


use crate::context::ConversionContext;
use crate::converters::{
    BooleanResultConverter, CartesianPointConverter, PolylineConverter, SweptSolidConverter,
};
use crate::shape::Shape;
use crate::Result;
use repcast_core::{Entity, EntityGraph, EntityKind};
use std::collections::HashMap;
use std::sync::Arc;

/// Shape converter trait
/// Each converter handles one or more leaf entity kinds
pub trait ShapeConverter {
    /// Convert the entity into a kernel-native shape.
    /// Either returns a complete shape or fails; never a partial one.
    fn convert(
        &self,
        entity: &Entity,
        graph: &EntityGraph,
        ctx: &ConversionContext,
    ) -> Result<Shape>;

    /// Get supported entity kinds
    fn supported_kinds(&self) -> Vec<EntityKind>;
}

/// Shape router - routes representation items to converters
pub struct ShapeRouter {
    converters: HashMap<EntityKind, Arc<dyn ShapeConverter>>,
    /// Unit scale and geometry caches for this conversion session
    context: ConversionContext,
}

impl ShapeRouter {
    /// Create new router with default converters and no unit scaling
    pub fn new() -> Self {
        Self::with_context(ConversionContext::new())
    }

    /// Create router with a pre-calculated unit scale
    pub fn with_scale(unit_scale: f64) -> Self {
        Self::with_context(ConversionContext::with_scale(unit_scale))
    }

    /// Create router with the unit scale extracted from the graph's project
    pub fn with_units(graph: &EntityGraph) -> Self {
        Self::with_context(ConversionContext::with_units(graph))
    }

    /// Create router around an existing context
    pub fn with_context(context: ConversionContext) -> Self {
        let mut router = Self {
            converters: HashMap::new(),
            context,
        };

        // Register default converters
        router.register(Box::new(CartesianPointConverter::new()));
        router.register(Box::new(PolylineConverter::new()));
        router.register(Box::new(SweptSolidConverter::new()));
        router.register(Box::new(BooleanResultConverter::new()));

        router
    }

    /// Register a shape converter for every kind it supports
    pub fn register(&mut self, converter: Box<dyn ShapeConverter>) {
        let converter_arc: Arc<dyn ShapeConverter> = Arc::from(converter);
        for kind in converter_arc.supported_kinds() {
            self.converters.insert(kind, Arc::clone(&converter_arc));
        }
    }

    /// Get the session context
    pub fn context(&self) -> &ConversionContext {
        &self.context
    }
}

impl Default for ShapeRouter {
    fn default() -> Self {
        Self::new()
    }
}
