// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boolean result converter

use crate::context::ConversionContext;
use crate::router::ShapeConverter;
use crate::shape::Shape;
use crate::{Error, Result};
use repcast_core::{Entity, EntityGraph, EntityKind};

/// Boolean result converter
/// Registered for Boolean combinations and their half-space operands.
/// Solid Boolean evaluation is not ported to this kernel yet, so
/// conversion fails per item and the router skips it.
pub struct BooleanResultConverter;

impl BooleanResultConverter {
    /// Create new converter
    pub fn new() -> Self {
        Self
    }
}

impl Default for BooleanResultConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeConverter for BooleanResultConverter {
    fn convert(
        &self,
        entity: &Entity,
        _graph: &EntityGraph,
        _ctx: &ConversionContext,
    ) -> Result<Shape> {
        Err(Error::Unimplemented(entity.kind))
    }

    fn supported_kinds(&self) -> Vec<EntityKind> {
        vec![
            EntityKind::BooleanResult,
            EntityKind::BooleanClippingResult,
            EntityKind::HalfSpaceSolid,
        ]
    }
}
