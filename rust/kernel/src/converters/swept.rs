// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Swept solid converter

use crate::context::ConversionContext;
use crate::router::ShapeConverter;
use crate::shape::Shape;
use crate::{Error, Result};
use repcast_core::{Entity, EntityGraph, EntityKind};

/// Swept solid converter
/// Registered for extruded and revolved area solids. The sweep evaluation
/// itself is not ported to this kernel yet, so conversion fails per item
/// and the router skips it.
pub struct SweptSolidConverter;

impl SweptSolidConverter {
    /// Create new converter
    pub fn new() -> Self {
        Self
    }
}

impl Default for SweptSolidConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeConverter for SweptSolidConverter {
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
            EntityKind::ExtrudedAreaSolid,
            EntityKind::RevolvedAreaSolid,
        ]
    }
}
