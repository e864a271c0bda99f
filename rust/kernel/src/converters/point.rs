// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cartesian point converter

use crate::context::ConversionContext;
use crate::router::ShapeConverter;
use crate::shape::Shape;
use crate::{Error, Result};
use nalgebra::Point3;
use repcast_core::{Entity, EntityGraph, EntityKind};

/// Convert a cartesian point entity into a scaled kernel point.
///
/// The coordinate list carries 1 to 3 components; absent trailing
/// components resolve to 0 before scaling. Consults and updates the
/// session point cache so repeated references reuse the computed value.
pub(crate) fn convert_point(entity: &Entity, ctx: &ConversionContext) -> Result<Point3<f64>> {
    if let Some(point) = ctx.cached_point(entity.id) {
        return Ok(point);
    }

    // Cartesian point: Coordinates at attribute 0
    let coords_attr = entity
        .get(0)
        .ok_or_else(|| Error::invalid(format!("Point #{} missing coordinates", entity.id)))?;

    let xyz = coords_attr.float_components();
    if xyz.is_empty() {
        return Err(Error::invalid(format!(
            "Point #{} has an empty coordinate list",
            entity.id
        )));
    }

    let scale = ctx.unit_scale();
    let point = Point3::new(
        xyz.first().copied().unwrap_or(0.0) * scale,
        xyz.get(1).copied().unwrap_or(0.0) * scale,
        xyz.get(2).copied().unwrap_or(0.0) * scale,
    );

    ctx.cache_point(entity.id, point);
    Ok(point)
}

/// Cartesian point converter
/// Produces a vertex shape from a coordinate triple
pub struct CartesianPointConverter;

impl CartesianPointConverter {
    /// Create new converter
    pub fn new() -> Self {
        Self
    }
}

impl Default for CartesianPointConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeConverter for CartesianPointConverter {
    fn convert(
        &self,
        entity: &Entity,
        _graph: &EntityGraph,
        ctx: &ConversionContext,
    ) -> Result<Shape> {
        convert_point(entity, ctx).map(Shape::Vertex)
    }

    fn supported_kinds(&self) -> Vec<EntityKind> {
        vec![EntityKind::CartesianPoint]
    }
}
