// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polyline converter

use super::point::convert_point;
use crate::context::ConversionContext;
use crate::router::ShapeConverter;
use crate::shape::Shape;
use crate::{Error, Result};
use repcast_core::{Entity, EntityGraph, EntityKind};

/// Polyline converter
/// Builds a wire from the referenced point entities, sharing the session
/// point cache with the point converter
pub struct PolylineConverter;

impl PolylineConverter {
    /// Create new converter
    pub fn new() -> Self {
        Self
    }
}

impl Default for PolylineConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeConverter for PolylineConverter {
    fn convert(
        &self,
        entity: &Entity,
        graph: &EntityGraph,
        ctx: &ConversionContext,
    ) -> Result<Shape> {
        if let Some(curve) = ctx.cached_curve(entity.id) {
            return Ok(Shape::Wire(curve));
        }

        // Polyline: Points at attribute 0 (list of point refs)
        let points_attr = entity
            .get(0)
            .ok_or_else(|| Error::invalid(format!("Polyline #{} missing points", entity.id)))?;

        let point_entities = graph.resolve_ref_list(points_attr)?;

        let mut points = Vec::with_capacity(point_entities.len());
        for point_entity in point_entities {
            if point_entity.kind != EntityKind::CartesianPoint {
                return Err(Error::invalid(format!(
                    "Polyline #{} references {} where a point was expected",
                    entity.id, point_entity.kind
                )));
            }
            points.push(convert_point(point_entity, ctx)?);
        }

        if points.len() < 2 {
            return Err(Error::invalid(format!(
                "Polyline #{} needs at least 2 points, has {}",
                entity.id,
                points.len()
            )));
        }

        ctx.cache_curve(entity.id, points.clone());
        Ok(Shape::Wire(points))
    }

    fn supported_kinds(&self) -> Vec<EntityKind> {
        vec![EntityKind::Polyline]
    }
}
