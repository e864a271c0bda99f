// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Representation traversal: flattening item groups and converting leaves
//! with partial-success aggregation.

use super::ShapeRouter;
use crate::classify::{classify, ShapeKind};
use crate::results::{ConversionResult, ConversionResults};
use crate::shape::Shape;
use crate::style::StyleIndex;
use crate::{Error, Result};
use repcast_core::{Entity, EntityGraph};

impl ShapeRouter {
    /// Convert one representation into shapes, resolving styles from the
    /// graph. Returns the result collection and whether any item succeeded.
    ///
    /// Callers converting many representations against one graph should
    /// build the [`StyleIndex`] once and use
    /// [`convert_representation`](Self::convert_representation) instead.
    pub fn convert(
        &self,
        representation: &Entity,
        graph: &EntityGraph,
    ) -> (ConversionResults, bool) {
        let styles = StyleIndex::build(graph);
        let mut results = ConversionResults::new();
        let success = self.convert_representation(representation, graph, &styles, &mut results);
        (results, success)
    }

    /// Convert one representation's items into `out`.
    ///
    /// Items are visited in sequence order; nested groups are flattened in
    /// place, so `out` ends up in pre-order depth-first traversal order.
    /// Returns true if at least one item (leaf or nested) contributed a
    /// result. A failed item is skipped and never aborts the rest; an
    /// empty or unreadable item list yields false without error.
    pub fn convert_representation(
        &self,
        representation: &Entity,
        graph: &EntityGraph,
        styles: &StyleIndex,
        out: &mut ConversionResults,
    ) -> bool {
        // Shape representation: ContextOfItems, RepresentationIdentifier,
        // RepresentationType, Items
        let items_attr = match representation.get(3) {
            Some(attr) => attr,
            None => return false,
        };

        let items = match graph.resolve_ref_list(items_attr) {
            Ok(items) => items,
            Err(err) => {
                tracing::debug!(
                    representation = representation.id,
                    error = %err,
                    "unreadable item list"
                );
                return false;
            }
        };

        let mut part_success = false;
        for item in items {
            part_success |= self.convert_item(item, graph, styles, out);
        }
        part_success
    }

    /// Convert a single item, recursing through nested groups.
    /// Returns whether the item (or any of its children) contributed.
    fn convert_item(
        &self,
        item: &Entity,
        graph: &EntityGraph,
        styles: &StyleIndex,
        out: &mut ConversionResults,
    ) -> bool {
        match classify(item.kind) {
            ShapeKind::List => self.convert_item_group(item, graph, styles, out),
            ShapeKind::Leaf => match self.convert_leaf(item, graph) {
                Ok(shape) => {
                    out.push(ConversionResult::new(item.id, shape, styles.style_of(item.id)));
                    true
                }
                Err(err) => {
                    tracing::debug!(item = item.id, kind = %item.kind, error = %err, "skipping item");
                    false
                }
            },
        }
    }

    /// Recurse into a nested item group's element list
    fn convert_item_group(
        &self,
        group: &Entity,
        graph: &EntityGraph,
        styles: &StyleIndex,
        out: &mut ConversionResults,
    ) -> bool {
        // Geometric set: Elements at attribute 0
        let elements_attr = match group.get(0) {
            Some(attr) => attr,
            None => return false,
        };

        let elements = match graph.resolve_ref_list(elements_attr) {
            Ok(elements) => elements,
            Err(err) => {
                tracing::debug!(group = group.id, error = %err, "unreadable element list");
                return false;
            }
        };

        let mut part_success = false;
        for element in elements {
            part_success |= self.convert_item(element, graph, styles, out);
        }
        part_success
    }

    /// Dispatch a leaf item to the converter registered for its kind.
    /// A registry miss is the clean-failure path for unsupported kinds.
    fn convert_leaf(&self, item: &Entity, graph: &EntityGraph) -> Result<Shape> {
        if let Some(shape) = self.context.cached_shape(item.id) {
            return Ok(shape);
        }

        let converter = self
            .converters
            .get(&item.kind)
            .ok_or(Error::Unimplemented(item.kind))?;

        let shape = converter.convert(item, graph, &self.context)?;
        self.context.cache_shape(item.id, shape.clone());
        Ok(shape)
    }
}
