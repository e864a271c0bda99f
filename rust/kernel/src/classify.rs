// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Item classification for the representation traversal

use repcast_core::EntityKind;

/// What the traversal does with a representation item:
/// recurse into a nested item group, or convert a single leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Nested list of items; flattened by recursion
    List,
    /// Single geometric item; dispatched to a leaf converter
    Leaf,
}

/// Classify an entity kind.
///
/// Total over every kind the graph can hold: kinds without dedicated
/// handling (including `Unknown`) classify as `Leaf` and fail cleanly at
/// dispatch rather than here.
#[inline]
pub fn classify(kind: EntityKind) -> ShapeKind {
    match kind {
        EntityKind::GeometricSet | EntityKind::GeometricCurveSet => ShapeKind::List,
        _ => ShapeKind::Leaf,
    }
}
