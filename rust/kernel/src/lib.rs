// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Repcast Kernel
//!
//! Representation-to-shape conversion for building models. Walks a
//! representation's item list, flattens nested item groups, converts each
//! leaf through a per-kind converter registry, scales raw coordinates by
//! the session's length unit, and attaches resolved surface styles.
//!
//! Conversion is best-effort: a malformed or unsupported item is skipped
//! and the rest of the representation still converts. The boolean returned
//! alongside the results says whether anything succeeded at all.

pub mod classify;
pub mod context;
pub mod converters;
pub mod error;
pub mod results;
pub mod router;
pub mod shape;
pub mod style;

// Re-export nalgebra point type for convenience
pub use nalgebra::Point3;

pub use classify::{classify, ShapeKind};
pub use context::ConversionContext;
pub use converters::{
    BooleanResultConverter, CartesianPointConverter, PolylineConverter, SweptSolidConverter,
};
pub use error::{Error, Result};
pub use results::{ConversionResult, ConversionResults};
pub use router::{ShapeConverter, ShapeRouter};
pub use shape::{Mesh, Shape};
pub use style::{Style, StyleIndex};
