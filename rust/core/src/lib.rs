// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Repcast Core
//!
//! Schema-level entity graph for building-model shape conversion.
//!
//! The graph is an arena of typed entities keyed by id. A parser or an API
//! front-end populates it once; the conversion kernel then reads it through
//! reference resolution without ever mutating an entity.
//!
//! ## Quick Start
//!
//! ```rust
//! use repcast_core::{AttrValue, EntityGraph, EntityKind};
//!
//! let mut graph = EntityGraph::new();
//! graph.add(
//!     1,
//!     EntityKind::CartesianPoint,
//!     vec![AttrValue::float_list(&[1.0, 2.0, 3.0])],
//! );
//!
//! let point = graph.entity(1).unwrap();
//! assert_eq!(point.kind, EntityKind::CartesianPoint);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for graph data types

pub mod error;
pub mod graph;
pub mod kind;
pub mod units;

pub use error::{Error, Result};
pub use graph::{AttrValue, Entity, EntityGraph};
pub use kind::EntityKind;
pub use units::{length_unit_scale, si_prefix_multiplier};
