// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Leaf Shape Converters
//!
//! One converter per concrete entity kind, registered with the router at
//! construction:
//!
//! - `point`: cartesian points (cached, unit-scaled)
//! - `curve`: polylines built from cached points
//! - `swept`: extruded/revolved area solids
//! - `boolean`: Boolean results and half-space operands

mod boolean;
mod curve;
mod point;
mod swept;


pub use boolean::BooleanResultConverter;
pub use curve::PolylineConverter;
pub use point::CartesianPointConverter;
pub use swept::SweptSolidConverter;
