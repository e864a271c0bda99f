// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit extraction and conversion
//!
//! Walks the project's unit assignment to find the length unit and its
//! SI prefix multiplier. Geometry coordinates are stored in model units;
//! the multiplier converts them to canonical meters.

use crate::error::Result;
use crate::graph::EntityGraph;
use crate::kind::EntityKind;

/// SI Prefix multipliers
/// Maps SI prefix enum values to their numeric multipliers
#[inline]
pub fn si_prefix_multiplier(prefix: &str) -> f64 {
    match prefix {
        "ATTO" => 1e-18,
        "FEMTO" => 1e-15,
        "PICO" => 1e-12,
        "NANO" => 1e-9,
        "MICRO" => 1e-6,
        "MILLI" => 1e-3,   // Most common: millimeters
        "CENTI" => 1e-2,   // Centimeters
        "DECI" => 1e-1,    // Decimeters
        "DECA" => 1e1,     // Dekameters
        "HECTO" => 1e2,    // Hectometers
        "KILO" => 1e3,     // Kilometers
        "MEGA" => 1e6,
        "GIGA" => 1e9,
        "TERA" => 1e12,
        "PETA" => 1e15,
        "EXA" => 1e18,
        _ => 1.0,          // No prefix or unknown = base unit (meters)
    }
}

/// Extract the length unit scale factor for a project
///
/// Follows the chain: project → unit assignment → SI unit with LENGTHUNIT.
/// Returns the multiplier to convert coordinates to base meters. Every
/// missing link in the chain degrades to 1.0 (meters) rather than failing.
pub fn length_unit_scale(graph: &EntityGraph, project_id: u32) -> Result<f64> {
    let project = graph.entity(project_id)?;

    if project.kind != EntityKind::Project {
        return Ok(1.0); // Not a project, default to meters
    }

    // Project structure:
    // Attribute 0: GlobalId
    // Attribute 1: OwnerHistory
    // Attribute 2: Name
    // Attribute 3: Description
    // Attribute 4: ObjectType
    // Attribute 5: LongName
    // Attribute 6: Phase
    // Attribute 7: RepresentationContexts
    // Attribute 8: UnitsInContext (unit assignment)

    let units_ref = match project.get_ref(8) {
        Some(ref_id) => ref_id,
        None => return Ok(1.0), // No units defined, default to meters
    };

    let unit_assignment = match graph.get(units_ref) {
        Some(entity) => entity,
        None => return Ok(1.0), // Dangling reference
    };

    if unit_assignment.kind != EntityKind::UnitAssignment {
        return Ok(1.0); // Wrong kind
    }

    // Unit assignment has a single attribute: Units (list of unit refs)
    let units_list = match unit_assignment.get_list(0) {
        Some(list) => list,
        None => return Ok(1.0), // No units list
    };

    // Search for an SI unit with .LENGTHUNIT.
    for unit_attr in units_list {
        let unit_ref = match unit_attr.as_entity_ref() {
            Some(ref_id) => ref_id,
            None => continue,
        };

        let unit_entity = match graph.get(unit_ref) {
            Some(entity) => entity,
            None => continue, // Dangling, skip
        };

        if unit_entity.kind != EntityKind::SiUnit {
            continue; // Skip conversion-based units etc.
        }

        // SI unit structure:
        // Attribute 0: Dimensions (can be *)
        // Attribute 1: UnitType (.LENGTHUNIT., .AREAUNIT., etc.)
        // Attribute 2: Prefix (.MILLI., .CENTI., etc.)
        // Attribute 3: Name (.METRE., .SQUARE_METRE., etc.)

        let unit_type = match unit_entity.get_enum(1) {
            Some(type_str) => type_str,
            None => continue,
        };

        if unit_type != "LENGTHUNIT" {
            continue; // Not a length unit, skip
        }

        // Extract the SI prefix (attribute 2)
        let prefix_attr = match unit_entity.get(2) {
            Some(attr) => attr,
            None => return Ok(1.0), // No prefix = base meters
        };

        if prefix_attr.is_null() {
            return Ok(1.0); // Null means no prefix = base meters
        }

        let prefix = match prefix_attr.as_enum() {
            Some(prefix_str) => prefix_str,
            None => return Ok(1.0), // Can't read prefix, assume meters
        };

        return Ok(si_prefix_multiplier(prefix));
    }

    // No length unit found, default to meters
    Ok(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AttrValue;

    #[test]
    fn test_si_prefix_multipliers() {
        assert_eq!(si_prefix_multiplier("MILLI"), 0.001);
        assert_eq!(si_prefix_multiplier("CENTI"), 0.01);
        assert_eq!(si_prefix_multiplier("DECI"), 0.1);
        assert_eq!(si_prefix_multiplier("KILO"), 1000.0);
        assert_eq!(si_prefix_multiplier(""), 1.0);
        assert_eq!(si_prefix_multiplier("UNKNOWN"), 1.0);
    }

    fn project_graph(prefix: Option<&str>) -> EntityGraph {
        let mut graph = EntityGraph::new();
        let prefix_attr = match prefix {
            Some(p) => AttrValue::Enum(p.to_string()),
            None => AttrValue::Null,
        };
        graph.add(
            1,
            EntityKind::SiUnit,
            vec![
                AttrValue::Derived,
                AttrValue::Enum("LENGTHUNIT".to_string()),
                prefix_attr,
                AttrValue::Enum("METRE".to_string()),
            ],
        );
        graph.add(2, EntityKind::UnitAssignment, vec![AttrValue::ref_list(&[1])]);
        let mut project_attrs = vec![AttrValue::Null; 8];
        project_attrs.push(AttrValue::EntityRef(2));
        graph.add(3, EntityKind::Project, project_attrs);
        graph
    }

    #[test]
    fn test_length_unit_scale_millimeters() {
        let graph = project_graph(Some("MILLI"));
        assert_eq!(length_unit_scale(&graph, 3).unwrap(), 0.001);
    }

    #[test]
    fn test_length_unit_scale_base_meters() {
        let graph = project_graph(None);
        assert_eq!(length_unit_scale(&graph, 3).unwrap(), 1.0);
    }

    #[test]
    fn test_length_unit_scale_no_units() {
        let mut graph = EntityGraph::new();
        graph.add(3, EntityKind::Project, vec![AttrValue::Null; 9]);
        assert_eq!(length_unit_scale(&graph, 3).unwrap(), 1.0);
    }
}
