// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity Kinds
//!
//! Fast kind checking using an enum instead of string comparison.

use std::fmt;

/// Entity kinds the conversion engine distinguishes.
/// Covers the geometric leaves, the item groupings, and the support
/// entities (style chain, project units) the kernel reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    // Geometric leaves
    CartesianPoint,
    Direction,
    Polyline,
    ExtrudedAreaSolid,
    RevolvedAreaSolid,
    FacetedBrep,
    HalfSpaceSolid,
    BooleanResult,
    BooleanClippingResult,

    // Item groupings (flattened by the traversal, never converted directly)
    GeometricSet,
    GeometricCurveSet,

    // Representation structure
    ShapeRepresentation,

    // Styling
    StyledItem,
    PresentationStyleAssignment,
    SurfaceStyle,
    SurfaceStyleRendering,
    SurfaceStyleShading,
    ColourRgb,

    // Project context
    Project,
    UnitAssignment,
    SiUnit,

    // Fallback for kinds with no dedicated handling
    Unknown(u16), // Store hash for unknown kinds
}

impl EntityKind {
    /// Parse kind from a schema type name
    pub fn from_name(s: &str) -> Self {
        match s {
            "IFCCARTESIANPOINT" => Self::CartesianPoint,
            "IFCDIRECTION" => Self::Direction,
            "IFCPOLYLINE" => Self::Polyline,
            "IFCEXTRUDEDAREASOLID" => Self::ExtrudedAreaSolid,
            "IFCREVOLVEDAREASOLID" => Self::RevolvedAreaSolid,
            "IFCFACETEDBREP" => Self::FacetedBrep,
            "IFCHALFSPACESOLID" => Self::HalfSpaceSolid,
            "IFCBOOLEANRESULT" => Self::BooleanResult,
            "IFCBOOLEANCLIPPINGRESULT" => Self::BooleanClippingResult,
            "IFCGEOMETRICSET" => Self::GeometricSet,
            "IFCGEOMETRICCURVESET" => Self::GeometricCurveSet,
            "IFCSHAPEREPRESENTATION" => Self::ShapeRepresentation,
            "IFCSTYLEDITEM" => Self::StyledItem,
            "IFCPRESENTATIONSTYLEASSIGNMENT" => Self::PresentationStyleAssignment,
            "IFCSURFACESTYLE" => Self::SurfaceStyle,
            "IFCSURFACESTYLERENDERING" => Self::SurfaceStyleRendering,
            "IFCSURFACESTYLESHADING" => Self::SurfaceStyleShading,
            "IFCCOLOURRGB" => Self::ColourRgb,
            "IFCPROJECT" => Self::Project,
            "IFCUNITASSIGNMENT" => Self::UnitAssignment,
            "IFCSIUNIT" => Self::SiUnit,
            _ => {
                // Unknown kind - store a hash
                Self::Unknown(simple_hash(s))
            }
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CartesianPoint => "IFCCARTESIANPOINT",
            Self::Direction => "IFCDIRECTION",
            Self::Polyline => "IFCPOLYLINE",
            Self::ExtrudedAreaSolid => "IFCEXTRUDEDAREASOLID",
            Self::RevolvedAreaSolid => "IFCREVOLVEDAREASOLID",
            Self::FacetedBrep => "IFCFACETEDBREP",
            Self::HalfSpaceSolid => "IFCHALFSPACESOLID",
            Self::BooleanResult => "IFCBOOLEANRESULT",
            Self::BooleanClippingResult => "IFCBOOLEANCLIPPINGRESULT",
            Self::GeometricSet => "IFCGEOMETRICSET",
            Self::GeometricCurveSet => "IFCGEOMETRICCURVESET",
            Self::ShapeRepresentation => "IFCSHAPEREPRESENTATION",
            Self::StyledItem => "IFCSTYLEDITEM",
            Self::PresentationStyleAssignment => "IFCPRESENTATIONSTYLEASSIGNMENT",
            Self::SurfaceStyle => "IFCSURFACESTYLE",
            Self::SurfaceStyleRendering => "IFCSURFACESTYLERENDERING",
            Self::SurfaceStyleShading => "IFCSURFACESTYLESHADING",
            Self::ColourRgb => "IFCCOLOURRGB",
            Self::Project => "IFCPROJECT",
            Self::UnitAssignment => "IFCUNITASSIGNMENT",
            Self::SiUnit => "IFCSIUNIT",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Simple hash function for unknown kind names
fn simple_hash(s: &str) -> u16 {
    let mut hash: u32 = 5381;
    for byte in s.bytes() {
        hash = ((hash << 5).wrapping_add(hash)).wrapping_add(byte as u32);
    }
    (hash & 0xFFFF) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(
            EntityKind::from_name("IFCCARTESIANPOINT"),
            EntityKind::CartesianPoint
        );
        assert_eq!(
            EntityKind::from_name("IFCGEOMETRICSET"),
            EntityKind::GeometricSet
        );
        assert_eq!(EntityKind::from_name("IFCPROJECT"), EntityKind::Project);
    }

    #[test]
    fn test_unknown_kind() {
        let unknown = EntityKind::from_name("IFCCUSTOMTYPE");
        assert!(matches!(unknown, EntityKind::Unknown(_)));
        // Same name hashes to the same variant
        assert_eq!(unknown, EntityKind::from_name("IFCCUSTOMTYPE"));
    }

    #[test]
    fn test_display() {
        assert_eq!(EntityKind::Polyline.to_string(), "IFCPOLYLINE");
        assert_eq!(EntityKind::Unknown(42).to_string(), "UNKNOWN");
    }
}
