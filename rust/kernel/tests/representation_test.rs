// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end conversion of a representation graph: project units,
//! mixed supported/unsupported items, nested groups, and styles.

use nalgebra::Point3;
use repcast_core::{AttrValue, EntityGraph, EntityKind};
use repcast_kernel::{ConversionResults, Shape, ShapeRouter, StyleIndex};

/// A model in millimeters: one annotation-style curve set plus survey
/// points, with an extrusion the kernel has no sweep algorithm for.
fn build_model() -> (EntityGraph, u32) {
    let mut graph = EntityGraph::new();

    // Project declared in millimeters
    graph.add(
        100,
        EntityKind::SiUnit,
        vec![
            AttrValue::Derived,
            AttrValue::Enum("LENGTHUNIT".to_string()),
            AttrValue::Enum("MILLI".to_string()),
            AttrValue::Enum("METRE".to_string()),
        ],
    );
    graph.add(
        101,
        EntityKind::UnitAssignment,
        vec![AttrValue::ref_list(&[100])],
    );
    let mut project_attrs = vec![AttrValue::Null; 8];
    project_attrs.push(AttrValue::EntityRef(101));
    graph.add(102, EntityKind::Project, project_attrs);

    // Survey points (mm)
    graph.add(
        1,
        EntityKind::CartesianPoint,
        vec![AttrValue::float_list(&[1000.0, 2000.0, 3000.0])],
    );
    graph.add(
        2,
        EntityKind::CartesianPoint,
        vec![AttrValue::float_list(&[5000.0])],
    );

    // Polyline through three corners
    graph.add(
        3,
        EntityKind::CartesianPoint,
        vec![AttrValue::float_list(&[0.0, 0.0])],
    );
    graph.add(
        4,
        EntityKind::CartesianPoint,
        vec![AttrValue::float_list(&[4000.0, 0.0])],
    );
    graph.add(
        5,
        EntityKind::CartesianPoint,
        vec![AttrValue::float_list(&[4000.0, 2500.0])],
    );
    graph.add(6, EntityKind::Polyline, vec![AttrValue::ref_list(&[3, 4, 5])]);

    // Curve set wrapping the polyline and one of the survey points
    graph.add(
        7,
        EntityKind::GeometricCurveSet,
        vec![AttrValue::ref_list(&[6, 2])],
    );

    // Extrusion without a ported sweep algorithm
    graph.add(8, EntityKind::ExtrudedAreaSolid, vec![AttrValue::Null; 4]);

    // Styled survey point
    graph.add(
        200,
        EntityKind::ColourRgb,
        vec![
            AttrValue::Null,
            AttrValue::Float(0.2),
            AttrValue::Float(0.4),
            AttrValue::Float(0.6),
        ],
    );
    graph.add(
        201,
        EntityKind::SurfaceStyleRendering,
        vec![AttrValue::EntityRef(200), AttrValue::Float(0.5)],
    );
    graph.add(
        202,
        EntityKind::SurfaceStyle,
        vec![
            AttrValue::String("survey".to_string()),
            AttrValue::Enum("BOTH".to_string()),
            AttrValue::ref_list(&[201]),
        ],
    );
    graph.add(
        203,
        EntityKind::StyledItem,
        vec![
            AttrValue::EntityRef(1),
            AttrValue::ref_list(&[202]),
            AttrValue::Null,
        ],
    );

    // The representation: styled point, extrusion, curve set
    let rep = graph.add(
        300,
        EntityKind::ShapeRepresentation,
        vec![
            AttrValue::Null,
            AttrValue::String("Body".to_string()),
            AttrValue::String("GeometricCurveSet".to_string()),
            AttrValue::ref_list(&[1, 8, 7]),
        ],
    );

    (graph, rep)
}

#[test]
fn test_full_model_conversion() {
    let (graph, rep) = build_model();

    let router = ShapeRouter::with_units(&graph);
    assert_eq!(router.context().unit_scale(), 0.001);

    let (results, success) = router.convert(graph.entity(rep).unwrap(), &graph);

    // Extrusion #8 is dropped; point #1, polyline #6 and point #2 survive,
    // in pre-order depth-first order with the curve set flattened in place.
    assert!(success);
    assert_eq!(results.len(), 3);
    let order: Vec<u32> = results.iter().map(|r| r.item).collect();
    assert_eq!(order, vec![1, 6, 2]);

    // Coordinates arrive in meters
    assert_eq!(
        results.results[0].shape,
        Shape::Vertex(Point3::new(1.0, 2.0, 3.0))
    );
    assert_eq!(
        results.results[2].shape,
        Shape::Vertex(Point3::new(5.0, 0.0, 0.0))
    );

    let wire = results.results[1].shape.as_wire().unwrap();
    assert_eq!(wire.len(), 3);
    assert_eq!(wire[1], Point3::new(4.0, 0.0, 0.0));

    // Style resolved for the styled point only
    let style = results.results[0].style.expect("styled point");
    assert_eq!(style.entity, 202);
    assert_eq!(style.rgba, [0.2, 0.4, 0.6, 0.5]);
    assert!(results.results[1].style.is_none());
    assert!(results.results[2].style.is_none());
}

#[test]
fn test_shared_style_index_across_representations() {
    let (mut graph, first_rep) = build_model();

    // A second representation referencing the same styled point
    let second_rep = graph.add(
        301,
        EntityKind::ShapeRepresentation,
        vec![
            AttrValue::Null,
            AttrValue::String("Annotation".to_string()),
            AttrValue::String("GeometricSet".to_string()),
            AttrValue::ref_list(&[1]),
        ],
    );

    let router = ShapeRouter::with_units(&graph);
    let styles = StyleIndex::build(&graph);

    let mut out = ConversionResults::new();
    let first = router.convert_representation(
        graph.entity(first_rep).unwrap(),
        &graph,
        &styles,
        &mut out,
    );
    let second = router.convert_representation(
        graph.entity(second_rep).unwrap(),
        &graph,
        &styles,
        &mut out,
    );

    assert!(first && second);
    assert_eq!(out.len(), 4);

    // The shared point entity converts identically both times
    assert_eq!(out.results[0].shape, out.results[3].shape);
    assert_eq!(
        out.results[3].style.map(|s| s.entity),
        Some(202)
    );
}
