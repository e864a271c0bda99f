// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Style resolution
//!
//! Maps representation items to their surface colour by walking the
//! styled-item chain once per graph:
//! styled item → (presentation style assignment →) surface style →
//! rendering/shading → RGB colour.
//!
//! Resolution is advisory: an item with no resolvable style converts
//! normally, it just carries no style.

use repcast_core::{AttrValue, Entity, EntityGraph, EntityKind};
use rustc_hash::FxHashMap;

/// Resolved visual style for a representation item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// The surface style entity the colour came from
    pub entity: u32,
    /// Surface colour as RGBA, alpha derived from transparency
    pub rgba: [f32; 4],
}

/// Index from representation item id to its resolved style
///
/// Built once per graph by scanning styled-item entities; lookups during
/// conversion are O(1). First resolvable style wins per item.
#[derive(Debug, Clone, Default)]
pub struct StyleIndex {
    styles: FxHashMap<u32, Style>,
}

impl StyleIndex {
    /// Build the index by scanning all styled items in the graph
    pub fn build(graph: &EntityGraph) -> Self {
        let mut styles: FxHashMap<u32, Style> = FxHashMap::default();

        for styled_item in graph.iter_kind(EntityKind::StyledItem) {
            // Styled item: Item (geometry ref), Styles (list of style refs), Name
            let item_id = match styled_item.get_ref(0) {
                Some(id) => id,
                None => continue,
            };

            if styles.contains_key(&item_id) {
                continue;
            }

            let styles_attr = match styled_item.get(1) {
                Some(attr) => attr,
                None => continue,
            };

            if let Some(style) = style_from_styles_attr(styles_attr, graph) {
                styles.insert(item_id, style);
            }
        }

        Self { styles }
    }

    /// Style for a representation item, if one was resolved
    #[inline]
    pub fn style_of(&self, item_id: u32) -> Option<Style> {
        self.styles.get(&item_id).copied()
    }

    /// Number of indexed items
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Extract a style from a styled item's Styles attribute.
/// Styles can be a list or a single reference.
fn style_from_styles_attr(styles_attr: &AttrValue, graph: &EntityGraph) -> Option<Style> {
    if let Some(list) = styles_attr.as_list() {
        for item in list {
            if let Some(style_id) = item.as_entity_ref() {
                if let Some(style) = style_from_assignment(style_id, graph) {
                    return Some(style);
                }
            }
        }
    } else if let Some(style_id) = styles_attr.as_entity_ref() {
        return style_from_assignment(style_id, graph);
    }

    None
}

/// Resolve a presentation style assignment or a surface style directly
fn style_from_assignment(style_id: u32, graph: &EntityGraph) -> Option<Style> {
    let style = graph.get(style_id)?;

    match style.kind {
        EntityKind::SurfaceStyle => style_from_surface_style(style, graph),
        EntityKind::PresentationStyleAssignment => {
            // Assignment has a Styles list at attribute 0
            let list = style.get_list(0)?;
            for item in list {
                if let Some(inner_id) = item.as_entity_ref() {
                    let inner = graph.get(inner_id)?;
                    if inner.kind == EntityKind::SurfaceStyle {
                        if let Some(style) = style_from_surface_style(inner, graph) {
                            return Some(style);
                        }
                    }
                }
            }
            None
        }
        _ => None,
    }
}

/// Extract the colour from a surface style's element list
fn style_from_surface_style(style: &Entity, graph: &EntityGraph) -> Option<Style> {
    // Surface style: Name, Side, Styles (list of surface style elements)
    let elements = style.get_list(2)?;

    for element in elements {
        if let Some(element_id) = element.as_entity_ref() {
            if let Some(rgba) = rgba_from_rendering(element_id, graph) {
                return Some(Style {
                    entity: style.id,
                    rgba,
                });
            }
        }
    }

    None
}

/// Extract RGBA from a surface style rendering or shading element
fn rgba_from_rendering(rendering_id: u32, graph: &EntityGraph) -> Option<[f32; 4]> {
    let rendering = graph.get(rendering_id)?;

    if !matches!(
        rendering.kind,
        EntityKind::SurfaceStyleRendering | EntityKind::SurfaceStyleShading
    ) {
        return None;
    }

    // Attribute 0: SurfaceColour, attribute 1: Transparency (rendering only)
    let colour_id = rendering.get_ref(0)?;
    let colour = graph.get(colour_id)?;

    if colour.kind != EntityKind::ColourRgb {
        return None;
    }

    // Colour RGB: Name, Red, Green, Blue
    let r = colour.get_float(1)? as f32;
    let g = colour.get_float(2)? as f32;
    let b = colour.get_float(3)? as f32;

    let transparency = rendering.get_float(1).unwrap_or(0.0) as f32;
    let alpha = (1.0 - transparency).clamp(0.0, 1.0);

    Some([r, g, b, alpha])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled_graph() -> EntityGraph {
        let mut graph = EntityGraph::new();
        // Colour and rendering chain
        graph.add(
            10,
            EntityKind::ColourRgb,
            vec![
                AttrValue::Null,
                AttrValue::Float(0.8),
                AttrValue::Float(0.1),
                AttrValue::Float(0.2),
            ],
        );
        graph.add(
            11,
            EntityKind::SurfaceStyleRendering,
            vec![AttrValue::EntityRef(10), AttrValue::Float(0.25)],
        );
        graph.add(
            12,
            EntityKind::SurfaceStyle,
            vec![
                AttrValue::String("red".to_string()),
                AttrValue::Enum("BOTH".to_string()),
                AttrValue::ref_list(&[11]),
            ],
        );
        graph.add(
            13,
            EntityKind::PresentationStyleAssignment,
            vec![AttrValue::ref_list(&[12])],
        );
        // Styled item targeting geometry item #1
        graph.add(
            14,
            EntityKind::StyledItem,
            vec![
                AttrValue::EntityRef(1),
                AttrValue::ref_list(&[13]),
                AttrValue::Null,
            ],
        );
        graph
    }

    #[test]
    fn test_style_chain_resolution() {
        let graph = styled_graph();
        let index = StyleIndex::build(&graph);

        let style = index.style_of(1).expect("style should resolve");
        assert_eq!(style.entity, 12);
        assert_eq!(style.rgba, [0.8, 0.1, 0.2, 0.75]);
    }

    #[test]
    fn test_unstyled_item() {
        let graph = styled_graph();
        let index = StyleIndex::build(&graph);
        assert!(index.style_of(99).is_none());
    }

    #[test]
    fn test_direct_surface_style_reference() {
        let mut graph = styled_graph();
        // Second styled item pointing straight at the surface style
        graph.add(
            15,
            EntityKind::StyledItem,
            vec![
                AttrValue::EntityRef(2),
                AttrValue::EntityRef(12),
                AttrValue::Null,
            ],
        );
        let index = StyleIndex::build(&graph);
        assert_eq!(index.style_of(2).unwrap().entity, 12);
    }
}
