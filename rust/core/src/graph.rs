// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity Graph - arena of schema entities
//!
//! Read-only once populated. The conversion kernel resolves references
//! through the graph but never mutates or removes entities.

use crate::error::{Error, Result};
use crate::kind::EntityKind;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Entity attribute value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttrValue {
    /// Entity reference
    EntityRef(u32),
    /// String value
    String(String),
    /// Integer value
    Integer(i64),
    /// Float value
    Float(f64),
    /// Enum value
    Enum(String),
    /// List of values
    List(Vec<AttrValue>),
    /// Null/undefined
    Null,
    /// Derived value (*)
    Derived,
}

impl AttrValue {
    /// Build a list of float values from a slice
    pub fn float_list(values: &[f64]) -> Self {
        AttrValue::List(values.iter().map(|&v| AttrValue::Float(v)).collect())
    }

    /// Build a list of entity references from a slice of ids
    pub fn ref_list(ids: &[u32]) -> Self {
        AttrValue::List(ids.iter().map(|&id| AttrValue::EntityRef(id)).collect())
    }

    /// Get as entity reference
    #[inline]
    pub fn as_entity_ref(&self) -> Option<u32> {
        match self {
            AttrValue::EntityRef(id) => Some(*id),
            _ => None,
        }
    }

    /// Get as string
    #[inline]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as enum value
    #[inline]
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            AttrValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Get as float
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            AttrValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as integer
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Integer(i) => Some(*i),
            AttrValue::Float(f) => Some(*f as i64),
            _ => None,
        }
    }

    /// Get as list
    #[inline]
    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Check if null/derived
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null | AttrValue::Derived)
    }

    /// Collect the numeric components of a list value.
    /// Coordinate and ratio lists are at most a handful of entries, so the
    /// result stays on the stack.
    #[inline]
    pub fn float_components(&self) -> SmallVec<[f64; 4]> {
        match self {
            AttrValue::List(items) => items.iter().filter_map(|v| v.as_float()).collect(),
            _ => SmallVec::new(),
        }
    }
}

/// One entity in the graph, with its kind tag and attribute row
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub attributes: Vec<AttrValue>,
}

impl Entity {
    /// Create new entity
    pub fn new(id: u32, kind: EntityKind, attributes: Vec<AttrValue>) -> Self {
        Self {
            id,
            kind,
            attributes,
        }
    }

    /// Get attribute by index
    pub fn get(&self, index: usize) -> Option<&AttrValue> {
        self.attributes.get(index)
    }

    /// Get entity reference attribute
    pub fn get_ref(&self, index: usize) -> Option<u32> {
        self.get(index).and_then(|v| v.as_entity_ref())
    }

    /// Get string attribute
    pub fn get_string(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(|v| v.as_string())
    }

    /// Get enum attribute
    pub fn get_enum(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(|v| v.as_enum())
    }

    /// Get float attribute
    pub fn get_float(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(|v| v.as_float())
    }

    /// Get list attribute
    pub fn get_list(&self, index: usize) -> Option<&[AttrValue]> {
        self.get(index).and_then(|v| v.as_list())
    }
}

/// Arena of entities keyed by id
///
/// Insert-only; entities are immutable once inserted. Conversion sessions
/// hold the graph by shared reference, so several sessions may read one
/// graph concurrently.
#[derive(Debug, Clone, Default)]
pub struct EntityGraph {
    entities: FxHashMap<u32, Entity>,
}

impl EntityGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            entities: FxHashMap::default(),
        }
    }

    /// Insert an entity, returning its id
    pub fn insert(&mut self, entity: Entity) -> u32 {
        let id = entity.id;
        self.entities.insert(id, entity);
        id
    }

    /// Insert an entity built from parts, returning its id
    pub fn add(&mut self, id: u32, kind: EntityKind, attributes: Vec<AttrValue>) -> u32 {
        self.insert(Entity::new(id, kind, attributes))
    }

    /// Look up an entity by id
    #[inline]
    pub fn get(&self, id: u32) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Look up an entity by id, failing if absent
    #[inline]
    pub fn entity(&self, id: u32) -> Result<&Entity> {
        self.entities.get(&id).ok_or(Error::EntityNotFound(id))
    }

    /// Resolve entity reference (follow #id)
    /// Returns None for null/derived values
    #[inline]
    pub fn resolve_ref(&self, attr: &AttrValue) -> Result<Option<&Entity>> {
        match attr.as_entity_ref() {
            Some(id) => Ok(Some(self.entity(id)?)),
            None => Ok(None),
        }
    }

    /// Resolve a list of entity references, skipping non-reference entries
    pub fn resolve_ref_list(&self, attr: &AttrValue) -> Result<Vec<&Entity>> {
        let list = attr.as_list().ok_or(Error::ExpectedList)?;

        let mut entities = Vec::with_capacity(list.len());
        for item in list {
            if let Some(id) = item.as_entity_ref() {
                entities.push(self.entity(id)?);
            }
        }
        Ok(entities)
    }

    /// Iterate over all entities (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterate over entities of one kind (unordered)
    pub fn iter_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.values().filter(move |e| e.kind == kind)
    }

    /// Number of entities in the graph
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
