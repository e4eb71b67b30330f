//! Expandable relationship fields.
//!
//! Many resources reference related objects that the server returns either
//! collapsed (a bare id string) or expanded (the full object inlined),
//! depending on the `expand` request parameter. [`Expandable`] holds the
//! outcome of that server-side decision: the wire shape is sniffed once
//! during decode, committed to a variant, and downstream code matches on
//! the variant instead of probing JSON types. Nothing here fetches anything
//! — a collapsed field stays collapsed until the caller re-requests the
//! resource with expansion.

use std::fmt;
use std::marker::PhantomData;

use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::ApiObject;

/// A relationship the server may return collapsed or expanded.
///
/// Decodes from exactly three wire shapes: `null` (or an absent field, via
/// `#[serde(default)]` on the containing resource), a bare id string, or a
/// full object. Any other JSON type is a shape error.
#[derive(Debug, Clone, PartialEq)]
pub enum Expandable<T: ApiObject> {
    /// The field was absent or `null`.
    None,
    /// Collapsed form: only the identifier was returned.
    Id(T::Id),
    /// Expanded form: the full related object was inlined.
    Object(Box<T>),
}

impl<T: ApiObject> Expandable<T> {
    /// The related object's identifier, regardless of shape.
    ///
    /// Collapsed values return the id they carry; expanded values read the
    /// id off the inlined object (empty when the object omitted it); the
    /// [`Expandable::None`] sentinel returns the empty default id.
    pub fn id(&self) -> T::Id {
        match self {
            Expandable::None => T::Id::default(),
            Expandable::Id(id) => id.clone(),
            Expandable::Object(object) => object.id().clone(),
        }
    }

    /// The expanded object, when the server inlined one.
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Consume the field and take the expanded object, when present.
    pub fn into_object(self) -> Option<T> {
        match self {
            Expandable::Object(object) => Some(*object),
            _ => None,
        }
    }

    /// True when the field was absent or `null`.
    pub fn is_none(&self) -> bool {
        matches!(self, Expandable::None)
    }

    /// True when the server inlined the full object.
    pub fn is_expanded(&self) -> bool {
        matches!(self, Expandable::Object(_))
    }
}

impl<T: ApiObject> Default for Expandable<T> {
    fn default() -> Self {
        Expandable::None
    }
}

impl<T> Serialize for Expandable<T>
where
    T: ApiObject + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Expandable::None => serializer.serialize_none(),
            Expandable::Id(id) => serializer.collect_str(id),
            Expandable::Object(object) => object.serialize(serializer),
        }
    }
}

struct ExpandableVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for ExpandableVisitor<T>
where
    T: ApiObject + Deserialize<'de>,
{
    type Value = Expandable<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "null, an id string, or an expanded `{}` object",
            T::OBJECT
        )
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Expandable::None)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Expandable::None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Expandable::Id(T::Id::from(value.to_owned())))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        T::deserialize(MapAccessDeserializer::new(map))
            .map(|object| Expandable::Object(Box::new(object)))
    }
}

impl<'de, T> Deserialize<'de> for Expandable<T>
where
    T: ApiObject + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ExpandableVisitor {
            marker: PhantomData,
        })
    }
}

/// An array-valued expandable relationship.
///
/// Each element independently follows the [`Expandable`] shape rules, so one
/// response array may mix collapsed and expanded entries. `null` elements
/// are kept in place as [`Expandable::None`] so indices stay aligned with
/// the wire array; an element of any other JSON type fails the whole list
/// decode. A `null` or absent field decodes to the empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandableList<T: ApiObject>(Vec<Expandable<T>>);

impl<T: ApiObject> ExpandableList<T> {
    pub fn new() -> Self {
        ExpandableList(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Expandable<T>> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expandable<T>> {
        self.0.iter()
    }

    /// Identifiers of every non-empty entry, in wire order.
    pub fn ids(&self) -> impl Iterator<Item = T::Id> + '_ {
        self.0
            .iter()
            .filter(|entry| !entry.is_none())
            .map(Expandable::id)
    }

    /// The expanded entries only, in wire order.
    pub fn expanded(&self) -> impl Iterator<Item = &T> {
        self.0.iter().filter_map(Expandable::as_object)
    }
}

impl<T: ApiObject> Default for ExpandableList<T> {
    fn default() -> Self {
        ExpandableList::new()
    }
}

impl<T: ApiObject> From<Vec<Expandable<T>>> for ExpandableList<T> {
    fn from(entries: Vec<Expandable<T>>) -> Self {
        ExpandableList(entries)
    }
}

impl<T: ApiObject> IntoIterator for ExpandableList<T> {
    type Item = Expandable<T>;
    type IntoIter = std::vec::IntoIter<Expandable<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: ApiObject> IntoIterator for &'a ExpandableList<T> {
    type Item = &'a Expandable<T>;
    type IntoIter = std::slice::Iter<'a, Expandable<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> Serialize for ExpandableList<T>
where
    T: ApiObject + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for ExpandableList<T>
where
    T: ApiObject + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Option::<Vec<Expandable<T>>>::deserialize(deserializer)?;
        Ok(ExpandableList(entries.unwrap_or_default()))
    }
}
