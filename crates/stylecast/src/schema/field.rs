//! Tri-state leaf values and the [`StyleNode`] traversal trait.
//!
//! Every leaf of a style bundle is a [`Field`]. A field is either absent
//! (the tier has no opinion), explicitly unset (the tier wants the value to
//! fall through to a lower tier), or set to a concrete value.
//!
//! # JSON mapping
//!
//! | State | JSON |
//! |-------|------|
//! | `Absent` | key not present |
//! | `Unset` | `null` |
//! | `Set(v)` | the value itself |
//!
//! Both non-set states survive a round-trip through JSON or YAML, so stored
//! bundles never confuse "never touched" with "intentionally cleared".

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A sparse style leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// No opinion at this tier.
    Absent,
    /// Explicitly cleared: contributes nothing, lower tiers show through.
    Unset,
    /// A concrete value.
    Set(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    /// Returns true if the key is not present at all.
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    /// Returns true if the field holds the unset sentinel.
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    /// Returns true if the field holds a concrete value.
    pub fn is_set(&self) -> bool {
        matches!(self, Field::Set(_))
    }

    /// Returns the concrete value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Set(v) => Some(v),
            _ => None,
        }
    }

    /// Replaces the field with a concrete value.
    pub fn set(&mut self, value: T) {
        *self = Field::Set(value);
    }

    /// Replaces the field with the unset sentinel.
    pub fn unset(&mut self) {
        *self = Field::Unset;
    }

    /// Removes the field (back to "no opinion").
    pub fn clear(&mut self) {
        *self = Field::Absent;
    }
}

impl<T: Clone> Field<T> {
    /// Returns the concrete value or the given fallback.
    pub fn value_or(&self, fallback: T) -> T {
        self.value().cloned().unwrap_or(fallback)
    }
}

impl Field<String> {
    /// Returns the value if it is set to a non-empty string.
    pub fn non_empty(&self) -> Option<&str> {
        self.value().map(String::as_str).filter(|s| !s.trim().is_empty())
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Set(value)
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Field::Set(value.to_string())
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Set(v) => v.serialize(serializer),
            Field::Unset | Field::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Field::Set(v),
            None => Field::Unset,
        })
    }
}

/// What a tier says about a single leaf path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Set,
    Unset,
}

/// Uniform traversal over the fixed schema tree.
///
/// Implemented for [`Field`] (the leaves) and for every settings record via
/// the `style_record!` macro, so merging and provenance tracking never need
/// to know the concrete shape of a category.
pub trait StyleNode {
    /// Copies every `Set` leaf of `upper` onto `self`.
    ///
    /// `Unset` and `Absent` leaves in `upper` leave `self` untouched. Lists
    /// are leaves, so an upper list replaces the lower one wholesale.
    fn overlay(&mut self, upper: &Self);

    /// Calls `visitor` for every non-absent leaf below `prefix`.
    fn visit(&self, prefix: &str, visitor: &mut dyn FnMut(&str, Presence));

    /// Returns true if no leaf is present.
    fn is_empty(&self) -> bool;

    /// Appends every leaf path of the schema below `prefix`, present or not.
    fn schema_paths(prefix: &str, out: &mut Vec<String>);
}

impl<T: Clone> StyleNode for Field<T> {
    fn overlay(&mut self, upper: &Self) {
        if let Field::Set(v) = upper {
            *self = Field::Set(v.clone());
        }
    }

    fn visit(&self, prefix: &str, visitor: &mut dyn FnMut(&str, Presence)) {
        match self {
            Field::Set(_) => visitor(prefix, Presence::Set),
            Field::Unset => visitor(prefix, Presence::Unset),
            Field::Absent => {}
        }
    }

    fn is_empty(&self) -> bool {
        self.is_absent()
    }

    fn schema_paths(prefix: &str, out: &mut Vec<String>) {
        out.push(prefix.to_string());
    }
}

/// Joins a dotted path prefix and a key.
pub(crate) fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Declares a settings record: a struct of [`StyleNode`] members with
/// matching serde keys and traversal paths.
macro_rules! style_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $field:ident : $ty:ty => $key:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $key, skip_serializing_if = "crate::schema::StyleNode::is_empty")]
                pub $field: $ty,
            )*
        }

        impl $name {
            /// Serde keys of the direct members, in declaration order.
            pub const KEYS: &'static [&'static str] = &[$($key),*];
        }

        impl crate::schema::StyleNode for $name {
            fn overlay(&mut self, upper: &Self) {
                $( crate::schema::StyleNode::overlay(&mut self.$field, &upper.$field); )*
            }

            fn visit(&self, prefix: &str, visitor: &mut dyn FnMut(&str, crate::schema::Presence)) {
                $(
                    crate::schema::StyleNode::visit(
                        &self.$field,
                        &crate::schema::field::join_path(prefix, $key),
                        visitor,
                    );
                )*
            }

            fn is_empty(&self) -> bool {
                true $( && crate::schema::StyleNode::is_empty(&self.$field) )*
            }

            fn schema_paths(prefix: &str, out: &mut Vec<String>) {
                $(
                    <$ty as crate::schema::StyleNode>::schema_paths(
                        &crate::schema::field::join_path(prefix, $key),
                        out,
                    );
                )*
            }
        }
    };
}

pub(crate) use style_record;
