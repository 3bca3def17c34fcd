//! Filter configurations for list and relationship queries.
//!
//! Every filter struct is generated from a field table: Rust field, wire key and
//! value type. Unset fields are never sent. Set fields become exactly one query
//! pair each, in the order the table declares them.

use serde::{Deserialize, Serialize};

/// Value type of a filter field on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
}

/// One row of a filter's field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Rust field name
    pub field: &'static str,
    /// Query key sent upstream
    pub key: &'static str,
    pub kind: FieldKind,
}

/// Formatting of a single filter value
pub trait QueryValue {
    const KIND: FieldKind;

    fn to_query_value(&self) -> String;
}

impl QueryValue for String {
    const KIND: FieldKind = FieldKind::String;

    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for u32 {
    const KIND: FieldKind = FieldKind::Integer;

    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for u64 {
    const KIND: FieldKind = FieldKind::Integer;

    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

/// A typed bag of optional query filters
pub trait FilterConfig {
    /// Field table in wire order
    const FIELDS: &'static [FieldSpec];

    /// `(key, value)` pairs for the fields that are set, in table order
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Join resource ids the way list filters such as `comics` or `series` expect them
pub fn id_list<I>(ids: I) -> String
where
    I: IntoIterator<Item = u64>,
{
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

macro_rules! filter_config {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty => $key:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $crate::filters::FilterConfig for $name {
            const FIELDS: &'static [$crate::filters::FieldSpec] = &[
                $(
                    $crate::filters::FieldSpec {
                        field: stringify!($field),
                        key: $key,
                        kind: <$ty as $crate::filters::QueryValue>::KIND,
                    },
                )*
            ];

            fn query_pairs(&self) -> Vec<(&'static str, String)> {
                let mut pairs = Vec::new();
                $(
                    if let Some(value) = &self.$field {
                        pairs.push(($key, $crate::filters::QueryValue::to_query_value(value)));
                    }
                )*
                pairs
            }
        }
    };
}

mod character;
mod comic;
mod creator;
mod event;
mod series;
mod story;

pub use character::*;
pub use comic::*;
pub use creator::*;
pub use event::*;
pub use series::*;
pub use story::*;
