//! Keeps "key absent" apart from "key present with `null`" for optional fields.
//!
//! Use with `Option<Option<T>>`, `#[serde(default, deserialize_with = "present")]` and
//! `#[serde(skip_serializing_if = "Option::is_none")]`: absent is `None`, `null` is
//! `Some(None)`, and both are written back exactly as they were read.

use serde::{Deserialize, Deserializer};

pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
