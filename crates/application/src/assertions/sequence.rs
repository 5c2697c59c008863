//! Ordered collections that quantifiers can iterate.

use std::collections::VecDeque;

use serde_json::Value;

use crate::error::AssertionError;

/// An ordered, finite sequence of elements.
///
/// Statically typed containers always succeed. Dynamic values such as
/// [`serde_json::Value`] only know at run time whether they hold an array,
/// so they report [`AssertionError::NotACollection`] otherwise. Mapping
/// types deliberately do not implement this trait.
pub trait Sequence {
    /// Element type.
    type Item;

    /// Returns the elements in index order.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NotACollection`] if the value is not an
    /// ordered sequence.
    fn try_elements(&self) -> Result<impl Iterator<Item = &Self::Item>, AssertionError>;
}

impl<T> Sequence for [T] {
    type Item = T;

    fn try_elements(&self) -> Result<impl Iterator<Item = &T>, AssertionError> {
        Ok(self.iter())
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn try_elements(&self) -> Result<impl Iterator<Item = &T>, AssertionError> {
        Ok(self.iter())
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn try_elements(&self) -> Result<impl Iterator<Item = &T>, AssertionError> {
        Ok(self.iter())
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn try_elements(&self) -> Result<impl Iterator<Item = &T>, AssertionError> {
        Ok(self.iter())
    }
}

impl Sequence for Value {
    type Item = Self;

    fn try_elements(&self) -> Result<impl Iterator<Item = &Self>, AssertionError> {
        match self {
            Self::Array(items) => Ok(items.iter()),
            other => Err(AssertionError::NotACollection {
                found: json_kind(other),
            }),
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "JSON null",
        Value::Bool(_) => "JSON boolean",
        Value::Number(_) => "JSON number",
        Value::String(_) => "JSON string",
        Value::Array(_) => "JSON array",
        Value::Object(_) => "JSON object",
    }
}
