//! Emptiness checks
//!
//! A value is empty when it is absent, whitespace-only text, a zero-length
//! sequence or a zero-key mapping. Numbers and booleans are never empty,
//! whatever their value.

use crate::value::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Types that can be checked for emptiness
pub trait Blank {
    /// True if the value carries no content
    fn is_blank(&self) -> bool;
}

/// Check whether a value is empty
pub fn is_empty<T: Blank + ?Sized>(value: &T) -> bool {
    value.is_blank()
}

/// Check whether a dynamic value is an array
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_blank(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) | Value::Date(_) | Value::Regex(_) => false,
        }
    }
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        match self {
            Some(inner) => inner.is_blank(),
            None => true,
        }
    }
}

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Blank for [T; N] {
    fn is_blank(&self) -> bool {
        N == 0
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Blank for HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Blank for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Blank for HashSet<T, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for BTreeSet<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for Box<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}
