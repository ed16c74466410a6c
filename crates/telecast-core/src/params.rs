//! Request parameter trees and their JSON rendering.
//!
//! A request body is a [`ParamMap`]: an insertion-ordered mapping from
//! parameter name to [`ParamValue`]. Values may be scalars, lists, nested
//! maps, or typed request objects implementing [`TypeObject`].
//!
//! [`render_params`] turns a tree into the JSON object sent on the wire:
//!
//! - `Null` values are dropped at every depth; absence is how the wire says
//!   "not set".
//! - Nested maps and lists are rendered recursively.
//! - Typed objects are asked for their own [`ParamMap`], which is then
//!   rendered by the same rules.
//!
//! Rendering never mutates the input, so rendering the same tree twice
//! yields equal output.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::{ApiError, ApiResult};

// =============================================================================
// TypeObject
// =============================================================================

/// A typed request object that renders itself into request parameters.
///
/// Implemented by the request types in [`types`](crate::types). Values are
/// stored in a [`ParamValue::Object`] and rendered lazily by
/// [`render_params`].
pub trait TypeObject: fmt::Debug + Send + Sync {
    /// Name of the concrete type, used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Renders this object into a parameter map.
    fn to_params(&self) -> ApiResult<ParamMap>;
}

/// Renders a serde-serializable value into a parameter map.
///
/// This is the dynamic boundary of the parameter system: a value whose
/// serialized form is not a JSON object cannot be a request object and is
/// rejected with [`ApiError::Serialization`] naming `T`.
pub fn serde_params<T: Serialize + ?Sized>(value: &T) -> ApiResult<ParamMap> {
    let type_name = std::any::type_name::<T>();
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map.into_iter().collect()),
        Ok(other) => Err(ApiError::serialization(
            type_name,
            format!("rendered as {}, expected an object", json_kind(&other)),
        )),
        Err(e) => Err(ApiError::serialization(type_name, e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Implements [`TypeObject`] for serde-serializable types.
#[macro_export]
macro_rules! impl_type_object {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::params::TypeObject for $ty {
                fn to_params(&self) -> $crate::ApiResult<$crate::params::ParamMap> {
                    $crate::params::serde_params(self)
                }
            }
        )+
    };
}

// =============================================================================
// ParamValue
// =============================================================================

/// One node of a parameter tree.
#[derive(Clone)]
pub enum ParamValue {
    /// Not set. Dropped when rendering.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// A list of values.
    List(Vec<ParamValue>),
    /// A nested mapping.
    Map(ParamMap),
    /// A typed request object.
    Object(Arc<dyn TypeObject>),
}

impl ParamValue {
    /// Wraps a typed request object.
    pub fn object<T: TypeObject + 'static>(object: T) -> Self {
        Self::Object(Arc::new(object))
    }

    /// Returns `true` for [`ParamValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the nested map, if this is a map.
    pub fn as_map(&self) -> Option<&ParamMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Debug for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => write!(f, "{b:?}"),
            Self::Int(i) => write!(f, "{i:?}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Map(map) => fmt::Debug::fmt(map, f),
            Self::Object(obj) => write!(f, "{}({:?})", obj.type_name(), obj),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        Self::String(v.clone())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<ParamMap> for ParamValue {
    fn from(v: ParamMap) -> Self {
        Self::Map(v)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for ParamValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => Self::Map(map.into_iter().collect()),
        }
    }
}

// =============================================================================
// ParamMap
// =============================================================================

/// Insertion-ordered parameter mapping with unique keys.
#[derive(Clone, Default)]
pub struct ParamMap {
    entries: IndexMap<String, ParamValue>,
}

impl ParamMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a parameter, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present (even when `Null`).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.entries.shift_remove(key)
    }

    /// Merges `other` into this map; later keys win.
    pub fn merge(&mut self, other: ParamMap) {
        self.entries.extend(other.entries);
    }

    /// Number of entries, including `Null` ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Debug for ParamMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Builds a [`ParamMap`] from `key => value` pairs.
///
/// ```
/// use telecast_core::params;
///
/// let caption: Option<&str> = None;
/// let p = params! { "chat_id" => 42i64, "caption" => caption };
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => { $crate::params::ParamMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::params::ParamMap::new();
        $( map.insert($key, $value); )+
        map
    }};
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders a parameter tree into its wire-ready JSON object.
///
/// # Errors
///
/// Returns [`ApiError::Serialization`] if a typed object fails to render or a
/// float is not finite.
pub fn render_params(params: &ParamMap) -> ApiResult<Map<String, Value>> {
    let mut out = Map::with_capacity(params.len());
    for (key, value) in params.iter() {
        if let Some(rendered) = render_value(value)? {
            out.insert(key.to_string(), rendered);
        }
    }
    Ok(out)
}

fn render_value(value: &ParamValue) -> ApiResult<Option<Value>> {
    let rendered = match value {
        ParamValue::Null => return Ok(None),
        ParamValue::Bool(b) => Value::Bool(*b),
        ParamValue::Int(i) => Value::from(*i),
        ParamValue::Float(x) => Number::from_f64(*x)
            .map(Value::Number)
            .ok_or_else(|| ApiError::serialization("f64", format!("non-finite value {x}")))?,
        ParamValue::String(s) => Value::String(s.clone()),
        ParamValue::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                if let Some(v) = render_value(item)? {
                    out.push(v);
                }
            }
            Value::Array(out)
        }
        ParamValue::Map(map) => Value::Object(render_params(map)?),
        ParamValue::Object(obj) => Value::Object(render_params(&obj.to_params()?)?),
    };
    Ok(Some(rendered))
}
