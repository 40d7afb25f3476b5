#![forbid(unsafe_code)]

//! Props maps.
//!
//! [`Props`] is the configuration value a component is instantiated with.
//! Entries are either plain data ([`serde_json::Value`]) or render callbacks
//! ([`Callback`]). Keys are kept sorted so two props maps with the same
//! entries compare and print identically.
//!
//! # Merging
//!
//! [`Props::extend`] and [`Props::merged`] are the explicit form of an
//! object spread `{...left, ...right}`: on a key collision the entry from
//! the right-hand side wins.

use std::any::{Any, type_name};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::error::PropsError;
use crate::node::Node;

/// Conventional key of the render callback of a render-prop component.
pub const CHILDREN: &str = "children";

/// A type-erased render callback `A -> Node`.
///
/// The callback remembers the value type it accepts and is recovered with
/// [`Callback::downcast`]. Cloning shares the underlying closure, and
/// equality is pointer identity.
#[derive(Clone)]
pub struct Callback {
    inner: Rc<dyn Any>,
    accepts: &'static str,
}

impl Callback {
    /// Erase a shared callback.
    #[must_use]
    pub fn new<A: 'static>(callback: Rc<dyn Fn(A) -> Node>) -> Self {
        Self {
            inner: Rc::new(callback),
            accepts: type_name::<A>(),
        }
    }

    /// Erase a plain closure.
    #[must_use]
    pub fn from_fn<A: 'static>(callback: impl Fn(A) -> Node + 'static) -> Self {
        Self::new(Rc::new(callback) as Rc<dyn Fn(A) -> Node>)
    }

    /// Recover the callback if it accepts `A`.
    #[must_use]
    pub fn downcast<A: 'static>(&self) -> Option<Rc<dyn Fn(A) -> Node>> {
        self.inner.downcast_ref::<Rc<dyn Fn(A) -> Node>>().cloned()
    }

    /// Invoke the callback with `value`, or `None` if it does not accept `A`.
    pub fn call<A: 'static>(&self, value: A) -> Option<Node> {
        self.downcast::<A>().map(|callback| callback(value))
    }

    /// Name of the value type this callback accepts.
    #[must_use]
    pub fn accepts(&self) -> &'static str {
        self.accepts
    }

    /// Whether both handles share the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("accepts", &self.accepts)
            .finish_non_exhaustive()
    }
}

/// A single props entry.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Plain data.
    Data(Value),
    /// A render callback.
    Callback(Callback),
}

impl PropValue {
    #[must_use]
    pub fn as_data(&self) -> Option<&Value> {
        match self {
            Self::Data(value) => Some(value),
            Self::Callback(_) => None,
        }
    }

    #[must_use]
    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            Self::Callback(callback) => Some(callback),
            Self::Data(_) => None,
        }
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}

impl From<Callback> for PropValue {
    fn from(callback: Callback) -> Self {
        Self::Callback(callback)
    }
}

/// The configuration a component is instantiated with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: BTreeMap<String, PropValue>,
}

impl Props {
    /// Empty props.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a data entry.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, PropValue::Data(value.into()));
        self
    }

    /// Set a callback entry.
    #[must_use]
    pub fn with_callback(mut self, key: impl Into<String>, callback: Callback) -> Self {
        self.insert(key, PropValue::Callback(callback));
        self
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove an entry.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The data entry under `key`.
    pub fn data(&self, key: &str) -> Result<&Value, PropsError> {
        match self.entries.get(key) {
            Some(PropValue::Data(value)) => Ok(value),
            Some(PropValue::Callback(_)) => Err(PropsError::NotData { key: key.to_owned() }),
            None => Err(PropsError::Missing { key: key.to_owned() }),
        }
    }

    /// The callback under `key`, recovered as accepting `A`.
    pub fn callback<A: 'static>(&self, key: &str) -> Result<Rc<dyn Fn(A) -> Node>, PropsError> {
        let callback = match self.entries.get(key) {
            Some(PropValue::Callback(callback)) => callback,
            Some(PropValue::Data(_)) => {
                return Err(PropsError::NotCallback { key: key.to_owned() });
            }
            None => return Err(PropsError::Missing { key: key.to_owned() }),
        };
        callback.downcast::<A>().ok_or_else(|| PropsError::CallbackType {
            key: key.to_owned(),
            expected: type_name::<A>(),
            actual: callback.accepts(),
        })
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, PropValue> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy every entry of `other` into `self`; `other` wins on collision.
    pub fn extend(&mut self, other: Props) {
        self.entries.extend(other.entries);
    }

    /// `{...self, ...other}`.
    #[must_use]
    pub fn merged(mut self, other: Props) -> Self {
        self.extend(other);
        self
    }

    /// The entries as a JSON object, callbacks shown as `"<callback>"`.
    #[must_use]
    pub fn data_snapshot(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    PropValue::Data(value) => value.clone(),
                    PropValue::Callback(_) => Value::String("<callback>".to_owned()),
                };
                (key.clone(), value)
            })
            .collect();
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = btree_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a String, &'a PropValue);
    type IntoIter = btree_map::Iter<'a, String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
