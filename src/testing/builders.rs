//! Builders for creating test collections fluently.

use crate::{Collection, Key, Value};
use std::ops::RangeInclusive;

/// A fluent builder for test collections.
///
/// Unkeyed values are pushed under the next integer index; keyed values are
/// inserted with [`Collection::put`] semantics.
///
/// # Example
///
/// ```
/// use ironcollect::testing::CollectionBuilder;
///
/// let data = CollectionBuilder::<i32>::new()
///     .add_range(1..=10)
///     .add_value(100)
///     .add_repeated(42, 5)
///     .build();
///
/// assert_eq!(data.len(), 16); // 10 + 1 + 5
/// ```
pub struct CollectionBuilder<V> {
    collection: Collection<V>,
}

impl<V> Default for CollectionBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CollectionBuilder<V> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collection: Collection::new(),
        }
    }

    /// Push one value.
    #[must_use]
    pub fn add_value(mut self, value: V) -> Self {
        self.collection.push(value);
        self
    }

    /// Push several values.
    #[must_use]
    pub fn add_values<I: IntoIterator<Item = V>>(mut self, values: I) -> Self {
        self.collection.append(values);
        self
    }

    /// Insert a value under an explicit key.
    ///
    /// ```
    /// use ironcollect::testing::CollectionBuilder;
    ///
    /// let c = CollectionBuilder::new()
    ///     .add_keyed("name", "al")
    ///     .add_value("pushed")
    ///     .build();
    /// assert_eq!(c.get("name"), Some(&"al"));
    /// assert_eq!(c.get(0), Some(&"pushed"));
    /// ```
    #[must_use]
    pub fn add_keyed<K: Into<Key>>(mut self, key: K, value: V) -> Self {
        self.collection.put(key, value);
        self
    }

    /// Push the same value `count` times.
    #[must_use]
    pub fn add_repeated(mut self, value: V, count: usize) -> Self
    where
        V: Clone,
    {
        for _ in 0..count {
            self.collection.push(value.clone());
        }
        self
    }

    /// Finish and return the collection.
    #[must_use]
    pub fn build(self) -> Collection<V> {
        self.collection
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}

impl<V: From<i32>> CollectionBuilder<V> {
    /// Push every integer of `range`, converted into `V`.
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.collection.append(range.map(V::from));
        self
    }
}

/// Builder for record-shaped [`Value`]s, the kind `group_by_field` and
/// `pluck` operate on.
///
/// # Example
///
/// ```
/// use ironcollect::Value;
/// use ironcollect::testing::RecordBuilder;
///
/// let al = RecordBuilder::new()
///     .field("name", "al")
///     .field("age", 30)
///     .build();
/// assert_eq!(al.get("age"), Some(&Value::from(30)));
/// ```
#[derive(Default)]
pub struct RecordBuilder {
    fields: Collection<Value>,
}

impl RecordBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field; setting it again replaces the value in place.
    #[must_use]
    pub fn field<K: Into<Key>, T: Into<Value>>(mut self, name: K, value: T) -> Self {
        self.fields.put(name, value.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Value {
        Value::Collection(self.fields)
    }
}
