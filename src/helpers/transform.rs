//! Element-wise transforms.
//!
//! | method | keys |
//! |---|---|
//! | [`map`](Collection::map), [`map_into`](Collection::map_into), [`map_spread`](Collection::map_spread) | preserved |
//! | [`map_with_keys`](Collection::map_with_keys) | produced by the callback |
//! | [`map_to_groups`](Collection::map_to_groups) | group keys, each group re-indexed |
//! | [`flat_map`](Collection::flat_map), [`collapse`](Collection::collapse), [`flatten`](Collection::flatten) | re-indexed |

use crate::key::Key;
use crate::{Collection, Value};

impl<V> Collection<V> {
    /// Apply `f` to every value, keeping keys and order.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let doubled = collect([1, 2, 3]).map(|x| x * 2);
    /// assert_eq!(doubled.all(), vec![2, 4, 6]);
    /// ```
    pub fn map<O, F>(&self, mut f: F) -> Collection<O>
    where
        F: FnMut(&V) -> O,
    {
        Collection::from_unique_entries(
            self.entries()
                .iter()
                .map(|(k, v)| (k.clone(), f(v)))
                .collect(),
        )
    }

    /// Construct an `O` from every value via `O: From<V>`.
    pub fn map_into<O>(&self) -> Collection<O>
    where
        V: Clone,
        O: From<V>,
    {
        self.map(|v| O::from(v.clone()))
    }

    /// Re-key the collection: `f` returns the new `(key, value)` for each
    /// entry. A repeated key overwrites the earlier value.
    pub fn map_with_keys<K, O, F>(&self, mut f: F) -> Collection<O>
    where
        K: Into<Key>,
        F: FnMut(&V, &Key) -> (K, O),
    {
        Collection::from_pairs(self.iter().map(|(k, v)| f(v, k)))
    }

    /// Collect values into groups: `f` returns `(group_key, value)` for each
    /// entry. Groups appear in order of first occurrence; each group is a
    /// list of the collected values.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let staff = collect([("al", "IT"), ("syam", "HR"), ("cuy", "IT")]);
    /// let by_dept = staff.map_to_groups(|(name, dept), _| (*dept, *name));
    /// assert_eq!(by_dept["IT"].all(), vec!["al", "cuy"]);
    /// assert_eq!(by_dept["HR"].all(), vec!["syam"]);
    /// ```
    pub fn map_to_groups<G, O, F>(&self, mut f: F) -> Collection<Collection<O>>
    where
        G: Into<Key>,
        F: FnMut(&V, &Key) -> (G, O),
    {
        let mut groups: Collection<Collection<O>> = Collection::new();
        for (k, v) in self {
            let (group, value) = f(v, k);
            let group = group.into();
            match groups.get_mut(&group) {
                Some(bucket) => {
                    bucket.push(value);
                }
                None => {
                    groups.put(group, Collection::from(vec![value]));
                }
            }
        }
        groups
    }

    /// Map every entry to an iterable and concatenate the results.
    /// Original keys are discarded; the result is re-indexed.
    pub fn flat_map<O, I, F>(&self, mut f: F) -> Collection<O>
    where
        I: IntoIterator<Item = O>,
        F: FnMut(&V, &Key) -> I,
    {
        self.iter().flat_map(|(k, v)| f(v, k)).collect()
    }

    /// Hand the whole collection to `f` and return its result.
    pub fn pipe<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        f(self)
    }
}

/* ---------------- spread ---------------- */

impl<A, B> Collection<(A, B)> {
    /// Spread each tuple over the arguments of `f`.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let names = collect([("al", "syam"), ("bur", "han")]);
    /// let full = names.map_spread(|first, last| format!("{first} {last}"));
    /// assert_eq!(full.all(), vec!["al syam", "bur han"]);
    /// ```
    pub fn map_spread<O, F>(&self, mut f: F) -> Collection<O>
    where
        F: FnMut(&A, &B) -> O,
    {
        self.map(|(a, b)| f(a, b))
    }
}

impl<A, B, C> Collection<(A, B, C)> {
    /// Spread each tuple over the arguments of `f`.
    pub fn map_spread<O, F>(&self, mut f: F) -> Collection<O>
    where
        F: FnMut(&A, &B, &C) -> O,
    {
        self.map(|(a, b, c)| f(a, b, c))
    }
}

impl<A, B, C, D> Collection<(A, B, C, D)> {
    /// Spread each tuple over the arguments of `f`.
    pub fn map_spread<O, F>(&self, mut f: F) -> Collection<O>
    where
        F: FnMut(&A, &B, &C, &D) -> O,
    {
        self.map(|(a, b, c, d)| f(a, b, c, d))
    }
}

impl<T> Collection<Vec<T>> {
    /// Pass each inner sequence to `f` as a positional slice.
    pub fn map_spread<O, F>(&self, mut f: F) -> Collection<O>
    where
        F: FnMut(&[T]) -> O,
    {
        self.map(|items| f(items.as_slice()))
    }

    /// Concatenate the inner vectors into one re-indexed collection.
    #[must_use]
    pub fn collapse(&self) -> Collection<T>
    where
        T: Clone,
    {
        self.values_iter().flatten().cloned().collect()
    }
}

impl<T> Collection<Collection<T>> {
    /// Concatenate the values of the inner collections into one re-indexed
    /// collection. Outer and inner keys are discarded.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let nested = collect([collect([1, 2, 3]), collect([4, 5, 6])]);
    /// assert_eq!(nested.collapse().all(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn collapse(&self) -> Collection<T>
    where
        T: Clone,
    {
        self.values_iter()
            .flat_map(|inner| inner.values_iter())
            .cloned()
            .collect()
    }
}

impl Collection<Value> {
    /// Pass the elements of each nested value to `f` as a positional slice.
    /// Scalars are passed as a one-element slice.
    pub fn map_spread<O, F>(&self, mut f: F) -> Collection<O>
    where
        F: FnMut(&[Value]) -> O,
    {
        self.map(|v| match v {
            Value::Collection(inner) => f(inner.all().as_slice()),
            scalar => f(std::slice::from_ref(scalar)),
        })
    }

    /// Concatenate nested collections one level deep; scalar values are
    /// dropped.
    #[must_use]
    pub fn collapse(&self) -> Collection<Value> {
        self.values_iter()
            .filter_map(Value::as_collection)
            .flat_map(|inner| inner.values_iter())
            .cloned()
            .collect()
    }

    /// Recursively flatten every nested collection into one re-indexed list
    /// of scalars.
    #[must_use]
    pub fn flatten(&self) -> Collection<Value> {
        self.flatten_depth(usize::MAX)
    }

    /// Flatten at most `depth` levels of nesting. A depth of 0 only
    /// re-indexes.
    #[must_use]
    pub fn flatten_depth(&self, depth: usize) -> Collection<Value> {
        let mut out = Vec::new();
        flatten_into(self, depth, &mut out);
        Collection::from(out)
    }
}

fn flatten_into(c: &Collection<Value>, depth: usize, out: &mut Vec<Value>) {
    for v in c.values_iter() {
        match v {
            Value::Collection(inner) if depth > 0 => flatten_into(inner, depth - 1, out),
            other => out.push(other.clone()),
        }
    }
}
