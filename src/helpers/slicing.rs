//! Positional selection: `slice` and the `take` / `skip` families.
//!
//! All of these keep the original keys. For list-like collections,
//! `c.take(n).concat(&c.skip(n)) == c` for every `n` in `0..=c.len()`.

use crate::Collection;
use crate::key::Key;

impl<V: Clone> Collection<V> {
    fn positional(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        Self::from_unique_entries(self.entries()[start..end].to_vec())
    }

    /// Entries from `offset` for `length` entries.
    ///
    /// - a negative `offset` counts from the end;
    /// - `length: None` runs to the end, a negative `length` stops that many
    ///   entries before the end.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let c = collect([1, 2, 3, 4, 5]);
    /// assert_eq!(c.slice(1, Some(2)).all(), vec![2, 3]);
    /// assert_eq!(c.slice(-2, None).all(), vec![4, 5]);
    /// assert_eq!(c.slice(1, Some(-1)).all(), vec![2, 3, 4]);
    /// ```
    #[must_use]
    pub fn slice(&self, offset: isize, length: Option<isize>) -> Self {
        let len = self.len();
        let start = resolve_from_end(offset, len);
        let end = match length {
            None => len,
            Some(l) if l >= 0 => start.saturating_add(l.unsigned_abs()),
            Some(l) => len.saturating_sub(l.unsigned_abs()),
        };
        if end <= start {
            return Self::new();
        }
        self.positional(start, end)
    }

    /// The first `n` entries (all of them if `n >= len`).
    #[must_use]
    pub fn take(&self, n: usize) -> Self {
        self.positional(0, n)
    }

    /// The last `n` entries.
    #[must_use]
    pub fn take_last(&self, n: usize) -> Self {
        self.positional(self.len().saturating_sub(n), self.len())
    }

    /// The leading entries for which `pred` holds, stopping at the first
    /// failure.
    pub fn take_while<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&V, &Key) -> bool,
    {
        let n = self.iter().take_while(|&(k, v)| pred(v, k)).count();
        self.positional(0, n)
    }

    /// The leading entries before `pred` first holds; the triggering entry is
    /// excluded.
    pub fn take_until<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.take_while(|v, k| !pred(v, k))
    }

    /// Everything after the first `n` entries.
    #[must_use]
    pub fn skip(&self, n: usize) -> Self {
        self.positional(n, self.len())
    }

    /// Drop leading entries while `pred` holds, keep the rest.
    pub fn skip_while<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&V, &Key) -> bool,
    {
        let n = self.iter().take_while(|&(k, v)| pred(v, k)).count();
        self.positional(n, self.len())
    }

    /// Drop leading entries until `pred` first holds; the triggering entry
    /// and everything after it are kept.
    pub fn skip_until<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.skip_while(|v, k| !pred(v, k))
    }
}

fn resolve_from_end(offset: isize, len: usize) -> usize {
    if offset >= 0 {
        offset.unsigned_abs().min(len)
    } else {
        len.saturating_sub(offset.unsigned_abs())
    }
}
