//! String rendering of collections.

use crate::Collection;
use std::fmt::Display;

impl<V: Display> Collection<V> {
    /// Concatenate the values with `glue` between each pair.
    #[must_use]
    pub fn join(&self, glue: &str) -> String {
        self.values_iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(glue)
    }

    /// Like [`join`](Self::join), but the final pair is separated by
    /// `final_glue`.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let names = collect(["al", "syam", "ah"]);
    /// assert_eq!(names.join_with(", ", " and "), "al, syam and ah");
    /// assert_eq!(collect(["al"]).join_with(", ", " and "), "al");
    /// ```
    #[must_use]
    pub fn join_with(&self, glue: &str, final_glue: &str) -> String {
        let mut parts: Vec<String> = self.values_iter().map(ToString::to_string).collect();
        match parts.pop() {
            None => String::new(),
            Some(last) if parts.is_empty() => last,
            Some(last) => format!("{}{final_glue}{last}", parts.join(glue)),
        }
    }
}
