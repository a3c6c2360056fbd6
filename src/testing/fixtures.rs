//! Pre-built datasets for common testing scenarios.
//!
//! Record fixtures are `Value` collections built from JSON, so they exercise
//! the same path as real JSON input.

use crate::{Collection, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// Minimal domain type for conversion tests (`map_into`, `map_spread`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<String> for Person {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl From<&str> for Person {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Three people in two departments: `al` (IT), `syam` (HR), `cuy` (IT).
///
/// # Example
///
/// ```
/// use ironcollect::testing::sample_people;
///
/// let by_department = sample_people().group_by_field("department").unwrap();
/// assert_eq!(by_department.len(), 2);
/// ```
#[must_use]
pub fn sample_people() -> Collection<Value> {
    Collection::from_json(json!([
        {"name": "al", "department": "IT"},
        {"name": "syam", "department": "HR"},
        {"name": "cuy", "department": "IT"},
    ]))
}

/// Employee records with numeric fields for aggregate tests.
///
/// Departments: `IT` (3 people), `HR` (2), `Sales` (1). Salaries sum to
/// `390_000`.
#[must_use]
pub fn sample_employees() -> Collection<Value> {
    Collection::from_json(json!([
        {"name": "al", "department": "IT", "salary": 80_000, "age": 30},
        {"name": "syam", "department": "HR", "salary": 55_000, "age": 41},
        {"name": "cuy", "department": "IT", "salary": 72_000, "age": 25},
        {"name": "bur", "department": "Sales", "salary": 48_000, "age": 35},
        {"name": "han", "department": "IT", "salary": 90_000, "age": 52},
        {"name": "ah", "department": "HR", "salary": 45_000, "age": 28},
    ]))
}

/// Two people, each with a list of hobbies, for `flat_map` and `pluck`.
#[must_use]
pub fn sample_hobbies() -> Collection<Value> {
    Collection::from_json(json!([
        {"name": "al", "hobbies": ["coding", "gaming"]},
        {"name": "syam", "hobbies": ["tennis", "balet"]},
    ]))
}

/// First/last name pairs for `map_spread`.
#[must_use]
pub fn sample_name_pairs() -> Collection<(String, String)> {
    Collection::from(vec![
        ("al".to_string(), "syam".to_string()),
        ("bur".to_string(), "han".to_string()),
    ])
}

/// Sentences for word-splitting pipelines.
#[must_use]
pub fn word_count_data() -> Collection<String> {
    [
        "hello world",
        "hello rust",
        "world of data",
        "rust programming",
        "hello data world",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
