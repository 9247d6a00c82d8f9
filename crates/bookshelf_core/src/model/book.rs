//! Book domain model.
//!
//! # Responsibility
//! - Define the stored `Book` record and its id-less attribute payload.
//! - Parse book identifiers from their textual (path segment) form.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - Updates replace `isbn`, `title` and `author` together.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned primary key of a book row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Error returned when a textual id is not a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookIdParseError {
    raw: String,
}

impl BookIdParseError {
    /// The rejected input, verbatim.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl Display for BookIdParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid book id `{}`", self.raw)
    }
}

impl Error for BookIdParseError {}

impl FromStr for BookId {
    type Err = BookIdParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .parse::<i64>()
            .map(Self)
            .map_err(|_| BookIdParseError {
                raw: value.to_string(),
            })
    }
}

/// Mutable fields of a book, as submitted on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAttributes {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl BookAttributes {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}

/// A persisted book row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Builds a book from its id and attribute payload.
    pub fn from_attributes(id: BookId, attributes: BookAttributes) -> Self {
        Self {
            id,
            isbn: attributes.isbn,
            title: attributes.title,
            author: attributes.author,
        }
    }

    /// Returns a copy of the mutable fields.
    pub fn attributes(&self) -> BookAttributes {
        BookAttributes {
            isbn: self.isbn.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
        }
    }
}
