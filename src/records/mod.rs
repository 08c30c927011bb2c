//! Lazily loaded DBLP records
//!
//! [`Author`] and [`Publication`] are created from their identity alone and
//! fetch their document on the first field read. Fields can be read through
//! typed accessors or by name with `get`, which rejects undeclared names
//! before any request is made.

mod author;
mod publication;

pub use author::{Author, AuthorField};
pub use publication::{Publication, PublicationField};

use crate::models::{Citation, Series};

/// Value of a record field read by name
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    OptionalText(Option<&'a str>),
    TextList(&'a [String]),
    Integer(i32),
    Publications(&'a [Publication]),
    Citations(&'a [Citation]),
    Series(Option<&'a Series>),
}

impl<'a> FieldValue<'a> {
    /// Text content for `Text` and present `OptionalText` values
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Text(text) => Some(text),
            FieldValue::OptionalText(text) => text,
            _ => None,
        }
    }

    pub fn as_text_list(&self) -> Option<&'a [String]> {
        match *self {
            FieldValue::TextList(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match *self {
            FieldValue::Integer(value) => Some(value),
            _ => None,
        }
    }
}
