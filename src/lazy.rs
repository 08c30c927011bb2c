//! One-time materialization for lazily loaded records
//!
//! A record is created from its identity alone. The first read of any
//! declared field fetches the backing document and fills every field at
//! once; later reads reuse the cached values. A failed load leaves the
//! record unloaded, so the next read tries again.

use std::fmt;
use std::future::Future;

use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::{DblpError, Result};

/// Cell holding a record's data once it has been loaded
///
/// Concurrent first reads of the same record share a single load: the
/// other callers wait for it instead of issuing their own fetch.
pub struct Lazy<T> {
    cell: OnceCell<T>,
}

impl<T> Lazy<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Loaded data, without triggering a load
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Return the loaded data, running `load` first if nothing is loaded yet
    ///
    /// The value is stored only when `load` succeeds.
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<&T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(data) = self.cell.get() {
            debug!("Reusing materialized record");
            return Ok(data);
        }
        self.cell.get_or_try_init(load).await
    }
}

impl<T> Default for Lazy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// Closed set of field names a record declares
pub trait RecordField: Copy + Sized + 'static {
    /// Record type name used in error messages
    const RECORD: &'static str;

    /// Every declared field
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Resolve a field by name, failing with [`DblpError::UnknownAttribute`]
    fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| DblpError::UnknownAttribute {
                record: Self::RECORD,
                field: name.to_string(),
            })
    }
}

/// A record whose fields are loaded on first access
pub trait LazyRecord {
    type Field: RecordField;

    /// Names of every declared lazy field
    fn declared_fields() -> Vec<&'static str> {
        Self::Field::ALL.iter().map(|field| field.as_str()).collect()
    }

    /// Whether the fields have been materialized
    fn is_loaded(&self) -> bool;
}
