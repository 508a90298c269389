//! Remote parameter store abstraction.
//!
//! The resolver only needs two calls: a paginated recursive listing under a
//! path, and a bounded batch lookup by exact name. Backends implement
//! [`ParameterStore`] and the resolver stays ignorant of the wire protocol.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module

use crate::error::Result;

mod ssm;


pub use ssm::Ssm;

/// A raw store item: full parameter path and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One page of a path listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub parameters: Vec<Parameter>,
    /// Continuation token; `None` or empty means the listing is exhausted.
    pub next_token: Option<String>,
}

impl Page {
    /// Token for the next request, if another page exists.
    pub fn continuation(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Parameter store backend trait.
pub trait ParameterStore {
    /// Backend name used in diagnostics.
    fn name(&self) -> &'static str;

    /// List one page of parameters under `path`, recursively.
    ///
    /// # Arguments
    ///
    /// * `path` - Hierarchical prefix to list
    /// * `token` - Continuation token from the previous page, `None` on the first call
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the request fails.
    fn list_by_path(&self, path: &str, token: Option<&str>) -> Result<Page>;

    /// Fetch up to ten parameters by exact name.
    ///
    /// Names unknown to the store are absent from the result, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the request fails.
    fn get_batch(&self, names: &[String]) -> Result<Vec<Parameter>>;
}

impl<S: ParameterStore + ?Sized> ParameterStore for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn list_by_path(&self, path: &str, token: Option<&str>) -> Result<Page> {
        (**self).list_by_path(path, token)
    }

    fn get_batch(&self, names: &[String]) -> Result<Vec<Parameter>> {
        (**self).get_batch(names)
    }
}
