//! Parameter resolution.
//!
//! Two strategies feed one ordered list of resolved parameters:
//!
//! - **Prefixes** are listed recursively, page by page, one prefix at a time in
//!   configuration order. Any failure aborts the whole resolution; the target
//!   command must not start with a partial environment.
//! - **Secrets** are fetched by exact name in batches of
//!   [`SECRET_BATCH_SIZE`]. A failed batch is logged and skipped so that
//!   optional credentials cannot block a launch.
//!
//! All prefix-derived parameters come before all secret-derived ones.

use tracing::{debug, warn};

use crate::core::batch;
use crate::core::config::{Config, Rename};
use crate::core::constants::SECRET_BATCH_SIZE;
use crate::core::naming;
use crate::core::store::{Parameter, ParameterStore};
use crate::error::Result;

/// An environment variable derived from a store parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParameter {
    pub name: String,
    pub value: String,
}

impl ResolvedParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A secret batch that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedBatch {
    /// Position of the batch among all secret batches.
    pub index: usize,
    pub names: Vec<String>,
    pub error: String,
}

/// Outcome of a resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub parameters: Vec<ResolvedParameter>,
    pub failed_batches: Vec<FailedBatch>,
}

impl Resolution {
    /// True when every secret batch succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed_batches.is_empty()
    }
}

/// Drives a [`ParameterStore`] according to a [`Config`].
pub struct Resolver<'a, S> {
    store: S,
    config: &'a Config,
}

impl<'a, S: ParameterStore> Resolver<'a, S> {
    pub fn new(store: S, config: &'a Config) -> Self {
        Self { store, config }
    }

    /// Resolve all prefixes, then all secrets.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError` raised while listing a prefix. Secret
    /// batch failures never surface here; see [`Resolution::failed_batches`].
    pub fn resolve(&self) -> Result<Resolution> {
        let mut resolution = Resolution::default();

        for prefix in &self.config.prefix {
            self.list_prefix(prefix, &mut resolution.parameters)?;
        }

        let listed = resolution.parameters.len();
        self.fetch_secrets(&mut resolution);

        debug!(
            backend = self.store.name(),
            listed,
            secrets = resolution.parameters.len() - listed,
            failed_batches = resolution.failed_batches.len(),
            "resolution finished"
        );

        Ok(resolution)
    }

    /// Exhaust every page under one prefix.
    fn list_prefix(&self, prefix: &str, out: &mut Vec<ResolvedParameter>) -> Result<()> {
        let mut token: Option<String> = None;
        let mut page = 0usize;

        loop {
            let result = self.store.list_by_path(prefix, token.as_deref())?;
            debug!(
                prefix,
                page,
                count = result.parameters.len(),
                "listed parameters"
            );

            append(out, &result.parameters, &self.config.rename);

            match result.continuation() {
                Some(next) => token = Some(next.to_string()),
                None => break,
            }
            page += 1;
        }

        Ok(())
    }

    /// Fetch secrets batch by batch, recording failures instead of aborting.
    fn fetch_secrets(&self, resolution: &mut Resolution) {
        for (index, names) in batch::chunk(&self.config.secrets, SECRET_BATCH_SIZE)
            .into_iter()
            .enumerate()
        {
            match self.store.get_batch(&names) {
                Ok(found) => {
                    debug!(
                        batch = index,
                        requested = names.len(),
                        count = found.len(),
                        "fetched secrets"
                    );
                    append(&mut resolution.parameters, &found, &self.config.rename);
                }
                Err(e) => {
                    warn!(
                        batch = index,
                        names = ?names,
                        error = %e,
                        "failed to fetch secret batch, skipping"
                    );
                    resolution.failed_batches.push(FailedBatch {
                        index,
                        names,
                        error: e.to_string(),
                    });
                }
            }
        }
    }
}

fn append(out: &mut Vec<ResolvedParameter>, params: &[Parameter], rules: &[Rename]) {
    out.extend(params.iter().map(|p| ResolvedParameter {
        name: naming::resolve_name(&p.name, rules),
        value: p.value.clone(),
    }));
}
