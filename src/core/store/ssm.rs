//! AWS Systems Manager Parameter Store backend.
//!
//! Credentials and region come from the default AWS provider chain
//! (AWS_PROFILE, AWS_REGION, AWS_ACCESS_KEY_ID, instance roles, etc.).
//!
//! The SDK is async; every call is driven to completion on a current-thread
//! runtime owned by the backend.

use std::future::Future;
use std::time::{Duration, Instant};

use aws_config::BehaviorVersion;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::Parameter as SsmParameter;
use aws_sdk_ssm::Client;
use tokio::runtime::Runtime;
use tracing::{debug, trace, warn};

use super::{Page, Parameter, ParameterStore};
use crate::error::{Error, Result, StoreError};

/// SSM Parameter Store backend.
pub struct Ssm {
    client: Client,
    runtime: Runtime,
    decrypt: bool,
    deadline: Option<Instant>,
}

impl Ssm {
    /// Load AWS configuration and build a client.
    ///
    /// # Arguments
    ///
    /// * `decrypt` - Request decryption of `SecureString` values
    /// * `timeout` - Overall budget for this backend, covering every later call
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the async runtime cannot start, or
    /// `StoreError::Timeout` if loading AWS configuration exceeds the budget.
    pub fn connect(decrypt: bool, timeout: Option<Duration>) -> Result<Self> {
        let deadline = timeout.map(|t| Instant::now() + t);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(StoreError::Runtime)?;

        let config = runtime.block_on(bounded(deadline, "loading AWS configuration", async {
            Ok::<_, Error>(aws_config::load_defaults(BehaviorVersion::latest()).await)
        }))?;

        debug!(
            region = config.region().map(|r| r.as_ref()).unwrap_or("unset"),
            decrypt,
            "ssm client ready"
        );

        Ok(Self {
            client: Client::new(&config),
            runtime,
            decrypt,
            deadline,
        })
    }

    fn block_on<T, F>(&self, what: &str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.runtime.block_on(bounded(self.deadline, what, fut))
    }
}

/// Run `fut`, failing with `StoreError::Timeout` once `deadline` passes.
async fn bounded<T, F>(deadline: Option<Instant>, what: &str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match deadline {
        Some(deadline) => tokio::time::timeout_at(deadline.into(), fut)
            .await
            .map_err(|_| StoreError::Timeout(what.to_string()))?,
        None => fut.await,
    }
}

/// Convert SDK parameters, skipping items without a name.
fn convert(items: &[SsmParameter]) -> Vec<Parameter> {
    items
        .iter()
        .filter_map(|item| match item.name() {
            Some(name) => Some(Parameter::new(name, item.value().unwrap_or_default())),
            None => {
                warn!("skipping parameter without a name");
                None
            }
        })
        .collect()
}

impl ParameterStore for Ssm {
    fn name(&self) -> &'static str {
        "ssm"
    }

    fn list_by_path(&self, path: &str, token: Option<&str>) -> Result<Page> {
        trace!(path, has_token = token.is_some(), "GetParametersByPath");

        self.block_on("listing parameters", async {
            let output = self
                .client
                .get_parameters_by_path()
                .path(path)
                .recursive(true)
                .with_decryption(self.decrypt)
                .set_next_token(token.map(str::to_string))
                .send()
                .await
                .map_err(|e| StoreError::List {
                    path: path.to_string(),
                    reason: DisplayErrorContext(&e).to_string(),
                })?;

            Ok::<_, Error>(Page {
                parameters: convert(output.parameters()),
                next_token: output.next_token().map(str::to_string),
            })
        })
    }

    fn get_batch(&self, names: &[String]) -> Result<Vec<Parameter>> {
        trace!(count = names.len(), "GetParameters");

        self.block_on("fetching parameters", async {
            let output = self
                .client
                .get_parameters()
                .set_names(Some(names.to_vec()))
                .with_decryption(self.decrypt)
                .send()
                .await
                .map_err(|e| StoreError::Batch {
                    names: names.to_vec(),
                    reason: DisplayErrorContext(&e).to_string(),
                })?;

            let invalid = output.invalid_parameters();
            if !invalid.is_empty() {
                debug!(names = ?invalid, "parameters not found");
            }

            Ok::<_, Error>(convert(output.parameters()))
        })
    }
}
