//! Update check for the running application

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

use crate::bundle::BundleInfo;
use crate::dispatch::MainHandle;
use crate::version::compare::{ComparisonMode, is_update_available};
use crate::version::error::{CheckError, LookupError};
use crate::version::lookup::AppLookup;
use crate::version::types::CheckReport;

/// Result delivered by [`VersionChecker::show_update_outcome`]
#[derive(Debug)]
pub enum CheckOutcome {
    /// The store publishes a newer version
    UpdateAvailable(CheckReport),
    /// The store version is not newer than the local one
    UpToDate(CheckReport),
    /// The check could not be completed
    CheckFailed(CheckError),
}

impl CheckOutcome {
    pub fn is_update_available(&self) -> bool {
        matches!(self, CheckOutcome::UpdateAvailable(_))
    }
}

impl From<Result<CheckReport, CheckError>> for CheckOutcome {
    fn from(result: Result<CheckReport, CheckError>) -> Self {
        match result {
            Ok(report) if report.update_available => CheckOutcome::UpdateAvailable(report),
            Ok(report) => CheckOutcome::UpToDate(report),
            Err(e) => CheckOutcome::CheckFailed(e),
        }
    }
}

/// Compares the bundled version against the version published in the store
///
/// Every `show_update_*` call spawns its own task and issues exactly one
/// lookup. Tasks run on the runtime that was current at construction, or the
/// one given to [`VersionChecker::with_runtime`], so the entry points may be
/// called from threads outside any runtime. Callbacks are delivered through
/// the [`MainHandle`] given at construction.
pub struct VersionChecker {
    bundle: Arc<dyn BundleInfo>,
    lookup: Arc<dyn AppLookup>,
    main: MainHandle,
    comparison: ComparisonMode,
    runtime: Option<Handle>,
}

impl VersionChecker {
    pub fn new(bundle: Arc<dyn BundleInfo>, lookup: Arc<dyn AppLookup>, main: MainHandle) -> Self {
        Self {
            bundle,
            lookup,
            main,
            comparison: ComparisonMode::default(),
            runtime: Handle::try_current().ok(),
        }
    }

    /// Run checks on `runtime` instead of the runtime current at construction
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn with_comparison(mut self, comparison: ComparisonMode) -> Self {
        self.comparison = comparison;
        self
    }

    pub fn comparison(&self) -> ComparisonMode {
        self.comparison
    }

    /// Version declared in the bundle metadata
    pub fn local_version(&self) -> Option<String> {
        self.bundle.local_version()
    }

    /// Arbitrary string value from the bundle metadata
    pub fn bundle_value(&self, key: &str) -> Option<String> {
        self.bundle.value(key)
    }

    fn runtime(&self) -> Option<Handle> {
        self.runtime.clone().or_else(|| Handle::try_current().ok())
    }

    /// Check the store and report whether an update is available.
    ///
    /// Lookup failures are reported as `false`. The callback is never invoked
    /// when the local version is missing, or when no request could be built
    /// (missing bundle identifier, invalid URL), or when no runtime is available.
    pub fn show_update_view<F>(&self, callback: F)
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let Some(local_version) = self.bundle.local_version() else {
            warn!("Local version not found in bundle metadata, skipping update check");
            return;
        };
        let Some(runtime) = self.runtime() else {
            error!("{}, skipping update check", CheckError::NoRuntime);
            return;
        };

        let bundle = Arc::clone(&self.bundle);
        let lookup = Arc::clone(&self.lookup);
        let main = self.main.clone();
        let comparison = self.comparison;

        runtime.spawn(async move {
            let result =
                compare_with_store(bundle.as_ref(), lookup.as_ref(), comparison, local_version)
                    .await;

            let update_available = match result {
                Ok(report) => report.update_available,
                Err(CheckError::Lookup(e)) if e.is_precondition() => {
                    warn!("Update check not issued: {}", e);
                    return;
                }
                Err(e) => {
                    info!("Update check failed: {}", e);
                    false
                }
            };

            main.dispatch(move || callback(update_available));
        });
    }

    /// Check the store and always report exactly one [`CheckOutcome`].
    pub fn show_update_outcome<F>(&self, callback: F)
    where
        F: FnOnce(CheckOutcome) + Send + 'static,
    {
        let Some(runtime) = self.runtime() else {
            error!("{}", CheckError::NoRuntime);
            self.main
                .dispatch(move || callback(CheckOutcome::CheckFailed(CheckError::NoRuntime)));
            return;
        };

        let bundle = Arc::clone(&self.bundle);
        let lookup = Arc::clone(&self.lookup);
        let main = self.main.clone();
        let comparison = self.comparison;

        runtime.spawn(async move {
            let outcome = CheckOutcome::from(
                check_version(bundle.as_ref(), lookup.as_ref(), comparison).await,
            );
            if let CheckOutcome::CheckFailed(e) = &outcome {
                info!("Update check failed: {}", e);
            }
            main.dispatch(move || callback(outcome));
        });
    }

    /// Run the check on the caller's task and return the report directly
    pub async fn check_version_info(&self) -> Result<CheckReport, CheckError> {
        check_version(self.bundle.as_ref(), self.lookup.as_ref(), self.comparison).await
    }
}

async fn check_version(
    bundle: &dyn BundleInfo,
    lookup: &dyn AppLookup,
    comparison: ComparisonMode,
) -> Result<CheckReport, CheckError> {
    let local_version = bundle
        .local_version()
        .ok_or(CheckError::MissingLocalVersion)?;

    compare_with_store(bundle, lookup, comparison, local_version).await
}

async fn compare_with_store(
    bundle: &dyn BundleInfo,
    lookup: &dyn AppLookup,
    comparison: ComparisonMode,
    local_version: String,
) -> Result<CheckReport, CheckError> {
    let bundle_id = bundle
        .bundle_identifier()
        .ok_or_else(|| LookupError::InvalidUrl("bundle identifier not found".to_string()))?;

    let remote = lookup.lookup(&bundle_id).await?;
    let update_available = is_update_available(comparison, &local_version, &remote.version);

    debug!(
        "{}: local {} / store {} -> update available: {}",
        bundle_id, local_version, remote.version, update_available
    );

    Ok(CheckReport {
        local_version,
        remote,
        update_available,
    })
}
