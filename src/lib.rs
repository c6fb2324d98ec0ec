pub mod bundle;
pub mod config;
pub mod dispatch;
pub mod version;

pub use bundle::{BundleInfo, InfoPlist, StaticBundle};
pub use dispatch::{MainHandle, MainLoop, main_context};
pub use version::checker::{CheckOutcome, VersionChecker};
pub use version::compare::ComparisonMode;
pub use version::error::{CheckError, LookupError};
pub use version::lookups::ItunesLookup;
