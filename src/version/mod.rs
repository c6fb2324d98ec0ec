//! Version checking against the app store
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ BundleInfo  │────▶│   Checker   │◀────│   Lookup    │
//! │ (local ver) │     │  (compare)  │     │ (store ver) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │ MainHandle  │     │   Lookups   │
//!                     │ (callbacks) │     │  (iTunes)   │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Update check entry points and outcome types
//! - [`compare`]: Version string comparison modes
//! - [`lookup`]: Lookup trait for fetching the published release
//! - [`lookups`]: Concrete lookup implementations (iTunes)
//! - [`error`]: Error types for lookups, checks and configuration
//! - [`types`]: Lookup response and report types

pub mod checker;
pub mod compare;
pub mod error;
pub mod lookup;
pub mod lookups;
pub mod types;
