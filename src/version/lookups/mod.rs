//! Store lookup implementations

pub mod itunes;

pub use itunes::ItunesLookup;
