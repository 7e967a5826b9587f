//! Rule store configuration loading.
//!
//! Payroll rule sets are edited as YAML files (one per mode) and loaded
//! into a [`RuleStore`] at startup. The store is passed explicitly to
//! every engine invocation; nothing in this crate caches rules globally.

mod loader;
mod types;

pub use loader::RuleStore;
pub use types::RuleFileConfig;
