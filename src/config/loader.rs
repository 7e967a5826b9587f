//! Rule store loading functionality.
//!
//! This module provides the [`RuleStore`] type for loading the two
//! singleton payroll rule sets from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollRules, RuleMode};

use super::types::RuleFileConfig;

/// Loads and provides access to the company and union rule sets.
///
/// # Directory Structure
///
/// The rules directory holds one file per mode:
/// ```text
/// config/rules/
/// ├── company.yaml
/// └── union.yaml
/// ```
///
/// Both files must load successfully: a missing rule set is a blocking
/// error, never silently substituted with defaults, because defaults
/// would change pay.
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::RuleStore;
/// use timecard_engine::models::RuleMode;
///
/// let store = RuleStore::load("./config/rules").unwrap();
/// let rules = store.rules_for(RuleMode::Union);
/// println!("Union OT threshold: {}", rules.daily_overtime_threshold);
/// ```
#[derive(Debug, Clone)]
pub struct RuleStore {
    company: PayrollRules,
    union: PayrollRules,
}

impl RuleStore {
    /// Loads both rule sets from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] when a rule file is missing
    /// - [`EngineError::ConfigParseError`] when a file is not valid YAML
    /// - [`EngineError::InvalidRules`] when a loaded value fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let company = Self::load_rule_file(&path.join("company.yaml"), RuleMode::Company)?;
        let union = Self::load_rule_file(&path.join("union.yaml"), RuleMode::Union)?;
        Ok(Self { company, union })
    }

    /// Builds a store from already-constructed rule sets.
    ///
    /// Used by tests and by callers that source rules from somewhere other
    /// than the filesystem.
    pub fn from_rules(company: PayrollRules, union: PayrollRules) -> EngineResult<Self> {
        company.validate()?;
        union.validate()?;
        Ok(Self { company, union })
    }

    /// Returns the rule set governing the given mode.
    pub fn rules_for(&self, mode: RuleMode) -> &PayrollRules {
        match mode {
            RuleMode::Company => &self.company,
            RuleMode::Union => &self.union,
        }
    }

    /// Returns the company rule set.
    pub fn company(&self) -> &PayrollRules {
        &self.company
    }

    /// Returns the union rule set.
    pub fn union(&self) -> &PayrollRules {
        &self.union
    }

    fn load_rule_file(path: &Path, mode: RuleMode) -> EngineResult<PayrollRules> {
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        let config: RuleFileConfig =
            serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.into_rules(mode)
    }
}
