//! Configuration for unchecked-failure reporting.

use core::fmt;
use core::str::FromStr;
use std::env;

use serde::{Deserialize, Serialize};
use vouch_errors::VouchError;

/// Environment variable read by [`ReportConfig::from_env`].
pub const UNCHECKED_POLICY_ENV: &str = "VOUCH_UNCHECKED_POLICY";

/// What happens when a failure is dropped without being inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UncheckedPolicy {
    /// Panic on drop.
    #[default]
    Strict,
    /// Log through `tracing` and continue.
    Log,
}

impl UncheckedPolicy {
    /// Parse a policy name, accepting a few common aliases.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" | "assert" | "panic" | "fatal" => Some(Self::Strict),
            "log" | "logging" | "warn" | "tracing" => Some(Self::Log),
            _ => None,
        }
    }
}

impl FromStr for UncheckedPolicy {
    type Err = VouchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            VouchError::config(format!(
                "unknown unchecked-failure policy '{}', expected 'strict' or 'log'",
                s.trim()
            ))
        })
    }
}

impl fmt::Display for UncheckedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UncheckedPolicy::Strict => write!(f, "strict"),
            UncheckedPolicy::Log => write!(f, "log"),
        }
    }
}

/// Reporting configuration, usually loaded once at startup.
///
/// # Examples
///
/// ```
/// use vouch_expected::{ReportConfig, UncheckedPolicy};
///
/// let config: ReportConfig = "log".parse().map(ReportConfig::with_policy)?;
/// assert_eq!(config.policy, UncheckedPolicy::Log);
/// # Ok::<(), vouch_errors::VouchError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Policy for failures dropped unread.
    pub policy: UncheckedPolicy,
}

impl ReportConfig {
    /// A configuration with the given policy.
    pub fn with_policy(policy: UncheckedPolicy) -> Self {
        Self { policy }
    }

    /// Read the policy from [`UNCHECKED_POLICY_ENV`], defaulting to strict
    /// when it is unset.
    ///
    /// # Errors
    ///
    /// Returns [`VouchError::Config`] if the variable is set to an unknown
    /// policy or is not valid Unicode.
    pub fn from_env() -> Result<Self, VouchError> {
        match env::var(UNCHECKED_POLICY_ENV) {
            Ok(raw) => raw.parse().map(Self::with_policy),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(VouchError::config(format!(
                "{UNCHECKED_POLICY_ENV} is not valid unicode"
            ))),
        }
    }
}
