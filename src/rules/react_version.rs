//! # React Version Rule
//!
//! Flags `react` declarations in the 19.0 to 19.2 lines, the releases that
//! shipped the vulnerable Flight reply decoder.

use super::{ExposureRule, RuleContext, RuleKind};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Optional `^`/`~`, then `19.`, one digit 0-2, and a literal dot.
    static ref VULNERABLE_REACT: Regex = Regex::new(r"^[\^~]?19\.[0-2]\.").unwrap();
}

pub struct ReactVersionRule;

impl ReactVersionRule {
    /// Returns true if the declared version string is in the affected range.
    pub fn matches(version: &str) -> bool {
        VULNERABLE_REACT.is_match(version)
    }
}

impl ExposureRule for ReactVersionRule {
    fn id(&self) -> &'static str {
        "react-version"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Trigger
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<String> {
        let version = ctx.info.react_version.as_deref()?;
        Self::matches(version).then(|| format!("React {} (vulnerable: 19.0.0-19.2.0)", version))
    }
}
