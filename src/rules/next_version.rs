//! # Next.js Version Rule
//!
//! Flags any `next` declaration containing `15.`. The match is unanchored, so
//! it also catches ranges such as `>=14 <15.1` and over-matches `14.15.0`.

use super::{ExposureRule, RuleContext, RuleKind};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VULNERABLE_NEXT: Regex = Regex::new(r"15\.").unwrap();
}

pub struct NextVersionRule;

impl NextVersionRule {
    /// Returns true if the declared version string mentions the 15.x line.
    pub fn matches(version: &str) -> bool {
        VULNERABLE_NEXT.is_match(version)
    }
}

impl ExposureRule for NextVersionRule {
    fn id(&self) -> &'static str {
        "next-version"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Trigger
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<String> {
        let version = ctx.info.next_version.as_deref()?;
        Self::matches(version).then(|| format!("Next.js {} (vulnerable: 15.x before patch)", version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_anywhere() {
        assert!(NextVersionRule::matches("15.0.0"));
        assert!(NextVersionRule::matches("^15.3.1"));
        assert!(NextVersionRule::matches("14.15.0"));
    }

    #[test]
    fn test_other_lines() {
        assert!(!NextVersionRule::matches("14.2.3"));
        assert!(!NextVersionRule::matches("16.0.7"));
        assert!(!NextVersionRule::matches("15"));
    }
}
