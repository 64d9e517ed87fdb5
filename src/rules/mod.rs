//! # Classification Rules Module
//!
//! @title CVE-2025-55182 Exposure Rules
//! @author Ramprasad
//!
//! This module decides whether a manifest's declared dependencies fall in the
//! range affected by CVE-2025-55182 (React Server Components RCE).
//!
//! ## Architecture
//!
//! Every rule implements [`ExposureRule`]. The [`RuleRegistry`] runs them in a
//! fixed order and concatenates the reasons of every rule that fires.
//!
//! | Rule | Kind | Reason |
//! |------|------|--------|
//! | React version | Trigger | `React <v> (vulnerable: 19.0.0-19.2.0)` |
//! | Next.js version | Trigger | `Next.js <v> (vulnerable: 15.x before patch)` |
//! | RSC packages | Enrichment | `Uses React Server Components packages` |
//! | Server directives | Enrichment | `Contains 'use server' directives (Server Actions)` |
//!
//! Enrichment rules only run once a trigger has fired and never decide the
//! status on their own.
//!
//! ## Known Limitation
//!
//! Version checks are lexical regex matches, not semver range checks.
//! `19.10.0` is not flagged (single digit after `19.`), `^18.0.0 || 19.1.0`
//! is not flagged either (anchored at the start), and any `next` string
//! containing `15.` is flagged, including `14.15.0`.

mod next_version;
mod react_version;
mod server_directive;
mod server_package;

pub use next_version::NextVersionRule;
pub use react_version::ReactVersionRule;
pub use server_directive::ServerDirectiveRule;
pub use server_package::ServerPackageRule;

use crate::heuristics::DirectiveProbe;
use crate::manifest::DependencyInfo;
use std::path::Path;

/// Whether a rule can mark a manifest vulnerable or only explain why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Firing marks the manifest vulnerable.
    Trigger,

    /// Adds detail to an already vulnerable manifest.
    Enrichment,
}

/// Everything a rule may inspect.
pub struct RuleContext<'a> {
    /// Dependency facts from the manifest.
    pub info: &'a DependencyInfo,

    /// Directory containing the manifest.
    pub project_dir: &'a Path,

    /// Source probe for directive-based rules.
    pub probe: &'a dyn DirectiveProbe,
}

/// Trait for implementing exposure rules.
pub trait ExposureRule: Send + Sync {
    /// Short identifier used in debug logs.
    fn id(&self) -> &'static str;

    /// Whether this rule triggers or enriches.
    fn kind(&self) -> RuleKind;

    /// Evaluates the rule.
    ///
    /// # Returns
    ///
    /// The human-readable reason if the rule fires.
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<String>;
}

/// Outcome of classifying one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// At least one trigger fired; reasons are in rule order.
    Vulnerable(Vec<String>),

    /// Uses React or Next.js, but no trigger fired.
    Safe,

    /// Declares neither React nor Next.js.
    NotApplicable,
}

/// Ordered collection of exposure rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn ExposureRule>>,
}

impl RuleRegistry {
    /// Creates a registry with the built-in rules in evaluation order.
    pub fn new() -> Self {
        let rules: Vec<Box<dyn ExposureRule>> = vec![
            Box::new(ReactVersionRule),
            Box::new(NextVersionRule),
            Box::new(ServerPackageRule),
            Box::new(ServerDirectiveRule),
        ];

        Self { rules }
    }

    /// Returns all registered rules.
    pub fn rules(&self) -> &[Box<dyn ExposureRule>] {
        &self.rules
    }

    /// Classifies a manifest.
    ///
    /// Trigger rules are evaluated first; enrichment rules are consulted only
    /// if one of them fired, so the source probe is never touched for safe
    /// projects.
    pub fn classify(&self, ctx: &RuleContext<'_>) -> Verdict {
        let triggers: Vec<(usize, String)> = self
            .rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.kind() == RuleKind::Trigger)
            .filter_map(|(i, rule)| rule.evaluate(ctx).map(|reason| (i, reason)))
            .collect();

        if triggers.is_empty() {
            return if ctx.info.uses_react_stack() {
                Verdict::Safe
            } else {
                Verdict::NotApplicable
            };
        }

        let mut reasons: Vec<(usize, String)> = triggers;
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.kind() != RuleKind::Enrichment {
                continue;
            }
            if let Some(reason) = rule.evaluate(ctx) {
                log::debug!("Rule {} fired for {}", rule.id(), ctx.project_dir.display());
                reasons.push((i, reason));
            }
        }
        reasons.sort_by_key(|(i, _)| *i);

        Verdict::Vulnerable(reasons.into_iter().map(|(_, r)| r).collect())
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies dependency facts with the default rule set.
pub fn classify(info: &DependencyInfo, project_dir: &Path, probe: &dyn DirectiveProbe) -> Verdict {
    RuleRegistry::new().classify(&RuleContext {
        info,
        project_dir,
        probe,
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::{info, StubProbe};
    use super::*;

    fn run(info: &DependencyInfo, probe: &StubProbe) -> Verdict {
        classify(info, Path::new("project"), probe)
    }

    #[test]
    fn test_rule_ids_unique() {
        let registry = RuleRegistry::new();
        let mut ids: Vec<_> = registry.rules().iter().map(|r| r.id()).collect();
        let len_before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len_before, "Rule IDs must be unique");
    }

    #[test]
    fn test_react_19_1_is_vulnerable() {
        let verdict = run(&info(Some("19.1.0"), None), &StubProbe::new(false));

        match verdict {
            Verdict::Vulnerable(reasons) => {
                assert_eq!(reasons, vec!["React 19.1.0 (vulnerable: 19.0.0-19.2.0)"]);
            }
            other => panic!("expected vulnerable, got {:?}", other),
        }
    }

    #[test]
    fn test_react_19_10_is_safe() {
        assert_eq!(run(&info(Some("19.10.0"), None), &StubProbe::new(true)), Verdict::Safe);
    }

    #[test]
    fn test_next_15_without_react_is_vulnerable() {
        let deps = info(None, Some("15.0.0"));
        assert!(!deps.has_react);

        let verdict = run(&deps, &StubProbe::new(false));
        assert_eq!(
            verdict,
            Verdict::Vulnerable(vec!["Next.js 15.0.0 (vulnerable: 15.x before patch)".to_string()])
        );
    }

    #[test]
    fn test_react_18_is_safe() {
        assert_eq!(run(&info(Some("18.2.0"), None), &StubProbe::new(false)), Verdict::Safe);
    }

    #[test]
    fn test_no_react_stack_is_not_applicable() {
        let probe = StubProbe::new(true);
        assert_eq!(run(&DependencyInfo::default(), &probe), Verdict::NotApplicable);
        assert_eq!(probe.calls.get(), 0);
    }

    #[test]
    fn test_all_reasons_in_order() {
        let mut deps = info(Some("~19.2.0"), Some("15.1.0"));
        deps.has_react_server_package = true;

        let verdict = run(&deps, &StubProbe::new(true));

        assert_eq!(
            verdict,
            Verdict::Vulnerable(vec![
                "React ~19.2.0 (vulnerable: 19.0.0-19.2.0)".to_string(),
                "Next.js 15.1.0 (vulnerable: 15.x before patch)".to_string(),
                "Uses React Server Components packages".to_string(),
                "Contains 'use server' directives (Server Actions)".to_string(),
            ])
        );
    }

    #[test]
    fn test_enrichment_alone_does_not_trigger() {
        let mut deps = info(Some("18.3.1"), None);
        deps.has_react_server_package = true;
        let probe = StubProbe::new(true);

        assert_eq!(run(&deps, &probe), Verdict::Safe);
        assert_eq!(probe.calls.get(), 0, "probe must not run for safe projects");
    }

    #[test]
    fn test_present_key_without_string_version_is_safe() {
        let deps = DependencyInfo {
            has_react: true,
            ..DependencyInfo::default()
        };
        assert_eq!(run(&deps, &StubProbe::new(false)), Verdict::Safe);
    }
}
