//! # Server Directive Rule
//!
//! Asks the directive probe whether the project defines Server Actions.

use super::{ExposureRule, RuleContext, RuleKind};

pub struct ServerDirectiveRule;

impl ExposureRule for ServerDirectiveRule {
    fn id(&self) -> &'static str {
        "use-server-directive"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Enrichment
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<String> {
        ctx.probe
            .contains_directive(ctx.project_dir)
            .then(|| "Contains 'use server' directives (Server Actions)".to_string())
    }
}
