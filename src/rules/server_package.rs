//! # RSC Package Rule
//!
//! Notes direct dependencies on the `react-server-dom-*` bindings.

use super::{ExposureRule, RuleContext, RuleKind};

pub struct ServerPackageRule;

impl ExposureRule for ServerPackageRule {
    fn id(&self) -> &'static str {
        "rsc-package"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Enrichment
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<String> {
        ctx.info
            .has_react_server_package
            .then(|| "Uses React Server Components packages".to_string())
    }
}
