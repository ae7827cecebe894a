use tracing::{debug, info};

use crate::error::ValidationError;
use crate::types::{
    AccessRequest, FirewallAllowRule, MatchBlockCreate, MatchParamSet, PamAllowRule, RuleOp,
    RuleSet, SubjectKind, TcpWrapperAllowRule,
};
use crate::{classify, domains, match_blocks, merge};

/// Compiles one `AccessRequest` into the ordered rule set its external
/// collaborators apply. Stateless; a single compilation is a pure,
/// synchronous computation with no suspension points.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleCompiler;

impl RuleCompiler {
    pub fn new() -> Self {
        RuleCompiler
    }

    /// Compile `request` against the identity-domain catalogue and the match
    /// keys already present in the target sshd configuration.
    ///
    /// Emission order is fixed: PAM grants (groups before users, each across
    /// the hostlist), firewall rules, tcp-wrapper rules, identity-domain
    /// appends, then sshd match blocks (`Host` before `Address`, creation
    /// before parameter sets). Identical inputs compile to identical output.
    ///
    /// A `MatchBlockCreate` is suppressed for blocks whose key appears in
    /// `existing_match_keys`; parameter sets are always emitted so the
    /// config writer converges directive values inside existing blocks.
    pub fn compile(
        &self,
        request: &AccessRequest,
        domain_catalogue: &str,
        existing_match_keys: &[String],
    ) -> Result<RuleSet, ValidationError> {
        // Constructed requests uphold this, deserialized ones may not.
        if request.users().is_empty() && request.groups().is_empty() {
            return Err(ValidationError::NoSubjects);
        }

        debug!(
            event = "Compile",
            phase = "Request",
            name = request.name(),
            hosts = request.hostlist().len(),
            users = request.users().len(),
            groups = request.groups().len(),
        );

        let mut rules = RuleSet::new();

        // 1. PAM access grants: all group×host pairs, then all user×host pairs.
        for group in request.groups() {
            for host in request.hostlist() {
                rules.push(RuleOp::PamAllow(PamAllowRule {
                    kind: SubjectKind::Group,
                    subject: group.clone(),
                    origin: host.clone(),
                }));
            }
        }
        for user in request.users() {
            for host in request.hostlist() {
                rules.push(RuleOp::PamAllow(PamAllowRule {
                    kind: SubjectKind::User,
                    subject: user.clone(),
                    origin: host.clone(),
                }));
            }
        }

        // 2. One firewall accept per host, labelled per host per resource name.
        for host in request.hostlist() {
            rules.push(RuleOp::FirewallAllow(FirewallAllowRule {
                source: host.clone(),
                label: format!("allow ssh from {host} for {}", request.name()),
            }));
        }

        // 3. One tcp-wrapper entry per host.
        for host in request.hostlist() {
            rules.push(RuleOp::TcpWrapperAllow(TcpWrapperAllowRule {
                address: host.clone(),
            }));
        }

        // 4. Identity-domain allow-list appends.
        for op in domains::expand(domain_catalogue, request.users(), request.groups()) {
            rules.push(RuleOp::DomainAppend(op));
        }

        // 5. sshd match blocks carrying the precedence-resolved parameters.
        let buckets = classify::classify(request.hostlist());
        let parameters = merge::merge(request.sshd_overrides(), request.users(), request.groups());
        for block in match_blocks::synthesize(&buckets, &parameters) {
            let key = block.match_key();
            debug!(event = "Compile", phase = "MatchBlock", key = key.as_str());

            if !existing_match_keys.contains(&key) {
                rules.push(RuleOp::MatchBlockCreate(MatchBlockCreate {
                    criteria: block.criteria,
                    pattern: block.pattern.clone(),
                    position: block.position,
                }));
            }
            for (directive, value) in block.parameters.iter() {
                rules.push(RuleOp::MatchParamSet(MatchParamSet {
                    match_key: key.clone(),
                    directive: directive.clone(),
                    value: value.clone(),
                }));
            }
        }

        info!(
            event = "Compile",
            phase = "Done",
            name = request.name(),
            rules = rules.len(),
        );
        Ok(rules)
    }
}
