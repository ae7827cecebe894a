//! Typed rule operations handed to the external collaborators.
//!
//! Each operation carries every varying field of the corresponding "apply
//! rule" call; the fixed protocol facts (port, protocol, PAM permission and
//! placement, wrapped service name) are associated constants so collaborators
//! and logs can render complete rules.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::directive::DirectiveValue;
use super::match_block::{Anchor, MatchCriteria};

/// Whether a PAM subject is a user or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubjectKind {
    User,
    Group,
}

/// Which identity-directory allow-list a domain append targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum SettingKind {
    AllowUsers,
    AllowGroups,
}

/// A PAM access grant for one subject from one origin host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PamAllowRule {
    pub kind: SubjectKind,
    pub subject: String,
    pub origin: String,
}

impl PamAllowRule {
    /// pam_access permission column.
    pub const PERMISSION: &'static str = "+";
    /// New entries go at the end of the access file.
    pub const POSITION: &'static str = "append";
}

impl Display for PamAllowRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} : {} {} : {}",
            Self::PERMISSION,
            self.kind,
            self.subject,
            self.origin
        )
    }
}

/// A packet-filter accept rule for ssh from one source host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallAllowRule {
    pub source: String,
    /// Unique per host per requesting resource name.
    pub label: String,
}

impl FirewallAllowRule {
    pub const PORT: u16 = 22;
    pub const PROTOCOL: &'static str = "tcp";
    pub const ACTION: &'static str = "accept";
}

impl Display for FirewallAllowRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} {}/{} from {} ({})",
            Self::ACTION,
            Self::PROTOCOL,
            Self::PORT,
            self.source,
            self.label
        )
    }
}

/// A TCP-wrapper allow entry for one address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TcpWrapperAllowRule {
    pub address: String,
}

impl TcpWrapperAllowRule {
    pub const SERVICE: &'static str = "sshd";
}

impl Display for TcpWrapperAllowRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} : {}", Self::SERVICE, self.address)
    }
}

/// One identity-domain allow-list append.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainAppendOp {
    pub domain: String,
    pub setting: SettingKind,
    pub items: Vec<String>,
}

impl Display for DomainAppendOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}: {} += {}",
            self.domain,
            self.setting,
            self.items.join(",")
        )
    }
}

/// Creation of one sshd match block at its anchor position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchBlockCreate {
    pub criteria: MatchCriteria,
    pub pattern: String,
    pub position: Anchor,
}

impl MatchBlockCreate {
    /// The key the created block is addressed by in later parameter sets.
    pub fn match_key(&self) -> String {
        format!("{} {}", self.criteria, self.pattern)
    }
}

impl Display for MatchBlockCreate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Match {} {} @ {}",
            self.criteria, self.pattern, self.position
        )
    }
}

/// One directive assignment inside an owning match block.
///
/// `match_key` identifies the owning block (`"{criteria} {pattern}"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchParamSet {
    pub match_key: String,
    pub directive: String,
    pub value: DirectiveValue,
}

impl Display for MatchParamSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[{}] {} {}", self.match_key, self.directive, self.value)
    }
}

/// A single typed "apply rule" call to an external collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RuleOp {
    PamAllow(PamAllowRule),
    FirewallAllow(FirewallAllowRule),
    TcpWrapperAllow(TcpWrapperAllowRule),
    DomainAppend(DomainAppendOp),
    MatchBlockCreate(MatchBlockCreate),
    MatchParamSet(MatchParamSet),
}

impl Display for RuleOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RuleOp::PamAllow(rule) => write!(f, "pam allow {rule}"),
            RuleOp::FirewallAllow(rule) => write!(f, "firewall {rule}"),
            RuleOp::TcpWrapperAllow(rule) => write!(f, "tcpwrapper allow {rule}"),
            RuleOp::DomainAppend(op) => write!(f, "domain append {op}"),
            RuleOp::MatchBlockCreate(op) => write!(f, "sshd create {op}"),
            RuleOp::MatchParamSet(op) => write!(f, "sshd set {op}"),
        }
    }
}

/// The ordered output of one compilation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RuleSet(Vec<RuleOp>);

impl RuleSet {
    pub fn new() -> Self {
        RuleSet::default()
    }

    pub fn push(&mut self, op: RuleOp) {
        self.0.push(op);
    }

    /// The operations in application order.
    pub fn ops(&self) -> &[RuleOp] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleOp> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for RuleSet {
    type Item = RuleOp;
    type IntoIter = std::vec::IntoIter<RuleOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pam_rule_display() {
        let rule = PamAllowRule {
            kind: SubjectKind::Group,
            subject: "devs".to_string(),
            origin: "bastion.corp".to_string(),
        };
        assert_eq!(rule.to_string(), "+ : group devs : bastion.corp");
    }

    #[test]
    fn test_firewall_rule_display() {
        let rule = FirewallAllowRule {
            source: "10.0.0.5".to_string(),
            label: "allow ssh from 10.0.0.5 for app1".to_string(),
        };
        assert_eq!(
            rule.to_string(),
            "accept tcp/22 from 10.0.0.5 (allow ssh from 10.0.0.5 for app1)"
        );
    }

    #[test]
    fn test_tcpwrapper_rule_display() {
        let rule = TcpWrapperAllowRule {
            address: "bastion.corp".to_string(),
        };
        assert_eq!(rule.to_string(), "sshd : bastion.corp");
    }

    #[test]
    fn test_rule_op_serialization_is_tagged() {
        let op = RuleOp::PamAllow(PamAllowRule {
            kind: SubjectKind::User,
            subject: "alice".to_string(),
            origin: "10.0.0.5".to_string(),
        });
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(value["op"], "pam_allow");
        assert_eq!(value["kind"], "user");
        assert_eq!(value["subject"], "alice");
    }

    #[test]
    fn test_setting_kind_display() {
        assert_eq!(SettingKind::AllowUsers.to_string(), "AllowUsers");
        assert_eq!(SettingKind::AllowGroups.to_string(), "AllowGroups");
    }
}
