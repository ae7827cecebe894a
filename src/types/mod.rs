//! Data model types for access requests and compiled rule operations.

mod directive;
mod host;
mod match_block;
mod ops;
mod request;

pub use directive::{DirectiveMap, DirectiveValue};
pub use host::HostBuckets;
pub use match_block::{Anchor, MatchBlock, MatchCriteria};
pub use ops::{
    DomainAppendOp, FirewallAllowRule, MatchBlockCreate, MatchParamSet, PamAllowRule, RuleOp,
    RuleSet, SettingKind, SubjectKind, TcpWrapperAllowRule,
};
pub use request::AccessRequest;
