// src/lib.rs
pub use classify::classify;
pub use compiler::RuleCompiler;
pub use domains::{expand, parse_catalogue};
pub use error::ValidationError;
pub use match_blocks::synthesize;
pub use merge::merge;
pub use types::{
    AccessRequest, Anchor, DirectiveMap, DirectiveValue, DomainAppendOp, FirewallAllowRule,
    HostBuckets, MatchBlock, MatchBlockCreate, MatchCriteria, MatchParamSet, PamAllowRule, RuleOp,
    RuleSet, SettingKind, SubjectKind, TcpWrapperAllowRule,
};

mod classify;
mod compiler;
mod domains;
mod error;
mod match_blocks;
mod merge;
mod types;
