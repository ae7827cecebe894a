//! sshd match-block descriptors.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::directive::DirectiveMap;

/// The match-block dimension: symbolic host name or literal address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum MatchCriteria {
    Host,
    Address,
}

/// Where a synthesized block is inserted relative to the existing
/// configuration. Every block from one compilation shares the same anchor.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Anchor {
    /// Before the first match block already present in the file.
    #[default]
    BeforeFirstMatch,
}

/// One synthesized sshd match block: a criteria/pattern pair carrying its own
/// copy of the precedence-resolved parameter set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchBlock {
    pub criteria: MatchCriteria,
    pub pattern: String,
    pub parameters: DirectiveMap,
    pub position: Anchor,
}

impl MatchBlock {
    pub fn new(
        criteria: MatchCriteria,
        pattern: impl Into<String>,
        parameters: DirectiveMap,
    ) -> Self {
        MatchBlock {
            criteria,
            pattern: pattern.into(),
            parameters,
            position: Anchor::BeforeFirstMatch,
        }
    }

    /// The key the sshd config collaborator addresses this block by,
    /// e.g. `Host bastion.corp` or `Address 10.0.0.5`.
    pub fn match_key(&self) -> String {
        format!("{} {}", self.criteria, self.pattern)
    }
}

impl Display for MatchBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Match {} {}", self.criteria, self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_key() {
        let block = MatchBlock::new(MatchCriteria::Host, "bastion.corp", DirectiveMap::new());
        assert_eq!(block.match_key(), "Host bastion.corp");
        assert_eq!(block.to_string(), "Match Host bastion.corp");
    }

    #[test]
    fn test_criteria_display() {
        assert_eq!(MatchCriteria::Host.to_string(), "Host");
        assert_eq!(MatchCriteria::Address.to_string(), "Address");
    }

    #[test]
    fn test_default_anchor() {
        let block = MatchBlock::new(MatchCriteria::Address, "10.0.0.5", DirectiveMap::new());
        assert_eq!(block.position, Anchor::BeforeFirstMatch);
    }
}
