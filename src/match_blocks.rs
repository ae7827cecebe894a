use itertools::Itertools;

use crate::types::{DirectiveMap, HostBuckets, MatchBlock, MatchCriteria};

/// Build one match block per non-empty host bucket.
///
/// The `Host` block, if present, is always emitted before the `Address`
/// block, regardless of input order. Patterns are the comma-joined bucket
/// contents in original order. Each block gets its own copy of `parameters`,
/// so later per-block edits cannot leak across blocks.
pub fn synthesize(buckets: &HostBuckets, parameters: &DirectiveMap) -> Vec<MatchBlock> {
    let mut blocks = Vec::with_capacity(2);
    if !buckets.names.is_empty() {
        blocks.push(MatchBlock::new(
            MatchCriteria::Host,
            buckets.names.iter().join(","),
            parameters.clone(),
        ));
    }
    if !buckets.addresses.is_empty() {
        blocks.push(MatchBlock::new(
            MatchCriteria::Address,
            buckets.addresses.iter().join(","),
            parameters.clone(),
        ));
    }
    blocks
}
