//! Host bucket types produced by classification.

use serde::{Deserialize, Serialize};

/// Order-preserving partition of a hostlist into symbolic names and literal
/// addresses. Every input entry lands in exactly one bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostBuckets {
    pub names: Vec<String>,
    pub addresses: Vec<String>,
}

impl HostBuckets {
    /// Total number of entries across both buckets.
    pub fn len(&self) -> usize {
        self.names.len() + self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.addresses.is_empty()
    }
}
