use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::HostBuckets;

/// Probe for any alphabetic character; entries matching it are symbolic names.
static ALPHABETIC: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Za-z]").unwrap());

/// Partition a hostlist into symbolic names and literal addresses.
///
/// An entry containing any alphabetic character is a name; everything else
/// (bare IPv4 and CIDR literals, pure punctuation) is an address. The
/// partition is total and order-preserving: every entry lands in exactly one
/// bucket, in input order, with no deduplication.
pub fn classify<S: AsRef<str>>(hostlist: &[S]) -> HostBuckets {
    let mut buckets = HostBuckets::default();
    for entry in hostlist {
        let entry = entry.as_ref();
        if ALPHABETIC.is_match(entry) {
            buckets.names.push(entry.to_string());
        } else {
            buckets.addresses.push(entry.to_string());
        }
    }
    buckets
}
