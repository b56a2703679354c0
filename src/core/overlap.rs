use std::collections::BTreeSet;

/// Labels present in both attribute sets, in sorted order
#[inline]
pub fn shared_attributes(current: &BTreeSet<String>, candidate: &BTreeSet<String>) -> BTreeSet<String> {
    current.intersection(candidate).cloned().collect()
}
