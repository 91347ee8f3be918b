//! Reorders term-relationship lists into the legacy iteration order.
//!
//! The surrounding vocabulary model collects, per class, the related term
//! identifiers of each relationship kind (incoming-domain properties,
//! incoming-range properties, known subclasses, declared-disjoint classes)
//! in document order and calls [`reorder`] once per list. Lists never share
//! a table: every call builds, reads, and discards its own [`SlotTable`],
//! so concurrent calls have no shared state.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hash::HashWidth;
use crate::table::SlotTable;

/// Reorders a document-order candidate list into the sequence the legacy
/// container would have iterated it in.
///
/// Duplicate candidates are ignored past their first occurrence; callers are
/// expected to pass distinct identifiers, but an upstream slip must not
/// corrupt the emulation. With fewer than two distinct candidates the input
/// order is returned untouched: slot order is unobservable there, and no
/// table is built.
///
/// The result is always a permutation of the deduplicated input.
///
/// # Examples
///
/// ```rust
/// use dict_order::HashWidth;
/// use dict_order::reorder;
///
/// let order = reorder(&["name", "homepage", "mbox"], HashWidth::W64);
/// assert_eq!(order, ["mbox", "homepage", "name"]);
///
/// // Fewer than two distinct candidates pass through untouched.
/// assert_eq!(reorder(&["knows"], HashWidth::W64), ["knows"]);
/// ```
pub fn reorder<S: AsRef<str>>(candidates: &[S], width: HashWidth) -> Vec<String> {
    let distinct = dedup_first_seen(candidates);
    if distinct.len() < 2 {
        return distinct.into_iter().map(String::from).collect();
    }
    let mut table = SlotTable::new(width);
    for key in &distinct {
        table.insert(key);
    }
    table.keys_in_slot_order()
}

/// First-occurrence dedup. Candidate lists are tens of entries, so a linear
/// scan over the collected slice suffices.
fn dedup_first_seen<S: AsRef<str>>(candidates: &[S]) -> Vec<&str> {
    let mut distinct = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if !distinct.contains(&candidate) {
            distinct.push(candidate);
        }
    }
    distinct
}
