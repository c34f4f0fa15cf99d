//! Senior-officer resolution
//!
//! Given the officer currently holding a tappal, find the nearest more senior
//! officer: try the immediate parent rank first, then climb toward rank 0,
//! preferring someone from the same department at whichever rank first has
//! any candidate.

use tappal_domain::{Officer, Rank, Role};

use super::roster::Roster;

/// Resolve the escalation target for the officer with `current_officer_id`.
///
/// An id missing from the roster is treated as an unknown role (clerk rank)
/// with no department. Returns `None` when the current officer is already at
/// the top rank or no senior rank has anyone in it.
pub fn find_parent_or_higher<'a>(roster: &'a Roster, current_officer_id: &str) -> Option<&'a Officer> {
    match roster.get(current_officer_id) {
        Some(current) => find_senior_for(roster, current),
        None => scan(roster, Role::from_title("").rank(), None, current_officer_id),
    }
}

/// Same scan as [`find_parent_or_higher`] for an already resolved officer,
/// which may not be in the roster (e.g. rebuilt from tappal snapshot fields).
pub fn find_senior_for<'a>(roster: &'a Roster, current: &Officer) -> Option<&'a Officer> {
    scan(roster, current.rank(), Some(current), &current.id)
}

fn scan<'a>(
    roster: &'a Roster,
    current_rank: Rank,
    current: Option<&Officer>,
    exclude_id: &str,
) -> Option<&'a Officer> {
    for rank in (Role::TOP_RANK..current_rank).rev() {
        let mut first = None;
        for candidate in roster.at_rank(rank).filter(|officer| officer.id != exclude_id) {
            if current.is_some_and(|me| me.shares_department_with(candidate)) {
                return Some(candidate);
            }
            first.get_or_insert(candidate);
        }
        if first.is_some() {
            return first;
        }
    }
    None
}
