//! Officer directory snapshot

use std::collections::HashMap;

use tappal_domain::{Officer, Rank};

/// Immutable snapshot of the officer directory.
///
/// Roles are normalized once on construction. Directory order is preserved
/// and is the tie-break whenever several officers qualify equally.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    officers: Vec<Officer>,
    ranks: Vec<Rank>,
    by_id: HashMap<String, usize>,
}

impl Roster {
    /// Snapshot `officers`, keeping their order.
    pub fn from_officers(officers: Vec<Officer>) -> Self {
        let ranks = officers.iter().map(Officer::rank).collect();
        let mut by_id = HashMap::with_capacity(officers.len());
        for (idx, officer) in officers.iter().enumerate() {
            // first occurrence wins for duplicated ids
            by_id.entry(officer.id.clone()).or_insert(idx);
        }
        Self { officers, ranks, by_id }
    }

    /// Officer with exactly this id.
    pub fn get(&self, id: &str) -> Option<&Officer> {
        self.by_id.get(id).map(|&idx| &self.officers[idx])
    }

    /// Case-insensitive lookup by display name; first match in directory order.
    pub fn find_by_name(&self, name: &str) -> Option<&Officer> {
        let wanted = name.trim();
        if wanted.is_empty() {
            return None;
        }
        self.officers.iter().find(|officer| officer.name.trim().eq_ignore_ascii_case(wanted))
    }

    /// Officers whose normalized role has exactly `rank`, in directory order.
    pub fn at_rank(&self, rank: Rank) -> impl Iterator<Item = &Officer> {
        self.officers
            .iter()
            .zip(self.ranks.iter())
            .filter(move |&(_, &officer_rank)| officer_rank == rank)
            .map(|(officer, _)| officer)
    }

    /// Every officer, in directory order.
    pub fn officers(&self) -> &[Officer] {
        &self.officers
    }

    /// Number of officers in the snapshot.
    pub fn len(&self) -> usize {
        self.officers.len()
    }

    /// True for an empty directory.
    pub fn is_empty(&self) -> bool {
        self.officers.is_empty()
    }
}

impl From<Vec<Officer>> for Roster {
    fn from(officers: Vec<Officer>) -> Self {
        Self::from_officers(officers)
    }
}
