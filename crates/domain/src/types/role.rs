//! Officer roles and their authority ranks
//!
//! Role titles arrive from the officer directory as free text ("RDO",
//! "Revenue Divisional Officer", "co-officer"). [`Role::from_title`] is the
//! single adapter that turns those strings into the closed [`Role`] enum; the
//! rest of the workspace only ever compares ranks.

use serde::{Deserialize, Serialize};

/// Authority rank. Lower is more senior; 0 is the top of the hierarchy.
pub type Rank = u8;

/// Closed set of roles in the revenue hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Co-officer; shares the top rank with system admins.
    CoOfficer,
    /// System administrator, top rank.
    SystemAdmin,
    /// District Collector.
    Collector,
    /// Joint Collector.
    JointCollector,
    /// District Revenue Officer (DRO).
    DistrictRevenueOfficer,
    /// Revenue Divisional Officer (RDO).
    RevenueDivisionalOfficer,
    /// Tahsildar, head of a mandal revenue office.
    Tahsildar,
    /// Deputy to the Tahsildar.
    NaibTahsildar,
    /// Revenue Inspector (RI).
    RevenueInspector,
    /// Village Revenue Officer (VRO).
    VillageRevenueOfficer,
    /// Clerk; also the landing spot for unrecognised titles.
    Clerk,
}

impl Role {
    /// Rank of the most senior roles.
    pub const TOP_RANK: Rank = 0;
    /// Rank of the most junior role.
    pub const LOWEST_RANK: Rank = 9;

    /// Normalize a free-text role title.
    ///
    /// Exact (lowercased, trimmed) titles are looked up first. Otherwise the
    /// title is tested for substrings in a fixed priority order; the order is
    /// the disambiguator, so "Senior Revenue Inspector" lands on
    /// [`Role::RevenueInspector`] even though it also contains "revenue".
    /// Anything unrecognised is a [`Role::Clerk`].
    pub fn from_title(title: &str) -> Self {
        let normalized = title.trim().to_lowercase();

        if let Some(role) = Self::exact(&normalized) {
            return role;
        }

        let has = |needle: &str| normalized.contains(needle);

        if has("collector") {
            Self::Collector
        } else if has("joint") {
            Self::JointCollector
        } else if has("district revenue") || has("dro") {
            Self::DistrictRevenueOfficer
        } else if has("revenue divisional") || has("rdo") {
            Self::RevenueDivisionalOfficer
        } else if has("tahsildar") {
            Self::Tahsildar
        } else if has("naib") {
            Self::NaibTahsildar
        } else if has("revenue inspector") || has("inspector") || has("ri") {
            Self::RevenueInspector
        } else if has("village") || has("vro") {
            Self::VillageRevenueOfficer
        } else if has("clerk") {
            Self::Clerk
        } else if has("admin") {
            Self::SystemAdmin
        } else if has("co-officer") {
            Self::CoOfficer
        } else {
            Self::Clerk
        }
    }

    fn exact(normalized: &str) -> Option<Self> {
        let role = match normalized {
            "co-officer" => Self::CoOfficer,
            "system admin" => Self::SystemAdmin,
            "district collector" | "collector" => Self::Collector,
            "joint collector" => Self::JointCollector,
            "district revenue officer" | "dro" => Self::DistrictRevenueOfficer,
            "revenue divisional officer" | "rdo" => Self::RevenueDivisionalOfficer,
            "tahsildar" => Self::Tahsildar,
            "naib tahsildar" => Self::NaibTahsildar,
            "revenue inspector" | "ri" => Self::RevenueInspector,
            "village revenue officer" | "vro" => Self::VillageRevenueOfficer,
            "clerk" => Self::Clerk,
            _ => return None,
        };
        Some(role)
    }

    /// Authority rank of this role; see [`Rank`].
    pub fn rank(self) -> Rank {
        match self {
            Self::CoOfficer | Self::SystemAdmin => 0,
            Self::Collector => 1,
            Self::JointCollector => 2,
            Self::DistrictRevenueOfficer => 3,
            Self::RevenueDivisionalOfficer => 4,
            Self::Tahsildar => 5,
            Self::NaibTahsildar => 6,
            Self::RevenueInspector => 7,
            Self::VillageRevenueOfficer => 8,
            Self::Clerk => 9,
        }
    }

    /// Canonical display title.
    pub fn label(self) -> &'static str {
        match self {
            Self::CoOfficer => "Co-Officer",
            Self::SystemAdmin => "System Admin",
            Self::Collector => "District Collector",
            Self::JointCollector => "Joint Collector",
            Self::DistrictRevenueOfficer => "District Revenue Officer",
            Self::RevenueDivisionalOfficer => "Revenue Divisional Officer",
            Self::Tahsildar => "Tahsildar",
            Self::NaibTahsildar => "Naib Tahsildar",
            Self::RevenueInspector => "Revenue Inspector",
            Self::VillageRevenueOfficer => "Village Revenue Officer",
            Self::Clerk => "Clerk",
        }
    }

    /// True when nobody ranks above this role.
    pub fn is_top(self) -> bool {
        self.rank() == Self::TOP_RANK
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rank of a free-text role title. Total and deterministic.
pub fn rank_of(title: &str) -> Rank {
    Role::from_title(title).rank()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_titles_map_to_documented_ranks() {
        let table = [
            ("co-officer", 0),
            ("system admin", 0),
            ("district collector", 1),
            ("collector", 1),
            ("joint collector", 2),
            ("district revenue officer", 3),
            ("dro", 3),
            ("revenue divisional officer", 4),
            ("rdo", 4),
            ("tahsildar", 5),
            ("naib tahsildar", 6),
            ("revenue inspector", 7),
            ("ri", 7),
            ("village revenue officer", 8),
            ("vro", 8),
            ("clerk", 9),
        ];

        for (title, rank) in table {
            assert_eq!(rank_of(title), rank, "title {title:?}");
        }
    }

    #[test]
    fn normalization_ignores_case_and_padding() {
        assert_eq!(rank_of("Collector"), rank_of("District Collector"));
        assert_eq!(rank_of("Collector"), 1);
        assert_eq!(rank_of("  RDO "), 4);
        assert_eq!(rank_of("Co-Officer"), 0);
    }

    #[test]
    fn revenue_divisional_officer_is_not_an_inspector() {
        assert_eq!(rank_of("Revenue Divisional Officer"), 4);
        assert_eq!(rank_of("Revenue Divisional Officer (Incharge)"), 4);
    }

    #[test]
    fn fallback_branches_respect_check_order() {
        // Each title also contains a weaker substring checked later.
        assert_eq!(Role::from_title("Additional Collector (Revenue)"), Role::Collector);
        assert_eq!(Role::from_title("Joint Secretary, Revenue"), Role::JointCollector);
        assert_eq!(Role::from_title("District Revenue Officer & Inspector"), Role::DistrictRevenueOfficer);
        assert_eq!(Role::from_title("Revenue Divisional Office Head"), Role::RevenueDivisionalOfficer);
        assert_eq!(Role::from_title("Deputy Tahsildar (Naib)"), Role::Tahsildar);
        assert_eq!(Role::from_title("Naib Officer"), Role::NaibTahsildar);
        assert_eq!(Role::from_title("Senior Revenue Inspector"), Role::RevenueInspector);
        assert_eq!(Role::from_title("Village Officer"), Role::VillageRevenueOfficer);
        assert_eq!(Role::from_title("Typing Clerk"), Role::Clerk);
        assert_eq!(Role::from_title("Admin"), Role::SystemAdmin);
        assert_eq!(Role::from_title("Senior Co-Officer"), Role::CoOfficer);
    }

    #[test]
    fn unknown_and_empty_titles_default_to_clerk() {
        assert_eq!(Role::from_title(""), Role::Clerk);
        assert_eq!(Role::from_title("Peon"), Role::Clerk);
        assert_eq!(rank_of("Attender"), Role::LOWEST_RANK);
    }

    #[test]
    fn top_roles() {
        assert!(Role::CoOfficer.is_top());
        assert!(Role::SystemAdmin.is_top());
        assert!(!Role::Collector.is_top());
    }
}
