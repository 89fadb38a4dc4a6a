// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A recurring academic period type, distinct from a specific year's
/// instance of it.
///
/// The ordering is the fixed catalog order (winter, spring, summer), which
/// is also the order inside an academic year of the SAP semester codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TermKind {
    Winter,
    Spring,
    Summer,
}

impl TermKind {
    pub const ALL: [TermKind; 3] = [TermKind::Winter, TermKind::Spring, TermKind::Summer];

    /// Hebrew label used in the published catalog.
    pub fn label(self) -> &'static str {
        match self {
            Self::Winter => "חורף",
            Self::Spring => "אביב",
            Self::Summer => "קיץ",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// SAP semester marker (200-series) used by the remote term index.
    pub fn sap_marker(self) -> u16 {
        match self {
            Self::Winter => 200,
            Self::Spring => 201,
            Self::Summer => 202,
        }
    }

    pub fn from_sap_marker(marker: u16) -> Option<Self> {
        match marker {
            200 => Some(Self::Winter),
            201 => Some(Self::Spring),
            202 => Some(Self::Summer),
            _ => None,
        }
    }

    /// Two-digit ordinal used inside semester codes like `202501`.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Winter => 1,
            Self::Spring => 2,
            Self::Summer => 3,
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TermKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TermKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_label(&raw)
            .ok_or_else(|| de::Error::custom(format!("unknown semester label: {raw:?}")))
    }
}

/// A specific year's instance of a term, e.g. winter 2025 = `202501`.
///
/// Ordering is chronological by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemesterId {
    year: u16,
    kind: TermKind,
}

impl SemesterId {
    pub fn new(year: u16, kind: TermKind) -> Self {
        Self { year, kind }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn kind(&self) -> TermKind {
        self.kind
    }

    /// Six-digit semester code, year followed by the term ordinal.
    pub fn code(&self) -> String {
        format!("{:04}{:02}", self.year, self.kind.ordinal())
    }
}

impl fmt::Display for SemesterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::{SemesterId, TermKind};

    #[test]
    fn labels_round_trip() {
        for kind in TermKind::ALL {
            assert_eq!(TermKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(TermKind::from_label("שנתי"), None);
    }

    #[test]
    fn sap_markers_round_trip() {
        for kind in TermKind::ALL {
            assert_eq!(TermKind::from_sap_marker(kind.sap_marker()), Some(kind));
        }
        assert_eq!(TermKind::from_sap_marker(203), None);
        assert_eq!(TermKind::from_sap_marker(0), None);
    }

    #[test]
    fn semester_codes_are_chronological() {
        let winter_2024 = SemesterId::new(2024, TermKind::Winter);
        let spring_2024 = SemesterId::new(2024, TermKind::Spring);
        let winter_2025 = SemesterId::new(2025, TermKind::Winter);

        assert_eq!(winter_2024.code(), "202401");
        assert_eq!(spring_2024.code(), "202402");
        assert!(winter_2024 < spring_2024);
        assert!(spring_2024 < winter_2025);
    }

    #[test]
    fn term_kind_serializes_as_hebrew_label() {
        assert_eq!(serde_json::to_string(&TermKind::Winter).expect("json"), "\"חורף\"");
        let kind: TermKind = serde_json::from_str("\"אביב\"").expect("term kind");
        assert_eq!(kind, TermKind::Spring);
        serde_json::from_str::<TermKind>("\"winter\"").unwrap_err();
    }
}
