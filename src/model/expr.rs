// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::CourseId;

/// A boolean prerequisite expression over course identifiers.
///
/// Serializes to the published catalog shape: a leaf is the bare id string,
/// conjunctions are `{"and": [...]}` and disjunctions `{"or": [...]}`.
/// Operand lists always hold at least two entries; a would-be group of one
/// collapses to its single term (see [`PrereqExpr::all`] / [`PrereqExpr::any`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrereqExpr {
    Course(CourseId),
    And { and: Vec<PrereqExpr> },
    Or { or: Vec<PrereqExpr> },
}

impl PrereqExpr {
    /// Conjunction of `terms`; `None` when empty, the term itself for one.
    pub fn all(mut terms: Vec<PrereqExpr>) -> Option<PrereqExpr> {
        match terms.len() {
            0 => None,
            1 => Some(terms.remove(0)),
            _ => Some(PrereqExpr::And { and: terms }),
        }
    }

    /// Disjunction of `terms`; `None` when empty, the term itself for one.
    pub fn any(mut terms: Vec<PrereqExpr>) -> Option<PrereqExpr> {
        match terms.len() {
            0 => None,
            1 => Some(terms.remove(0)),
            _ => Some(PrereqExpr::Or { or: terms }),
        }
    }

    /// All course ids mentioned at the leaves, left to right.
    pub fn leaf_ids(&self) -> Vec<&CourseId> {
        let mut ids = Vec::new();
        self.collect_leaf_ids(&mut ids);
        ids
    }

    fn collect_leaf_ids<'a>(&'a self, ids: &mut Vec<&'a CourseId>) {
        match self {
            Self::Course(id) => ids.push(id),
            Self::And { and: terms } | Self::Or { or: terms } => {
                for term in terms {
                    term.collect_leaf_ids(ids);
                }
            }
        }
    }
}

impl From<CourseId> for PrereqExpr {
    fn from(id: CourseId) -> Self {
        Self::Course(id)
    }
}
