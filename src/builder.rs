// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The end-to-end catalog build pipeline.
//!
//! Reads the semester index, picks the most recent instance of each term
//! kind, folds their course maps in the requested order, and applies the
//! hand-maintained overrides. A semester that fails to download is skipped
//! with a diagnostic; only a completely empty build is an error.

use std::collections::BTreeMap;
use std::fmt;

use crate::format;
use crate::merge;
use crate::model::{Catalog, SemesterId, TermKind};
use crate::overrides;
use crate::source::{SourceError, TermSource};
use crate::store::DataFolder;

/// Which semester wins the first-writer-wins merge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MergeOrder {
    /// Most recent semester first, so current names and staff win.
    #[default]
    NewestFirst,
    /// Oldest semester first, preserving earlier descriptions.
    OldestFirst,
}

/// One semester left out of the build, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTerm {
    pub label: String,
    pub reason: String,
}

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Semesters folded into the catalog, in merge order.
    pub merged: Vec<SemesterId>,
    pub skipped: Vec<SkippedTerm>,
    pub catalog: Catalog,
}

#[derive(Debug)]
pub enum BuildError {
    /// The semester index itself could not be read; nothing to build from.
    Index(SourceError),
    /// Every candidate semester failed to download.
    NoTermsSucceeded { attempted: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(source) => write!(f, "cannot read the semester index: {source}"),
            Self::NoTermsSucceeded { attempted } => {
                write!(f, "none of the {attempted} candidate semesters could be fetched")
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Index(source) => Some(source),
            Self::NoTermsSucceeded { .. } => None,
        }
    }
}

/// Builds the merged catalog from `source`.
///
/// When `store` is given, the semester index and each successfully fetched
/// raw export are persisted along the way; persistence failures are
/// reported on stderr but never fail the build.
pub fn build_catalog(
    source: &dyn TermSource,
    store: Option<&DataFolder>,
    order: MergeOrder,
) -> Result<BuildReport, BuildError> {
    let index = source.last_semesters().map_err(BuildError::Index)?;

    if let Some(folder) = store {
        if let Err(err) = folder.save_last_semesters(&index) {
            eprintln!("coursegraph: cannot persist the semester index: {err}");
        }
    }

    let mut skipped = Vec::new();

    // Latest instance of each term kind; older instances only add stale
    // data the newest one supersedes.
    let mut latest: BTreeMap<TermKind, SemesterId> = BTreeMap::new();
    for term in &index {
        let semester = match term.semester_id() {
            Ok(semester) => semester,
            Err(err) => {
                skipped.push(SkippedTerm {
                    label: format!("{}/{}", term.year, term.semester),
                    reason: err.to_string(),
                });
                continue;
            }
        };
        latest
            .entry(semester.kind())
            .and_modify(|kept| {
                if semester > *kept {
                    *kept = semester;
                }
            })
            .or_insert(semester);
    }

    let mut candidates: Vec<SemesterId> = latest.into_values().collect();
    candidates.sort();
    if order == MergeOrder::NewestFirst {
        candidates.reverse();
    }
    let attempted = candidates.len();

    let mut catalog = Catalog::new();
    let mut merged = Vec::new();
    for semester in candidates {
        let courses = match source.term_courses(&semester) {
            Ok(courses) => courses,
            Err(err) => {
                eprintln!("coursegraph: skipping semester {semester}: {err}");
                skipped.push(SkippedTerm { label: semester.code(), reason: err.to_string() });
                continue;
            }
        };

        if let Some(folder) = store {
            if let Err(err) = folder.save_raw_courses(&semester, &courses) {
                eprintln!("coursegraph: cannot persist semester {semester}: {err}");
            }
        }

        let term_map = format::build_course_map(&courses, semester.kind());
        merge::merge_term(&mut catalog, term_map);
        merged.push(semester);
    }

    if merged.is_empty() {
        return Err(BuildError::NoTermsSucceeded { attempted });
    }

    overrides::apply(&mut catalog);

    Ok(BuildReport { merged, skipped, catalog })
}
