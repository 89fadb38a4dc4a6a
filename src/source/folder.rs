// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Offline semester source backed by a data folder.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use super::{AvailableTerm, SourceError, TermSource};
use crate::format::RawCourse;
use crate::model::SemesterId;

/// Replays semesters from files previously written by the data store.
///
/// The available terms are derived from the `courses_<year>_<marker>.json`
/// files actually present, so a partially populated folder simply offers
/// fewer semesters.
#[derive(Debug, Clone)]
pub struct FolderSource {
    root: PathBuf,
}

fn courses_file_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^courses_(\d{4})_(\d{3})\.json$").expect("courses filename regex")
    })
}

impl FolderSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn courses_path(&self, semester: &SemesterId) -> PathBuf {
        self.root.join(format!(
            "courses_{year}_{marker}.json",
            year = semester.year(),
            marker = semester.kind().sap_marker(),
        ))
    }
}

impl TermSource for FolderSource {
    fn last_semesters(&self) -> Result<Vec<AvailableTerm>, SourceError> {
        let entries = fs::read_dir(&self.root).map_err(|source| SourceError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut terms = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| SourceError::Io {
                path: self.root.clone(),
                source,
            })?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let Some(captures) = courses_file_pattern().captures(name) else {
                continue;
            };
            // The pattern guarantees both groups are short digit runs.
            let year: u16 = captures[1].parse().unwrap_or(0);
            let marker: u16 = captures[2].parse().unwrap_or(0);
            terms.push(AvailableTerm { year, semester: marker, start: None, end: None });
        }

        terms.sort_by_key(|term| (term.year, term.semester));
        Ok(terms)
    }

    fn term_courses(&self, semester: &SemesterId) -> Result<Vec<RawCourse>, SourceError> {
        let path = self.courses_path(semester);
        let raw = fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SourceError::Json {
            context: format!("{path}", path = path.display()),
            source,
        })
    }
}
