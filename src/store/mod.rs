// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! On-disk persistence of the data folder.
//!
//! The folder holds three kinds of files: the semester index
//! (`last_semesters.json`), one raw export per fetched semester
//! (`courses_<year>_<marker>.json`), and the merged catalog
//! (`merged_courses.json`). All writes go through a temp file followed by
//! an atomic rename so readers never observe a half-written file.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::format::RawCourse;
use crate::model::{Catalog, SemesterId};
use crate::source::{AvailableTerm, TermWindow};

const LAST_SEMESTERS_FILENAME: &str = "last_semesters.json";
const MERGED_FILENAME: &str = "merged_courses.json";

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents to stable storage before the
    /// rename. Exact guarantees are platform/filesystem-dependent.
    Durable,
}

/// The catalog data folder.
#[derive(Debug, Clone)]
pub struct DataFolder {
    root: PathBuf,
    durability: WriteDurability,
}

impl DataFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn last_semesters_path(&self) -> PathBuf {
        self.root.join(LAST_SEMESTERS_FILENAME)
    }

    pub fn courses_path(&self, semester: &SemesterId) -> PathBuf {
        self.root.join(format!(
            "courses_{year}_{marker}.json",
            year = semester.year(),
            marker = semester.kind().sap_marker(),
        ))
    }

    pub fn merged_path(&self) -> PathBuf {
        self.root.join(MERGED_FILENAME)
    }

    /// Persists the semester index keyed by six-digit semester code.
    pub fn save_last_semesters(&self, terms: &[AvailableTerm]) -> Result<PathBuf, StoreError> {
        let mut index: BTreeMap<String, TermWindow> = BTreeMap::new();
        for term in terms {
            let Ok(semester) = term.semester_id() else {
                continue;
            };
            index.insert(
                semester.code(),
                TermWindow { start: term.start.clone(), end: term.end.clone() },
            );
        }
        self.save_json(self.last_semesters_path(), &index)
    }

    /// Persists one semester's raw export verbatim for offline rebuilds.
    pub fn save_raw_courses(
        &self,
        semester: &SemesterId,
        courses: &[RawCourse],
    ) -> Result<PathBuf, StoreError> {
        self.save_json(self.courses_path(semester), &courses)
    }

    pub fn save_merged(&self, catalog: &Catalog) -> Result<PathBuf, StoreError> {
        self.save_json(self.merged_path(), catalog)
    }

    pub fn load_merged(&self) -> Result<Catalog, StoreError> {
        let path = self.merged_path();
        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Json { path, source })
    }

    fn save_json<T: serde::Serialize>(&self, path: PathBuf, value: &T) -> Result<PathBuf, StoreError> {
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        write_atomic(&self.root, &path, json.as_bytes(), self.durability)?;
        Ok(path)
    }
}

fn write_atomic(
    root: &Path,
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    fs::create_dir_all(root).map_err(|source| StoreError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path = root.join(format!(
        ".coursegraph.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    let write_result = file.write_all(contents).and_then(|()| {
        if durability == WriteDurability::Durable {
            file.sync_all()
        } else {
            Ok(())
        }
    });
    if let Err(source) = write_result {
        drop(file);
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: tmp_path, source });
    }
    drop(file);

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }

    Ok(())
}
