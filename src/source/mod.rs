// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Semester-data acquisition.
//!
//! A [`TermSource`] answers two questions: which semesters are available,
//! and what raw course records a given semester contains. [`HttpSource`]
//! reads the published SAP export; [`FolderSource`] replays previously
//! persisted files for offline rebuilds.

pub mod folder;
pub mod http;

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::format::RawCourse;
use crate::model::{SemesterId, TermKind};

pub use folder::FolderSource;
pub use http::HttpSource;

/// One entry of the published semester index.
///
/// `semester` is the SAP marker (200 winter, 201 spring, 202 summer);
/// the start and end dates are carried verbatim when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableTerm {
    pub year: u16,
    pub semester: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl AvailableTerm {
    /// Resolves the SAP marker into a catalog semester id.
    pub fn semester_id(&self) -> Result<SemesterId, SourceError> {
        let kind = TermKind::from_sap_marker(self.semester).ok_or(SourceError::UnknownTermMarker {
            year: self.year,
            marker: self.semester,
        })?;
        Ok(SemesterId::new(self.year, kind))
    }
}

/// The date window persisted alongside each indexed semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Where semester data comes from.
pub trait TermSource {
    /// The semester index, most recent entries last as published.
    fn last_semesters(&self) -> Result<Vec<AvailableTerm>, SourceError>;

    /// The raw course records of one semester.
    fn term_courses(&self, semester: &SemesterId) -> Result<Vec<RawCourse>, SourceError>;
}

#[derive(Debug)]
pub enum SourceError {
    /// The HTTP transport failed before a response arrived.
    Http {
        url: String,
        source: Box<ureq::Error>,
    },
    /// The server answered with a non-success status.
    Status { url: String, status: u16 },
    /// Reading the response body failed.
    Read { url: String, source: io::Error },
    /// A local file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A payload was not the JSON shape we expect.
    Json {
        context: String,
        source: serde_json::Error,
    },
    /// The index carried a semester marker outside 200..=202.
    UnknownTermMarker { year: u16, marker: u16 },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { url, source } => write!(f, "request to {url} failed: {source}"),
            Self::Status { url, status } => write!(f, "request to {url} returned status {status}"),
            Self::Read { url, source } => write!(f, "failed to read response from {url}: {source}"),
            Self::Io { path, source } => {
                write!(f, "failed to read {path}: {source}", path = path.display())
            }
            Self::Json { context, source } => write!(f, "failed to decode {context}: {source}"),
            Self::UnknownTermMarker { year, marker } => {
                write!(f, "semester index entry {year}/{marker} has an unknown term marker")
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { source, .. } => Some(source),
            Self::Read { source, .. } | Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Status { .. } | Self::UnknownTermMarker { .. } => None,
        }
    }
}
