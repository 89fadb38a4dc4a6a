// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The published SAP course-export endpoints.

use std::io::Read;

use serde::de::DeserializeOwned;

use super::{AvailableTerm, SourceError, TermSource};
use crate::format::RawCourse;
use crate::model::SemesterId;

const LAST_SEMESTERS_URL: &str =
    "https://michael-maltsev.github.io/technion-sap-info-fetcher/last_semesters.json";
const COURSES_URL_BASE: &str =
    "https://raw.githubusercontent.com/michael-maltsev/technion-sap-info-fetcher/gh-pages";

/// Fetches the semester index and per-semester exports over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpSource {
    index_url: String,
    courses_base: String,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            index_url: LAST_SEMESTERS_URL.to_string(),
            courses_base: COURSES_URL_BASE.to_string(),
        }
    }

    /// Points the source at alternative endpoints, e.g. a local mirror.
    pub fn with_endpoints(index_url: impl Into<String>, courses_base: impl Into<String>) -> Self {
        Self {
            index_url: index_url.into(),
            courses_base: courses_base.into(),
        }
    }

    fn courses_url(&self, semester: &SemesterId) -> String {
        format!(
            "{base}/courses_{year}_{marker}.json",
            base = self.courses_base,
            year = semester.year(),
            marker = semester.kind().sap_marker(),
        )
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TermSource for HttpSource {
    fn last_semesters(&self) -> Result<Vec<AvailableTerm>, SourceError> {
        fetch_json(&self.index_url, "semester index")
    }

    fn term_courses(&self, semester: &SemesterId) -> Result<Vec<RawCourse>, SourceError> {
        let url = self.courses_url(semester);
        fetch_json(&url, &format!("courses of {semester}"))
    }
}

fn fetch_json<T: DeserializeOwned>(url: &str, context: &str) -> Result<T, SourceError> {
    let response = ureq::get(url).call().map_err(|err| match err {
        ureq::Error::Status(status, _) => SourceError::Status { url: url.to_string(), status },
        other => SourceError::Http { url: url.to_string(), source: Box::new(other) },
    })?;
    // `into_string()` caps the body at 10 MB; semester exports routinely
    // exceed that, so stream the reader to the end instead.
    let mut body = String::new();
    response.into_reader().read_to_string(&mut body).map_err(|source| SourceError::Read {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| SourceError::Json {
        context: context.to_string(),
        source,
    })
}
