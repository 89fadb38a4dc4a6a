// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Source-format decoding.
//!
//! Covers the two foreign shapes the pipeline consumes: Hebrew
//! prerequisite prose and the SAP course-export JSON records.

pub mod prereq;
pub mod sap;

pub use prereq::{parse, tokenize, PrereqParseError, Token};
pub use sap::{build_course_map, RawCourse};
