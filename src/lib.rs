// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Coursegraph — Technion course catalog builder.
//!
//! Fetches per-semester SAP course exports, parses the Hebrew free-text
//! prerequisite strings into AND/OR trees, and merges semesters into one
//! canonical catalog entry per course.

pub mod builder;
pub mod format;
pub mod merge;
pub mod model;
pub mod overrides;
pub mod source;
pub mod store;
