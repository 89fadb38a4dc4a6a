// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core catalog data model.
//!
//! A catalog maps 8-digit course ids to merged course records; prerequisite
//! trees are boolean AND/OR expressions over those same ids.

pub mod catalog;
pub mod course;
pub mod expr;
pub mod ids;
pub mod term;

pub use catalog::Catalog;
pub use course::CourseRecord;
pub use expr::PrereqExpr;
pub use ids::{CourseId, CourseIdError};
pub use term::{SemesterId, TermKind};
