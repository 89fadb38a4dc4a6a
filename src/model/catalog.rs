// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::course::CourseRecord;
use super::ids::CourseId;

/// The accumulated catalog, exactly one record per course id.
///
/// Persisted as a JSON object keyed by id; the key order carries no
/// semantic meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    courses: BTreeMap<CourseId, CourseRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &BTreeMap<CourseId, CourseRecord> {
        &self.courses
    }

    pub fn courses_mut(&mut self) -> &mut BTreeMap<CourseId, CourseRecord> {
        &mut self.courses
    }

    pub fn get(&self, id: &CourseId) -> Option<&CourseRecord> {
        self.courses.get(id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
