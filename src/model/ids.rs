// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

/// An 8-digit course identifier, the primary key across all semesters.
///
/// Backed by `SmolStr` so ids stay inline. Validation guarantees exactly
/// eight ASCII digits, which is what the SAP export uses everywhere; leaf
/// nodes of prerequisite trees and no-credit sets only ever hold values
/// that passed this check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(SmolStr);

impl CourseId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, CourseIdError> {
        let value = value.as_ref();
        validate_course_id(value)?;
        Ok(Self(SmolStr::new(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for CourseId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for CourseId {
    type Err = CourseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CourseId {
    type Error = CourseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for CourseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CourseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseIdError {
    WrongLength { len: usize },
    NonDigit { ch: char },
}

impl fmt::Display for CourseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { len } => {
                write!(f, "course id must be exactly 8 digits (got {len} characters)")
            }
            Self::NonDigit { ch } => {
                write!(f, "course id must contain only ASCII digits (got {ch:?})")
            }
        }
    }
}

impl std::error::Error for CourseIdError {}

fn validate_course_id(value: &str) -> Result<(), CourseIdError> {
    let len = value.chars().count();
    if len != 8 {
        return Err(CourseIdError::WrongLength { len });
    }
    if let Some(ch) = value.chars().find(|ch| !ch.is_ascii_digit()) {
        return Err(CourseIdError::NonDigit { ch });
    }
    Ok(())
}
