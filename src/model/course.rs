// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::expr::PrereqExpr;
use super::ids::CourseId;
use super::term::TermKind;

/// One canonical catalog entry, in the published `merged_courses.json` shape.
///
/// Descriptive fields are copied from whichever semester wrote the record
/// first; `semesters` and `no_credit_courses` accumulate across semesters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllabus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_program: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lecturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_b: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<f64>,
    #[serde(default, rename = "prereqTree")]
    pub prereq_tree: Option<PrereqExpr>,
    #[serde(
        default,
        rename = "no_credit_courses",
        with = "no_credit_string",
        skip_serializing_if = "BTreeSet::is_empty"
    )]
    pub no_credit_courses: BTreeSet<CourseId>,
    #[serde(default)]
    pub semesters: BTreeSet<TermKind>,
    #[serde(
        default,
        rename = "isClassificationCourse",
        skip_serializing_if = "is_false"
    )]
    pub is_classification_course: bool,
}

impl CourseRecord {
    /// A record with just a name; everything else is filled in by callers.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            syllabus: None,
            faculty: None,
            study_program: None,
            lecturer: None,
            notes: None,
            exam_a: None,
            exam_b: None,
            quiz_a: None,
            credits: None,
            prereq_tree: None,
            no_credit_courses: BTreeSet::new(),
            semesters: BTreeSet::new(),
            is_classification_course: false,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Splits a raw no-credit field into validated course ids.
///
/// The SAP export is inconsistent here: ids are separated by commas,
/// whitespace, or both, and stray fragments appear. Anything that is not a
/// valid 8-digit id is dropped.
pub fn parse_no_credit_list(raw: &str) -> BTreeSet<CourseId> {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let separators =
        SEPARATORS.get_or_init(|| Regex::new(r"[,\s]+").expect("no-credit separator regex"));

    separators
        .split(raw)
        .filter_map(|fragment| CourseId::new(fragment).ok())
        .collect()
}

/// Space-joined string form of the no-credit set, as persisted.
pub(crate) mod no_credit_string {
    use std::collections::BTreeSet;

    use serde::{Deserialize, Deserializer, Serializer};

    use crate::model::ids::CourseId;

    pub fn serialize<S: Serializer>(
        set: &BTreeSet<CourseId>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let joined =
            set.iter().map(CourseId::as_str).collect::<Vec<_>>().join(" ");
        serializer.serialize_str(&joined)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeSet<CourseId>, D::Error> {
        // Tolerates null and the empty string on top of the joined form.
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(super::parse_no_credit_list).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{parse_no_credit_list, CourseRecord};
    use crate::model::expr::PrereqExpr;
    use crate::model::ids::CourseId;
    use crate::model::term::TermKind;

    fn id(raw: &str) -> CourseId {
        CourseId::new(raw).expect("course id")
    }

    #[test]
    fn no_credit_list_tolerates_mixed_separators() {
        let set = parse_no_credit_list("01040031, 01040041  01140052,01040032");
        let ids: Vec<&str> = set.iter().map(CourseId::as_str).collect();
        assert_eq!(ids, ["01040031", "01040032", "01040041", "01140052"]);
    }

    #[test]
    fn no_credit_list_drops_invalid_fragments() {
        let set = parse_no_credit_list("ראה 01040031 הערה 123 01040041");
        let ids: Vec<&str> = set.iter().map(CourseId::as_str).collect();
        assert_eq!(ids, ["01040031", "01040041"]);
    }

    #[test]
    fn no_credit_list_of_empty_string_is_empty() {
        assert!(parse_no_credit_list("").is_empty());
        assert!(parse_no_credit_list("   ").is_empty());
    }

    #[test]
    fn record_serializes_to_catalog_shape() {
        let mut record = CourseRecord::named("חשבון אינפיניטסימלי 1");
        record.credits = Some(5.5);
        record.prereq_tree = Some(PrereqExpr::Course(id("01040030")));
        record.no_credit_courses = BTreeSet::from([id("01040041"), id("01040031")]);
        record.semesters = BTreeSet::from([TermKind::Spring, TermKind::Winter]);

        let json = serde_json::to_value(&record).expect("json");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "חשבון אינפיניטסימלי 1",
                "credits": 5.5,
                "prereqTree": "01040030",
                "no_credit_courses": "01040031 01040041",
                "semesters": ["חורף", "אביב"],
            })
        );
    }

    #[test]
    fn record_deserializes_null_and_missing_no_credit() {
        let record: CourseRecord = serde_json::from_value(serde_json::json!({
            "name": "מקצוע",
            "prereqTree": null,
            "no_credit_courses": null,
            "semesters": [],
        }))
        .expect("record json");
        assert!(record.no_credit_courses.is_empty());
        assert!(record.prereq_tree.is_none());

        let record: CourseRecord =
            serde_json::from_value(serde_json::json!({ "name": "מקצוע" })).expect("record json");
        assert!(record.no_credit_courses.is_empty());
        assert!(record.semesters.is_empty());
        assert!(!record.is_classification_course);
    }

    #[test]
    fn record_round_trips() {
        let mut record = CourseRecord::named("פיזיקה 2");
        record.faculty = Some("פיזיקה".to_owned());
        record.credits = Some(3.5);
        record.no_credit_courses = BTreeSet::from([id("01140052")]);
        record.semesters = BTreeSet::from([TermKind::Summer]);

        let json = serde_json::to_string(&record).expect("json");
        let back: CourseRecord = serde_json::from_str(&json).expect("record json");
        assert_eq!(back, record);
    }
}
