// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! SAP course-export field extraction.
//!
//! The per-semester export is an array of records whose `general` object
//! carries Hebrew field names. This module maps those onto
//! [`CourseRecord`]s, invoking the prerequisite parser once per course.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::prereq;
use crate::model::course::parse_no_credit_list;
use crate::model::{CourseId, CourseRecord, TermKind};

const FIELD_ID: &str = "מספר מקצוע";
const FIELD_NAME: &str = "שם מקצוע";
const FIELD_PREREQS: &str = "מקצועות קדם";
const FIELD_SYLLABUS: &str = "סילבוס";
const FIELD_FACULTY: &str = "פקולטה";
const FIELD_STUDY_PROGRAM: &str = "מסגרת לימודים";
const FIELD_CREDITS: &str = "נקודות";
const FIELD_LECTURER: &str = "אחראים";
const FIELD_NOTES: &str = "הערות";
const FIELD_EXAM_A: &str = "מועד א";
const FIELD_EXAM_B: &str = "מועד ב";
const FIELD_QUIZ_A: &str = "בוחן מועד א";

/// The no-credit relation is split across three export fields (plain,
/// "contained", "containing"); the catalog keeps their union.
const NO_CREDIT_FIELDS: [&str; 3] = [
    "מקצועות ללא זיכוי נוסף",
    "מקצועות ללא זיכוי נוסף (מוכלים)",
    "מקצועות ללא זיכוי נוסף (מכילים)",
];

/// One raw course entry as published by the SAP export.
///
/// Only `general` is consumed here; everything else (schedule groups,
/// exam rooms) is preserved so persisted raw files stay faithful.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCourse {
    #[serde(default)]
    pub general: BTreeMap<String, Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RawCourse {
    fn string_field(&self, name: &str) -> Option<String> {
        match self.general.get(name)? {
            Value::String(raw) if !raw.trim().is_empty() => Some(raw.clone()),
            Value::Number(raw) => Some(raw.to_string()),
            _ => None,
        }
    }

    // Credits arrive as a number or a numeric string, depending on the
    // export revision.
    fn credits_field(&self) -> Option<f64> {
        match self.general.get(FIELD_CREDITS)? {
            Value::Number(raw) => raw.as_f64(),
            Value::String(raw) => raw.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Builds one semester's course map, keyed by course id.
///
/// Records without a valid id or without a name are skipped; when the
/// export lists an id twice the first record wins. Every produced record
/// carries the semester's label as its singleton offering set.
pub fn build_course_map(
    courses: &[RawCourse],
    term: TermKind,
) -> BTreeMap<CourseId, CourseRecord> {
    let mut map = BTreeMap::new();
    for raw in courses {
        let Some(id) = raw.string_field(FIELD_ID).and_then(|raw_id| CourseId::new(raw_id.trim()).ok())
        else {
            continue;
        };
        let Some(name) = raw.string_field(FIELD_NAME) else {
            continue;
        };
        if map.contains_key(&id) {
            continue;
        }
        let record = course_record(raw, &id, name, term);
        map.insert(id, record);
    }
    map
}

fn course_record(raw: &RawCourse, id: &CourseId, name: String, term: TermKind) -> CourseRecord {
    let prereq_tree = raw.string_field(FIELD_PREREQS).and_then(|text| match prereq::parse(&text) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("coursegraph: dropping prerequisites of {id}: {err} (text: {text:?})");
            None
        }
    });

    let mut no_credit = BTreeSet::new();
    for field in NO_CREDIT_FIELDS {
        if let Some(raw_list) = raw.string_field(field) {
            no_credit.extend(parse_no_credit_list(&raw_list));
        }
    }
    // A course is trivially credit-exclusive with itself; the export
    // sometimes lists it anyway.
    no_credit.remove(id);

    let mut record = CourseRecord::named(name);
    record.syllabus = raw.string_field(FIELD_SYLLABUS);
    record.faculty = raw.string_field(FIELD_FACULTY);
    record.study_program = raw.string_field(FIELD_STUDY_PROGRAM);
    record.lecturer = raw.string_field(FIELD_LECTURER);
    record.notes = raw.string_field(FIELD_NOTES);
    record.exam_a = raw.string_field(FIELD_EXAM_A);
    record.exam_b = raw.string_field(FIELD_EXAM_B);
    record.quiz_a = raw.string_field(FIELD_QUIZ_A);
    record.credits = raw.credits_field();
    record.prereq_tree = prereq_tree;
    record.no_credit_courses = no_credit;
    record.semesters = BTreeSet::from([term]);
    record
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{build_course_map, RawCourse};
    use crate::model::{CourseId, PrereqExpr, TermKind};

    fn raw_course(general: serde_json::Value) -> RawCourse {
        serde_json::from_value(serde_json::json!({ "general": general })).expect("raw course")
    }

    fn id(raw: &str) -> CourseId {
        CourseId::new(raw).expect("course id")
    }

    #[test]
    fn maps_general_fields_onto_the_record() {
        let raw = raw_course(serde_json::json!({
            "מספר מקצוע": "01040031",
            "שם מקצוע": "חשבון אינפיניטסימלי 1מ",
            "פקולטה": "מתמטיקה",
            "מסגרת לימודים": "תואר ראשון",
            "נקודות": "5.5",
            "אחראים": "פרופ' לוי",
            "מועד א": "2025-02-03",
            "מקצועות קדם": "01040030 או 01040010",
        }));

        let map = build_course_map(&[raw], TermKind::Winter);
        let record = map.get(&id("01040031")).expect("mapped record");

        assert_eq!(record.name, "חשבון אינפיניטסימלי 1מ");
        assert_eq!(record.faculty.as_deref(), Some("מתמטיקה"));
        assert_eq!(record.study_program.as_deref(), Some("תואר ראשון"));
        assert_eq!(record.credits, Some(5.5));
        assert_eq!(record.lecturer.as_deref(), Some("פרופ' לוי"));
        assert_eq!(record.exam_a.as_deref(), Some("2025-02-03"));
        assert_eq!(
            record.prereq_tree,
            Some(PrereqExpr::Or {
                or: vec![PrereqExpr::Course(id("01040030")), PrereqExpr::Course(id("01040010"))],
            })
        );
        assert_eq!(record.semesters, BTreeSet::from([TermKind::Winter]));
    }

    #[test]
    fn credits_accept_number_or_numeric_string() {
        let numeric = raw_course(serde_json::json!({
            "מספר מקצוע": "01040031",
            "שם מקצוע": "א",
            "נקודות": 3.0,
        }));
        let stringy = raw_course(serde_json::json!({
            "מספר מקצוע": "01040041",
            "שם מקצוע": "ב",
            "נקודות": "3.5",
        }));

        let map = build_course_map(&[numeric, stringy], TermKind::Spring);
        assert_eq!(map.get(&id("01040031")).expect("record").credits, Some(3.0));
        assert_eq!(map.get(&id("01040041")).expect("record").credits, Some(3.5));
    }

    #[test]
    fn no_credit_fields_are_unioned_and_self_reference_filtered() {
        let raw = raw_course(serde_json::json!({
            "מספר מקצוע": "01040031",
            "שם מקצוע": "חדו\"א 1",
            "מקצועות ללא זיכוי נוסף": "01040041 01040031",
            "מקצועות ללא זיכוי נוסף (מוכלים)": "01040030",
            "מקצועות ללא זיכוי נוסף (מכילים)": "01040042, 01040041",
        }));

        let map = build_course_map(&[raw], TermKind::Winter);
        let record = map.get(&id("01040031")).expect("record");
        assert_eq!(
            record.no_credit_courses,
            BTreeSet::from([id("01040030"), id("01040041"), id("01040042")])
        );
    }

    #[test]
    fn records_without_id_or_name_are_skipped() {
        let missing_id = raw_course(serde_json::json!({ "שם מקצוע": "ללא מספר" }));
        let bad_id = raw_course(serde_json::json!({
            "מספר מקצוע": "10403",
            "שם מקצוע": "מספר קצר",
        }));
        let missing_name = raw_course(serde_json::json!({ "מספר מקצוע": "01040031" }));

        let map = build_course_map(&[missing_id, bad_id, missing_name], TermKind::Winter);
        assert!(map.is_empty());
    }

    #[test]
    fn duplicate_id_within_a_semester_keeps_the_first_record() {
        let first = raw_course(serde_json::json!({
            "מספר מקצוע": "01040031",
            "שם מקצוע": "ראשון",
        }));
        let second = raw_course(serde_json::json!({
            "מספר מקצוע": "01040031",
            "שם מקצוע": "שני",
        }));

        let map = build_course_map(&[first, second], TermKind::Winter);
        assert_eq!(map.get(&id("01040031")).expect("record").name, "ראשון");
    }

    #[test]
    fn unparseable_prerequisites_degrade_to_none() {
        let text = format!("{}01040030", "(".repeat(80));
        let raw = raw_course(serde_json::json!({
            "מספר מקצוע": "01040031",
            "שם מקצוע": "עומק",
            "מקצועות קדם": text,
        }));

        let map = build_course_map(&[raw], TermKind::Winter);
        assert_eq!(map.get(&id("01040031")).expect("record").prereq_tree, None);
    }

    #[test]
    fn unknown_top_level_fields_survive_round_trips() {
        let raw: RawCourse = serde_json::from_value(serde_json::json!({
            "general": { "מספר מקצוע": "01040031", "שם מקצוע": "א" },
            "schedule": [{ "group": 11 }],
        }))
        .expect("raw course");

        let json = serde_json::to_value(&raw).expect("json");
        assert_eq!(json["schedule"][0]["group"], 11);
    }
}
