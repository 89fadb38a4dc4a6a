// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Hand-maintained catalog corrections.
//!
//! The SAP export omits the physics classification exams entirely and
//! under-reports a few no-credit pairs; both are patched in after the
//! cross-semester merge.

use crate::model::{Catalog, CourseId, CourseRecord};

/// Classification exams referenced by prerequisite trees but absent from
/// every semester export. Zero credits, offered outside the semester grid.
const CLASSIFICATION_COURSES: [(&str, &str); 2] = [
    ("01130013", "סיווג פיזיקה מכניקה"),
    ("01130014", "סיווג פיזיקה חשמל"),
];

/// No-credit pairs the export lists in one direction only.
const NO_CREDIT_ADDITIONS: [(&str, &str); 2] = [
    ("01040031", "01040041"),
    ("02340114", "02340124"),
];

/// Applies all corrections to a merged catalog.
pub fn apply(catalog: &mut Catalog) {
    for (raw_id, name) in CLASSIFICATION_COURSES {
        let id = course_id(raw_id);
        let mut record = CourseRecord::named(name);
        record.credits = Some(0.0);
        record.is_classification_course = true;
        catalog.courses_mut().insert(id, record);
    }

    for (left, right) in NO_CREDIT_ADDITIONS {
        add_no_credit(catalog, course_id(left), course_id(right));
        add_no_credit(catalog, course_id(right), course_id(left));
    }
}

// Only touches courses that exist; a pair member missing from the current
// catalog is skipped rather than invented.
fn add_no_credit(catalog: &mut Catalog, course: CourseId, other: CourseId) {
    if course == other {
        return;
    }
    if let Some(record) = catalog.courses_mut().get_mut(&course) {
        record.no_credit_courses.insert(other);
    }
}

fn course_id(raw: &str) -> CourseId {
    // The tables above only hold valid 8-digit ids.
    CourseId::new(raw).expect("valid override course id")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::apply;
    use crate::model::{Catalog, CourseId, CourseRecord};

    fn id(raw: &str) -> CourseId {
        CourseId::new(raw).expect("course id")
    }

    #[test]
    fn classification_courses_are_always_present() {
        let mut catalog = Catalog::new();
        apply(&mut catalog);

        let mechanics = catalog.get(&id("01130013")).expect("mechanics classification");
        assert_eq!(mechanics.name, "סיווג פיזיקה מכניקה");
        assert_eq!(mechanics.credits, Some(0.0));
        assert!(mechanics.is_classification_course);
        assert!(mechanics.semesters.is_empty());

        let electricity = catalog.get(&id("01130014")).expect("electricity classification");
        assert!(electricity.is_classification_course);
    }

    #[test]
    fn classification_courses_replace_export_records() {
        let mut catalog = Catalog::new();
        catalog
            .courses_mut()
            .insert(id("01130013"), CourseRecord::named("שם שגוי מהיצוא"));

        apply(&mut catalog);
        assert_eq!(catalog.get(&id("01130013")).expect("record").name, "סיווג פיזיקה מכניקה");
    }

    #[test]
    fn no_credit_additions_are_symmetric_for_present_courses() {
        let mut catalog = Catalog::new();
        catalog.courses_mut().insert(id("01040031"), CourseRecord::named("חדו\"א 1"));
        catalog.courses_mut().insert(id("01040041"), CourseRecord::named("חדו\"א 1ת"));

        apply(&mut catalog);

        assert!(catalog
            .get(&id("01040031"))
            .expect("record")
            .no_credit_courses
            .contains(&id("01040041")));
        assert!(catalog
            .get(&id("01040041"))
            .expect("record")
            .no_credit_courses
            .contains(&id("01040031")));
    }

    #[test]
    fn missing_pair_members_are_not_invented() {
        let mut catalog = Catalog::new();
        catalog.courses_mut().insert(id("02340114"), CourseRecord::named("מבוא למדמ\"ח"));

        apply(&mut catalog);

        assert_eq!(
            catalog.get(&id("02340114")).expect("record").no_credit_courses,
            BTreeSet::from([id("02340124")])
        );
        assert!(catalog.get(&id("02340124")).is_none());
    }
}
