// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cross-semester catalog merging.
//!
//! Folding is first-writer-wins for descriptive fields: the caller picks
//! the semester iteration order, and whichever semester writes a course
//! first is authoritative for everything except the accumulated offering
//! and no-credit sets, which always union.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::model::{Catalog, CourseId, CourseRecord};

/// Folds one semester's course map into the accumulator.
///
/// Every course of `term_map` ends up represented: new ids are inserted
/// unchanged (each record already carries its singleton offering set),
/// existing ids keep their stored descriptive fields and only grow their
/// offering-label and no-credit sets.
pub fn merge_term(catalog: &mut Catalog, term_map: BTreeMap<CourseId, CourseRecord>) {
    for (id, incoming) in term_map {
        match catalog.courses_mut().entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                existing.semesters.extend(incoming.semesters);
                existing.no_credit_courses.extend(incoming.no_credit_courses);
            }
        }
    }
}

/// The explicit reduction over an ordered sequence of semester maps.
pub fn fold_terms<I>(terms: I) -> Catalog
where
    I: IntoIterator<Item = BTreeMap<CourseId, CourseRecord>>,
{
    let mut catalog = Catalog::new();
    for term_map in terms {
        merge_term(&mut catalog, term_map);
    }
    catalog
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::{fold_terms, merge_term};
    use crate::model::{Catalog, CourseId, CourseRecord, TermKind};

    fn id(raw: &str) -> CourseId {
        CourseId::new(raw).expect("course id")
    }

    fn record(name: &str, term: TermKind, no_credit: &[&str]) -> CourseRecord {
        let mut record = CourseRecord::named(name);
        record.semesters = BTreeSet::from([term]);
        record.no_credit_courses = no_credit.iter().map(|raw| id(raw)).collect();
        record
    }

    fn term_map(entries: Vec<(&str, CourseRecord)>) -> BTreeMap<CourseId, CourseRecord> {
        entries.into_iter().map(|(raw, rec)| (id(raw), rec)).collect()
    }

    #[test]
    fn new_course_is_inserted_unchanged() {
        let mut catalog = Catalog::new();
        merge_term(
            &mut catalog,
            term_map(vec![("01040031", record("חדו\"א 1", TermKind::Winter, &["01040041"]))]),
        );

        let stored = catalog.get(&id("01040031")).expect("record");
        assert_eq!(stored.name, "חדו\"א 1");
        assert_eq!(stored.semesters, BTreeSet::from([TermKind::Winter]));
        assert_eq!(stored.no_credit_courses, BTreeSet::from([id("01040041")]));
    }

    #[test]
    fn descriptive_fields_keep_the_first_writer() {
        let mut first = record("שם עדכני", TermKind::Winter, &[]);
        first.credits = Some(4.0);
        let mut second = record("שם ישן", TermKind::Spring, &[]);
        second.credits = Some(3.0);

        let catalog = fold_terms(vec![
            term_map(vec![("01040031", first)]),
            term_map(vec![("01040031", second)]),
        ]);

        let stored = catalog.get(&id("01040031")).expect("record");
        assert_eq!(stored.name, "שם עדכני");
        assert_eq!(stored.credits, Some(4.0));
        assert_eq!(stored.semesters, BTreeSet::from([TermKind::Winter, TermKind::Spring]));
    }

    #[test]
    fn accumulated_sets_union_commutatively() {
        let winter = || term_map(vec![("01040031", record("א", TermKind::Winter, &["01040041"]))]);
        let spring = || term_map(vec![("01040031", record("ב", TermKind::Spring, &["01140052"]))]);

        let winter_first = fold_terms(vec![winter(), spring()]);
        let spring_first = fold_terms(vec![spring(), winter()]);

        let a = winter_first.get(&id("01040031")).expect("record");
        let b = spring_first.get(&id("01040031")).expect("record");
        // Descriptive fields differ by arrival order; the sets do not.
        assert_ne!(a.name, b.name);
        assert_eq!(a.semesters, b.semesters);
        assert_eq!(a.no_credit_courses, b.no_credit_courses);
        assert_eq!(a.no_credit_courses, BTreeSet::from([id("01040041"), id("01140052")]));
    }

    #[test]
    fn merging_a_course_with_itself_is_idempotent() {
        let make = || term_map(vec![("01040031", record("א", TermKind::Winter, &["01040041"]))]);

        let once = fold_terms(vec![make()]);
        let twice = fold_terms(vec![make(), make()]);
        assert_eq!(once, twice);
    }

    #[test]
    fn courses_from_disjoint_semesters_coexist() {
        let catalog = fold_terms(vec![
            term_map(vec![("01040031", record("א", TermKind::Winter, &[]))]),
            term_map(vec![("02340114", record("ב", TermKind::Spring, &[]))]),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(&id("01040031")).expect("record").semesters,
            BTreeSet::from([TermKind::Winter])
        );
        assert_eq!(
            catalog.get(&id("02340114")).expect("record").semesters,
            BTreeSet::from([TermKind::Spring])
        );
    }
}
