use std::fmt;

use camp_types::{CampResult, Role};
use serde::Serialize;

use crate::officer::Officer;
use crate::record::{sealed, Personnel, ServiceRecord};
use crate::recruit::Recruit;

/// Any member of the camp, tagged by role.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "role")]
pub enum Person {
    Officer(Officer),
    Recruit(Recruit),
}

impl Person {
    /// The officer, if this person is one.
    pub fn as_officer(&self) -> Option<&Officer> {
        match self {
            Person::Officer(o) => Some(o),
            Person::Recruit(_) => None,
        }
    }

    pub fn as_officer_mut(&mut self) -> Option<&mut Officer> {
        match self {
            Person::Officer(o) => Some(o),
            Person::Recruit(_) => None,
        }
    }

    /// The recruit, if this person is one.
    pub fn as_recruit(&self) -> Option<&Recruit> {
        match self {
            Person::Recruit(r) => Some(r),
            Person::Officer(_) => None,
        }
    }

    pub fn as_recruit_mut(&mut self) -> Option<&mut Recruit> {
        match self {
            Person::Recruit(r) => Some(r),
            Person::Officer(_) => None,
        }
    }

    /// Officer specialization; recruits have none.
    pub fn specialization(&self) -> Option<&str> {
        self.as_officer().map(Officer::specialization)
    }
}

impl Personnel for Person {
    fn record(&self) -> &ServiceRecord {
        match self {
            Person::Officer(o) => o.record(),
            Person::Recruit(r) => r.record(),
        }
    }

    fn record_mut(&mut self, token: sealed::Token) -> &mut ServiceRecord {
        match self {
            Person::Officer(o) => o.record_mut(token),
            Person::Recruit(r) => r.record_mut(token),
        }
    }

    fn role(&self) -> Role {
        match self {
            Person::Officer(_) => Role::Officer,
            Person::Recruit(_) => Role::Recruit,
        }
    }

    // Dispatch so the recruit's rank pin still applies.
    fn set_rank(&mut self, value: &str) -> CampResult<()> {
        match self {
            Person::Officer(o) => o.set_rank(value),
            Person::Recruit(r) => r.set_rank(value),
        }
    }

    fn display_info(&self) -> String {
        match self {
            Person::Officer(o) => o.display_info(),
            Person::Recruit(r) => r.display_info(),
        }
    }

    fn perform_duty(&self) -> String {
        match self {
            Person::Officer(o) => o.perform_duty(),
            Person::Recruit(r) => r.perform_duty(),
        }
    }
}

impl From<Officer> for Person {
    fn from(officer: Officer) -> Self {
        Person::Officer(officer)
    }
}

impl From<Recruit> for Person {
    fn from(recruit: Recruit) -> Self {
        Person::Recruit(recruit)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camp_types::Rank;
    use proptest::prelude::*;

    fn commander() -> Person {
        Officer::new("O001", "Emma Smith", "Colonel", "Alpha Battalion", "Infantry")
            .unwrap()
            .into()
    }

    fn recruit() -> Person {
        Recruit::new("R001", "John Davis", "Alpha Battalion").unwrap().into()
    }

    #[test]
    fn officer_rank_changes_within_ladder() {
        let mut p = commander();
        p.set_rank("General").unwrap();
        assert_eq!(p.rank(), Rank::General);

        let err = p.set_rank("Invalid Rank").unwrap_err();
        assert!(err.is_invalid_data());
        assert_eq!(p.rank(), Rank::General);
    }

    #[test]
    fn recruit_rank_pin_survives_dispatch() {
        let mut p = recruit();
        assert!(p.set_rank("General").unwrap_err().is_invalid_data());
        assert_eq!(p.rank(), Rank::Private);
    }

    #[test]
    fn unit_requires_three_characters() {
        let mut p = recruit();
        assert!(p.set_unit("AB").unwrap_err().is_invalid_data());
        assert_eq!(p.unit(), "Alpha Battalion");
        p.set_unit("Bravo").unwrap();
        assert_eq!(p.unit(), "Bravo");
    }

    #[test]
    fn clearance_requires_officer_then_range() {
        let officer = commander().principal();
        let mut p = recruit();
        let me = p.principal();

        assert!(p.update_security_clearance(2, Some(&me)).unwrap_err().is_access_denied());
        // Both violated: access wins.
        assert!(p.update_security_clearance(9, Some(&me)).unwrap_err().is_access_denied());
        assert!(p.update_security_clearance(9, Some(&officer)).unwrap_err().is_invalid_data());
        assert!(p.update_security_clearance(0, Some(&officer)).unwrap_err().is_invalid_data());
        assert_eq!(p.security_clearance(), 1);

        p.update_security_clearance(2, Some(&officer)).unwrap();
        assert_eq!(p.security_clearance(), 2);
    }

    #[test]
    fn performance_records_gated_and_copied() {
        let officer = commander().principal();
        let mut p = recruit();
        let me = p.principal();
        let stranger = Recruit::new("R002", "Sam Lee", "Bravo Company").unwrap().principal();

        assert!(p
            .add_performance_record("Excellent marksmanship", Some(&me))
            .unwrap_err()
            .is_access_denied());
        p.add_performance_record("Excellent marksmanship", Some(&officer)).unwrap();

        let mut records = p.get_performance_records(Some(&me)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].evaluator, "Colonel Emma Smith");
        records.clear();

        assert_eq!(p.get_performance_history(Some(&officer)).unwrap().len(), 1);
        assert!(p.get_performance_records(Some(&stranger)).unwrap_err().is_access_denied());
        assert!(p.get_performance_history(None).unwrap_err().is_access_denied());
    }

    #[test]
    fn principal_carries_role_and_label() {
        let p = commander().principal();
        assert_eq!(p.role, Role::Officer);
        assert_eq!(p.label, "Colonel Emma Smith");
        assert_eq!(recruit().principal().label, "Private John Davis");
    }

    #[test]
    fn principal_label_is_a_point_in_time_snapshot() {
        let mut p = commander();
        let before = p.principal();
        p.set_rank("General").unwrap();
        assert_eq!(before.label, "Colonel Emma Smith");
        assert_eq!(p.principal().label, "General Emma Smith");

        let mut r = recruit();
        r.add_performance_record("Steady under fire", Some(&p.principal())).unwrap();
        let records = r.get_performance_records(Some(&before)).unwrap();
        assert_eq!(records[0].evaluator, "General Emma Smith");
    }

    #[test]
    fn variant_accessors() {
        assert_eq!(commander().specialization(), Some("Infantry"));
        assert_eq!(recruit().specialization(), None);
        assert!(recruit().as_officer().is_none());
        assert!(commander().as_recruit().is_none());
        assert!(commander().to_string().contains("Specialization: Infantry"));
    }

    proptest! {
        #[test]
        fn every_ladder_rank_accepted_for_officers(idx in 0usize..8) {
            let mut p = commander();
            let rank = Rank::ALL[idx];
            prop_assert!(p.set_rank(rank.as_str()).is_ok());
            prop_assert_eq!(p.rank(), rank);
        }

        #[test]
        fn unit_accepted_iff_three_or_more_chars(unit in "[A-Za-z ]{0,8}") {
            let mut p = commander();
            let before = p.unit().to_string();
            let result = p.set_unit(&unit);
            prop_assert_eq!(result.is_ok(), unit.chars().count() >= 3);
            if result.is_err() {
                prop_assert_eq!(p.unit(), before.as_str());
            }
        }

        #[test]
        fn clearance_accepted_iff_in_range(level in -3i32..10) {
            let officer = commander().principal();
            let mut p = recruit();
            let result = p.update_security_clearance(level, Some(&officer));
            prop_assert_eq!(result.is_ok(), (1..=5).contains(&level));
        }
    }
}
