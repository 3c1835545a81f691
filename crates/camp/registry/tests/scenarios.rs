//! End-to-end scenarios driving the registry the way the demo does.

use camp_registry::{
    CampManagementSystem, EquipmentStatus, EquipmentView, Officer, Person, Personnel, Principal,
    Rank, Recruit, TrainingProgram,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn emma() -> Person {
    Officer::new("O001", "Emma Smith", "Colonel", "Alpha", "Infantry")
        .unwrap()
        .into()
}

fn recruit(id: &str, name: &str) -> Person {
    Recruit::new(id, name, "Alpha Battalion").unwrap().into()
}

fn camp() -> CampManagementSystem {
    CampManagementSystem::new("Alpha Training Camp", "Fort Benning")
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn equipment_views_differ_by_role() {
    let officer = emma().principal();
    let recruit = recruit("R001", "John Davis").principal();
    let mut camp = camp();
    let inventory = camp.get_equipment_inventory();

    assert!(inventory
        .add_equipment("E001", "M4 Rifle", "Weapon", Some(&officer))
        .unwrap());
    inventory
        .assign_equipment("E001", &recruit.id, Some(&officer))
        .unwrap();

    let officer_view =
        serde_json::to_value(inventory.get_equipment_details("E001", Some(&officer)).unwrap())
            .unwrap();
    let recruit_view =
        serde_json::to_value(inventory.get_equipment_details("E001", Some(&recruit)).unwrap())
            .unwrap();

    assert!(officer_view.get("serial").is_some());
    assert_eq!(officer_view["assigned_to"], "R001");
    assert_eq!(officer_view["status"], "Assigned");
    assert!(recruit_view.get("serial").is_none());
    assert!(recruit_view.get("maintenance").is_none());
    assert_eq!(recruit_view["status"], "Assigned");
}

#[test]
fn recruit_rank_cannot_be_promoted() {
    let mut r = recruit("R001", "John Davis");
    assert_eq!(r.rank(), Rank::Private);
    let err = r.set_rank("General").unwrap_err();
    assert!(err.is_invalid_data());
    assert_eq!(r.rank(), Rank::Private);
}

#[test]
fn duplicate_personnel_is_skipped() {
    let officer = emma();
    let me = officer.principal();
    let mut camp = camp();

    assert!(camp.add_personnel(recruit("R001", "John Davis"), Some(&me)).unwrap());
    assert!(!camp.add_personnel(recruit("R001", "Someone Else"), Some(&me)).unwrap());
    assert_eq!(camp.personnel().len(), 1);
    assert_eq!(camp.personnel()[0].name(), "John Davis");
}

#[test]
fn training_scores_visible_to_self_and_officers_only() {
    let officer = emma().principal();
    let mut r = Recruit::new("R001", "John Davis", "Alpha Battalion").unwrap();
    let me = r.principal();
    let other = recruit("R002", "Sam Lee").principal();

    r.update_training_score("marksmanship", 85, Some(&officer)).unwrap();

    let scores = r.get_training_scores(Some(&me)).unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores["marksmanship"], 85);
    assert!(r.get_training_scores(Some(&other)).unwrap_err().is_access_denied());
}

// ---------------------------------------------------------------------------
// Registry boundaries
// ---------------------------------------------------------------------------

#[test]
fn roster_lookups_and_gates() {
    let commander = emma();
    let me = commander.principal();
    let john = recruit("R001", "John Davis");
    let john_as_caller = john.principal();
    let mut camp = camp();

    assert!(camp.add_personnel(commander, Some(&me)).unwrap());
    assert!(camp
        .add_personnel(recruit("R002", "Sam Lee"), Some(&john_as_caller))
        .unwrap_err()
        .is_access_denied());
    assert!(camp.add_personnel(john, Some(&me)).unwrap());

    let found = camp.find_personnel_by_id("O001", Some(&john_as_caller)).unwrap();
    assert_eq!(found.map(|p| p.name()), Some("Emma Smith"));
    assert!(camp.find_personnel_by_id("NONEXISTENT", Some(&me)).unwrap().is_none());
    assert!(camp.find_personnel_by_id("O001", None).unwrap_err().is_access_denied());

    assert_eq!(camp.get_personnel_by_unit("Alpha Battalion", Some(&me)).unwrap().len(), 1);
    assert_eq!(camp.get_personnel_by_unit("Alpha", Some(&me)).unwrap().len(), 1);
    assert!(camp.get_personnel_by_unit("Nowhere", Some(&me)).unwrap().is_empty());
    assert!(camp
        .get_personnel_by_unit("Alpha", Some(&john_as_caller))
        .unwrap_err()
        .is_access_denied());
}

#[test]
fn training_programs_unique_by_code() {
    let me = emma().principal();
    let r = recruit("R001", "John Davis").principal();
    let mut camp = camp();

    let mut bct = TrainingProgram::new("TP001", "Basic Combat Training", "8 weeks");
    bct.add_requirement("Physical fitness test", Some(&me)).unwrap();

    assert!(camp
        .add_training_program(bct.clone(), Some(&r))
        .unwrap_err()
        .is_access_denied());
    assert!(camp.add_training_program(bct, Some(&me)).unwrap());
    assert!(!camp
        .add_training_program(TrainingProgram::new("TP001", "Other", "1 week"), Some(&me))
        .unwrap());
    assert_eq!(camp.training_programs().len(), 1);

    let mut program = camp.find_training_program_mut("TP001").unwrap();
    program.add_performance_metric("run_time", 15.0, Some(&me)).unwrap();
    assert!(program.get_performance_metrics(Some(&r)).unwrap_err().is_access_denied());

    let program = camp.find_training_program("TP001").unwrap();
    assert_eq!(program.name(), "Basic Combat Training");
    assert_eq!(program.requirements(), vec!["Physical fitness test".to_string()]);
    assert!(program
        .get_performance_metrics(Some(&me))
        .unwrap()
        .contains_key("run_time"));
}

#[test]
fn inventory_missing_ids_are_invalid_data() {
    let me = emma().principal();
    let r = recruit("R001", "John Davis").principal();
    let mut camp = camp();
    let inventory = camp.get_equipment_inventory();

    assert!(inventory
        .assign_equipment("E404", &r.id, Some(&me))
        .unwrap_err()
        .is_invalid_data());
    assert!(inventory
        .log_maintenance("E404", "Cleaned", Some(&me))
        .unwrap_err()
        .is_invalid_data());
    assert!(inventory
        .get_equipment_details("E404", Some(&me))
        .unwrap_err()
        .is_invalid_data());
    assert!(inventory
        .get_equipment_details("E404", None)
        .unwrap_err()
        .is_access_denied());
}

#[test]
fn maintenance_history_only_in_full_view() {
    let me = emma().principal();
    let r = recruit("R001", "John Davis").principal();
    let mut camp = camp();
    let inventory = camp.get_equipment_inventory();
    inventory.add_equipment("E001", "M4 Rifle", "Weapon", Some(&me)).unwrap();
    inventory.log_maintenance("E001", "Barrel replaced", Some(&me)).unwrap();

    match camp.equipment_inventory().get_equipment_details("E001", Some(&me)).unwrap() {
        EquipmentView::Full(record) => {
            assert_eq!(record.maintenance.len(), 1);
            assert_eq!(record.maintenance[0].note, "Barrel replaced");
            assert_eq!(record.status, EquipmentStatus::Available);
        }
        EquipmentView::Limited(_) => panic!("officer got a limited view"),
    }
    let limited = camp.equipment_inventory().get_equipment_details("E001", Some(&r)).unwrap();
    assert!(!limited.is_full());
    assert!(limited.maintenance().is_none());
}

#[test]
fn clearance_and_performance_records_through_roster() {
    let commander = emma();
    let me = commander.principal();
    let mut camp = camp();
    camp.add_personnel(commander, Some(&me)).unwrap();
    camp.add_personnel(recruit("R001", "John Davis"), Some(&me)).unwrap();
    let john = camp.find_personnel_by_id("R001", Some(&me)).unwrap().unwrap().principal();
    let stranger: Principal = recruit("R002", "Sam Lee").principal();

    let mut person = camp.find_personnel_by_id_mut("R001", Some(&me)).unwrap().unwrap();
    assert!(person.update_security_clearance(2, Some(&john)).unwrap_err().is_access_denied());
    person.update_security_clearance(2, Some(&me)).unwrap();
    person.add_performance_record("Excellent marksmanship", Some(&me)).unwrap();

    let person = camp.find_personnel_by_id("R001", Some(&john)).unwrap().unwrap();
    assert_eq!(person.security_clearance(), 2);
    assert_eq!(person.get_performance_records(Some(&john)).unwrap().len(), 1);
    assert!(person
        .get_performance_history(Some(&stranger))
        .unwrap_err()
        .is_access_denied());
}

#[test]
fn command_code_never_disclosed() {
    let commander = emma();
    let officer = commander.as_officer().unwrap();
    assert_eq!(officer.command_code(), "RESTRICTED ACCESS");
    let json = serde_json::to_string(&commander).unwrap();
    assert!(!json.contains("CMD-"));
}

#[test]
fn roster_entry_cannot_lift_recruit_rank_or_identity() {
    let commander = emma();
    let me = commander.principal();
    let mut camp = camp();
    camp.add_personnel(commander, Some(&me)).unwrap();
    camp.add_personnel(recruit("R001", "John Davis"), Some(&me)).unwrap();
    let john = camp.find_personnel_by_id("R001", Some(&me)).unwrap().unwrap().principal();

    let mut entry = camp.find_personnel_by_id_mut("R001", Some(&john)).unwrap().unwrap();
    assert!(entry.set_rank("Colonel").unwrap_err().is_invalid_data());
    assert!(entry.update_security_clearance(5, Some(&john)).unwrap_err().is_access_denied());
    assert_eq!(entry.rank(), Rank::Private);

    let roster = camp.personnel();
    let ids: Vec<&str> = roster.iter().map(|p| p.id().as_str()).collect();
    assert_eq!(ids, vec!["O001", "R001"]);
    let stored = camp.find_personnel_by_id("R001", Some(&me)).unwrap().unwrap();
    assert_eq!(stored.rank(), Rank::Private);
    assert_eq!(stored.security_clearance(), 1);
}
