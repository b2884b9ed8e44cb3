//! Black-box exercise of the roster through its public surface only, the
//! way an interactive caller (menu, script) would drive it.

use roster_core::{DomainError, EmployeeNumber};
use roster_employees::{Employee, Roster};

#[test]
fn hiring_round_with_display_reports() {
    roster_observability::init();

    let mut roster = Roster::new();

    let greg = roster.add_employee("Greg", "Wallis");
    assert_eq!(greg.as_u32(), 1000);
    assert_eq!(
        roster.employee(greg).unwrap().salary(),
        Employee::STARTING_SALARY
    );
    assert!(!roster.employee(greg).unwrap().is_hired());
    roster.fire(greg).unwrap();

    let marc = roster.add_employee("Marc", "White");
    assert_eq!(marc.as_u32(), 1001);
    roster.employee_mut(marc).unwrap().set_salary(100_000);
    assert_eq!(roster.employee(marc).unwrap().salary(), 100_000);
    roster.hire(marc).unwrap();

    let john = roster.add_employee("John", "Doe");
    assert_eq!(john.as_u32(), 1002);
    roster.employee_mut(john).unwrap().set_salary(10_000);
    roster.promote(john, Employee::DEFAULT_RAISE).unwrap();
    assert_eq!(roster.employee(john).unwrap().salary(), 11_000);
    roster.hire(john).unwrap();

    let mut all = Vec::new();
    roster.display_all(&mut all).unwrap();
    let all = String::from_utf8(all).unwrap();
    assert!(all.contains("Employee: Wallis, Greg"));
    assert!(all.contains("Employee: White, Marc"));
    assert!(all.contains("Employee: Doe, John"));

    // Greg was fired before the others were even added; he shows up only in
    // the former report.
    let mut current = Vec::new();
    roster.display_current(&mut current).unwrap();
    let current = String::from_utf8(current).unwrap();
    assert!(!current.contains("Wallis"));
    assert!(current.contains("White"));
    assert!(current.contains("Doe"));

    let mut former = Vec::new();
    roster.display_former(&mut former).unwrap();
    let former = String::from_utf8(former).unwrap();
    assert!(former.contains("Wallis"));
    assert!(!former.contains("White"));
    assert!(!former.contains("Doe"));
}

#[test]
fn caller_supplied_identifier_text_drives_lookup() {
    let mut roster = Roster::new();
    let number = roster.add_employee("Marc", "White");
    roster.hire(number).unwrap();

    // An interactive caller reads the identifier as text and parses it
    // before re-entering the roster.
    let parsed: EmployeeNumber = "1000".parse().unwrap();
    assert_eq!(parsed, number);
    assert!(roster.employee(parsed).unwrap().is_hired());

    let err = "not-a-number".parse::<EmployeeNumber>().unwrap_err();
    assert!(matches!(err, DomainError::InvalidId(_)));

    let missing: EmployeeNumber = "9999".parse().unwrap();
    assert_eq!(roster.employee(missing).unwrap_err(), DomainError::NotFound);
}

#[test]
fn name_lookup_supports_mutation_like_number_lookup() {
    let mut roster = Roster::new();
    roster.add_employee("John", "Doe");

    roster.employee_by_name_mut("John", "Doe").unwrap().hire();
    assert!(roster.employee_by_name("John", "Doe").unwrap().is_hired());

    assert_eq!(
        roster.employee_by_name("Jane", "Doe").unwrap_err(),
        DomainError::NotFound
    );
}
