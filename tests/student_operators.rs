use roster::{Status, Student, student};

#[test]
fn stored_name_is_trimmed_and_capitalized() {
    for (raw, expected) in [
        ("  alice  ", "Alice"),
        ("bob", "Bob"),
        ("\t charlie brown ", "Charlie brown"),
        ("dELTA", "DELTA"),
        ("Eve", "Eve"),
        ("ßen", "ßen"),
    ] {
        assert_eq!(Student::new(raw).name(), expected, "normalizing {raw:?}");
    }
}

#[test]
fn age_assignment_keeps_previous_on_negative() {
    let mut s = Student::new("amy");
    s.set_age(19);
    for bad in [-1, -18, i64::MIN] {
        s.set_age(bad);
        assert_eq!(s.age(), 19);
    }
    s.set_age(42);
    assert_eq!(s.age(), 42);
}

#[test]
fn status_stays_minor_after_growing_up() {
    let mut s = Student::with_details("kim", 17, [80]);
    assert!(!s.is_adult());
    assert_eq!(s.status(), Status::Minor);
    s.set_age(30);
    assert!(s.is_adult());
    assert_eq!(s.status(), Status::Minor);
}

#[test]
fn combine_concatenates_grades_and_keeps_operands() {
    let a = Student::with_details("ann", 21, [1, 2]);
    let b = Student::with_details("ben", 33, [10, 20]);

    let c = &a + &b;
    assert_eq!(c.name(), "Ann");
    assert_eq!(c.age(), 21);
    assert_eq!(c.grades(), &[1, 2, 10, 20]);

    assert_eq!(a.grades(), &[1, 2]);
    assert_eq!(b.grades(), &[10, 20]);
    assert_eq!(a.combine(&b).grades(), c.grades());
}

#[test]
fn combined_student_has_fresh_status() {
    let mut a = Student::with_details("ann", 17, [1]);
    assert_eq!(a.status(), Status::Minor);
    a.set_age(18);
    let b = Student::with_details("ben", 40, [2]);
    assert_eq!((&a + &b).status(), Status::Adult);
}

#[test]
fn scale_multiplies_each_grade() {
    let s = Student::with_details("sam", 15, [3, 4]);
    let doubled = &s * 2;
    assert_eq!(doubled.grades(), &[6, 8]);
    assert_eq!(doubled.name(), "Sam");
    assert_eq!(doubled.age(), 15);
    assert_eq!(s.grades(), &[3, 4]);
    assert_eq!(s.scale_by(-1).grades(), &[-3, -4]);
}

#[test]
fn equality_ignores_age_and_raw_grades() {
    let a = Student::with_details("Amy", 20, [90, 100]);
    let b = Student::with_details("amy ", 5, [95, 95]);
    let c = Student::with_details("Amy", 20, [90, 90]);
    let d = Student::with_details("Ann", 20, [90, 100]);

    assert!(a == b);
    assert!(a.equals_by_name_and_average(&b));
    assert!(a != c);
    assert!(a != d);
}

#[test]
fn update_and_process_grades() {
    let mut s = student().name("zed").age(22).build();
    assert!(s.average().is_err());

    s.update_grades([95, 87, 74, 88, 90]);
    assert_eq!(s.average(), Ok(86.8));

    s.process_grades(|g| g + 5);
    assert_eq!(s.grades(), &[100, 92, 79, 93, 95]);
}
