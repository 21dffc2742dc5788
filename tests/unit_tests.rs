// Unit tests for Study Match

use study_match::core::{
    filters::{filter_matches_by_course, filter_matches_by_time},
    scoring::{calculate_match_score, calculate_weighted_score, similarity},
};
use study_match::models::{Student, StudentRecord, ScoringWeights};

fn create_student(name: &str, courses: &[&str], goals: &[&str], slots: &[&str]) -> Student {
    Student::new(name)
        .with_courses(courses.iter().copied())
        .with_goals(goals.iter().copied())
        .with_availability(slots.iter().copied())
}

#[test]
fn test_identical_profiles_score_hundred() {
    let a = create_student("Alice", &["CS101", "MATH201"], &["Group study"], &["Morning"]);
    let b = create_student("Bob", &["CS101", "MATH201"], &["Group study"], &["Morning"]);

    assert_eq!(calculate_match_score(&a, &b), 100.0);
    assert_eq!(calculate_match_score(&b, &a), 100.0);
    assert_eq!(similarity(&a, &b), 100.0);
}

#[test]
fn test_disjoint_profiles_score_zero() {
    let a = create_student("A", &["CS101", "ENG100"], &["Group study"], &["Morning", "Noon"]);
    let b = create_student("B", &["PHYS101"], &["Solo", "Exam prep"], &["Night"]);

    assert_eq!(calculate_match_score(&a, &b), 0.0);
    assert_eq!(similarity(&a, &b), 0.0);
}

#[test]
fn test_directional_score_counterexample() {
    let a = create_student("A", &["X"], &[], &[]);
    let b = create_student("B", &["X", "Y"], &[], &[]);

    assert_eq!(calculate_match_score(&a, &b), 40.0);
    assert_eq!(calculate_match_score(&b, &a), 20.0);
    // The symmetric measure agrees both ways: 1 / 1.5 * 100
    assert_eq!(similarity(&a, &b), 66.67);
    assert_eq!(similarity(&b, &a), 66.67);
}

#[test]
fn test_alice_bob_charlie_example() {
    let alice = create_student("Alice", &["CS101", "MATH201"], &["Group study"], &["Morning"]);
    let bob = create_student("Bob", &["CS101", "MATH201"], &["Group study"], &["Morning"]);
    let charlie = create_student("Charlie", &["DATA2721", "MATH201"], &["Exam prep"], &["Mon10", "Wed11"]);

    assert_eq!(calculate_match_score(&alice, &bob), 100.0);
    assert!(calculate_match_score(&alice, &charlie) < 50.0);
}

#[test]
fn test_category_weights() {
    let a = create_student("A", &["C1"], &["G1"], &["S1"]);
    let only_goal = create_student("B", &[], &["G1"], &[]);
    let only_slot = create_student("C", &[], &[], &["S1"]);

    assert_eq!(calculate_match_score(&a, &only_goal), 30.0);
    assert_eq!(calculate_match_score(&a, &only_slot), 30.0);

    let weights = ScoringWeights {
        courses: 20.0,
        goals: 60.0,
        availability: 20.0,
    };
    assert_eq!(calculate_weighted_score(&a, &only_goal, &weights), 60.0);
}

#[test]
fn test_similarity_symmetry_over_varied_profiles() {
    let profiles = vec![
        create_student("P0", &["C1", "C2", "C3"], &["G1"], &["S1", "S2"]),
        create_student("P1", &["C1"], &["G1", "G2"], &["S2", "S3", "S4"]),
        create_student("P2", &[], &["G2"], &["S1"]),
        create_student("P3", &["C2", "C4", "C5", "C6"], &[], &[]),
        create_student("P4", &["C3", "C1"], &["G1", "G2", "G3"], &["S4"]),
    ];

    for a in &profiles {
        for b in &profiles {
            assert_eq!(similarity(a, b), similarity(b, a), "{} vs {}", a.name, b.name);
        }
    }
}

#[test]
fn test_scores_stay_in_range() {
    let profiles = vec![
        create_student("P0", &["C1", "C2", "C3"], &["G1"], &["S1", "S2"]),
        create_student("P1", &["C1"], &["G1", "G2"], &["S2", "S3", "S4"]),
        create_student("P2", &[], &[], &[]),
        create_student("P3", &["C2"], &["G2"], &["S1"]),
    ];

    for a in &profiles {
        for b in &profiles {
            let score = calculate_match_score(a, b);
            assert!((0.0..=100.0).contains(&score), "Score {} out of range", score);
            let sim = similarity(a, b);
            assert!((0.0..=100.0).contains(&sim), "Similarity {} out of range", sim);
        }
    }
}

#[test]
fn test_record_schemes_normalize_identically() {
    let original: StudentRecord = serde_json::from_str(
        r#"{"id": 0, "name": "Alice", "subjects": ["CS101", "MATH201"], "availability": ["Morning"], "goals": ["Group study"]}"#,
    )
    .unwrap();
    let webform: StudentRecord = serde_json::from_str(
        r#"{"id": "0", "name": "Alice", "courses": ["MATH201", "CS101"], "study_times": ["Morning"], "goals": ["Group study"], "study_style": "quiet"}"#,
    )
    .unwrap();

    let a = original.normalize().unwrap();
    let b = webform.normalize().unwrap();

    assert_eq!(a.id, b.id);
    assert_eq!(a.courses, b.courses);
    assert_eq!(a.availability, b.availability);
    assert_eq!(calculate_match_score(&a, &b), 100.0);
}

#[test]
fn test_filters_on_empty_input() {
    assert!(filter_matches_by_course(&[], "CS101").is_empty());
    assert!(filter_matches_by_time(&[], "Morning").is_empty());
}

#[test]
fn test_score_ties_round_half_to_even() {
    let slots: Vec<String> = (0..16).map(|i| format!("Slot {}", i)).collect();
    let a = Student::new("A").with_availability(slots.iter().cloned());
    let b = Student::new("B").with_availability(slots.iter().take(3).cloned());

    // 30 * 3 / 16 = 5.625 exactly
    assert_eq!(calculate_match_score(&a, &b), 5.62);
}
