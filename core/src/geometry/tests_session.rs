use super::*;

fn example_session() -> GeometrySession {
    let mut session = GeometrySession::open(10.0, None);
    session.edit(GeometryField::GirderSpacing, Some(2.5)).unwrap();
    session.edit(GeometryField::DeckOverhang, Some(0.5)).unwrap();
    session
}

#[test]
fn test_open_empty_session() {
    let session = GeometrySession::open(10.0, None);
    assert_eq!(session.overall_width(), 15.0);
    assert_eq!(session.input().known_count(), 0);
    assert!(!session.has_errors());
}

#[test]
fn test_open_seeds_from_prior_layout() {
    let prior = BridgeGeometry::new(
        10.0,
        SolvedGeometry { girder_spacing: 2.5, num_girders: 6, deck_overhang: 0.5 },
    );
    let session = GeometrySession::open(12.0, Some(&prior));
    assert_eq!(session.value(GeometryField::NumGirders), Some(6.0));
    assert_eq!(session.overall_width(), 17.0);
}

#[test]
fn test_commit_solves_missing_field() {
    let mut session = example_session();
    let outcome = session.commit(GeometryField::DeckOverhang);

    match outcome {
        CommitOutcome::Solved(solved) => assert_eq!(solved.num_girders, 6),
        other => panic!("Expected solve, got {:?}", other),
    }
    assert_eq!(session.input().num_girders, Some(6));
    assert!(!session.has_errors());
}

#[test]
fn test_commit_skipped_with_single_value() {
    let mut session = GeometrySession::open(10.0, None);
    session.edit(GeometryField::GirderSpacing, Some(2.5)).unwrap();

    assert_eq!(session.commit(GeometryField::GirderSpacing), CommitOutcome::Skipped);
    // Committing an empty field never solves
    assert_eq!(session.commit(GeometryField::NumGirders), CommitOutcome::Skipped);
    assert_eq!(session.input().known_count(), 1);
}

#[test]
fn test_rejected_commit_keeps_other_values() {
    let mut session = example_session();
    session.edit(GeometryField::GirderSpacing, Some(20.0)).unwrap();

    let outcome = session.commit(GeometryField::GirderSpacing);
    assert!(matches!(outcome, CommitOutcome::Rejected(GeometryError::ExceedsOverallWidth { .. })));
    assert!(session.error(GeometryField::GirderSpacing).is_some());
    assert_eq!(session.input().deck_overhang, Some(0.5));
    assert_eq!(session.input().num_girders, None);
}

#[test]
fn test_successful_commit_clears_errors() {
    let mut session = example_session();
    session.edit(GeometryField::GirderSpacing, Some(20.0)).unwrap();
    session.commit(GeometryField::GirderSpacing);
    assert!(session.has_errors());

    session.edit(GeometryField::GirderSpacing, Some(2.5)).unwrap();
    assert!(matches!(session.commit(GeometryField::GirderSpacing), CommitOutcome::Solved(_)));
    assert!(!session.has_errors());
}

#[test]
fn test_finalize_valid_layout() {
    let mut session = example_session();
    session.commit(GeometryField::GirderSpacing);

    let geometry = session.finalize().unwrap();
    assert_eq!(geometry.overall_width, 15.0);
    assert_eq!(geometry.num_girders, 6);
    assert_eq!(geometry.girder_spacing, 2.5);
    assert_eq!(geometry.deck_overhang, 0.5);
}

#[test]
fn test_finalize_single_girder_fails_without_change() {
    let mut session = example_session();
    session.edit(GeometryField::NumGirders, Some(1.0)).unwrap();
    let before = *session.input();

    let err = session.finalize().unwrap_err();
    assert_eq!(err, FinalizeError::Invalid(GeometryError::TooFewGirders { count: 1 }));
    assert_eq!(*session.input(), before);
}

#[test]
fn test_finalize_incomplete() {
    let session = example_session();
    assert_eq!(session.finalize(), Err(FinalizeError::Incomplete));
    assert_eq!(FinalizeError::Incomplete.to_string(), "Please fill all fields correctly before saving.");
}

#[test]
fn test_finalize_blocked_by_active_error() {
    let mut session = example_session();
    session.commit(GeometryField::GirderSpacing);
    assert!(session.edit_text(GeometryField::DeckOverhang, "abc").is_err());

    assert_eq!(session.finalize(), Err(FinalizeError::Incomplete));
}

#[test]
fn test_finalize_accepts_zero_overhang() {
    let mut session = GeometrySession::open(10.0, None);
    session.edit(GeometryField::GirderSpacing, Some(5.0)).unwrap();
    session.edit(GeometryField::NumGirders, Some(3.0)).unwrap();
    session.commit(GeometryField::NumGirders);

    let geometry = session.finalize().unwrap();
    assert!(geometry.deck_overhang.approx_eq(&0.0));
}

#[test]
fn test_edit_text_parsing() {
    let mut session = GeometrySession::open(10.0, None);
    session.edit_text(GeometryField::GirderSpacing, " 2.5 ").unwrap();
    assert_eq!(session.input().girder_spacing, Some(2.5));

    session.edit_text(GeometryField::GirderSpacing, "").unwrap();
    assert_eq!(session.input().girder_spacing, None);

    let err = session.edit_text(GeometryField::NumGirders, "2.5").unwrap_err();
    assert_eq!(err, GeometryError::NotWholeNumber { value: 2.5 });
    assert_eq!(session.input().num_girders, None);
    assert_eq!(session.error(GeometryField::NumGirders), Some("Number of girders must be a whole number"));
}

#[test]
fn test_edit_clears_field_error() {
    let mut session = GeometrySession::open(10.0, None);
    let _ = session.edit_text(GeometryField::DeckOverhang, "x");
    assert!(session.error(GeometryField::DeckOverhang).is_some());

    session.edit_text(GeometryField::DeckOverhang, "0.75").unwrap();
    assert!(session.error(GeometryField::DeckOverhang).is_none());
}

#[test]
fn test_finalize_rejects_uncommitted_edit() {
    let mut session = example_session();
    session.commit(GeometryField::DeckOverhang);
    assert_eq!(session.input().num_girders, Some(6));

    // Typed but never committed
    session.edit(GeometryField::GirderSpacing, Some(5.0)).unwrap();
    let before = *session.input();

    let err = session.finalize().unwrap_err();
    assert_eq!(err, FinalizeError::Invalid(GeometryError::Inconsistent { count: 6, expected: 3 }));
    assert_eq!(*session.input(), before);
}

#[test]
fn test_finalize_rejects_values_left_by_failed_commit() {
    let mut session = GeometrySession::open(10.0, None);
    session.edit(GeometryField::GirderSpacing, Some(2.5)).unwrap();
    session.edit(GeometryField::DeckOverhang, Some(7.4)).unwrap();
    assert_eq!(
        session.commit(GeometryField::DeckOverhang),
        CommitOutcome::Rejected(GeometryError::TooFewGirders { count: 0 })
    );

    // Filling the count clears its error but leaves the overhang stale
    session.edit(GeometryField::NumGirders, Some(6.0)).unwrap();
    assert!(!session.has_errors());

    let err = session.finalize().unwrap_err();
    assert!(matches!(err, FinalizeError::Invalid(GeometryError::Inconsistent { count: 6, .. })));
}
