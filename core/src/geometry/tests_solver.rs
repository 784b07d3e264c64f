use super::solver::girder_count_from_f64;
use super::*;

fn input(spacing: Option<f64>, count: Option<u32>, overhang: Option<f64>) -> GeometryInput {
    GeometryInput::new(spacing, count, overhang)
}

#[test]
fn test_overall_width_adds_allowance() {
    assert_eq!(overall_width(10.0), 15.0);
    assert_eq!(overall_width(3.0), 8.0);
    assert_eq!(overall_width(7.5), 12.5);
}

#[test]
fn test_solve_girder_count_from_spacing_and_overhang() {
    // (15 - 2 * 0.5) / 2.5 = 5.6 -> 6
    let solved = solve(10.0, input(Some(2.5), None, Some(0.5)), GeometryField::GirderSpacing).unwrap();
    assert_eq!(solved.num_girders, 6);
    assert_eq!(solved.girder_spacing, 2.5);
    assert_eq!(solved.deck_overhang, 0.5);
}

#[test]
fn test_solve_spacing_from_count_and_overhang() {
    let solved = solve(10.0, input(None, Some(5), Some(1.0)), GeometryField::NumGirders).unwrap();
    assert!(solved.girder_spacing.approx_eq(&2.6), "got {}", solved.girder_spacing);
    assert_eq!(solved.num_girders, 5);
}

#[test]
fn test_solve_overhang_from_spacing_and_count() {
    let solved = solve(10.0, input(Some(3.0), Some(4), None), GeometryField::GirderSpacing).unwrap();
    assert!(solved.deck_overhang.approx_eq(&1.5));
}

#[test]
fn test_zero_overhang_is_accepted() {
    let solved = solve(10.0, input(Some(5.0), Some(3), None), GeometryField::NumGirders).unwrap();
    assert!(solved.deck_overhang.approx_eq(&0.0));
}

#[test]
fn test_round_trip_reproduces_original_value() {
    let forward = solve(10.0, input(Some(3.0), None, Some(1.5)), GeometryField::DeckOverhang).unwrap();
    assert_eq!(forward.num_girders, 4);

    let back = solve(
        10.0,
        input(None, Some(forward.num_girders), Some(forward.deck_overhang)),
        GeometryField::NumGirders,
    )
    .unwrap();
    assert!(back.approx_eq(&forward));
}

#[test]
fn test_girder_count_rounds_half_up() {
    // (15 - 1) / 4 = 3.5
    let solved = solve(10.0, input(Some(4.0), None, Some(0.5)), GeometryField::GirderSpacing).unwrap();
    assert_eq!(solved.num_girders, 4);
}

#[test]
fn test_computed_count_below_two_rejected() {
    // (15 - 1) / 12 = 1.17 -> 1
    let err = solve(10.0, input(Some(12.0), None, Some(0.5)), GeometryField::GirderSpacing).unwrap_err();
    assert_eq!(err, GeometryError::TooFewGirders { count: 1 });
    assert_eq!(err.field(), Some(GeometryField::NumGirders));
}

#[test]
fn test_given_count_below_two_rejected() {
    let err = solve(10.0, input(None, Some(1), Some(0.5)), GeometryField::NumGirders).unwrap_err();
    assert_eq!(err, GeometryError::TooFewGirders { count: 1 });
}

#[test]
fn test_values_at_or_above_overall_width_rejected() {
    let err = solve(10.0, input(Some(15.0), None, Some(0.5)), GeometryField::GirderSpacing).unwrap_err();
    assert_eq!(err.field(), Some(GeometryField::GirderSpacing));
    assert_eq!(err.to_string(), "Girder spacing must be less than overall width (15.0 m)");

    let err = solve(10.0, input(Some(2.0), None, Some(15.5)), GeometryField::DeckOverhang).unwrap_err();
    assert!(matches!(
        err,
        GeometryError::ExceedsOverallWidth { field: GeometryField::DeckOverhang, .. }
    ));

    let err = solve(10.0, input(None, Some(16), Some(0.5)), GeometryField::NumGirders).unwrap_err();
    assert_eq!(err.field(), Some(GeometryField::NumGirders));
}

#[test]
fn test_negative_computed_overhang_rejected() {
    // 5 * 4 = 20 > 15
    let err = solve(10.0, input(Some(5.0), Some(4), None), GeometryField::NumGirders).unwrap_err();
    assert!(matches!(err, GeometryError::Negative { field: GeometryField::DeckOverhang, .. }));
}

#[test]
fn test_non_positive_spacing_rejected() {
    let err = solve(10.0, input(Some(0.0), None, Some(0.5)), GeometryField::GirderSpacing).unwrap_err();
    assert!(matches!(err, GeometryError::NotPositive { field: GeometryField::GirderSpacing, .. }));

    // Overhang eats the whole width, leaving nothing for the girders
    let err = solve(10.0, input(None, Some(3), Some(7.5)), GeometryField::DeckOverhang).unwrap_err();
    assert!(matches!(err, GeometryError::NotPositive { field: GeometryField::GirderSpacing, .. }));
}

#[test]
fn test_underdetermined_input() {
    let err = solve(10.0, input(Some(2.5), None, None), GeometryField::GirderSpacing).unwrap_err();
    assert_eq!(err, GeometryError::Underdetermined);
    assert_eq!(err.field(), None);

    // The edited field itself must hold a value
    let err = solve(10.0, input(None, Some(4), Some(1.0)), GeometryField::GirderSpacing).unwrap_err();
    assert_eq!(err, GeometryError::Underdetermined);
}

#[test]
fn test_invalid_carriageway_rejected() {
    for w in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let err = solve(w, input(Some(2.5), None, Some(0.5)), GeometryField::GirderSpacing).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidCarriageway(_)));
    }
}

#[test]
fn test_target_selector_with_all_fields_present() {
    let full = input(Some(2.5), Some(99), Some(0.5));
    assert_eq!(solve_target(&full, GeometryField::GirderSpacing), Ok(GeometryField::NumGirders));
    assert_eq!(solve_target(&full, GeometryField::NumGirders), Ok(GeometryField::GirderSpacing));
    assert_eq!(solve_target(&full, GeometryField::DeckOverhang), Ok(GeometryField::GirderSpacing));

    let solved = solve(10.0, full, GeometryField::GirderSpacing).unwrap();
    assert_eq!(solved.num_girders, 6);

    let solved = solve(10.0, input(Some(1.0), Some(4), Some(1.5)), GeometryField::DeckOverhang).unwrap();
    assert!(solved.girder_spacing.approx_eq(&3.0));

    let solved = solve(10.0, input(Some(2.5), Some(7), Some(0.5)), GeometryField::NumGirders).unwrap();
    assert!(solved.girder_spacing.approx_eq(&2.0));
}

#[test]
fn test_target_selector_picks_missing_field() {
    let partial = input(Some(2.5), None, Some(0.5));
    assert_eq!(solve_target(&partial, GeometryField::DeckOverhang), Ok(GeometryField::NumGirders));

    let partial = input(None, Some(6), Some(0.5));
    assert_eq!(solve_target(&partial, GeometryField::DeckOverhang), Ok(GeometryField::GirderSpacing));
}

#[test]
fn test_validate_complete_layout() {
    let ok = SolvedGeometry { girder_spacing: 2.5, num_girders: 6, deck_overhang: 0.5 };
    assert!(validate(10.0, &ok).is_ok());

    let bad = SolvedGeometry { num_girders: 1, ..ok };
    assert_eq!(validate(10.0, &bad), Err(GeometryError::TooFewGirders { count: 1 }));
}

#[test]
fn test_validate_rejects_layout_off_the_width_relation() {
    // 6 girders at 5 m need 31 m of deck
    let wide = SolvedGeometry { girder_spacing: 5.0, num_girders: 6, deck_overhang: 0.5 };
    let err = validate(10.0, &wide).unwrap_err();
    assert_eq!(err, GeometryError::Inconsistent { count: 6, expected: 3 });
    assert_eq!(err.field(), Some(GeometryField::NumGirders));

    let overhung = SolvedGeometry { girder_spacing: 2.5, num_girders: 6, deck_overhang: 7.4 };
    assert_eq!(validate(10.0, &overhung), Err(GeometryError::Inconsistent { count: 6, expected: 0 }));
}

#[test]
fn test_validate_accepts_every_solved_layout() {
    let cases = [
        (input(Some(2.5), None, Some(0.5)), GeometryField::GirderSpacing),
        (input(Some(4.0), None, Some(0.5)), GeometryField::DeckOverhang),
        (input(None, Some(5), Some(1.0)), GeometryField::NumGirders),
        (input(None, Some(7), Some(0.3)), GeometryField::DeckOverhang),
        (input(Some(3.0), Some(4), None), GeometryField::GirderSpacing),
        (input(Some(5.0), Some(3), None), GeometryField::NumGirders),
    ];
    for (partial, changed) in cases {
        let solved = solve(10.0, partial, changed).unwrap();
        assert_eq!(validate(10.0, &solved), Ok(()), "{:?}", solved);
    }
}

#[test]
fn test_huge_computed_count_rejected() {
    // (1e10 + 5) / 2 rounds past u32::MAX yet stays below the overall width
    let err = solve(1e10, input(Some(2.0), None, Some(0.0)), GeometryField::GirderSpacing).unwrap_err();
    assert_eq!(err, GeometryError::NotANumber { field: GeometryField::NumGirders });
}

#[test]
fn test_girder_count_from_f64() {
    assert_eq!(girder_count_from_f64(6.0), Ok(6));
    assert_eq!(girder_count_from_f64(6.5), Err(GeometryError::NotWholeNumber { value: 6.5 }));
    // The minimum is the solver's concern
    assert_eq!(girder_count_from_f64(1.0), Ok(1));
    assert!(matches!(girder_count_from_f64(-2.0), Err(GeometryError::NotPositive { .. })));
    assert!(matches!(girder_count_from_f64(f64::NAN), Err(GeometryError::NotANumber { .. })));
}
