use tallyline::engine::{CalculatorEngine, InputEvent, Operator};

/// Press a whitespace-separated script of keypad tokens
fn press_script(engine: &mut CalculatorEngine, script: &str) {
    for token in script.split_whitespace() {
        let event: InputEvent = token
            .parse()
            .unwrap_or_else(|_| panic!("bad script token '{token}'"));
        engine.press(event);
    }
}

/// Integration test for plain number entry
/// Typed digit sequences display as their formatted numeric value
#[test]
fn test_digit_entry_displays_formatted_value() {
    let mut engine = CalculatorEngine::new();

    press_script(&mut engine, "1");
    assert_eq!(engine.display_text(), "1");

    press_script(&mut engine, "2 3 4");
    assert_eq!(engine.display_text(), "1,234");

    press_script(&mut engine, "5 6 7");
    assert_eq!(engine.display_text(), "1,234,567");

    // Twelve digits fit; the thirteenth is silently rejected
    press_script(&mut engine, "8 9 0 1 2");
    assert_eq!(engine.display_text(), "123,456,789,012");
    press_script(&mut engine, "3");
    assert_eq!(engine.display_text(), "123,456,789,012");
}

#[test]
fn test_duplicate_decimal_points_are_ignored() {
    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "1 . 5 . 2 .");
    assert_eq!(engine.display_text(), "1.52");
}

#[test]
fn test_decimal_after_operator_starts_at_zero_point() {
    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "1 + . 5 =");
    assert_eq!(engine.display_text(), "1.5");
}

#[test]
fn test_delete_never_leaves_an_empty_display() {
    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "del");
    assert_eq!(engine.display_text(), "0");

    press_script(&mut engine, "4 2 del");
    assert_eq!(engine.display_text(), "4");
    press_script(&mut engine, "del del del");
    assert_eq!(engine.display_text(), "0");
}

/// Integration test for the sticky error state
/// Division by zero displays "Error" and ignores everything until reset
#[test]
fn test_division_by_zero_is_sticky_until_reset() {
    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "5 / 0 =");
    assert_eq!(engine.display_text(), "Error");

    press_script(&mut engine, "1 2 3");
    assert_eq!(engine.display_text(), "Error");
    press_script(&mut engine, "+ 4 =");
    assert_eq!(engine.display_text(), "Error");
    press_script(&mut engine, ". del");
    assert_eq!(engine.display_text(), "Error");

    press_script(&mut engine, "reset");
    assert_eq!(engine.display_text(), "0");
    press_script(&mut engine, "6 / 2 =");
    assert_eq!(engine.display_text(), "3");
}

/// Chained operations evaluate left to right, no precedence
#[test]
fn test_chained_operations_evaluate_left_to_right() {
    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "2 + 3 + 4 =");
    assert_eq!(engine.display_text(), "9");

    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "2 + 3 * 4 =");
    // (2 + 3) * 4, not 2 + (3 * 4)
    assert_eq!(engine.display_text(), "20");
}

/// A second operator before any new digit replaces the first instead of
/// triggering a computation
#[test]
fn test_operator_substitution_before_new_digits() {
    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "2 + *");
    assert_eq!(engine.snapshot().pending, Some(Operator::Multiply));
    assert_eq!(engine.display_text(), "2");

    press_script(&mut engine, "3 =");
    assert_eq!(engine.display_text(), "6");
}

/// Results at or above 1e12 switch to exponential notation and come back
/// to grouped fixed-point once a later result drops below the threshold
#[test]
fn test_large_magnitude_round_trip() {
    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "1 0 0 0 0 0 0 * 1 0 0 0 0 0 0 =");
    assert_eq!(engine.display_text(), "1.000000e+12");

    press_script(&mut engine, "/ 1 0 0 0 =");
    assert_eq!(engine.display_text(), "1,000,000,000");
}

#[test]
fn test_tiny_magnitude_switches_to_exponential() {
    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "1 / 1 0 0 0 0 0 0 0 =");
    assert_eq!(engine.display_text(), "1.000000e-7");
}

#[test]
fn test_float_artifacts_are_trimmed_from_the_display() {
    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, ". 1 + . 2 =");
    assert_eq!(engine.display_text(), "0.3");

    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "1 / 3 =");
    assert_eq!(engine.display_text(), "0.333333");
}

/// Reset restores the exact construction-time state after any sequence
#[test]
fn test_reset_restores_pristine_state() {
    let pristine = CalculatorEngine::new().snapshot();

    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "9 . 5 * 4 = + 1 / 0 = reset");
    assert_eq!(engine.snapshot(), pristine);
    assert_eq!(engine.display_text(), "0");

    // And the engine is fully usable again
    press_script(&mut engine, "2 + 2 =");
    assert_eq!(engine.display_text(), "4");
}

/// An operator pressed on an untouched entry coerces it to zero rather
/// than failing
#[test]
fn test_operator_on_untouched_entry_coerces_to_zero() {
    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "- 8 =");
    assert_eq!(engine.display_text(), "-8");
}

#[test]
fn test_equals_repeated_does_not_recompute() {
    let mut engine = CalculatorEngine::new();
    press_script(&mut engine, "2 + 3 = = =");
    // No fresh right-hand operand after the first equals
    assert_eq!(engine.display_text(), "5");
}
