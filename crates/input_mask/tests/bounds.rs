//! Min/max bounds: validation, clamping on set, clamping mid-edit, and the
//! silent reset when a new scale arrives.

mod common;

use common::Bench;
use input_mask::ConfigError;

#[test]
fn setting_a_bound_adjusts_the_current_value() {
    let mut bench = Bench::new();

    bench.input.set_value("-11.42").unwrap();
    bench.assert_state("-$11.42", "-11.42", "-$11.42");

    bench.input.set_min(Some("-10.00")).unwrap();
    bench.assert_state("-$10.00", "-10.00", "-$10.00");

    // Widening the bound does not move the value back.
    bench.input.set_min(Some("-11.00")).unwrap();
    bench.assert_state("-$10.00", "-10.00", "-$10.00");

    bench.input.set_value("-11.01").unwrap();
    bench.assert_state("-$11.00", "-11.00", "-$11.00");

    bench.input.set_value("12.42").unwrap();
    bench.assert_state("$12.42", "12.42", "$12.42");

    bench.input.set_max(Some("10.00")).unwrap();
    bench.assert_state("$10.00", "10.00", "$10.00");

    bench.input.set_max(Some("11.00")).unwrap();
    bench.assert_state("$10.00", "10.00", "$10.00");

    bench.input.set_value("15.00").unwrap();
    bench.assert_state("$11.00", "11.00", "$11.00");

    bench.input.set_min(None).unwrap();
    bench.input.set_max(None).unwrap();

    bench.input.set_value("200.00").unwrap();
    bench.assert_state("$200.00", "200.00", "$200.00");
    bench.input.set_value("-200.00").unwrap();
    bench.assert_state("-$200.00", "-200.00", "-$200.00");
}

#[test]
fn forward_deletes_through_grouped_negatives() {
    let mut bench = Bench::new();
    bench.input.set_value("-21000.00").unwrap();

    bench.delete(5, 5);
    bench.assert_state("-$2,100.00", "-2100.00", "-$2,100.00");

    bench.delete(2, 2);
    bench.assert_state("-$100.00", "-100.00", "-$100.00");
}

#[test]
fn an_edit_clamped_to_a_bound_still_counts_as_accepted() {
    let mut bench = Bench::new();
    bench.input.set_value("-100.00").unwrap();
    bench.input.set_min(Some("-100.00")).unwrap();

    use std::cell::Cell;
    use std::rc::Rc;
    let accepted = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&accepted);
    bench.input.on_valid(move || seen.set(seen.get() + 1));

    // Typing a digit would reach -1100.00; the result clamps back to min.
    bench.type_str("1", 2, 2);
    bench.assert_state("-$100.00", "-100.00", "-$100.00");
    assert_eq!(accepted.get(), 1);
}

#[test]
fn rejects_invalid_bounds_without_state_changes() {
    let mut bench = Bench::new();

    assert!(matches!(
        bench.input.set_min(Some("-1")),
        Err(ConfigError::ScaleMismatch { .. })
    ));
    assert!(matches!(
        bench.input.set_max(Some("-1")),
        Err(ConfigError::ScaleMismatch { .. })
    ));
    assert!(bench.input.set_min(Some("-1.00")).is_ok());
    assert!(matches!(
        bench.input.set_max(Some("-2.00")),
        Err(ConfigError::MinAboveMax { .. })
    ));
    assert!(bench.input.set_max(Some("2.00")).is_ok());
    assert!(matches!(
        bench.input.set_min(Some("3.00")),
        Err(ConfigError::MinAboveMax { .. })
    ));
    assert!(matches!(
        bench.input.set_min(Some("abc")),
        Err(ConfigError::MalformedBound { .. })
    ));

    // The failed calls left the earlier bounds in place.
    assert_eq!(bench.input.min().unwrap().to_string(), "-1.00");
    assert_eq!(bench.input.max().unwrap().to_string(), "2.00");
}

#[test]
fn bounds_reset_when_a_new_scale_is_introduced() {
    let mut bench = Bench::new();
    bench.input.set_min(Some("-10.00")).unwrap();
    bench.input.set_max(Some("10.00")).unwrap();
    bench.input.set_value("0.0").unwrap();

    bench.input.set_value("-20.0").unwrap();
    bench.assert_state("-$20.0", "-20.0", "-$20.0");

    bench.input.set_value("20.0").unwrap();
    bench.assert_state("$20.0", "20.0", "$20.0");
}

#[test]
fn set_value_clamps_into_existing_bounds() {
    let mut bench = Bench::new();
    bench.input.set_min(Some("-10.00")).unwrap();
    bench.input.set_value("-11.42").unwrap();
    bench.assert_state("-$10.00", "-10.00", "-$10.00");
}
