//! Strict mode: the fractional part keeps a fixed width; edits right of
//! the decimal separator overwrite instead of inserting or deleting.

mod common;

use common::Bench;
use input_mask::FormatterOptions;

fn strict_bench() -> Bench {
    let mut bench = Bench::new();
    bench.input.enable_strict_mode();
    bench.input.set_value("1234567.89").unwrap();
    bench.assert_state("$1,234,567.89", "1234567.89", "$1,234,567.89");
    bench
}

#[test]
fn integer_edits_stay_ordinary_insertions() {
    let mut bench = strict_bench();
    bench.type_str("9", 1, 1);
    bench.assert_state("$91,234,567.89", "91234567.89", "$91,234,567.89");
}

#[test]
fn fractional_inserts_overwrite_in_place() {
    let mut bench = strict_bench();
    bench.type_str("9", 1, 1);

    // A selection spanning the separator falls back to the normal pipeline
    // and is rejected.
    bench.type_str("1", 11, 12);
    bench.assert_state("$91,234,567.89", "91234567.89", "$91,234,567.89");
    bench.assert_caret(12);

    bench.type_str("1", 12, 12);
    bench.assert_state("$91,234,567.19", "91234567.19", "$91,234,567.19");
    bench.assert_caret(13);

    bench.type_str("1", 13, 13);
    bench.assert_state("$91,234,567.11", "91234567.11", "$91,234,567.11");
    bench.assert_caret(14);

    // With a suffix attached, typing past the last fractional digit pins
    // the caret instead of walking into the suffix.
    bench
        .input
        .format(FormatterOptions {
            currency_name: Some("USD".into()),
            ..Default::default()
        })
        .unwrap();
    bench.assert_state("$91,234,567.11 USD", "91234567.11", "$91,234,567.11 USD");

    bench.type_str("1", 14, 14);
    bench.assert_state("$91,234,567.11 USD", "91234567.11", "$91,234,567.11 USD");
    bench.assert_caret(14);

    // Without strict mode the same insertion overflows the fraction and is
    // rejected outright.
    bench.input.disable_strict_mode();
    bench.type_str("0", 12, 12);
    bench.assert_state("$91,234,567.11 USD", "91234567.11", "$91,234,567.11 USD");
    bench.assert_caret(12);
}

#[test]
fn backspace_zeroes_fractional_digits() {
    let mut bench = strict_bench();

    bench.backspace(13, 13);
    bench.assert_state("$1,234,567.80", "1234567.80", "$1,234,567.80");
    bench.assert_caret(12);

    bench.backspace(12, 12);
    bench.assert_state("$1,234,567.00", "1234567.00", "$1,234,567.00");
    bench.assert_caret(11);

    // Backspacing the separator itself is absorbed.
    bench.backspace(11, 11);
    bench.assert_state("$1,234,567.00", "1234567.00", "$1,234,567.00");
    bench.assert_caret(10);
}

#[test]
fn delete_zeroes_fractional_digits() {
    let mut bench = strict_bench();
    bench.input.set_value("123.45").unwrap();
    bench.assert_state("$123.45", "123.45", "$123.45");

    // Forward-delete of the separator is absorbed.
    bench.delete(4, 4);
    bench.assert_state("$123.45", "123.45", "$123.45");
    bench.assert_caret(4);

    bench.delete(5, 5);
    bench.assert_state("$123.05", "123.05", "$123.05");
    bench.assert_caret(6);

    for caret in [6, 7] {
        bench.delete(caret, caret);
        bench.assert_state("$123.00", "123.00", "$123.00");
        bench.assert_caret(7);
    }
}

#[test]
fn integer_backspaces_shrink_normally() {
    let mut bench = Bench::new();
    bench.input.enable_strict_mode();
    bench.input.set_value("123.00").unwrap();

    bench.backspaces(2, 4, 4);
    bench.assert_state("$1.00", "1.00", "$1.00");

    bench.backspace(2, 2);
    bench.assert_state("$0.00", "0.00", "$0.00");
}

#[test]
fn strict_mode_composes_with_negative_zero() {
    // Sign handling never touches the fractional region, so the two flags
    // apply independently.
    let mut bench = Bench::new();
    bench.input.enable_strict_mode();
    bench.input.allow_negative_zero(true);

    bench.type_str("-", 1, 1);
    assert_eq!(bench.text(), "-$0.00");
    assert_eq!(bench.value(), "0.00");

    // Overwrite the first fractional digit of the negatively framed zero.
    bench.type_str("5", 4, 4);
    bench.assert_state("-$0.50", "-0.50", "-$0.50");
    bench.assert_caret(5);
}
