use time::macros::date;

use super::{is_expired_on, to_display, to_editable, DisplayOutcome};

#[test]
fn converts_iso_to_display() {
    assert_eq!(
        to_display("2021-12-06"),
        DisplayOutcome::Converted("DEC 06, 2021".to_string())
    );
    assert_eq!(
        to_display("1952-07-13"),
        DisplayOutcome::Converted("JUL 13, 1952".to_string())
    );
}

#[test]
fn display_input_passes_through_unchanged() {
    assert_eq!(
        to_display("DEC 06, 2021"),
        DisplayOutcome::AlreadyDisplay("DEC 06, 2021".to_string())
    );
}

#[test]
fn display_conversion_is_idempotent() {
    let first = to_display("2024-01-31").into_inner();
    let second = to_display(&first);
    assert_eq!(second, DisplayOutcome::AlreadyDisplay(first));
}

#[test]
fn unparseable_input_falls_back_verbatim() {
    assert_eq!(
        to_display("not a date"),
        DisplayOutcome::Fallback("not a date".to_string())
    );
    assert_eq!(
        to_display("06/12/2021"),
        DisplayOutcome::Fallback("06/12/2021".to_string())
    );
    assert_eq!(to_display(""), DisplayOutcome::Fallback(String::new()));
}

#[test]
fn round_trips_valid_iso_dates() {
    for iso in ["2021-12-06", "1980-01-01", "2024-02-29", "1999-11-30"] {
        let display = to_display(iso).into_inner();
        assert_eq!(to_editable(&display).as_deref(), Some(iso));
    }
}

#[test]
fn editable_conversion_rejects_malformed_input() {
    assert_eq!(to_editable(""), None);
    assert_eq!(to_editable("DEC 06"), None);
    assert_eq!(to_editable("DEC 06, 2021 extra"), None);
    assert_eq!(to_editable("ZZZ 06, 2021"), None);
    assert_eq!(to_editable("FEB 30, 2021"), None);
}

#[test]
fn expiry_is_strictly_before_today() {
    let today = date!(2024 - 06 - 15);
    assert!(is_expired_on("JUN 14, 2024", today));
    assert!(!is_expired_on("JUN 15, 2024", today));
    assert!(!is_expired_on("JUN 16, 2024", today));
}

#[test]
fn unparseable_expiration_counts_as_not_expired() {
    let today = date!(2024 - 06 - 15);
    assert!(!is_expired_on("", today));
    assert!(!is_expired_on("whenever", today));
}
