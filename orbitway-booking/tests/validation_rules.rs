use chrono::{Duration, NaiveDate};
use orbitway_booking::{
    DepartureDateError, FieldError, FieldStatus, PassengerField, check_departure,
    parse_date_input, validate_field,
};

#[test]
fn name_rules_match_the_form() {
    for (value, ok) in [
        ("Al3x", false),
        ("Al-x", true),
        ("O'Neil", true),
        ("Jean Luc", true),
        ("Héloïse", true),
        ("Jo", false),
        ("A_lex", false),
    ] {
        let status = validate_field(PassengerField::FirstName, value);
        assert_eq!(status.is_valid(), ok, "{value}");
    }
    assert_eq!(
        validate_field(PassengerField::FirstName, "Al3x").error(),
        Some(FieldError::BadName)
    );
}

#[test]
fn required_and_optional_fields_differ_when_empty() {
    assert!(validate_field(PassengerField::FirstName, "").is_invalid());
    assert!(validate_field(PassengerField::LastName, "").is_invalid());
    assert!(validate_field(PassengerField::Email, "").is_invalid());
    assert_eq!(validate_field(PassengerField::Phone, ""), FieldStatus::Empty);
}

#[test]
fn email_shape_requires_dotted_domain() {
    for (value, ok) in [
        ("crew@orbitway.space", true),
        ("crew@orbitway", false),
        ("crew orbitway.space", false),
        ("@orbitway.space", false),
        ("crew@.", false),
    ] {
        assert_eq!(
            validate_field(PassengerField::Email, value).is_valid(),
            ok,
            "{value}"
        );
    }
}

#[test]
fn phone_length_and_charset_bounds() {
    for (value, ok) in [
        ("+1 (555) 123-4567", true),
        ("0123456789", true),
        ("012345678", false),           // nine characters, too short
        ("+123456789012345", true),     // fifteen after the plus
        ("+1234567890123456", false),   // sixteen after the plus
        ("555-CALL-NOW", false),
    ] {
        assert_eq!(
            validate_field(PassengerField::Phone, value).is_valid(),
            ok,
            "{value}"
        );
    }
}

#[test]
fn departure_window_boundaries() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    assert_eq!(check_departure(Some(today), today), Ok(()));
    assert_eq!(
        check_departure(Some(today - Duration::days(1)), today),
        Err(DepartureDateError::InPast)
    );
    assert_eq!(
        check_departure(Some(today + Duration::days(30)), today),
        Ok(())
    );
    assert_eq!(
        check_departure(Some(today + Duration::days(31)), today),
        Err(DepartureDateError::TooFarAhead)
    );
    assert_eq!(check_departure(None, today), Err(DepartureDateError::Missing));
}

#[test]
fn departure_messages_are_distinct() {
    let messages = [
        DepartureDateError::Missing.to_string(),
        DepartureDateError::InPast.to_string(),
        DepartureDateError::TooFarAhead.to_string(),
    ];
    assert_eq!(
        messages.iter().collect::<std::collections::HashSet<_>>().len(),
        3
    );
}

#[test]
fn raw_input_parses_only_iso_dates() {
    assert_eq!(
        parse_date_input("2026-09-01"),
        NaiveDate::from_ymd_opt(2026, 9, 1)
    );
    assert_eq!(parse_date_input(" 2026-09-01 "), NaiveDate::from_ymd_opt(2026, 9, 1));
    assert_eq!(parse_date_input("01-09-2026"), None);
    assert_eq!(parse_date_input(""), None);
}
