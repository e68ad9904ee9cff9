use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use oec_canonical::CountryCode;
use oec_core::{
    screen_province_code, validate, CoreError, ErrorKind, FarmField, FarmRecordValidator,
    FieldError, LookupError, RawFarmInput, ReferenceLookup, ScreeningError, ValidationOutcome,
};
use proptest::prelude::*;
use serde_json::json;

fn make_lookup() -> BTreeMap<String, CountryCode> {
    [("ON", "CA"), ("BC", "CA"), ("MI", "US"), ("NY", "US"), ("CM", "MX")]
        .into_iter()
        .map(|(p, c)| (p.to_string(), CountryCode::parse(c).unwrap()))
        .collect()
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn today() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// A farm with every field valid.
fn make_farm() -> RawFarmInput {
    RawFarmInput {
        name: "Test Farm".into(),
        address: Some("299 Doon Valley Drive".into()),
        town: Some("Kitchener".into()),
        county: Some("Waterloo".into()),
        province_code: "ON".into(),
        postal_code: Some("N2G 4M4".into()),
        home_phone: Some("519-748-5220".into()),
        cell_phone: Some("519-748-5220".into()),
        email: Some("farm@example.com".into()),
        directions: Some("401 to Homer Watson exit, North to 1st road East".into()),
        date_joined: Some(today()),
        last_contact_date: Some(today()),
    }
}

fn run(farm: &RawFarmInput) -> ValidationOutcome {
    let lookup = make_lookup();
    FarmRecordValidator::new(&lookup)
        .validate_at(farm, now())
        .unwrap()
}

fn errors_of(farm: &RawFarmInput) -> Vec<FieldError> {
    run(farm).errors().to_vec()
}

fn kinds_of(farm: &RawFarmInput) -> Vec<ErrorKind> {
    errors_of(farm).iter().map(|e| e.kind).collect()
}

#[test]
fn valid_farm_is_accepted() {
    let outcome = run(&make_farm());
    let record = outcome.record().expect("farm should be accepted");
    assert_eq!(record.name, "Test Farm");
    assert_eq!(record.postal_code.as_deref(), Some("N2G 4M4"));
    assert_eq!(record.home_phone.as_deref(), Some("519-748-5220"));
    assert_eq!(record.province_code, "ON");
    assert_eq!(record.date_joined, Some(today()));
}

#[test]
fn empty_name_is_caught() {
    let mut farm = make_farm();
    farm.name = String::new();
    let errors = errors_of(&farm);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::RequiredFieldMissing);
    assert_eq!(errors[0].fields, vec![FarmField::Name]);
}

#[test]
fn blank_name_is_caught() {
    let mut farm = make_farm();
    farm.name = "   ".into();
    assert_eq!(kinds_of(&farm), vec![ErrorKind::RequiredFieldMissing]);
}

#[test]
fn null_name_from_json_is_caught() {
    let mut value = serde_json::to_value(make_farm()).unwrap();
    value["name"] = serde_json::Value::Null;
    let farm: RawFarmInput = serde_json::from_value(value).unwrap();
    assert_eq!(kinds_of(&farm), vec![ErrorKind::RequiredFieldMissing]);
}

#[test]
fn neither_county_nor_town_errors_out() {
    let mut farm = make_farm();
    farm.town = None;
    farm.county = None;
    let errors = errors_of(&farm);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::RequiredFieldMissing);
    assert!(errors[0].concerns(FarmField::Town));
    assert!(errors[0].concerns(FarmField::County));
}

#[test]
fn town_or_county_alone_is_valid() {
    let mut farm = make_farm();
    farm.county = Some(String::new());
    assert!(run(&farm).is_accepted());

    let mut farm = make_farm();
    farm.town = Some("  ".into());
    let outcome = run(&farm);
    assert!(outcome.is_accepted());
    assert_eq!(outcome.record().unwrap().town, None);
}

#[test]
fn text_fields_are_trimmed_lowered_and_capitalized() {
    for value in [
        "New Hamburg",
        "New Hamburg ",
        " New Hamburg",
        "new hamburg",
        "NEW HAMburg",
    ] {
        let mut farm = make_farm();
        farm.name = value.into();
        farm.address = Some(value.into());
        farm.town = Some(value.into());
        farm.county = Some(value.into());

        let outcome = run(&farm);
        let record = outcome.record().expect("accepted");
        assert_eq!(record.name, "New Hamburg");
        assert_eq!(record.address.as_deref(), Some("New Hamburg"));
        assert_eq!(record.town.as_deref(), Some("New Hamburg"));
        assert_eq!(record.county.as_deref(), Some("New Hamburg"));
    }
}

#[test]
fn other_text_fields_are_trimmed_without_case_change() {
    let mut farm = make_farm();
    farm.email = Some("  Farm@Example.com ".into());
    farm.directions = Some(" turn LEFT at the barn ".into());
    let outcome = run(&farm);
    let record = outcome.record().expect("accepted");
    assert_eq!(record.email.as_deref(), Some("Farm@Example.com"));
    assert_eq!(record.directions.as_deref(), Some("turn LEFT at the barn"));
}

#[test]
fn null_cell_or_home_phone_is_accepted() {
    let mut farm = make_farm();
    farm.cell_phone = None;
    assert!(run(&farm).is_accepted());

    let mut farm = make_farm();
    farm.home_phone = None;
    assert!(run(&farm).is_accepted());
}

#[test]
fn phones_buried_in_trash_are_reformatted() {
    let mut farm = make_farm();
    farm.cell_phone = Some("bb1jk2jk3j4.5.6.^&7(8.9-0kgfkhg".into());
    farm.home_phone = Some("bb1jk2jk3j4.5.6.^&7(8.9-0kgfkhg".into());
    let outcome = run(&farm);
    let record = outcome.record().expect("accepted");
    assert_eq!(record.cell_phone.as_deref(), Some("123-456-7890"));
    assert_eq!(record.home_phone.as_deref(), Some("123-456-7890"));
}

#[test]
fn phones_without_ten_digits_are_rejected() {
    for value in [
        "1",
        "123",
        "12345",
        "1234567",
        "123456789A",
        "12d34d567r89g7j9",
        "12345678901",
        "(123)456-7890 6",
        "123-456-78901",
        "123-456-789",
    ] {
        let mut farm = make_farm();
        farm.cell_phone = Some(value.into());
        let errors = errors_of(&farm);
        assert_eq!(errors.len(), 1, "cell {value:?}");
        assert_eq!(errors[0].kind, ErrorKind::FormatInvalid);
        assert_eq!(errors[0].fields, vec![FarmField::CellPhone]);

        let mut farm = make_farm();
        farm.home_phone = Some(value.into());
        let errors = errors_of(&farm);
        assert_eq!(errors.len(), 1, "home {value:?}");
        assert_eq!(errors[0].fields, vec![FarmField::HomePhone]);
    }
}

#[test]
fn both_phones_missing_is_caught() {
    let mut farm = make_farm();
    farm.home_phone = None;
    farm.cell_phone = Some(" ".into());
    let errors = errors_of(&farm);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::RequiredFieldMissing);
    assert_eq!(
        errors[0].fields,
        vec![FarmField::HomePhone, FarmField::CellPhone]
    );
}

#[test]
fn both_dates_null_is_accepted() {
    let mut farm = make_farm();
    farm.date_joined = None;
    farm.last_contact_date = None;
    assert!(run(&farm).is_accepted());
}

#[test]
fn date_joined_in_future_is_rejected() {
    let mut farm = make_farm();
    farm.date_joined = Some(now() + Duration::hours(1));
    farm.last_contact_date = None;
    let errors = errors_of(&farm);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::TemporalOrderViolation);
    assert_eq!(errors[0].fields, vec![FarmField::DateJoined]);
}

#[test]
fn last_contact_without_date_joined_is_rejected() {
    let mut farm = make_farm();
    farm.date_joined = None;
    farm.last_contact_date = Some(now());
    let errors = errors_of(&farm);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::TemporalOrderViolation);
    assert_eq!(errors[0].fields, vec![FarmField::LastContactDate]);
}

#[test]
fn last_contact_in_future_is_rejected() {
    let mut farm = make_farm();
    farm.last_contact_date = Some(now() + Duration::hours(1));
    let errors = errors_of(&farm);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].fields, vec![FarmField::LastContactDate]);
}

#[test]
fn last_contact_before_joined_is_rejected() {
    let mut farm = make_farm();
    farm.last_contact_date = Some(today() - Duration::days(1));
    let errors = errors_of(&farm);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::TemporalOrderViolation);
    assert_eq!(
        errors[0].message,
        "A farmer cannot be contacted before they have joined the program."
    );
}

#[test]
fn last_contact_equal_or_after_joined_is_accepted() {
    let mut farm = make_farm();
    farm.date_joined = Some(now());
    farm.last_contact_date = Some(now());
    assert!(run(&farm).is_accepted());

    farm.date_joined = Some(now() - Duration::hours(1));
    assert!(run(&farm).is_accepted());
}

#[test]
fn email_address_and_postal_all_missing_is_rejected() {
    let mut farm = make_farm();
    farm.postal_code = None;
    farm.email = Some(String::new());
    farm.address = None;
    assert_eq!(
        kinds_of(&farm),
        vec![ErrorKind::ConditionalRequirementUnmet]
    );
}

#[test]
fn email_without_mailing_address_is_ok() {
    let mut farm = make_farm();
    farm.postal_code = None;
    farm.address = None;
    let outcome = run(&farm);
    assert!(outcome.is_accepted());
    assert_eq!(outcome.record().unwrap().postal_code, None);
}

#[test]
fn mailing_address_without_email_is_ok() {
    let mut farm = make_farm();
    farm.email = None;
    assert!(run(&farm).is_accepted());
}

#[test]
fn no_email_and_partial_mailing_address_is_rejected() {
    let mut farm = make_farm();
    farm.email = None;
    farm.postal_code = None;
    assert_eq!(
        kinds_of(&farm),
        vec![ErrorKind::ConditionalRequirementUnmet]
    );

    let mut farm = make_farm();
    farm.email = None;
    farm.address = None;
    let errors = errors_of(&farm);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].fields,
        vec![FarmField::Email, FarmField::Address, FarmField::PostalCode]
    );
}

#[test]
fn canadian_postal_codes_are_canonicalized() {
    for value in ["a1b2c3", "A1B2C3", "a1b 2c3", "A1B 2C3", "R9S 9T9 "] {
        let mut farm = make_farm();
        farm.postal_code = Some(value.into());
        let outcome = run(&farm);
        let expected = if value.starts_with('R') { "R9S 9T9" } else { "A1B 2C3" };
        assert_eq!(
            outcome.record().and_then(|r| r.postal_code.as_deref()),
            Some(expected),
            "postal {value:?}"
        );
    }
}

#[test]
fn bad_canadian_postal_codes_are_caught() {
    for value in [
        "AAA", "W1B 1C1", "Z2G 3H4", "J5D 6L7", "M8N 9F0", "R9I 9T9", "V9W 9O9", "Y9Q 9U9",
        "A1B 1C1X", "XE2G 3H4", "J5K J5K 6L7", "M8N 9P09P0", "12345",
    ] {
        let mut farm = make_farm();
        farm.postal_code = Some(value.into());
        let errors = errors_of(&farm);
        assert_eq!(errors.len(), 1, "postal {value:?}");
        assert_eq!(errors[0].kind, ErrorKind::FormatInvalid);
        assert_eq!(errors[0].fields, vec![FarmField::PostalCode]);
        assert!(errors[0].message.contains("Canadian"));
    }
}

#[test]
fn zip_codes_for_us_states() {
    for (value, expected) in [
        ("12-345", "12345"),
        ("12345", "12345"),
        ("a1,2:3 4-5", "12345"),
        ("12345 6789", "12345-6789"),
        ("12345-6789", "12345-6789"),
        ("123456789", "12345-6789"),
        ("12345and6789", "12345-6789"),
        ("g1h2k3b4h5j6n7m8m9 n", "12345-6789"),
    ] {
        let mut farm = make_farm();
        farm.province_code = "MI".into();
        farm.postal_code = Some(value.into());
        let outcome = run(&farm);
        assert_eq!(
            outcome.record().and_then(|r| r.postal_code.as_deref()),
            Some(expected),
            "zip {value:?}"
        );
    }
}

#[test]
fn bad_zip_codes_are_caught() {
    for value in ["AAA", "1", "123", "1234", "123456", "1234567", "12345678", "1234567890"] {
        let mut farm = make_farm();
        farm.province_code = "MI".into();
        farm.postal_code = Some(value.into());
        let errors = errors_of(&farm);
        assert_eq!(errors.len(), 1, "zip {value:?}");
        assert_eq!(errors[0].kind, ErrorKind::FormatInvalid);
        assert!(errors[0].message.contains("US"));
    }
}

#[test]
fn us_state_does_not_use_postal_code() {
    let mut farm = make_farm();
    farm.province_code = "MI".into();
    assert_eq!(kinds_of(&farm), vec![ErrorKind::FormatInvalid]);
}

#[test]
fn canadian_province_does_not_use_zip_code() {
    let mut farm = make_farm();
    farm.postal_code = Some("12345".into());
    assert_eq!(kinds_of(&farm), vec![ErrorKind::FormatInvalid]);
}

#[test]
fn other_countries_pass_postal_code_through() {
    let mut farm = make_farm();
    farm.province_code = "CM".into();
    farm.postal_code = Some(" 24000 centro ".into());
    let outcome = run(&farm);
    assert_eq!(
        outcome.record().and_then(|r| r.postal_code.as_deref()),
        Some("24000 centro")
    );
}

#[test]
fn unknown_province_is_a_field_error_and_later_rules_still_run() {
    let mut farm = make_farm();
    farm.province_code = "LM".into();
    farm.postal_code = Some("not a postal code".into());
    farm.cell_phone = Some("123".into());
    farm.last_contact_date = Some(today() - Duration::days(1));

    let errors = errors_of(&farm);
    let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::ReferenceNotFound,
            ErrorKind::FormatInvalid,
            ErrorKind::TemporalOrderViolation,
        ]
    );
    assert_eq!(errors[0].fields, vec![FarmField::ProvinceCode]);
    assert_eq!(errors[1].fields, vec![FarmField::CellPhone]);
}

#[test]
fn province_code_is_trimmed_before_lookup() {
    let mut farm = make_farm();
    farm.province_code = " ON ".into();
    let outcome = run(&farm);
    assert_eq!(outcome.record().unwrap().province_code, "ON");
}

#[test]
fn errors_follow_rule_order() {
    let farm = RawFarmInput {
        name: String::new(),
        province_code: "ZZ".into(),
        home_phone: Some("12".into()),
        last_contact_date: Some(now() + Duration::days(2)),
        ..RawFarmInput::default()
    };

    let errors = errors_of(&farm);
    let summary: Vec<_> = errors.iter().map(|e| (e.kind, e.fields.clone())).collect();
    assert_eq!(
        summary,
        vec![
            (ErrorKind::RequiredFieldMissing, vec![FarmField::Name]),
            (
                ErrorKind::RequiredFieldMissing,
                vec![FarmField::Town, FarmField::County]
            ),
            (
                ErrorKind::ConditionalRequirementUnmet,
                vec![FarmField::Email, FarmField::Address, FarmField::PostalCode]
            ),
            (ErrorKind::ReferenceNotFound, vec![FarmField::ProvinceCode]),
            (ErrorKind::FormatInvalid, vec![FarmField::HomePhone]),
            (
                ErrorKind::TemporalOrderViolation,
                vec![FarmField::LastContactDate]
            ),
            (
                ErrorKind::TemporalOrderViolation,
                vec![FarmField::LastContactDate]
            ),
        ]
    );
}

struct UnloadedLookup;

impl ReferenceLookup for UnloadedLookup {
    fn resolve_country(&self, _: &str) -> Result<Option<CountryCode>, LookupError> {
        Err(LookupError::Unavailable)
    }
}

#[test]
fn unavailable_lookup_is_a_configuration_error() {
    let result = validate(&make_farm(), &UnloadedLookup);
    assert!(matches!(
        result,
        Err(CoreError::LookupUnavailable(LookupError::Unavailable))
    ));
}

#[test]
fn input_is_left_untouched() {
    let mut farm = make_farm();
    farm.name = "  lower case farm ".into();
    let before = farm.clone();
    let outcome = run(&farm);
    assert_eq!(farm, before);
    assert_eq!(outcome.record().unwrap().name, "Lower Case Farm");
}

#[test]
fn rejected_outcome_serializes_with_verdict_tag() {
    let mut farm = make_farm();
    farm.town = None;
    farm.county = None;

    let value = serde_json::to_value(run(&farm)).unwrap();
    assert_eq!(
        value,
        json!({
            "verdict": "rejected",
            "detail": [{
                "fields": ["Town", "County"],
                "kind": "RequiredFieldMissing",
                "message": "At least one of Town or County must be provided."
            }]
        })
    );
}

#[test]
fn accepted_outcome_serializes_record() {
    let value = serde_json::to_value(run(&make_farm())).unwrap();
    assert_eq!(value["verdict"], "accepted");
    assert_eq!(value["detail"]["postal_code"], "N2G 4M4");
    assert_eq!(value["detail"]["date_joined"], "2024-06-01T00:00:00");
}

#[test]
fn raw_input_reads_plain_dates_from_json() {
    let farm: RawFarmInput = serde_json::from_value(json!({
        "name": "json farm",
        "town": "Elmira",
        "province_code": "ON",
        "email": "x@example.com",
        "cell_phone": "5195551234",
        "date_joined": "2024-05-01",
        "last_contact_date": "2024-05-20T10:30:00"
    }))
    .unwrap();

    let outcome = run(&farm);
    let record = outcome.record().expect("accepted");
    assert_eq!(record.name, "Json Farm");
    assert_eq!(record.cell_phone.as_deref(), Some("519-555-1234"));
    assert_eq!(
        record.date_joined,
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0)
    );
}

#[test]
fn screening_checks_letters_length_and_file() {
    let lookup = make_lookup();

    let screened = screen_province_code("mi", &lookup).unwrap();
    assert_eq!(screened.province_code.as_ref(), "MI");
    assert_eq!(screened.country_code.as_ref(), "US");

    assert_eq!(
        screen_province_code("O1", &lookup),
        Err(ScreeningError::NotLetters)
    );
    assert_eq!(
        screen_province_code("", &lookup),
        Err(ScreeningError::NotLetters)
    );
    assert_eq!(
        screen_province_code("ONT", &lookup),
        Err(ScreeningError::WrongLength { found: 3 })
    );
    assert_eq!(
        screen_province_code("lm", &lookup),
        Err(ScreeningError::NotOnFile { code: "LM".into() })
    );
    assert_eq!(
        screen_province_code("ON", &UnloadedLookup),
        Err(ScreeningError::Lookup(LookupError::Unavailable))
    );
}

#[test]
fn equal_records_have_equal_fingerprints() {
    let mut messy = make_farm();
    messy.name = "  TEST farm".into();
    messy.postal_code = Some("n2g4m4".into());
    messy.cell_phone = Some("(519) 748 5220".into());

    let a = run(&make_farm()).into_result().unwrap();
    let b = run(&messy).into_result().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());

    let mut other = make_farm();
    other.town = Some("Elmira".into());
    let c = run(&other).into_result().unwrap();
    assert_ne!(a.fingerprint().unwrap(), c.fingerprint().unwrap());
}

proptest! {
    #[test]
    fn validate_is_deterministic(
        name in "[ a-zA-Z]{0,12}",
        town in proptest::option::of("[ a-zA-Z]{0,8}"),
        province in "(ON|MI|CM|ZZ|on|)",
        postal in proptest::option::of("[ A-Za-z0-9\\-]{0,10}"),
        phone in proptest::option::of("[0-9()\\- ]{0,14}"),
        joined_offset in proptest::option::of(-100i64..100),
    ) {
        let farm = RawFarmInput {
            name,
            town,
            province_code: province,
            postal_code: postal,
            cell_phone: phone,
            email: Some("a@b.c".into()),
            date_joined: joined_offset.map(|h| now() + Duration::hours(h)),
            ..RawFarmInput::default()
        };

        let first = run(&farm);
        let second = run(&farm);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.is_accepted(), first.errors().is_empty());
        if let (Some(a), Some(b)) = (first.record(), second.record()) {
            prop_assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
        }
    }
}
