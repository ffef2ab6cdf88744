use chrono::{Datelike, Days, Local, NaiveDate};
use validation::rut::check_digit;
use validation::{
    calculate_age, format_rut, is_birthday_today, normalize_rut, validate_email, validate_phone,
    validate_rut,
};

fn sample_bodies() -> impl Iterator<Item = String> {
    // 7- and 8-digit bodies spread across the range
    (0..400u32).map(|i| (1_000_000 + i * 247_529).to_string())
}

#[test]
fn generated_ruts_validate_raw_and_formatted() {
    for body in sample_bodies() {
        let check = check_digit(&body).expect("digit body");
        let raw = format!("{body}{check}");
        let dashed = format!("{body}-{check}");

        assert!(validate_rut(&raw), "raw {raw}");
        assert!(validate_rut(&dashed), "dashed {dashed}");
        assert!(validate_rut(&format_rut(&raw)), "formatted {raw}");
        assert!(validate_rut(&raw.to_uppercase()), "uppercase {raw}");
    }
}

#[test]
fn flipping_check_character_invalidates() {
    let alphabet = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'k'];
    for body in sample_bodies() {
        let check = check_digit(&body).expect("digit body");
        for other in alphabet.iter().filter(|c| **c != check) {
            assert!(!validate_rut(&format!("{body}-{other}")), "{body}-{other}");
        }
    }
}

#[test]
fn rut_length_must_be_eight_or_nine() {
    assert!(validate_rut("11111111-1"));
    assert!(!validate_rut("1111111"));
    assert!(!validate_rut("111111-1"));
    assert!(!validate_rut("1.111.111.111-1"));
    assert!(!validate_rut(""));
    assert!(!validate_rut("---"));
}

#[test]
fn format_is_idempotent() {
    for raw in ["123456785", "12.345.678-5", "11111111-1", "7654321-6", "98765432k"] {
        let once = format_rut(raw);
        assert_eq!(format_rut(&once), once, "{raw}");
    }
    assert_eq!(format_rut("123456785"), "12.345.678-5");
    assert_eq!(format_rut("76543216"), "7.654.321-6");
    assert_eq!(format_rut("98765432k"), "98.765.432-k");
}

#[test]
fn format_passes_short_input_through() {
    for raw in ["", "1", "1234567", "12.345-6", "abc"] {
        assert_eq!(format_rut(raw), raw);
    }
}

#[test]
fn normalize_ignores_punctuation_and_case() {
    assert_eq!(normalize_rut("12.345.678-K"), normalize_rut("12345678k"));
    assert_eq!(normalize_rut("11.111.111-1"), "111111111");
}

#[test]
fn surrounding_whitespace_is_not_stripped() {
    assert!(validate_rut("11111111-1"));
    assert!(!validate_rut(" 11111111-1 "));
    assert_eq!(normalize_rut(" 1-1 "), " 11 ");
}

#[test]
fn email_and_phone_examples() {
    assert!(validate_email("test@example.com"));
    assert!(!validate_email("testexample.com"));
    assert!(!validate_email("test@examplecom"));
    assert!(!validate_email("test @example.com"));

    assert!(validate_phone("+56912345678"));
    assert!(!validate_phone("123"));
    for tail in ["12345678", "56912345678", "9"] {
        assert!(!validate_phone(&format!("+0{tail}")));
    }
}

#[test]
fn birthday_relative_to_today() {
    let today = Local::now().date_naive();
    let same_day = format!("1990-{:02}-{:02}", today.month(), today.day());
    assert!(is_birthday_today(&same_day, today));

    let tomorrow = today.checked_add_days(Days::new(1)).unwrap();
    let other_day = format!("1990-{:02}-{:02}", tomorrow.month(), tomorrow.day());
    assert!(!is_birthday_today(&other_day, today));

    assert!(!is_birthday_today("invalid-date", today));
}

#[test]
fn age_exactly_n_years_and_one_day_short() {
    let today = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
    for n in [0, 1, 18, 34, 99] {
        let birth = NaiveDate::from_ymd_opt(today.year() - n, today.month(), today.day()).unwrap();
        assert_eq!(calculate_age(&birth.to_string(), today), Some(n));

        let day_later = birth.checked_add_days(Days::new(1)).unwrap();
        assert_eq!(calculate_age(&day_later.to_string(), today), Some(n - 1));
    }
}
