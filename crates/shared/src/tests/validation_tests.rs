use super::*;

#[test]
fn short_trimmed_names_fail_and_longer_names_pass() {
    for name in ["", "Al", "  Al  ", "   ", "a b"] {
        let expected = if name.trim().chars().count() < 3 {
            Some(NAME_ERROR)
        } else {
            None
        };
        assert_eq!(check_name(name), expected, "name={name:?}");
    }
    assert_eq!(check_name("Bob"), None);
    assert_eq!(check_name("  !!! "), None);
}

#[test]
fn name_length_counts_characters_not_bytes() {
    assert_eq!(check_name("éé"), Some(NAME_ERROR));
    assert_eq!(check_name("Zoë"), None);
}

#[test]
fn email_requires_at_sign_and_com_suffix() {
    assert_eq!(check_email("a@b.com"), None);
    assert_eq!(check_email("a@b.net"), Some(EMAIL_ERROR));
    assert_eq!(check_email("ab.com"), Some(EMAIL_ERROR));
    assert_eq!(check_email("a@b.COM"), Some(EMAIL_ERROR));
    assert_eq!(check_email(""), Some(EMAIL_ERROR));
}

#[test]
fn loose_email_rule_accepts_odd_but_matching_input() {
    assert_eq!(check_email("@.com"), None);
}

#[test]
fn whatsapp_requires_exactly_eleven_ascii_digits() {
    assert_eq!(check_whatsapp("12345678901"), None);
    assert_eq!(check_whatsapp("1234567890"), Some(WHATSAPP_ERROR));
    assert_eq!(check_whatsapp("123456789012"), Some(WHATSAPP_ERROR));
    assert_eq!(check_whatsapp("1234567890a"), Some(WHATSAPP_ERROR));
    assert_eq!(check_whatsapp("+1234567890"), Some(WHATSAPP_ERROR));
    assert_eq!(check_whatsapp("١٢٣٤٥٦٧٨٩٠١"), Some(WHATSAPP_ERROR));
}

#[test]
fn short_name_with_valid_rest_only_reports_name() {
    let report = validate(&FormFields::new("Al", "a@b.com", "12345678901"));
    assert!(!report.valid);
    assert_eq!(report.errors.name, NAME_ERROR);
    assert!(report.errors.email.is_empty());
    assert!(report.errors.whatsapp.is_empty());
}

#[test]
fn fully_valid_form_has_clear_errors() {
    let report = validate(&FormFields::new("Alice", "a@b.com", "12345678901"));
    assert!(report.valid);
    assert!(report.errors.is_clear());
}

#[test]
fn every_rule_reports_independently() {
    let report = validate(&FormFields::default());
    assert!(!report.valid);
    assert_eq!(report.errors.name, NAME_ERROR);
    assert_eq!(report.errors.email, EMAIL_ERROR);
    assert_eq!(report.errors.whatsapp, WHATSAPP_ERROR);
}
