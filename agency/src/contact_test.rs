use super::*;

fn path_digits(link: &str) -> &str {
    let rest = link.strip_prefix(WHATSAPP_BASE).expect("link starts with wa.me base");
    rest.split('?').next().unwrap_or_default()
}

#[test]
fn whatsapp_link_strips_leading_plus() {
    let link = whatsapp_link("+919443246742", "hello");
    assert_eq!(link, "https://wa.me/919443246742?text=hello");
}

#[test]
fn whatsapp_link_without_plus_is_identical() {
    assert_eq!(
        whatsapp_link("919443246742", "hello"),
        whatsapp_link("+919443246742", "hello")
    );
}

#[test]
fn whatsapp_link_path_is_digits_only_for_formatted_numbers() {
    for phone in ["+91 94432 46742", "+1 (555) 010-2030", "555.010.2030", " 12 "] {
        let link = whatsapp_link(phone, DEFAULT_WHATSAPP_MESSAGE);
        assert!(link.starts_with("https://wa.me/"));
        let digits = path_digits(&link);
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()), "{link}");
    }
}

#[test]
fn whatsapp_link_percent_encodes_message() {
    let link = whatsapp_link("1", "Hi there & welcome?");
    assert_eq!(link, "https://wa.me/1?text=Hi%20there%20%26%20welcome%3F");
}

#[test]
fn whatsapp_link_query_has_no_raw_spaces() {
    let link = AGENCY.whatsapp_link();
    assert!(!link.contains(' '));
    assert!(link.starts_with("https://wa.me/919443246742?text=Hi"));
}

#[test]
fn agency_phone_and_whatsapp_match() {
    assert_eq!(AGENCY.phone, AGENCY.whatsapp_number);
    assert!(AGENCY.email.contains('@'));
    assert!(AGENCY.footer_email.contains('@'));
}
