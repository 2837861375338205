//! Agency contact details and the WhatsApp deep link.
//!
//! Phone and email are display-only strings. The only outbound action is the
//! `wa.me` link, which the page opens in a new browsing context.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Message prefilled in the chat when a visitor follows the WhatsApp link.
pub const DEFAULT_WHATSAPP_MESSAGE: &str =
    "Hi! I'm interested in your real estate services. Can you help me?";

/// How visitors reach the agency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    /// WhatsApp number in any human format (`+91 94432 46742` works).
    pub whatsapp_number: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    /// Address shown in the footer, which differs from the contact block.
    pub footer_email: &'static str,
    pub address: &'static str,
}

/// Velan Properties.
pub const AGENCY: ContactDetails = ContactDetails {
    whatsapp_number: "+919443246742",
    phone: "+919443246742",
    email: "velanproperties777@gmail.com",
    footer_email: "info@velanproperties.com",
    address: "123 Real Estate Avenue, Property City",
};

impl ContactDetails {
    /// Deep link to the agency's WhatsApp with the default message.
    #[must_use]
    pub fn whatsapp_link(&self) -> String {
        whatsapp_link(self.whatsapp_number, DEFAULT_WHATSAPP_MESSAGE)
    }
}

/// Build `https://wa.me/<digits>?text=<message>`.
///
/// Every non-digit character of `phone` is dropped, so `+91 (944) 324-6742`
/// and `919443246742` produce the same link. The message is percent-encoded.
#[must_use]
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("{WHATSAPP_BASE}{digits}?text={}", urlencoding::encode(message))
}
