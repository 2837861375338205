//! Contact form field state.
//!
//! The form never leaves the browser. Submitting it yields a single
//! acknowledgement and wipes the fields; required-field checks are left to
//! the browser's native `required` handling.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

/// Text shown once per submission.
pub const ACKNOWLEDGEMENT: &str = "Thank you for your inquiry! We will contact you soon.";

/// Values bound to the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Result of a submission, shown to the visitor in a blocking dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Acknowledgement {
    message: &'static str,
}

impl Acknowledgement {
    #[must_use]
    pub fn message(self) -> &'static str {
        self.message
    }
}

/// Field selector for input bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    /// Discard the entered values and acknowledge the inquiry.
    pub fn submit(&mut self) -> Acknowledgement {
        *self = Self::default();
        Acknowledgement { message: ACKNOWLEDGEMENT }
    }
}
