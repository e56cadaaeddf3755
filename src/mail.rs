use urlencoding::encode;

/// Turns a message into something a mail client can open.
pub trait MailComposer {
    fn compose(&self, recipient: &str, subject: &str, body: &str) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MailtoComposer;

impl MailComposer for MailtoComposer {
    fn compose(&self, recipient: &str, subject: &str, body: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode(subject),
            encode(body)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

/// `(value, label)` pairs for the subject dropdown.
pub const SUBJECT_OPTIONS: &[(&str, &str)] = &[
    ("general", "General Inquiry"),
    ("products", "Product Information"),
    ("partnership", "Business Partnership"),
    ("careers", "Career Opportunities"),
    ("support", "Customer Support"),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn subject_line(&self) -> String {
        let subject = if self.subject.is_empty() {
            "General Inquiry"
        } else {
            self.subject.as_str()
        };
        format!("Contact Form: {}", subject)
    }

    pub fn body(&self) -> String {
        let phone = if self.phone.is_empty() {
            "Not provided"
        } else {
            self.phone.as_str()
        };
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\nSubject: {}\n\nMessage:\n{}",
            self.name, self.email, phone, self.subject, self.message
        )
    }

    /// Builds the hand-off URI for `recipient` and clears every field.
    pub fn submit<C: MailComposer>(&mut self, composer: &C, recipient: &str) -> String {
        let uri = composer.compose(recipient, &self.subject_line(), &self.body());
        *self = ContactForm::default();
        uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingComposer {
        calls: RefCell<Vec<(String, String, String)>>,
    }

    impl MailComposer for RecordingComposer {
        fn compose(&self, recipient: &str, subject: &str, body: &str) -> String {
            self.calls
                .borrow_mut()
                .push((recipient.to_string(), subject.to_string(), body.to_string()));
            "fake:uri".to_string()
        }
    }

    fn jane() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Jane".into());
        form.set(ContactField::Email, "jane@x.com".into());
        form.set(ContactField::Subject, "careers".into());
        form.set(ContactField::Message, "Hi".into());
        form
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let mut form = jane();
        let uri = form.submit(&MailtoComposer, "hr@clifepharmaceuticals.com");

        assert!(uri.starts_with("mailto:hr@clifepharmaceuticals.com?subject="));
        assert!(uri.contains("subject=Contact%20Form%3A%20careers"));
        assert!(uri.contains("&body=Name%3A%20Jane%0AEmail%3A%20jane%40x.com"));
        assert!(uri.contains("Phone%3A%20Not%20provided"));
    }

    #[test]
    fn submit_resets_every_field() {
        let mut form = jane();
        form.set(ContactField::Phone, "+1 555".into());
        form.submit(&MailtoComposer, "hr@clifepharmaceuticals.com");
        assert_eq!(form, ContactForm::default());
        assert!(form.name.is_empty() && form.message.is_empty());
    }

    #[test]
    fn composer_is_swappable() {
        let composer = RecordingComposer::default();
        let mut form = ContactForm::default();
        form.set(ContactField::Message, "Where are you based?".into());

        assert_eq!(form.submit(&composer, "hr@example.com"), "fake:uri");

        let calls = composer.calls.borrow();
        let (recipient, subject, body) = &calls[0];
        assert_eq!(recipient, "hr@example.com");
        assert_eq!(subject, "Contact Form: General Inquiry");
        assert_eq!(
            body,
            "Name: \nEmail: \nPhone: Not provided\nSubject: \n\nMessage:\nWhere are you based?"
        );
    }
}
