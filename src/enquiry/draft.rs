use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the visitor is enquiring about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Courses,
    Bootcamp,
    Degree,
    Certification,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::Courses,
        Interest::Bootcamp,
        Interest::Degree,
        Interest::Certification,
    ];

    /// Value sent to the intake endpoint and used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Courses => "courses",
            Interest::Bootcamp => "bootcamp",
            Interest::Degree => "degree",
            Interest::Certification => "certification",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownInterest(pub String);

impl FromStr for Interest {
    type Err = UnknownInterest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|interest| interest.as_str() == s)
            .ok_or_else(|| UnknownInterest(s.to_string()))
    }
}

/// Text inputs of the enquiry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    FullName,
    Email,
    Phone,
    Message,
}

impl TextField {
    pub fn name(&self) -> &'static str {
        match self {
            TextField::FullName => "fullName",
            TextField::Email => "email",
            TextField::Phone => "phone",
            TextField::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnquiryDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub interest: Option<Interest>,
    pub message: String,
}

impl EnquiryDraft {
    pub fn set_text(&mut self, field: TextField, value: String) {
        match field {
            TextField::FullName => self.full_name = value,
            TextField::Email => self.email = value,
            TextField::Phone => self.phone = value,
            TextField::Message => self.message = value,
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Message => &self.message,
        }
    }

    /// Select values that don't name an interest clear the selection.
    pub fn select_interest(&mut self, value: &str) {
        self.interest = value.parse().ok();
    }

    /// The transmitted interest value, empty when nothing is selected.
    pub fn interest_value(&self) -> &'static str {
        self.interest.map(|i| i.as_str()).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        *self == EnquiryDraft::default()
    }

    pub fn form_fields(&self) -> [(&'static str, &str); 5] {
        [
            (TextField::FullName.name(), self.full_name.as_str()),
            (TextField::Email.name(), self.email.as_str()),
            (TextField::Phone.name(), self.phone.as_str()),
            ("interest", self.interest_value()),
            (TextField::Message.name(), self.message.as_str()),
        ]
    }

    /// `application/x-www-form-urlencoded` body for the intake endpoint.
    pub fn to_form_body(&self) -> String {
        self.form_fields()
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EnquiryDraft {
        let mut draft = EnquiryDraft::default();
        draft.set_text(TextField::FullName, "Ada Lovelace".to_string());
        draft.set_text(TextField::Email, "ada@example.com".to_string());
        draft.set_text(TextField::Phone, "+1 (555) 123-4567".to_string());
        draft.set_text(TextField::Message, "Tell me about bootcamps & degrees".to_string());
        draft.select_interest("bootcamp");
        draft
    }

    #[test]
    fn interest_parses_only_known_values() {
        assert_eq!("degree".parse::<Interest>(), Ok(Interest::Degree));
        assert_eq!(
            "Degree".parse::<Interest>(),
            Err(UnknownInterest("Degree".to_string()))
        );
        assert!("".parse::<Interest>().is_err());
    }

    #[test]
    fn selecting_placeholder_clears_interest() {
        let mut draft = filled();
        assert_eq!(draft.interest, Some(Interest::Bootcamp));
        draft.select_interest("");
        assert_eq!(draft.interest, None);
        assert_eq!(draft.interest_value(), "");
    }

    #[test]
    fn transmitted_interest_follows_last_selection() {
        let mut draft = EnquiryDraft::default();
        draft.select_interest("courses");
        draft.select_interest("certification");
        let fields = draft.form_fields();
        assert_eq!(fields[3], ("interest", "certification"));
    }

    #[test]
    fn form_body_keeps_field_order_and_encodes_values() {
        let body = filled().to_form_body();
        assert_eq!(
            body,
            "fullName=Ada%20Lovelace\
             &email=ada%40example.com\
             &phone=%2B1%20%28555%29%20123-4567\
             &interest=bootcamp\
             &message=Tell%20me%20about%20bootcamps%20%26%20degrees"
        );
    }

    #[test]
    fn empty_draft_sends_every_field() {
        assert_eq!(
            EnquiryDraft::default().to_form_body(),
            "fullName=&email=&phone=&interest=&message="
        );
    }

    #[test]
    fn text_accessors_round_through_set_text() {
        let draft = filled();
        assert_eq!(draft.text(TextField::Phone), "+1 (555) 123-4567");
        assert!(!draft.is_empty());
        assert!(EnquiryDraft::default().is_empty());
    }
}
