//! Contact form state and submission handling.
//!
//! Nothing here talks to a backend: submitting shows a fixed notice and
//! clears the form.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

// Same shape the browser applies to `<input type="email">`.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern should compile")
});

pub const SENT_TITLE: &str = "Message sent!";
pub const SENT_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Value of the input's `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FieldChanged { field: Field, value: String },
    Submitted,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::FieldChanged { field, value } => match field {
                Field::Name => Self { name: value, ..self },
                Field::Email => Self {
                    email: value,
                    ..self
                },
                Field::Message => Self {
                    message: value,
                    ..self
                },
            },
            Action::Submitted => Self::default(),
        }
    }

    /// Checks what the form's `required` and `type="email"` attributes
    /// enforce in the browser.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in Field::ALL {
            if self.get(field).is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        if !is_email_shaped(self.email.trim()) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

pub fn is_email_shaped(s: &str) -> bool {
    EMAIL_SHAPE.is_match(s)
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn message_sent() -> Self {
        Self {
            title: SENT_TITLE.to_string(),
            description: SENT_DESCRIPTION.to_string(),
        }
    }
}

pub trait Notify {
    fn notify(&mut self, notice: Notice);
}

impl Notify for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

#[derive(Debug, Clone)]
pub struct ContactFormController<N> {
    state: FormState,
    notifier: N,
}

impl<N: Notify> ContactFormController<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            state: FormState::default(),
            notifier,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn dispatch(&mut self, action: Action) {
        if action == Action::Submitted {
            self.notifier.notify(Notice::message_sent());
        }
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    pub fn update_field(&mut self, field: Field, value: String) {
        self.dispatch(Action::FieldChanged { field, value });
    }

    /// Notify and clear. Does not look at the field contents.
    pub fn submit(&mut self) {
        log::debug!("contact form submitted");
        self.dispatch(Action::Submitted);
    }

    /// Submit only if the form passes the same checks the browser applies.
    /// On error the state is left as it was and nothing is shown.
    pub fn submit_checked(&mut self) -> Result<(), FormError> {
        self.state.validate()?;
        self.submit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn controller() -> ContactFormController<Vec<Notice>> {
        ContactFormController::new(Vec::new())
    }

    fn filled(name: &str, email: &str, message: &str) -> ContactFormController<Vec<Notice>> {
        let mut c = controller();
        c.update_field(Field::Name, name.to_string());
        c.update_field(Field::Email, email.to_string());
        c.update_field(Field::Message, message.to_string());
        c
    }

    #[test]
    fn test_starts_empty() {
        let c = controller();
        assert_eq!(c.state(), &FormState::default());
        for field in Field::ALL {
            assert_eq!(c.state().get(field), "");
        }
        assert!(c.notifier().is_empty());
    }

    #[test]
    fn test_field_isolation() {
        let writes = [
            (Field::Name, "Ada"),
            (Field::Message, "first"),
            (Field::Email, "ada@example.com"),
            (Field::Name, ""),
            (Field::Message, "second line\nwith newline"),
            (Field::Name, "Ada Lovelace"),
            (Field::Email, "not an email"),
        ];
        let mut c = controller();
        for (i, (field, value)) in writes.iter().enumerate() {
            let before = c.state().clone();
            c.update_field(*field, value.to_string());
            assert_eq!(c.state().get(*field), *value, "write {i}");
            for other in Field::ALL.into_iter().filter(|f| f != field) {
                assert_eq!(c.state().get(other), before.get(other), "write {i}");
            }
        }
        assert_eq!(
            c.state(),
            &FormState {
                name: "Ada Lovelace".to_string(),
                email: "not an email".to_string(),
                message: "second line\nwith newline".to_string(),
            }
        );
        assert!(c.notifier().is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut c = controller();
        c.update_field(Field::Name, "Bob".to_string());
        c.update_field(Field::Name, "Bobby".to_string());
        assert_eq!(c.state().name, "Bobby");
        assert_eq!(c.state().email, "");
        assert_eq!(c.state().message, "");
    }

    #[test]
    fn test_submit_resets_and_notifies() {
        let mut c = filled("Ada", "ada@example.com", "Hello");
        c.submit_checked().expect("form should be valid");
        assert_eq!(c.state(), &FormState::default());
        assert_eq!(c.notifier().len(), 1);
        assert_eq!(c.notifier()[0].title, "Message sent!");
        assert_eq!(
            c.notifier()[0].description,
            "Thank you for your message. I'll get back to you soon!"
        );
    }

    #[test]
    fn test_submit_twice() {
        let mut c = filled("Ada", "ada@example.com", "Hello");
        c.submit();
        c.submit();
        assert_eq!(c.state(), &FormState::default());
        assert_eq!(c.notifier(), &vec![Notice::message_sent(), Notice::message_sent()]);
    }

    #[test]
    fn test_submit_blocked_without_message() {
        let mut c = filled("Ada", "ada@example.com", "");
        let before = c.state().clone();
        assert_eq!(c.submit_checked(), Err(FormError::Missing(Field::Message)));
        assert_eq!(c.state(), &before);
        assert!(c.notifier().is_empty());
    }

    #[test]
    fn test_submit_blocked_on_bad_email() {
        let mut c = filled("Ada", "ada.example.com", "Hello");
        assert_eq!(
            c.submit_checked(),
            Err(FormError::InvalidEmail("ada.example.com".to_string()))
        );
        assert_eq!(c.state().email, "ada.example.com");
        assert!(c.notifier().is_empty());
    }

    #[test]
    fn test_validate_order() {
        assert_eq!(
            FormState::default().validate(),
            Err(FormError::Missing(Field::Name))
        );
        let state = FormState::default().reduce(Action::FieldChanged {
            field: Field::Name,
            value: "Ada".to_string(),
        });
        assert_eq!(state.validate(), Err(FormError::Missing(Field::Email)));
        assert_eq!(
            FormError::Missing(Field::Email).to_string(),
            "email is required"
        );
    }

    #[test]
    fn test_reduce_submitted_from_any_state() {
        let states = [
            FormState::default(),
            FormState {
                name: "x".to_string(),
                email: String::new(),
                message: "y".to_string(),
            },
        ];
        for state in states {
            assert_eq!(state.reduce(Action::Submitted), FormState::default());
        }
    }

    #[test]
    fn test_email_shape() {
        for ok in ["ada@example.com", "a@b", "first.last+tag@sub.example.co.uk"] {
            assert!(is_email_shaped(ok), "{ok}");
        }
        for bad in ["ada", "@x.com", "a@-x.com", "a b@x.com", "a@x.com-", ""] {
            assert!(!is_email_shaped(bad), "{bad}");
        }
    }

    #[test]
    fn test_email_surrounding_whitespace_allowed() {
        let mut c = filled("Ada", "  ada@example.com ", "Hello");
        assert_eq!(c.submit_checked(), Ok(()));
    }
}
