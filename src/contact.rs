use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config::RelayConfig;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const SUCCESS_NOTICE: &str = "Thanks for contacting me.";
pub const ERROR_NOTICE: &str = "Something went wrong.";

const MIN_NAME_CHARS: usize = 3;
const MIN_MESSAGE_CHARS: usize = 5;

static EMAIL_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .ok()
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Invalid Name!",
            Self::Email => "Invalid E-mail!",
            Self::Message => "Invalid Message!",
        }
    }
}

pub fn is_valid_email(raw: &str) -> bool {
    let normalized = raw.trim().to_lowercase();
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(&normalized))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Lists every failing field, in form order.
    pub fn validate(&self) -> Result<(), Vec<Field>> {
        let errors = Field::ALL
            .into_iter()
            .filter(|field| !self.is_field_valid(*field))
            .collect::<Vec<_>>();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn is_field_valid(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name.trim().chars().count() >= MIN_NAME_CHARS,
            Field::Email => is_valid_email(&self.email),
            Field::Message => self.message.trim().chars().count() >= MIN_MESSAGE_CHARS,
        }
    }
}

/// Template parameters handed to the email relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub from_name: String,
    pub to_name: String,
    pub from_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_email: Option<String>,
    pub message: String,
}

#[derive(Serialize)]
pub struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

impl<'a> EmailJsRequest<'a> {
    pub fn new(config: &'a RelayConfig, payload: &'a ContactPayload) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: payload,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("email relay is not configured")]
    NotConfigured,
    #[error("email relay request failed: {0}")]
    Network(String),
    #[error("email relay rejected the message with status {status}")]
    Rejected { status: u16 },
}

#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// `id` grows with every notice, so two identical messages in a row are still
/// told apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactAction {
    Edit(Field, String),
    Submit {
        to_name: String,
        to_email: Option<String>,
    },
    Finished(Result<(), RelayError>),
    DismissNotice,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: Vec<Field>,
    pub loading: bool,
    /// Set while a validated message waits for the relay.
    pub outgoing: Option<ContactPayload>,
    pub notice: Option<Notice>,
    notices_shown: u64,
}

impl ContactState {
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains(&field)
    }

    fn prepare(&self, to_name: &str, to_email: Option<&str>) -> Result<ContactPayload, Vec<Field>> {
        self.form.validate()?;

        Ok(ContactPayload {
            from_name: self.form.name.trim().to_string(),
            to_name: to_name.to_string(),
            from_email: self.form.email.trim().to_lowercase(),
            to_email: to_email.map(ToString::to_string),
            message: self.form.message.clone(),
        })
    }

    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => {
                if self.loading {
                    return;
                }
                match field {
                    Field::Name => self.form.name = value,
                    Field::Email => self.form.email = value,
                    Field::Message => self.form.message = value,
                }
            }
            ContactAction::Submit { to_name, to_email } => {
                if self.loading {
                    return;
                }
                match self.prepare(&to_name, to_email.as_deref()) {
                    Ok(payload) => {
                        self.errors.clear();
                        self.loading = true;
                        self.outgoing = Some(payload);
                    }
                    Err(errors) => self.errors = errors,
                }
            }
            ContactAction::Finished(outcome) => {
                if !self.loading {
                    return;
                }
                self.loading = false;
                self.outgoing = None;
                self.form = ContactForm::default();
                self.notices_shown += 1;
                let (kind, text) = match outcome {
                    Ok(()) => (NoticeKind::Success, SUCCESS_NOTICE),
                    Err(_) => (NoticeKind::Error, ERROR_NOTICE),
                };
                self.notice = Some(Notice {
                    id: self.notices_shown,
                    kind,
                    text,
                });
            }
            ContactAction::DismissNotice => self.notice = None,
        }
    }
}

/// Hands `payload` to `relay` and turns the outcome into the action that
/// ends the submission.
pub async fn deliver<R: EmailRelay>(relay: &R, payload: &ContactPayload) -> ContactAction {
    ContactAction::Finished(relay.send(payload).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn state_with(name: &str, email: &str, message: &str) -> ContactState {
        let mut state = ContactState::default();
        state.apply(ContactAction::Edit(Field::Name, name.into()));
        state.apply(ContactAction::Edit(Field::Email, email.into()));
        state.apply(ContactAction::Edit(Field::Message, message.into()));
        state
    }

    struct FakeRelay {
        outcome: Result<(), RelayError>,
        sent: RefCell<Vec<ContactPayload>>,
    }

    impl FakeRelay {
        fn answering(outcome: Result<(), RelayError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl EmailRelay for FakeRelay {
        async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError> {
            self.sent.borrow_mut().push(payload.clone());
            self.outcome.clone()
        }
    }

    fn submit(to_email: Option<&str>) -> ContactAction {
        ContactAction::Submit {
            to_name: "Vincenzo".into(),
            to_email: to_email.map(ToString::to_string),
        }
    }

    #[test]
    fn short_fields_and_bad_email_block_submission() {
        let mut state = state_with("Jo", "bad", "hi");

        state.apply(submit(None));

        assert_eq!(state.outgoing, None);
        assert_eq!(state.errors, vec![Field::Name, Field::Email, Field::Message]);
        assert!(!state.loading);
        assert_eq!(state.form.name, "Jo");
    }

    #[test]
    fn valid_form_enters_loading_then_resets_on_success() {
        let mut state = state_with("John Doe", "john@example.com", "Hello there");

        state.apply(submit(Some("me@example.com")));

        assert!(state.loading);
        assert!(state.errors.is_empty());
        assert_eq!(
            state.outgoing,
            Some(ContactPayload {
                from_name: "John Doe".into(),
                to_name: "Vincenzo".into(),
                from_email: "john@example.com".into(),
                to_email: Some("me@example.com".into()),
                message: "Hello there".into(),
            })
        );

        state.apply(ContactAction::Finished(Ok(())));

        assert!(!state.loading);
        assert_eq!(state.outgoing, None);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(
            state.notice,
            Some(Notice {
                id: 1,
                kind: NoticeKind::Success,
                text: SUCCESS_NOTICE,
            })
        );
    }

    #[test]
    fn relay_failure_still_resets_the_form() {
        let mut state = state_with("John Doe", "john@example.com", "Hello there");
        state.apply(submit(None));

        state.apply(ContactAction::Finished(Err(RelayError::Rejected { status: 400 })));

        assert!(!state.loading);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.notice.map(|notice| notice.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn edits_and_resubmits_are_ignored_while_sending() {
        let mut state = state_with("John Doe", "john@example.com", "Hello there");
        state.apply(submit(None));
        let outgoing = state.outgoing.clone();

        state.apply(ContactAction::Edit(Field::Name, "Someone else".into()));
        state.apply(submit(Some("other@example.com")));

        assert_eq!(state.form.name, "John Doe");
        assert_eq!(state.outgoing, outgoing);
    }

    #[test]
    fn repeated_identical_notices_get_distinct_ids() {
        let mut state = ContactState::default();

        for _ in 0..2 {
            state.apply(ContactAction::Edit(Field::Name, "John Doe".into()));
            state.apply(ContactAction::Edit(Field::Email, "john@example.com".into()));
            state.apply(ContactAction::Edit(Field::Message, "Hello there".into()));
            state.apply(submit(None));
            state.apply(ContactAction::Finished(Ok(())));
        }

        let notice = state.notice.expect("second send leaves a notice");
        assert_eq!(notice.id, 2);
        assert_eq!(notice.text, SUCCESS_NOTICE);
    }

    #[test]
    fn stray_finish_without_submission_is_ignored() {
        let mut state = state_with("John Doe", "john@example.com", "Hello there");

        state.apply(ContactAction::Finished(Ok(())));

        assert_eq!(state.form.name, "John Doe");
        assert_eq!(state.notice, None);
    }

    #[test]
    fn email_pattern_accepts_common_addresses() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("  John.Doe@Mail.Example.co.uk "));
        assert!(is_valid_email("user@[192.168.0.1]"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john doe@example.com"));
    }

    #[test]
    fn emailjs_body_wraps_template_params() {
        let config = RelayConfig {
            service_id: "service_1".into(),
            template_id: "template_1".into(),
            public_key: "public".into(),
            receiver: None,
        };
        let payload = ContactPayload {
            from_name: "John Doe".into(),
            to_name: "Vincenzo".into(),
            from_email: "john@example.com".into(),
            to_email: None,
            message: "Hello there".into(),
        };

        let body = serde_json::to_value(EmailJsRequest::new(&config, &payload)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_1",
                "template_id": "template_1",
                "user_id": "public",
                "template_params": {
                    "from_name": "John Doe",
                    "to_name": "Vincenzo",
                    "from_email": "john@example.com",
                    "message": "Hello there",
                },
            })
        );
    }

    #[tokio::test]
    async fn submission_is_delivered_and_reports_success() {
        let relay = FakeRelay::answering(Ok(()));
        let mut state = state_with("John Doe", "JOHN@example.com ", "Hello there");

        state.apply(submit(None));
        let payload = state.outgoing.clone().expect("valid form queues a message");
        let finished = deliver(&relay, &payload).await;
        state.apply(finished);

        assert!(!state.loading);
        assert_eq!(state.notice.as_ref().map(|notice| notice.text), Some(SUCCESS_NOTICE));
        assert_eq!(relay.sent.borrow()[0].from_email, "john@example.com");
    }

    #[tokio::test]
    async fn relay_error_becomes_error_notice() {
        let relay = FakeRelay::answering(Err(RelayError::NotConfigured));
        let mut state = state_with("John Doe", "john@example.com", "Hello there");

        state.apply(submit(None));
        let payload = state.outgoing.clone().expect("valid form queues a message");
        state.apply(deliver(&relay, &payload).await);

        assert_eq!(state.notice.map(|notice| notice.text), Some(ERROR_NOTICE));
        assert_eq!(relay.sent.borrow().len(), 1);
    }
}
