use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// How long a success or failure notice stays on screen.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on one relay request, so a stalled relay can't hold the form.
pub const RELAY_TIMEOUT: Duration = Duration::from_secs(10);

/// The notice on screen, with a counter that tells dismissal timers apart.
///
/// Each `show` starts a new generation. `dismiss` only clears the notice if
/// nothing has been shown since the matching `show`, so an identical notice
/// shown twice still gets its full time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeSlot<T> {
    current: Option<T>,
    generation: u64,
}

impl<T> Default for NoticeSlot<T> {
    fn default() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }
}

impl<T> NoticeSlot<T> {
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Replaces the notice and returns the generation its timer should carry.
    pub fn show(&mut self, notice: T) -> u64 {
        self.generation += 1;
        self.current = Some(notice);
        self.generation
    }

    /// Returns whether anything was cleared.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}")]
    MissingField(&'static str),
    #[error("{0} doesn't look like an email address")]
    InvalidEmail(String),
    #[error("Contact relay isn't configured: {0} is not set")]
    NotConfigured(&'static str),
    #[error("Couldn't reach the mail relay: {0}")]
    Relay(String),
    #[error("Mail relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.email.trim(), self.message.trim())
    }

    /// Trims every field and checks that nothing is blank and the email is plausible.
    pub fn validate(&self) -> Result<Self, ContactError> {
        let form = self.trimmed();
        if form.name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if form.email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if form.message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        if !is_valid_email(&form.email) {
            return Err(ContactError::InvalidEmail(form.email));
        }
        Ok(form)
    }
}

/// Loose shape check: one `@`, something before it, a dotted domain after it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub to_email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayConfig {
    pub fn from_env(default_recipient: &str) -> Result<Self, ContactError> {
        Self::from_lookup(|key| std::env::var(key).ok(), default_recipient)
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F, default_recipient: &str) -> Result<Self, ContactError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ContactError::NotConfigured(key));

        Ok(Self {
            service_id: require("EMAILJS_SERVICE_ID")?,
            template_id: require("EMAILJS_TEMPLATE_ID")?,
            public_key: require("EMAILJS_PUBLIC_KEY")?,
            endpoint: get("EMAILJS_ENDPOINT").unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string()),
            recipient: get("CONTACT_RECIPIENT").unwrap_or_else(|| default_recipient.to_string()),
            timeout: RELAY_TIMEOUT,
        })
    }

    pub fn payload(&self, form: &ContactForm) -> RelayPayload {
        RelayPayload {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            user_id: self.public_key.clone(),
            template_params: TemplateParams {
                from_name: form.name.clone(),
                from_email: form.email.clone(),
                to_email: self.recipient.clone(),
                message: form.message.clone(),
            },
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn relay(
    client: &reqwest::Client,
    config: &RelayConfig,
    form: &ContactForm,
) -> Result<(), ContactError> {
    let res = client
        .post(&config.endpoint)
        .timeout(config.timeout)
        .json(&config.payload(form))
        .send()
        .await
        .map_err(|e| ContactError::Relay(e.to_string()))?;

    let status = res.status();
    if status.is_success() {
        return Ok(());
    }
    let body = res.text().await.unwrap_or_default();
    Err(ContactError::Rejected {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| map.get(key).cloned()
    }

    const FULL: &[(&str, &str)] = &[
        ("EMAILJS_SERVICE_ID", "service_abc"),
        ("EMAILJS_TEMPLATE_ID", "template_xyz"),
        ("EMAILJS_PUBLIC_KEY", "pk_123"),
    ];

    #[test]
    fn test_repeated_notice_keeps_full_time() {
        let mut slot = NoticeSlot::default();
        let first = slot.show("Please fill in your name");
        let second = slot.show("Please fill in your name");

        // the first timer fires while the second notice is still showing
        assert!(!slot.dismiss(first));
        assert_eq!(slot.current(), Some(&"Please fill in your name"));

        assert!(slot.dismiss(second));
        assert_eq!(slot.current(), None);
        assert!(!slot.dismiss(second));
    }

    #[test]
    fn test_validate_trims() {
        let form = ContactForm::new("  Ada ", " ada@example.com ", "\nHello there\n");
        assert_eq!(
            form.validate(),
            Ok(ContactForm::new("Ada", "ada@example.com", "Hello there"))
        );
    }

    #[test]
    fn test_validate_blank_fields() {
        let form = ContactForm::new("   ", "ada@example.com", "hi");
        assert_eq!(form.validate(), Err(ContactError::MissingField("name")));

        let form = ContactForm::new("Ada", "ada@example.com", "  ");
        assert_eq!(form.validate(), Err(ContactError::MissingField("message")));
    }

    #[test]
    fn test_validate_email_shape() {
        let form = ContactForm::new("Ada", "not-an-email", "hi");
        assert_eq!(
            form.validate(),
            Err(ContactError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email("a b@c.co"));
    }

    #[test]
    fn test_config_requires_credentials() {
        let err = RelayConfig::from_lookup(env(&[]), "me@example.com").unwrap_err();
        assert_eq!(err, ContactError::NotConfigured("EMAILJS_SERVICE_ID"));

        let err = RelayConfig::from_lookup(
            env(&[
                ("EMAILJS_SERVICE_ID", "s"),
                ("EMAILJS_TEMPLATE_ID", "t"),
                ("EMAILJS_PUBLIC_KEY", "  "),
            ]),
            "me@example.com",
        )
        .unwrap_err();
        assert_eq!(err, ContactError::NotConfigured("EMAILJS_PUBLIC_KEY"));
    }

    #[test]
    fn test_config_defaults() {
        let config = RelayConfig::from_lookup(env(FULL), "me@example.com").unwrap();
        assert_eq!(config.endpoint, DEFAULT_RELAY_ENDPOINT);
        assert_eq!(config.recipient, "me@example.com");
        assert_eq!(config.timeout, RELAY_TIMEOUT);

        let mut overrides = FULL.to_vec();
        overrides.push(("CONTACT_RECIPIENT", "inbox@example.org"));
        overrides.push(("EMAILJS_ENDPOINT", "http://localhost:9000/send"));
        let config = RelayConfig::from_lookup(env(&overrides), "me@example.com").unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/send");
        assert_eq!(config.recipient, "inbox@example.org");
    }

    #[test]
    fn test_payload_shape() {
        let config = RelayConfig::from_lookup(env(FULL), "me@example.com").unwrap();
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        let json = serde_json::to_value(config.payload(&form)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "to_email": "me@example.com",
                    "message": "Hello"
                }
            })
        );
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_relay_gives_up_on_silent_server() {
        use std::{net::TcpListener, thread, time::Instant};

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            // accept and never answer
            let held = listener.accept();
            thread::sleep(Duration::from_secs(5));
            drop(held);
        });

        let mut config = RelayConfig::from_lookup(env(FULL), "me@example.com").unwrap();
        config.endpoint = format!("http://{addr}/send");
        config.timeout = Duration::from_millis(200);
        let form = ContactForm::new("Ada", "ada@example.com", "hi");

        let started = Instant::now();
        let res = relay(&reqwest::Client::new(), &config, &form).await;
        assert!(matches!(res, Err(ContactError::Relay(_))), "{res:?}");
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
