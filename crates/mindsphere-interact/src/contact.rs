//! Contact forms delivered as `mailto:` links.

use mindsphere_core::{MailtoLink, PageContext};
use mindsphere_observability::PageLogger;

/// The two contact forms on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactForm {
    /// Newsletter signup: name and email.
    Newsletter,
    /// Client inquiry: name, company, email and details.
    Inquiry,
}

impl ContactForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactForm::Newsletter => "newsletter",
            ContactForm::Inquiry => "inquiry",
        }
    }

    /// Fixed subject line.
    pub fn subject(&self) -> &'static str {
        match self {
            ContactForm::Newsletter => "Mindsphere Newsletter Signup",
            ContactForm::Inquiry => "Mindsphere Client Inquiry",
        }
    }

    /// `(field name, label)` pairs in body order.
    pub fn fields(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ContactForm::Newsletter => &[("name", "Name"), ("email", "Email")],
            ContactForm::Inquiry => &[
                ("name", "Name"),
                ("company", "Company"),
                ("email", "Email"),
                ("details", "Details"),
            ],
        }
    }

    /// Newline-joined `Label: value` lines.
    pub fn body(&self, values: &FormValues) -> String {
        self.fields()
            .iter()
            .map(|(name, label)| format!("{}: {}", label, values.get(name)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Build the pre-filled mail link.
    pub fn compose(&self, values: &FormValues, recipient: &str) -> MailtoLink {
        MailtoLink::new(recipient)
            .with_subject(self.subject())
            .with_body(self.body(values))
    }
}

/// Submitted field values. Missing fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: Vec<(String, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FormValues::new();
        for (k, v) in iter {
            values.set(k, v);
        }
        values
    }
}

/// Browser navigation.
pub trait Navigator {
    /// Navigate the page to `uri`.
    fn navigate(&mut self, uri: &str);
}

/// Records visited URIs.
impl Navigator for Vec<String> {
    fn navigate(&mut self, uri: &str) {
        self.push(uri.to_string());
    }
}

/// Handles contact form submissions.
#[derive(Debug, Clone)]
pub struct ContactController {
    recipient: String,
    logger: PageLogger,
}

impl ContactController {
    pub fn new(ctx: &PageContext, logger: &PageLogger) -> Self {
        Self {
            recipient: ctx.config.contact_recipient.clone(),
            logger: logger.for_component("interact"),
        }
    }

    /// Compose the mail link for `form` and navigate to it.
    ///
    /// Field values are never logged.
    pub fn submit<N: Navigator + ?Sized>(
        &self,
        form: ContactForm,
        values: &FormValues,
        navigator: &mut N,
    ) -> MailtoLink {
        let link = form.compose(values, &self.recipient);
        navigator.navigate(&link.to_uri());

        self.logger
            .info_builder("contact form submitted")
            .field("form", form.as_str())
            .emit();

        link
    }
}
