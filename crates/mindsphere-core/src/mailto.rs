//! `mailto:` URI construction.

/// A pre-filled mail composition link.
///
/// The recipient is written verbatim; subject and body are percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    pub recipient: String,
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl MailtoLink {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            subject: None,
            body: None,
        }
    }

    /// Set the subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the message body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Render the URI, e.g. `mailto:a@x.com?subject=Hi%20there&body=...`.
    pub fn to_uri(&self) -> String {
        let mut uri = format!("mailto:{}", self.recipient);
        let params: Vec<String> = [("subject", &self.subject), ("body", &self.body)]
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(|v| format!("{}={}", key, urlencoding::encode(v)))
            })
            .collect();

        if !params.is_empty() {
            uri.push('?');
            uri.push_str(&params.join("&"));
        }
        uri
    }
}

impl std::fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}
