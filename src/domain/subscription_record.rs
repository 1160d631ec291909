use chrono::DateTime;
use chrono::NaiveDateTime;
use chrono::Utc;

use super::SubscriberEmail;

const LINE_PREFIX: &str = "INSERT INTO subscribers (email, subscribed_at) VALUES ('";
const LINE_SUFFIX: &str = "');";
/// MySQL `DATETIME(6)` literal; always UTC, no offset (strict mode rejects `Z`)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Escape `raw` for embedding between single quotes in a MySQL string literal.
///
/// Quotes are doubled; backslashes and line terminators are backslash-escaped,
/// so an escaped value never contains a bare `'` or a newline and can neither
/// close the literal early nor split the record across lines.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\'' => out.push_str("''"),
            '\\' => out.push_str(r"\\"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\0' => out.push_str(r"\0"),
            c => out.push(c),
        }
    }
    out
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordParseError {
    #[error("line is not a subscriber INSERT")]
    NotAnInsert,
    #[error("email literal is not terminated")]
    UnterminatedEmail,
    #[error("unknown escape sequence: \\{0}")]
    UnknownEscape(char),
    #[error("malformed timestamp: {0}")]
    Timestamp(String),
    #[error("stored email no longer parses: {0}")]
    Email(String),
}

/// One accepted submission. Rendered as exactly one line of the append-only
/// store:
///
/// ```text
/// INSERT INTO subscribers (email, subscribed_at) VALUES ('o''brien@example.com', '2024-05-01 10:00:00.000000');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRecord {
    email: SubscriberEmail,
    subscribed_at: DateTime<Utc>,
}

impl SubscriptionRecord {
    /// Timestamp is assigned here, server-side; clients never supply it.
    pub fn new(email: SubscriberEmail) -> Self { Self::at(email, Utc::now()) }

    pub fn at(
        email: SubscriberEmail,
        subscribed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            subscribed_at,
        }
    }

    pub fn email(&self) -> &SubscriberEmail { &self.email }

    pub fn subscribed_at(&self) -> DateTime<Utc> { self.subscribed_at }

    /// Newline-terminated, so that a single write appends a whole record.
    pub fn to_line(&self) -> String {
        format!(
            "{LINE_PREFIX}{}', '{}{LINE_SUFFIX}\n",
            sanitize(self.email.as_ref()),
            self.subscribed_at.format(TIMESTAMP_FORMAT),
        )
    }

    /// Inverse of `to_line`. A trailing newline is tolerated.
    pub fn parse_line(line: &str) -> Result<Self, RecordParseError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let rest = line
            .strip_prefix(LINE_PREFIX)
            .ok_or(RecordParseError::NotAnInsert)?;

        let mut email = String::new();
        let mut end = None;
        let mut chars = rest.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match c {
                '\'' => match chars.peek() {
                    Some((_, '\'')) => {
                        chars.next();
                        email.push('\'');
                    }
                    _ => {
                        end = Some(i + 1);
                        break;
                    }
                },
                '\\' => match chars.next() {
                    Some((_, '\\')) => email.push('\\'),
                    Some((_, 'n')) => email.push('\n'),
                    Some((_, 'r')) => email.push('\r'),
                    Some((_, '0')) => email.push('\0'),
                    Some((_, other)) => return Err(RecordParseError::UnknownEscape(other)),
                    None => return Err(RecordParseError::UnterminatedEmail),
                },
                c => email.push(c),
            }
        }
        let end = end.ok_or(RecordParseError::UnterminatedEmail)?;

        let timestamp = rest[end..]
            .strip_prefix(", '")
            .and_then(|t| t.strip_suffix(LINE_SUFFIX))
            .ok_or_else(|| RecordParseError::Timestamp(rest[end..].to_string()))?;
        let subscribed_at = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
            .map_err(|e| RecordParseError::Timestamp(e.to_string()))?
            .and_utc();

        let email = SubscriberEmail::parse(email).map_err(RecordParseError::Email)?;
        Ok(Self::at(email, subscribed_at))
    }
}
