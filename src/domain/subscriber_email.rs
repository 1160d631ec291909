use once_cell::sync::Lazy;
use regex::Regex;

// deliberately loose: something, `@`, something, `.`, something. this is a
// syntactic sanity check, not an address grammar (`validator` would reject
// plenty of addresses that people actually type into landing pages)
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email shape regex must compile"));

/// Shape check shared by the capture form (pre-flight) and the persistence
/// action (authoritative). Note that the match is not anchored; leading or
/// trailing garbage around a well-formed core is accepted.
pub fn is_well_formed(candidate: &str) -> bool { EMAIL_SHAPE.is_match(candidate) }

#[derive(Debug, Clone, PartialEq, Eq)]
/// An email address that has passed the shape check. The raw text is kept
/// verbatim (no trimming, no case folding).
///
/// Must be instantiated with `SubscriberEmail::parse`; the field is left
/// private so that the check cannot be bypassed.
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        match !email.is_empty() && is_well_formed(&email) {
            true => Ok(Self(email)),
            false => Err(format!("Invalid email: {email:?}")),
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str { &self.0 }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
