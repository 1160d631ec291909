use super::Outcome;
use super::Rejection;

// UI copy is Spanish, like the rest of the landing page
const EMPTY_INPUT: &str = "Por favor ingresa un correo electrónico.";
const INVALID_FORMAT: &str = "Por favor ingresa un correo electrónico válido.";
const SAVED: &str = "Te notificaremos cuando lancemos.";
const SAVE_FAILED: &str = "Hubo un problema al guardar tu correo. Intenta de nuevo.";
const UNEXPECTED: &str = "Hubo un problema inesperado. Intenta de nuevo.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Confirmation,
    Destructive,
}

impl Variant {
    pub fn title(self) -> &'static str {
        match self {
            Variant::Confirmation => "¡Gracias!",
            Variant::Destructive => "Error",
        }
    }
}

/// A transient, toast-like message. The title follows from the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub variant: Variant,
    pub description: String,
}

impl Notification {
    fn destructive(description: impl Into<String>) -> Self {
        Self {
            variant: Variant::Destructive,
            description: description.into(),
        }
    }

    pub fn title(&self) -> &'static str { self.variant.title() }
}

impl From<&Outcome> for Notification {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Rejected(Rejection::EmptyInput) => Self::destructive(EMPTY_INPUT),
            Outcome::Rejected(Rejection::InvalidFormat) => Self::destructive(INVALID_FORMAT),
            Outcome::Saved => Self {
                variant: Variant::Confirmation,
                description: SAVED.to_string(),
            },
            Outcome::Failed(Some(message)) if !message.is_empty() => {
                Self::destructive(message.as_str())
            }
            Outcome::Failed(_) => Self::destructive(SAVE_FAILED),
            Outcome::Unexpected => Self::destructive(UNEXPECTED),
        }
    }
}

/// Effect layer: how a notification reaches the visitor (a toast, a flash
/// cookie, a test recorder...)
pub trait Notifier {
    fn notify(
        &self,
        notification: Notification,
    );
}
