//! Client side of the capture pipeline: the "notify me" form.
//!
//! `decide` is the pure pre-flight check, `CaptureForm` the idle/submitting
//! state machine around it, and `Notifier` the only place where outcomes touch
//! the outside world.

mod action;
mod controller;
mod decision;
mod notification;

pub use action::HttpSaveEmail;
pub use action::SaveEmailAction;
pub use controller::CaptureForm;
pub use controller::FormState;
pub use controller::Submission;
pub use decision::decide;
pub use decision::Decision;
pub use decision::Outcome;
pub use decision::Rejection;
pub use notification::Notification;
pub use notification::Notifier;
pub use notification::Variant;
