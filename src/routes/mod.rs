mod health_check;
mod home;
mod save_email;
mod subscriptions;
pub use health_check::*;
pub use home::*;
pub use save_email::*;
pub use subscriptions::*;
