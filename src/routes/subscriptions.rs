use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;
use serde::Deserialize;

use crate::capture::CaptureForm;
use crate::capture::Notification;
use crate::capture::Notifier;
use crate::capture::Variant;
use crate::persistence::SaveEmail;
use crate::utils::redirect;

#[derive(Deserialize)]
pub struct FormData {
    email: String,
}

/// Notifications become flash cookies, shown once by `GET /` after the
/// redirect
struct FlashNotifier;

impl Notifier for FlashNotifier {
    fn notify(
        &self,
        notification: Notification,
    ) {
        match notification.variant {
            Variant::Confirmation => FlashMessage::success(notification.description).send(),
            Variant::Destructive => FlashMessage::error(notification.description).send(),
        }
    }
}

/// `POST /subscriptions`
///
/// The landing page form without JavaScript: the capture form runs here,
/// server-side, against the in-process action. Always ends in a 303 back to
/// `/`; if the input survived (anything but a confirmed save), it rides along
/// as `?email=` so the field comes back prefilled.
///
/// # Request example
///
/// ```sh
///     curl -v --data 'email=john%40foo.com' http://127.0.0.1:8000/subscriptions
/// ```
///
/// A body without an `email` field is refused by the `Form` extractor (400).
#[tracing::instrument(
    name = "Capturing subscriber email from form",
    skip(form, action),
    fields(subscriber_email = %form.email)
)]
pub async fn subscribe(
    form: web::Form<FormData>,
    action: web::Data<SaveEmail>,
) -> HttpResponse {
    let mut capture = CaptureForm::with_input(form.0.email);
    capture.on_submit(action.get_ref(), &FlashNotifier).await;

    match capture.input() {
        "" => redirect("/"),
        kept => redirect(&format!("/?email={}", urlencoding::encode(kept))),
    }
}
