use actix_web::web;
use actix_web::HttpResponse;

use crate::persistence::SaveEmail;
use crate::persistence::SaveEmailRequest;

/// `POST /api/save-email`
///
/// The persistence action over HTTP, for the JS form and `HttpSaveEmail`.
/// Always 200: a rejected or unsaved email is reported in the body, not in the
/// status. A body that isn't `{"email": "..."}` is refused by the `Json`
/// extractor with a 400 before we get here.
///
/// # Request example
///
/// ```sh
///     curl --json '{"email": "john@foo.com"}' http://127.0.0.1:8000/api/save-email
/// ```
pub async fn save_email(
    body: web::Json<SaveEmailRequest>,
    action: web::Data<SaveEmail>,
) -> HttpResponse {
    let result = action.save_email(&body.email).await;
    HttpResponse::Ok().json(result)
}
