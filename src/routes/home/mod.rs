use actix_web::http::header::ContentType;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;
use actix_web_flash_messages::Level;
use serde::Deserialize;

use crate::capture::Variant;

#[derive(Deserialize)]
pub struct HomeQuery {
    /// Input carried back after a failed attempt
    email: Option<String>,
}

/// `GET /`
///
/// Landing page with the "notify me" form. Pending flash messages (set by
/// `POST /subscriptions`) are rendered as toasts. A query string that does not
/// deserialize (e.g. a repeated `email`) only loses the prefill.
pub async fn home(
    query: Option<web::Query<HomeQuery>>,
    flash_messages: IncomingFlashMessages,
) -> HttpResponse {
    let mut toasts = String::new();
    for msg in flash_messages.iter() {
        let variant = match msg.level() {
            Level::Success => Variant::Confirmation,
            _ => Variant::Destructive,
        };
        toasts.push_str(&format!(
            "<div class=\"toast {}\" role=\"status\"><strong>{}</strong> <p>{}</p></div>\n",
            match variant {
                Variant::Confirmation => "toast-confirmation",
                Variant::Destructive => "toast-destructive",
            },
            variant.title(),
            // may echo a server-supplied message
            htmlescape::encode_minimal(msg.content()),
        ));
    }

    // the attribute is double-quoted, so escaping `"` (and `&<>`) is enough
    let email = query.and_then(|q| q.into_inner().email).unwrap_or_default();
    let email = htmlescape::encode_minimal(&email);

    let body = format!(
        r#"<!doctype html>
<html lang="es">
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <title>Offside Club</title>
  </head>
  <body>
    <section>
      <h1>Offside Club</h1>
      <p>Predice, compite y diviértete con tus amigos.</p>
    </section>
    {toasts}
    <section>
      <h2>¡Recibe una notificación cuando lancemos!</h2>
      <!-- `POST`, otherwise the address ends up in the URL -->
      <form action="/subscriptions" method="post">
        <input
          type="email"
          name="email"
          value="{email}"
          placeholder="Ingresa tu correo electrónico"
          aria-label="Correo electrónico para notificaciones"
        />
        <button type="submit">Notificarme</button>
      </form>
    </section>
    <footer>
      <p>© Offside Club. Todos los derechos reservados.</p>
    </footer>
  </body>
</html>
"#,
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}
