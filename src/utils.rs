use actix_web::http::header::LOCATION;
use actix_web::HttpResponse;

/// Walk the `source` chain of an error, one cause per line. Intended for
/// `Debug` impls of our `thiserror` enums, so that logged errors carry their
/// full context rather than just the top-level message.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }
    Ok(())
}

/// 303 See Other; the browser follows up with a `GET` to `location`
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}
