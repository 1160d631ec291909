use std::net::TcpListener;
use std::sync::Arc;

use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use secrecy::ExposeSecret;
use secrecy::Secret;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::persistence::SaveEmail;
use crate::routes::health_check;
use crate::routes::home;
use crate::routes::save_email;
use crate::routes::subscribe;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the listener and wire the file-backed store into the save-email
    /// action. Nothing touches the store until the first submission; its
    /// directory is created then.
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;

        // with port 0, the OS picked one; remember which
        let port = listener.local_addr()?.port();

        let store = cfg.store.file_store();
        tracing::info!(store.path = %store.path().display(), "appending subscribers to file");
        let action = SaveEmail::new(Arc::new(store));

        let server = run(listener, action, cfg.application.hmac_secret)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call (or
    /// passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// The server is not responsible for binding to an address, it only listens to
/// an already bound address.
///
/// Declares all endpoints.
pub fn run(
    listener: TcpListener,
    action: SaveEmail,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    // panics below 64 bytes, so check first
    if hmac_secret.expose_secret().len() < 64 {
        anyhow::bail!("hmac_secret must be at least 64 bytes long");
    }
    let secret_key = Key::from(hmac_secret.expose_secret().as_bytes());

    // client side cookies; this is where the form's notifications travel
    // between `POST /subscriptions` and the `GET /` it redirects to
    let cookie_store = CookieMessageStore::builder(secret_key).build();
    let msg_framework = FlashMessagesFramework::builder(cookie_store).build();

    // `Data` is externally an `Arc`; every worker shares the one action, and
    // through it the one store
    let action = web::Data::new(action);

    // note the closure; actix-web spins up one worker per core, each running
    // its own copy of the `App` built here
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(msg_framework.clone())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/subscriptions", web::post().to(subscribe))
            .route("/api/save-email", web::post().to(save_email))
            .app_data(action.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
