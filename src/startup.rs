//! src/startup.rs

use crate::configuration::Settings;
use crate::error::CrelyzorResult;
use crate::routes::{health_check, join_waitlist, landing};
use crate::waitlist_client::WaitlistClient;
use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> CrelyzorResult<Self> {
        let waitlist_client = configuration.waitlist.client()?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        // port 0 asks the OS for a free port
        let port = listener.local_addr()?.port();
        let server = run(listener, waitlist_client)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, waitlist_client: WaitlistClient) -> Result<Server, std::io::Error> {
    let waitlist_client = Data::new(waitlist_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(landing))
            .route("/waitlist", web::post().to(join_waitlist))
            .route("/health_check", web::get().to(health_check))
            .app_data(waitlist_client.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
