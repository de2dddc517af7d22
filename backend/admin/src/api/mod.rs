use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context as _, Result};
use hyper::{Body, Request, Response, Server, StatusCode};
use routerify::{Router, RouterService};

use crate::global::GlobalState;
use crate::views;

use self::error::{Result as RouteResult, RouteError};
use self::macros::make_response;

pub mod admin;
pub mod csrf;
pub mod error;
pub mod ext;
pub mod flash;
pub mod health;
pub mod macros;
pub mod middleware;

async fn not_found(_: Request<Body>) -> RouteResult<Response<Body>> {
    Ok(make_response!(
        StatusCode::NOT_FOUND,
        views::error::render(StatusCode::NOT_FOUND, "this page does not exist")
    ))
}

pub fn routes(global: &Arc<GlobalState>) -> Router<Body, RouteError> {
    Router::builder()
        .data(Arc::downgrade(global))
        // Mutating forms smuggle their logical verb in a _method field,
        // rewrite it before any route matching happens
        .middleware(middleware::method_override::method_override())
        .scope("/health", health::routes())
        .scope("/admin", admin::routes())
        .any(not_found)
        .err_handler_with_info(error::error_handler)
        .build()
        .expect("failed to build router")
}

pub async fn run(global: Arc<GlobalState>) -> Result<()> {
    let addr: SocketAddr = global.config.bind_address.parse()?;

    let service = RouterService::new(routes(&global)).expect("failed to build router service");

    let server = Server::try_bind(&addr)
        .context("failed to bind admin server")?
        .serve(service);

    tracing::info!("listening on {}", addr);

    let ctx = global.ctx.clone();
    server
        .with_graceful_shutdown(async move { ctx.done().await })
        .await
        .context("admin server failed")?;

    Ok(())
}
