use color_eyre::eyre::{Result, WrapErr};
use happybird_core::EndpointRegistry;
use happybird_models::{Endpoint, ServingMode};
use happybird_ui::HappyBirdWatcher;
use hyper::header::{self, HeaderValue};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use std::convert::Infallible;
use std::future::Future;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::page;

const JSON: &str = "application/json";
const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

/// State shared by every connection. Nothing in it is mutated after startup.
#[derive(Debug)]
pub struct ServerContext {
    registry: EndpointRegistry,
    watcher: HappyBirdWatcher,
    mode: ServingMode,
}

impl ServerContext {
    #[must_use]
    pub fn new(registry: EndpointRegistry, watcher: HappyBirdWatcher, mode: ServingMode) -> Self {
        Self { registry, watcher, mode }
    }

    #[must_use]
    pub fn watcher(&self) -> &HappyBirdWatcher {
        &self.watcher
    }

    #[must_use]
    pub fn mode(&self) -> &ServingMode {
        &self.mode
    }
}

fn respond(status: StatusCode, content_type: &'static str, body: impl Into<Body>) -> Response<Body> {
    let mut response = Response::new(body.into());
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

fn internal_error(message: impl std::fmt::Display) -> Response<Body> {
    error!("Request failed: {}", message);
    respond(StatusCode::INTERNAL_SERVER_ERROR, TEXT, "internal server error")
}

async fn endpoint_response(ctx: Arc<ServerContext>, endpoint: Endpoint) -> Response<Body> {
    let result = tokio::task::spawn_blocking(move || ctx.registry.call(endpoint)).await;
    match result {
        Ok(Ok(value)) => respond(StatusCode::OK, JSON, value.to_string()),
        Ok(Err(e)) => internal_error(e),
        Err(e) => internal_error(e),
    }
}

async fn page_response(ctx: Arc<ServerContext>) -> Response<Body> {
    let blocking = Arc::clone(&ctx);
    let result = tokio::task::spawn_blocking(move || blocking.registry.fetch(blocking.watcher.endpoints())).await;
    match result {
        Ok(Ok(data)) => {
            let body = ctx.watcher.render_content(&data, &ctx.mode);
            respond(StatusCode::OK, HTML, page::live_page(&ctx.watcher, &body, &ctx.mode))
        }
        Ok(Err(e)) => internal_error(e),
        Err(e) => internal_error(e),
    }
}

/// Routes one request.
///
/// # Errors
///
/// Never fails; every outcome is expressed as a response.
pub async fn handle(ctx: Arc<ServerContext>, req: Request<Body>) -> Result<Response<Body>, Infallible> {
    let path = req.uri().path().to_string();
    debug!("{} {}", req.method(), path);

    if req.method() != Method::GET {
        let mut response = respond(StatusCode::METHOD_NOT_ALLOWED, TEXT, "method not allowed");
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("GET"));
        return Ok(response);
    }

    let response = if path == "/" {
        page_response(ctx).await
    } else if let Some(endpoint) = Endpoint::from_path(&path) {
        endpoint_response(ctx, endpoint).await
    } else {
        warn!("No route for {}", path);
        respond(StatusCode::NOT_FOUND, TEXT, "not found")
    };
    Ok(response)
}

/// Serves on an already bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Fails if the listener cannot be adopted or the server stops with an error.
pub async fn serve_with_shutdown<F>(ctx: Arc<ServerContext>, listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let make_service = make_service_fn(move |_| {
        let ctx = Arc::clone(&ctx);
        async move {
            let func = move |req| handle(Arc::clone(&ctx), req);
            Ok::<_, Infallible>(service_fn(func))
        }
    });

    let server = Server::from_tcp(listener)
        .wrap_err("Failed to adopt listener")?
        .serve(make_service);
    info!("Serving HappyBird Watcher on http://{}", server.local_addr());

    server.with_graceful_shutdown(shutdown).await?;
    info!("Server stopped");
    Ok(())
}

/// Binds `addr` and serves until Ctrl-C.
///
/// # Errors
///
/// Fails if the address cannot be bound or the server stops with an error.
pub async fn serve(ctx: Arc<ServerContext>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).wrap_err_with(|| format!("Failed to bind {addr}"))?;
    serve_with_shutdown(ctx, listener, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
        }
    })
    .await
}
