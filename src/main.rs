#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{
        api::{self, ApiState},
        app::*,
        config::SiteConfig,
    };
    use tower_http::trace::TraceLayer;
    use tracing::{error, info};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,portfolio_site=debug")),
        )
        .init();

    let site_config = SiteConfig::from_env().expect("invalid site configuration");
    let (api_state, smtp) = ApiState::from_config(&site_config);
    if let Some(smtp) = smtp {
        tokio::spawn(async move {
            match smtp.verify().await {
                Ok(true) => info!("SMTP server is ready to take messages"),
                Ok(false) => error!("SMTP server refused the connection check"),
                Err(err) => error!("SMTP connection check failed: {err}"),
            }
        });
    }

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .merge(api::router(api_state))
        .layer(TraceLayer::new_for_http());

    info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
