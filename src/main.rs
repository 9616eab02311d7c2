use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use article_service::db;
use article_service::handlers;
use article_service::middleware::{JwtAuthMiddleware, RequestTimingMiddleware};
use article_service::security::jwt;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct HealthState {
    db_pool: sqlx::Pool<sqlx::Postgres>,
}

impl HealthState {
    async fn check_postgres(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.db_pool)
            .await
            .map(|_| ())
    }
}

async fn health_summary(state: web::Data<HealthState>) -> HttpResponse {
    match state.check_postgres().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "article-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "article-service"
        })),
    }
}

async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

/// Article Service
///
/// Serves article, comment, like, and feed endpoints. Token issuance and the
/// social graph are owned by the identity provider; this service validates
/// tokens against its public key and reads the `users`/`follows` tables.
///
/// # Routes
///
/// - `/api/v1/articles/*` - Articles and their comments/likes
/// - `/api/v1/comments/*` - Comment updates and deletion
/// - `/api/v1/feed` - Articles from followed accounts
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match article_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting article-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    match jwt::load_validation_key() {
        Ok(public_key) => {
            if let Err(err) = jwt::initialize_validation_key(&public_key) {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to initialize JWT key: {err}"),
                ));
            }
        }
        Err(err) => {
            tracing::warn!(
                "JWT public key not configured ({err}); authenticated requests will be rejected"
            );
        }
    }

    // Initialize database connection pool
    let db_pool = match db::create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db::run_migrations(&db_pool).await {
        tracing::error!("Database migration failed: {:#}", e);
        return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
    }

    tracing::info!("Connected to database, migrations applied");

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let health_state = web::Data::new(HealthState {
        db_pool: db_pool.clone(),
    });

    let server = HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(health_state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            // Health check endpoints
            .route("/api/v1/health", web::get().to(health_summary))
            .route("/api/v1/health/live", web::get().to(liveness_check))
            .service(
                web::scope("/api/v1")
                    .wrap(JwtAuthMiddleware)
                    .wrap(RequestTimingMiddleware)
                    .service(web::scope("/feed").route("", web::get().to(handlers::get_feed)))
                    .service(
                        web::scope("/articles")
                            .service(
                                web::resource("")
                                    .route(web::get().to(handlers::list_articles))
                                    .route(web::post().to(handlers::create_article)),
                            )
                            .service(
                                web::resource("/{article_id}")
                                    .route(web::get().to(handlers::get_article))
                                    .route(web::put().to(handlers::update_article))
                                    .route(web::delete().to(handlers::delete_article)),
                            )
                            .service(
                                web::resource("/{article_id}/comments")
                                    .route(web::get().to(handlers::list_comments))
                                    .route(web::post().to(handlers::create_comment)),
                            )
                            .route(
                                "/{article_id}/like",
                                web::post().to(handlers::toggle_like),
                            ),
                    )
                    .service(
                        web::scope("/comments").service(
                            web::resource("/{comment_id}")
                                .route(web::put().to(handlers::update_comment))
                                .route(web::delete().to(handlers::delete_comment)),
                        ),
                    ),
            )
    })
    .bind(&bind_address)?
    .workers(4)
    .run();

    server.await?;

    tracing::info!("Article-service shutting down");

    Ok(())
}
