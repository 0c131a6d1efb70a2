use actix_web::{web, App, HttpServer};
use clap::Parser;
use glossary_gateway::utils::validation::Validate;
use glossary_gateway::{app, CliConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 解析設定並初始化日誌，失敗時已記錄於日誌
    let config = match cli.bootstrap() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting glossary-gateway");
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let service = web::Data::new(app::build_service(&config)?);
    let cors_origin = config.cors_allow_origin.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(app::cors_headers(&cors_origin))
            .configure(app::configure(service.clone()))
    })
    .bind(config.bind_address())?;

    tracing::info!(
        "🚀 Listening on http://{}:{} (upstream: {})",
        config.host,
        config.port,
        config.upstream_base_url
    );

    server.run().await?;
    Ok(())
}
