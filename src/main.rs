use anyhow::{bail, Context};
use clap::Parser;
use sendcloud::config::cli::Command;
use sendcloud::config::toml_config::TomlConfig;
use sendcloud::utils::logger;
use sendcloud::utils::validation::Validate;
use sendcloud::{Api, ApiConfig, CliConfig, Credentials, Matcher};

fn load_settings(config: &CliConfig) -> anyhow::Result<(Credentials, ApiConfig)> {
    let file = match &config.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to read settings from {}", path))?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let from_file = file.as_ref().and_then(TomlConfig::credentials);
    let api_key = config
        .api_key
        .clone()
        .or_else(|| from_file.as_ref().map(|c| c.api_key().to_string()));
    let api_secret = config
        .api_secret
        .clone()
        .or_else(|| from_file.as_ref().map(|c| c.api_secret().to_string()));

    let (Some(api_key), Some(api_secret)) = (api_key, api_secret) else {
        bail!("API key and secret are required (--api-key/--api-secret or a [credentials] section)");
    };

    let endpoints = file.map(|f| f.endpoints).unwrap_or_default();
    Ok((Credentials::new(api_key, api_secret), endpoints))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    let (credentials, endpoints) = load_settings(&config)?;
    tracing::debug!("Loaded API credentials");
    let api = Api::with_config(credentials, endpoints);

    match config.command {
        Command::ServicePoints(args) => {
            let matcher = Matcher::from(args);
            let points = api.service_point.get_service_points(&matcher).await?;
            tracing::info!("Found {} service points", points.len());
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
        Command::Resolve(args) => {
            let matcher = Matcher::from(args);
            let id = api.service_point.get_service_point(&matcher).await?;
            println!("{}", serde_json::json!({ "id": id }));
        }
    }

    Ok(())
}
