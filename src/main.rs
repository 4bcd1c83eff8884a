use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moody_player_server::config::FileConfig;
use moody_player_server::media_vault::HttpMediaVault;
use moody_player_server::server::{run_server, RequestsLoggingLevel, ServerConfig};
use moody_player_server::song_store::SqliteSongStore;
use moody_player_server::songs::SongService;

const DEFAULT_VAULT_TIMEOUT_SEC: u64 = 300;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite songs database file.
    #[clap(value_parser = parse_path)]
    pub songs_db: PathBuf,

    /// Path to the TOML config file (admin password, media vault settings).
    #[clap(long, value_parser = parse_path)]
    pub config: PathBuf,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3000)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = FileConfig::load(&cli_args.config)?;

    info!("Opening SQLite songs database at {:?}...", cli_args.songs_db);
    let song_store = Arc::new(SqliteSongStore::new(&cli_args.songs_db)?);

    let vault_config = file_config.media_vault.clone();
    info!("Media vault configured at {}", vault_config.upload_url);
    let media_vault = Arc::new(HttpMediaVault::new(
        vault_config.upload_url,
        vault_config.private_key,
        vault_config.timeout_sec.unwrap_or(DEFAULT_VAULT_TIMEOUT_SEC),
    ));

    let song_service = Arc::new(SongService::new(
        song_store,
        media_vault,
        file_config.admin_password,
    ));

    let config = ServerConfig {
        port: file_config.port.unwrap_or(cli_args.port),
        requests_logging_level: cli_args.logging_level,
        frontend_dir_path: file_config.frontend_dir_path.or(cli_args.frontend_dir_path),
    };

    info!("Ready to serve at port {}!", config.port);
    run_server(config, song_service).await
}
