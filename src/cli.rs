use crate::config::{Config, LogLevel};
use crate::errors::AppError;
use anyhow::{Error, Result};
use clap::{CommandFactory, Parser};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;
use twelf::{Layer, config};

const ENV_PREFIX: &str = "TEZOS_";

static SHOULD_SKIP_SERIALIZNG_FIELDS: AtomicBool = AtomicBool::new(false);

fn should_skip_serializng_fields<T>(_: &T) -> bool {
    SHOULD_SKIP_SERIALIZNG_FIELDS.load(Ordering::SeqCst)
}

/// Settings are layered: config file, then `TEZOS_*` environment variables,
/// then command-line flags.
#[derive(Parser, Debug, Serialize, Clone)]
#[command(author, version, about, long_about = None)]
#[config]
pub struct Args {
    #[arg(long, default_value = "0.0.0.0")]
    pub server_address: IpAddr,

    #[arg(long, default_value = "3000")]
    pub server_port: u16,

    #[arg(long, default_value = "1024")]
    pub server_concurrency_limit: usize,

    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    /// Base URL of the Tezos node RPC, e.g. http://localhost:8732
    #[arg(long)]
    pub node_url: Option<String>,

    #[arg(long, default_value = "main")]
    pub chain: String,

    #[arg(long = "node-timeout-sec", default_value = "30")]
    pub node_timeout_sec: u64,

    /// Upper bound of `maxPriority` for baking rights, also used when it is omitted
    #[arg(long, default_value = "5")]
    pub baking_rights_max_priority: u32,

    /// Maximum number of cycles a rights query may ask for
    #[arg(long, default_value = "5")]
    pub rights_max_cycles: usize,

    /// Maximum number of levels a rights query may ask for
    #[arg(long, default_value = "20480")]
    pub rights_max_levels: usize,

    #[arg(long, help = "Write the effective configuration to the config file and exit")]
    #[serde(skip_serializing_if = "should_skip_serializng_fields")]
    #[serde(default)]
    init: bool,

    #[arg(long, help = "Path to an existing configuration file")]
    #[serde(skip_serializing_if = "should_skip_serializng_fields")]
    config: Option<PathBuf>,
}

fn get_config_path() -> Result<PathBuf, AppError> {
    dirs::config_dir()
        .map(|dir| dir.join("tezos-rights-gateway").join("config.toml"))
        .ok_or(AppError::Config(
            "Could not determine config directory".into(),
        ))
}

impl Args {
    fn parse_args(config_path: &Path) -> Result<Args, AppError> {
        let no_config_file = !config_path.exists();
        let no_env_vars = std::env::vars().all(|(key, _val)| !key.starts_with(ENV_PREFIX));
        let empty_argv = std::env::args().len() == 1;
        if no_config_file && no_env_vars && empty_argv {
            Self::command().print_help()?;
            std::process::exit(1);
        }
        let matches = Self::command().get_matches();

        let mut config_layers = vec![
            Layer::Env(Some(String::from(ENV_PREFIX))),
            Layer::Clap(matches),
        ];
        if config_path.exists() {
            config_layers.insert(0, Layer::Toml(config_path.to_path_buf()));
        }

        Self::with_layers(&config_layers).map_err(|e| match e {
            twelf::Error::Toml(_) => AppError::Config(format!(
                "Failed to parse config file '{}'",
                config_path.to_string_lossy()
            )),
            _ => AppError::Config(e.to_string()),
        })
    }

    pub fn init() -> Result<Config, AppError> {
        let initial_args = Args::parse();
        let config_path = match initial_args.config {
            Some(path) => path,
            None => get_config_path()?,
        };

        let arguments = Args::parse_args(&config_path)?;

        SHOULD_SKIP_SERIALIZNG_FIELDS.store(true, Ordering::SeqCst);

        if arguments.init {
            arguments
                .to_file(&config_path)
                .map_err(|e| AppError::Config(e.to_string()))?;
            println!("\nConfig has been written to {config_path:?}");
            std::process::exit(0);
        }

        Config::from_args(arguments)
    }

    fn to_file(&self, file_path: &Path) -> Result<()> {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string(self).map_err(Error::new)?;
        let mut file = fs::File::create(file_path)?;
        file.write_all(toml_string.as_bytes())?;

        info!(path = %file_path.display(), "configuration written");
        Ok(())
    }
}
