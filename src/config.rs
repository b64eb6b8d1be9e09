use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::db::schema::validate_table_name;
use crate::topics::lexicon::Lexicon;

pub const DEFAULT_DB_PATH: &str = "./base.sqlite";
pub const DEFAULT_TABLE: &str = "Planilha1";
pub const DEFAULT_WEB_BIND: &str = "127.0.0.1";
pub const DEFAULT_WEB_PORT: u16 = 8050;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so a bare `escala6x1 init` works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    /// Survey table inside the database (the spreadsheet's sheet name)
    pub table: String,
    /// Optional JSON lexicon replacing the built-in topics
    pub lexicon_path: Option<PathBuf>,
    pub web_bind: String,
    pub web_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            table: DEFAULT_TABLE.to_string(),
            lexicon_path: None,
            web_bind: DEFAULT_WEB_BIND.to_string(),
            web_port: DEFAULT_WEB_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let table = env::var("ESCALA_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());
        validate_table_name(&table).context("ESCALA_TABLE is invalid")?;

        let web_port = match env::var("ESCALA_WEB_PORT") {
            Ok(port) => port
                .parse()
                .with_context(|| format!("ESCALA_WEB_PORT must be a port number, got {port:?}"))?,
            Err(_) => DEFAULT_WEB_PORT,
        };

        Ok(Self {
            db_path: env::var("ESCALA_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            table,
            lexicon_path: env::var("ESCALA_LEXICON_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            web_bind: env::var("ESCALA_WEB_BIND").unwrap_or_else(|_| DEFAULT_WEB_BIND.to_string()),
            web_port,
        })
    }

    /// The lexicon to classify with: the configured file, or the built-in
    /// topics when none is set.
    pub fn lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon_path {
            Some(path) => {
                let lexicon = Lexicon::load(path)?;
                info!(
                    path = %path.display(),
                    topics = lexicon.len(),
                    "Loaded custom lexicon"
                );
                Ok(lexicon)
            }
            None => Ok(Lexicon::builtin()),
        }
    }
}
