use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use escala6x1::config::Config;
use escala6x1::db::models::{LikertColumn, NewSurveyResponse};
use escala6x1::db::SurveyStore;
use escala6x1::output::{terminal, Report};
use escala6x1::topics::classifier::TopicClassifier;

/// Escala 6x1: analyze how the 6-days-on, 1-day-off schedule affects
/// workers' lives.
///
/// Reads survey answers from a SQLite table and turns them into
/// dashboard charts, including topic counts over the free-text answers.
#[derive(Parser)]
#[command(name = "escala6x1", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database and survey table
    Init,

    /// Add one survey response
    Add {
        /// Answer to "Escala6x1" (e.g. Sim / Não)
        #[arg(long)]
        escala: Option<String>,

        /// Likert answer about family life
        #[arg(long)]
        family: Option<String>,

        /// Likert answer about physical health
        #[arg(long)]
        physical: Option<String>,

        /// Likert answer about mental health
        #[arg(long)]
        mental: Option<String>,

        /// Free-text description of the impacts
        #[arg(long)]
        impactos: Option<String>,
    },

    /// Show the topics one free-text answer matches
    Classify {
        /// The answer to classify
        text: String,
    },

    /// Count impact topics over every stored free-text answer
    Impacts {
        /// Print JSON instead of the terminal chart
        #[arg(long)]
        json: bool,
    },

    /// Show the distribution of one Likert impact question
    Likert {
        #[arg(value_enum)]
        column: LikertColumn,

        /// Print JSON instead of the terminal chart
        #[arg(long)]
        json: bool,
    },

    /// Show how many respondents work the 6x1 schedule
    Schedule {
        /// Print JSON instead of the terminal chart
        #[arg(long)]
        json: bool,
    },

    /// List the distinct answers of one Likert impact question
    Values {
        #[arg(value_enum)]
        column: LikertColumn,
    },

    /// List the stored responses
    Responses {
        /// Print JSON instead of the terminal listing
        #[arg(long)]
        json: bool,
    },

    /// Render every chart of the dashboard
    Dashboard {
        /// Print JSON instead of the terminal charts
        #[arg(long)]
        json: bool,
    },

    /// List the topics of the active lexicon
    Topics,

    /// Show system status (DB path and size, response counts, lexicon)
    Status,

    /// Start the web dashboard API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: ESCALA_WEB_PORT or 8050)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: ESCALA_WEB_BIND or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("escala6x1=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Init => {
            info!("Initializing survey database...");
            let store = escala6x1::db::initialize_sqlite(&config.db_path, &config.table)?;
            let table_count = store.table_count().await?;
            let responses = store.count_responses().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables: {table_count} (survey table {:?})", config.table);
            println!("Responses stored: {responses}");
            println!("\nNext: add answers with `escala6x1 add` or import them into the table.");
        }

        Commands::Add {
            escala,
            family,
            physical,
            mental,
            impactos,
        } => {
            let store = escala6x1::db::initialize_sqlite(&config.db_path, &config.table)?;
            let id = store
                .insert_response(&NewSurveyResponse {
                    escala_6x1: escala,
                    impacto_vida_familiar: family,
                    impacto_saude_fisica: physical,
                    impacto_saude_mental: mental,
                    impactos,
                })
                .await?;
            println!("Added response #{id}");
        }

        Commands::Classify { text } => {
            let classifier = load_classifier(&config)?;
            let result = classifier.classify(text.as_str());
            terminal::display_match(&text, &result);
        }

        Commands::Impacts { json } => {
            let store = escala6x1::db::open_sqlite(&config.db_path, &config.table)?;
            let classifier = load_classifier(&config)?;
            let summary = escala6x1::survey::impact_summary(store.as_ref(), &classifier).await?;
            if json {
                println!("{}", Report::new(summary).to_json()?);
            } else {
                terminal::display_impacts(&summary);
            }
        }

        Commands::Likert { column, json } => {
            let store = escala6x1::db::open_sqlite(&config.db_path, &config.table)?;
            let chart = escala6x1::survey::likert_chart(store.as_ref(), column).await?;
            if json {
                println!("{}", Report::new(chart).to_json()?);
            } else {
                terminal::display_likert(&chart);
            }
        }

        Commands::Schedule { json } => {
            let store = escala6x1::db::open_sqlite(&config.db_path, &config.table)?;
            let counts = escala6x1::survey::schedule_distribution(store.as_ref()).await?;
            if json {
                println!("{}", Report::new(counts).to_json()?);
            } else {
                terminal::display_distribution("Distribuição da Escala 6x1", &counts);
            }
        }

        Commands::Values { column } => {
            let store = escala6x1::db::open_sqlite(&config.db_path, &config.table)?;
            let values = store.get_distinct_values(column.column()).await?;
            println!("{}", format!("{} ({})", column.title(), column.column()).bold());
            if values.is_empty() {
                println!("  {}", "No answers yet.".dimmed());
            }
            for value in values {
                println!("  {value}");
            }
        }

        Commands::Responses { json } => {
            let store = escala6x1::db::open_sqlite(&config.db_path, &config.table)?;
            let responses = store.get_responses().await?;
            if json {
                println!("{}", Report::new(responses).to_json()?);
            } else {
                terminal::display_responses(&responses);
            }
        }

        Commands::Dashboard { json } => {
            let store = escala6x1::db::open_sqlite(&config.db_path, &config.table)?;
            let classifier = load_classifier(&config)?;
            let dashboard = escala6x1::survey::build_dashboard(store.as_ref(), &classifier).await?;
            if json {
                println!("{}", Report::new(dashboard).to_json()?);
            } else {
                terminal::display_dashboard(&dashboard);
            }
        }

        Commands::Topics => {
            let lexicon = config.lexicon()?;
            terminal::display_lexicon(&lexicon);
        }

        Commands::Status => {
            let lexicon = config.lexicon()?;
            let store = escala6x1::status::open_store(&config.db_path, &config.table)?;
            escala6x1::status::show(store.as_deref(), &config.db_path, &config.table, &lexicon)
                .await?;
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let store = escala6x1::db::open_sqlite(&config.db_path, &config.table)?;
            let classifier = load_classifier(&config)?;
            let port = port.unwrap_or(config.web_port);
            let bind = bind.unwrap_or_else(|| config.web_bind.clone());
            escala6x1::web::run_server(store, classifier, port, &bind).await?;
        }
    }

    Ok(())
}

/// Build the classifier from the configured lexicon.
fn load_classifier(config: &Config) -> Result<TopicClassifier> {
    let lexicon = config.lexicon()?;
    info!(topics = lexicon.len(), "Loaded lexicon");
    TopicClassifier::new(lexicon)
}
