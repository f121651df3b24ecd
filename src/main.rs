// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, warn};
use watch_next::utils::logging;
use watch_next::{CatalogLoader, Config, JsonExporter, Movie, Recommender, Validator};

#[derive(Parser)]
#[command(name = "watch_next")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "TF-IDF movie recommender over a plain-text catalog", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the catalog entries most similar to a query description
    Recommend {
        /// Free-text description of the movie to match
        query: String,

        #[arg(short, long, value_name = "NUM")]
        limit: Option<usize>,

        #[arg(long, value_name = "SCORE")]
        min_score: Option<f64>,

        /// Emit results as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Show catalog and vocabulary statistics
    Stats,

    /// Validate the catalog file and report problems
    Verify,

    /// Export the catalog or a recommendation report as JSON
    Export {
        #[arg(short, long, default_value = "./exports")]
        output: PathBuf,

        #[arg(short, long)]
        pretty: bool,

        #[arg(long)]
        query: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Recommend {
            query,
            limit,
            min_score,
            json,
        } => {
            cmd_recommend(&config, &query, limit, min_score, json)?;
        }
        Commands::Stats => {
            cmd_stats(&config)?;
        }
        Commands::Verify => {
            cmd_verify(&config)?;
        }
        Commands::Export {
            output,
            pretty,
            query,
        } => {
            cmd_export(&config, output, pretty, query.as_deref())?;
        }
    }

    Ok(())
}

fn load_catalog(config: &Config) -> Result<Vec<Movie>> {
    let loader = CatalogLoader::new(config.catalog.clone());
    let movies = loader
        .load_or_empty(&config.catalog.path)
        .context("Failed to read catalog")?;
    Ok(movies)
}

fn cmd_recommend(
    config: &Config,
    query: &str,
    limit: Option<usize>,
    min_score: Option<f64>,
    json: bool,
) -> Result<()> {
    let movies = load_catalog(config)?;

    if movies.is_empty() {
        println!("No movie descriptions loaded. Exiting.");
        return Ok(());
    }

    let mut recommend_config = config.recommend.clone();
    if let Some(limit) = limit {
        recommend_config.limit = limit;
    }
    if let Some(min_score) = min_score {
        recommend_config.min_score = min_score;
    }
    recommend_config
        .validate()
        .context("Invalid recommend options")?;

    let recommender = Recommender::new(config.vectorizer.clone(), recommend_config.clone());
    let results = recommender
        .recommend(query, &movies)
        .context("Recommendation failed")?;

    if json {
        let report = serde_json::json!({
            "query": query,
            "results": results,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("\nNo match found for query: \"{}\"\n", query);
        println!("Try:");
        println!("  - Using different search terms");
        println!("  - Lowering --min-score");
        return Ok(());
    }

    if recommend_config.limit == 1 {
        println!("You may want to watch: {}", results[0].description);
    } else {
        println!("\nRecommendations for: \"{}\"\n", query);
        println!("{}", "=".repeat(80));
        for (rank, result) in results.iter().enumerate() {
            println!("\n{}. {}", rank + 1, result.format_summary(300));
        }
        println!("\n{}", "=".repeat(80));
    }

    info!("Recommendation complete");
    Ok(())
}

fn cmd_stats(config: &Config) -> Result<()> {
    info!("Gathering catalog statistics");

    let movies = load_catalog(config)?;

    if movies.is_empty() {
        println!("No movie descriptions loaded. Exiting.");
        return Ok(());
    }

    let total_tokens: usize = movies.iter().map(Movie::token_estimate).sum();
    let blank_lines = movies.iter().filter(|m| m.is_blank()).count();

    let recommender = Recommender::new(config.vectorizer.clone(), config.recommend.clone());
    let vocabulary_size = recommender
        .catalog_vocabulary_size(&movies)
        .context("Failed to fit vectorizer over catalog")?;

    println!("Catalog: {}", config.catalog.path.display());
    println!("  Descriptions:    {}", movies.len());
    println!("  Blank lines:     {}", blank_lines);
    println!("  Total tokens:    {}", total_tokens);
    println!(
        "  Avg tokens/line: {:.1}",
        total_tokens as f64 / movies.len() as f64
    );
    println!("  Vocabulary size: {}", vocabulary_size);

    Ok(())
}

fn cmd_verify(config: &Config) -> Result<()> {
    info!("Verifying catalog");

    Validator::validate_catalog_path(&config.catalog.path).context("Catalog path check failed")?;

    let loader = CatalogLoader::new(config.catalog.clone());
    let movies = loader
        .load(&config.catalog.path)
        .context("Catalog is not readable")?;

    if movies.is_empty() {
        warn!("Catalog is empty");
        println!(
            "{}",
            logging::format_warning(&format!(
                "Catalog is empty: {}",
                config.catalog.path.display()
            ))
        );
        return Ok(());
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = 0;
    for movie in &movies {
        if movie.is_blank() {
            continue;
        }
        if let Some(first) = seen.get(movie.content_hash.as_str()) {
            warn!("Line {} duplicates line {}", movie.index, first);
            duplicates += 1;
        } else {
            seen.insert(&movie.content_hash, movie.index);
        }
    }

    let blank_lines = movies.iter().filter(|m| m.is_blank()).count();

    println!(
        "{}",
        logging::format_success(&format!(
            "Catalog verification passed: {}",
            config.catalog.path.display()
        ))
    );
    println!("  Descriptions: {}", movies.len());
    println!("  Blank lines:  {}", blank_lines);
    println!("  Duplicates:   {}", duplicates);

    Ok(())
}

fn cmd_export(
    config: &Config,
    output: PathBuf,
    pretty: bool,
    query: Option<&str>,
) -> Result<()> {
    info!("Initializing JSON export");

    let movies = load_catalog(config)?;

    if movies.is_empty() {
        println!("No movie descriptions loaded. Exiting.");
        return Ok(());
    }

    let exporter = JsonExporter::new(output)?;

    let manifest = if let Some(query) = query {
        let recommender = Recommender::new(config.vectorizer.clone(), config.recommend.clone());
        let results = recommender
            .recommend(query, &movies)
            .context("Recommendation failed")?;
        exporter.export_recommendations(query, &results, pretty)?
    } else {
        exporter.export_catalog(&movies, pretty)?
    };

    info!(
        "Export complete: {} entries written to {}",
        manifest.total_entries, manifest.file
    );

    Ok(())
}
