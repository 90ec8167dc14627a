use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::{
    commands::{
        cli::{Cli, Command, ImportArgs, SearchArgs},
        output,
    },
    modules::{
        data_exchange::{
            commands::{
                download_template, export_movies, import_movies, ExportMoviesRequest,
                ImportMoviesRequest,
            },
            DataExchangeService,
        },
        movie::commands::get_dataset_stats,
        provider::{
            commands::{get_streaming_offers, search_movies, SearchMoviesRequest},
            SearchPipeline,
        },
        session::{AppState, SearchFilters, SearchNotice, POPULAR_QUERIES},
    },
    shared::{config::AppConfig, utils::validation::Validator},
};

/// Single entry point from parsed arguments to the module command handlers
pub async fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::Search(args) => run_search(args, &config).await,
        Command::Import(args) => run_import(args).await,
        Command::Stats(args) => run_stats(args).await,
        Command::Template { out } => {
            let service = DataExchangeService::new(out);
            let path = download_template(&service)
                .await
                .map_err(anyhow::Error::msg)?;
            println!("Template written to {}", path.display());
            Ok(())
        }
        Command::Popular => {
            for query in POPULAR_QUERIES {
                println!("{}", query);
            }
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        Validator::validate_timeout_secs(timeout)?;
        config.timeout_seconds = timeout;
    }
    log::debug!("Using configuration: {:?}", config);
    Ok(config)
}

async fn run_search(args: SearchArgs, config: &AppConfig) -> Result<()> {
    let pipeline = SearchPipeline::from_config(config)?;
    let filters = SearchFilters::new(args.min_year, args.max_year, args.sort)?;
    let mut state = AppState::with_filters(filters);

    let response = search_movies(
        SearchMoviesRequest {
            query: args.query.clone(),
            filters,
        },
        &pipeline,
        &mut state,
    )
    .await;

    match &response.notice {
        SearchNotice::Failed(message) => bail!("{}", message),
        SearchNotice::EmptyQuery | SearchNotice::NotFound => {
            println!("{}", response.notice);
            return Ok(());
        }
        SearchNotice::Found(_) => {
            let query = state.last_query().trim();
            println!("Results for '{}': {}", query, response.notice)
        }
    }

    for (index, record) in response.results.iter().take(args.limit).enumerate() {
        output::print_card(index + 1, record, state.is_favorite(record));
        if args.offers && record.streaming_offers.is_empty() && !record.title.is_empty() {
            match get_streaming_offers(&record.title, &pipeline).await {
                Ok(offers) => output::print_offers(&offers),
                Err(e) => log::warn!("No offers for '{}': {}", record.title, e),
            }
        }
        if args.raw {
            println!("{}", serde_json::to_string_pretty(&record.redacted_raw())?);
        }
    }
    if response.results.len() > args.limit {
        println!("... {} more", response.results.len() - args.limit);
    }

    if let Some(format) = args.export {
        let service = DataExchangeService::new(&args.out);
        let path = export_movies(
            ExportMoviesRequest {
                format,
                query: args.query,
            },
            state.search_results(),
            &service,
        )
        .await
        .map_err(anyhow::Error::msg)?;
        let count = state.search_results().len();
        println!("Exported {} movies to {}", count, path.display());
    }

    log::debug!("Cache after search: {:?}", pipeline.cache_stats());
    Ok(())
}

async fn load_into_state(args: ImportArgs, state: &mut AppState) -> Result<()> {
    let service = DataExchangeService::new(args.file.parent().unwrap_or(Path::new(".")));
    let response = import_movies(
        ImportMoviesRequest {
            path: args.file,
            mime: args.mime,
        },
        &service,
        state,
    )
    .await
    .map_err(anyhow::Error::msg)?;
    println!(
        "Imported {} movies from {}",
        response.imported, response.source
    );
    Ok(())
}

async fn run_import(args: ImportArgs) -> Result<()> {
    let mut state = AppState::new();
    load_into_state(args, &mut state).await?;
    for (index, record) in state.imported().iter().enumerate() {
        output::print_card(index + 1, record, false);
    }
    Ok(())
}

async fn run_stats(args: ImportArgs) -> Result<()> {
    let mut state = AppState::new();
    load_into_state(args, &mut state).await?;
    output::print_stats(&get_dataset_stats(state.imported()));
    Ok(())
}
