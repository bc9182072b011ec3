//! Table Tennis Dashboard CLI
//!
//! 사이드바 위젯 대신 명령행 옵션으로 필터/정렬/그래프를 고른다.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tt_core::{ChartType, DashboardConfig, SortKey};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tt-dashboard")]
#[command(about = "Table tennis career stats dashboard", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Render summary, table and chart to the terminal
    View {
        #[command(flatten)]
        filters: FilterArgs,

        /// Chart type (winRateComparison, matchCountComparison, titleCountComparison, countryDistribution)
        #[arg(long)]
        chart: Option<String>,

        /// Hide the player table
        #[arg(long, default_value = "false")]
        no_table: bool,

        /// Hide the summary metrics
        #[arg(long, default_value = "false")]
        no_summary: bool,

        /// Width of the longest chart bar
        #[arg(long, default_value = "40")]
        bar_width: usize,
    },

    /// Print the view as JSON
    Json {
        #[command(flatten)]
        filters: FilterArgs,

        /// Chart type to include in the response
        #[arg(long)]
        chart: Option<String>,

        /// Output JSON file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List the available countries, sort keys and chart types
    Options,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct FilterArgs {
    /// Dashboard preset JSON (overrides TT_DASHBOARD_CONFIG_PATH)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Country to include (repeatable; all countries when omitted)
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Select no country at all
    #[arg(long, default_value = "false", conflicts_with = "countries")]
    no_country: bool,

    /// Player name search (case-insensitive)
    #[arg(long)]
    search: Option<String>,

    /// Sort key (winRatePercent, titleCount, careerMatchCount, age or Korean label)
    #[arg(long)]
    sort: Option<String>,

    /// Sort ascending instead of descending
    #[arg(long, default_value = "false")]
    ascending: bool,

    /// Sort descending (overrides a preset's sortAscending)
    #[arg(long, default_value = "false", conflicts_with = "ascending")]
    descending: bool,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let roster = tt_core::get_roster();

    match cli.command {
        Commands::View {
            filters,
            chart,
            no_table,
            no_summary,
            bar_width,
        } => {
            let mut config = resolve_config(&filters, chart.as_deref())?;
            config.show_table &= !no_table;
            config.show_summary &= !no_summary;

            let view = tt_core::compute_view(roster, &config.to_options(roster));
            let mut renderer = tt_dashboard::TextRenderer::new(bar_width);
            print!(
                "{}",
                tt_dashboard::render_dashboard_with(&mut renderer, &view, &config)
            );
        }

        Commands::Json {
            filters,
            chart,
            out,
        } => {
            let config = resolve_config(&filters, chart.as_deref())?;
            let view = tt_core::compute_view(roster, &config.to_options(roster));
            let chart_type = chart.is_some().then_some(config.chart_type);
            let response = tt_core::ViewResponse::build(view, chart_type);

            match out {
                Some(path) => {
                    tt_dashboard::save_view_json(&path, &response)?;
                    println!("📄 View saved to: {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&response)?),
            }
        }

        Commands::Options => {
            let options = tt_core::api::DashboardOptions::for_roster(roster);
            println!("국가 선택:");
            for country in &options.countries {
                println!("   {country}");
            }
            println!("정렬 기준:");
            for key in &options.sort_keys {
                println!("   {:<18} {}", key.id, key.label);
            }
            println!("그래프 종류 선택:");
            for chart in &options.chart_types {
                let title = chart.title.as_deref().unwrap_or_default();
                println!("   {:<22} {:<10} {}", chart.id, chart.label, title);
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// 프리셋 → 명령행 옵션 순서로 덮어쓴 뒤 경계 검사
#[cfg(feature = "cli")]
fn resolve_config(filters: &FilterArgs, chart: Option<&str>) -> Result<DashboardConfig> {
    let mut config = match &filters.config {
        Some(path) => DashboardConfig::from_path(path)?,
        None => DashboardConfig::load_from_env()?,
    };

    if filters.no_country {
        config.countries = Some(Vec::new());
    } else if !filters.countries.is_empty() {
        config.countries = Some(filters.countries.clone());
    }
    if let Some(search) = &filters.search {
        config.name_query = Some(search.clone());
    }
    if let Some(sort) = &filters.sort {
        config.sort_key = sort.parse::<SortKey>()?;
    }
    if filters.ascending {
        config.sort_ascending = true;
    } else if filters.descending {
        config.sort_ascending = false;
    }
    if let Some(chart) = chart {
        config.chart_type = chart.parse::<ChartType>()?;
    }

    config.validate(tt_core::get_roster())?;
    Ok(config)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("tt-dashboard CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn view_filters(args: &[&str]) -> FilterArgs {
        let mut argv = vec!["tt-dashboard", "view"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::View { filters, .. } => filters,
            _ => unreachable!(),
        }
    }

    fn ascending_preset() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"sortAscending": true, "sortKey": "age"}"#).unwrap();
        file
    }

    #[test]
    fn test_descending_overrides_preset() {
        let preset = ascending_preset();
        let path = preset.path().to_str().unwrap();

        let config = resolve_config(&view_filters(&["--config", path]), None).unwrap();
        assert!(config.sort_ascending);

        let config = resolve_config(&view_filters(&["--config", path, "--descending"]), None).unwrap();
        assert!(!config.sort_ascending);
        assert_eq!(config.sort_key, SortKey::Age);
    }

    #[test]
    fn test_ascending_and_descending_conflict() {
        let result = Cli::try_parse_from(["tt-dashboard", "view", "--ascending", "--descending"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_is_passed_through_unchanged() {
        let preset = ascending_preset();
        let path = preset.path().to_str().unwrap();

        let config = resolve_config(&view_filters(&["--config", path, "--search", " "]), None).unwrap();
        assert_eq!(config.name_query.as_deref(), Some(" "));
    }
}
