use crate::config::ResolvedConfig;
use crate::constants::{
    LOOKING_FILTERED, LOOKING_RECENTLY, LOOKING_TODAY, NO_DOGS_FILTERED, NO_DOGS_RECENTLY,
    NO_DOGS_TODAY,
};
use crate::errors::{AppError, AppResult};
use crate::models::{AccessToken, Credentials, DateWindow, FilterCategory, FilterSelection};
use crate::petfinder::{authenticate, fetch_listings, QueryUrlBuilder};
use crate::ui;
use crate::utils::format_duration;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Where the filter values for a filtered query come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterInput {
    /// Ask on stdin, one prompt per category
    Prompt,
    /// Values already given on the command line
    Given(FilterSelection),
}

/// One query to run against the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    Window(DateWindow),
    Filter(FilterInput),
}

impl QueryMode {
    /// Line printed before the query runs. For filters the selected values follow it.
    pub fn looking_message(&self) -> &'static str {
        match self {
            QueryMode::Window(DateWindow::Today) => LOOKING_TODAY,
            QueryMode::Window(DateWindow::Last3Days) => LOOKING_RECENTLY,
            QueryMode::Filter(_) => LOOKING_FILTERED,
        }
    }

    /// Message printed when the query returns no listings.
    pub fn no_results_message(&self) -> &'static str {
        match self {
            QueryMode::Window(DateWindow::Today) => NO_DOGS_TODAY,
            QueryMode::Window(DateWindow::Last3Days) => NO_DOGS_RECENTLY,
            QueryMode::Filter(_) => NO_DOGS_FILTERED,
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Queries in execution order: today, last 3 days, filter
    pub modes: Vec<QueryMode>,
    pub config_path: Option<PathBuf>,
}

impl RunOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mut modes = Vec::new();
        if flag(matches, "today") {
            modes.push(QueryMode::Window(DateWindow::Today));
        }
        if flag(matches, "three_days") {
            modes.push(QueryMode::Window(DateWindow::Last3Days));
        }

        let (age, size, gender) = (
            value(matches, "age"),
            value(matches, "size"),
            value(matches, "gender"),
        );
        if age.is_some() || size.is_some() || gender.is_some() {
            modes.push(QueryMode::Filter(FilterInput::Given(
                FilterSelection::from_input(
                    age.unwrap_or(""),
                    size.unwrap_or(""),
                    gender.unwrap_or(""),
                ),
            )));
        } else if flag(matches, "filter") {
            modes.push(QueryMode::Filter(FilterInput::Prompt));
        }

        Self {
            modes,
            config_path: matches.get_one::<PathBuf>("config").cloned(),
        }
    }
}

fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches.get_one::<bool>(id).copied().unwrap_or(false)
}

fn value<'a>(matches: &'a ArgMatches, id: &str) -> Option<&'a str> {
    matches.get_one::<String>(id).map(|s| s.as_str())
}

/// Builds the argument parser.
pub fn build_command() -> Command<'static> {
    Command::new("rescue-dogs")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .after_help(
            "Filter values are comma-separated, none to all per category:\n  \
             age:    baby, young, adult, senior\n  \
             size:   small, medium, large, xlarge\n  \
             gender: male, female\n\
             Credentials are read from PETFINDER_CLIENT_ID / PETFINDER_CLIENT_SECRET\n\
             or from client_id / client_secret in the config file.\n\
             Example:\n  rescue-dogs --today --filter --age baby,young",
        )
        .arg(
            Arg::new("today")
                .long("today")
                .help("Fetch dogs posted today")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("three_days")
                .long("3days")
                .help("Fetch dogs posted in the last 3 days")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .help("Filter dogs by age, size and gender (prompts unless values are given)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("age")
                .long("age")
                .help("Age values for the filter, e.g. baby,young")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .help("Size values for the filter, e.g. small,medium")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("gender")
                .long("gender")
                .help("Gender values for the filter, e.g. female")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML config file with endpoints and credentials")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Parses command-line arguments and runs the selected queries.
///
/// Prints help and fails when no query was selected. Otherwise loads the
/// configuration, resolves credentials and hands over to [`run`] with
/// stdin and stdout.
pub async fn cli() -> AppResult<()> {
    let cmd = build_command();
    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();
    let options = RunOptions::from_matches(&matches);

    if options.modes.is_empty() {
        cmd_for_help
            .print_help()
            .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        return Err(AppError::InvalidInput(
            "select at least one of --today, --3days or --filter".into(),
        ));
    }

    let config = match &options.config_path {
        Some(path) => ResolvedConfig::from_toml_file(path)?,
        None => ResolvedConfig::default(),
    };
    let credentials = config.credentials()?;

    let client = reqwest::Client::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        &options,
        &config,
        &credentials,
        &client,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
    .await
}

/// Runs the selected queries against the configured endpoints.
///
/// Authenticates once, then for each query in order:
/// 1. Builds the query URL (date window or filter selection)
/// 2. Fetches and decodes the listings
/// 3. Writes them to `out`, or the query's "no results" message
///
/// # Returns
///
/// Returns an error if authentication fails or `out` cannot be written. A
/// failed fetch is reported on `out` and skipped; the remaining queries
/// still run.
pub async fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    config: &ResolvedConfig,
    credentials: &Credentials,
    client: &reqwest::Client,
    input: &mut R,
    out: &mut W,
) -> AppResult<()> {
    let started = Instant::now();
    let token = authenticate(client, &config.token_url, credentials).await?;
    let builder = config.query_builder();

    for mode in &options.modes {
        run_mode(client, &builder, &token, mode, input, out).await?;
    }

    info!(
        queries = options.modes.len(),
        elapsed = %format_duration(started.elapsed()),
        "All queries completed"
    );
    Ok(())
}

async fn run_mode<R: BufRead, W: Write>(
    client: &reqwest::Client,
    builder: &QueryUrlBuilder,
    token: &AccessToken,
    mode: &QueryMode,
    input: &mut R,
    out: &mut W,
) -> AppResult<()> {
    let url = match mode {
        QueryMode::Window(window) => {
            writeln!(out, "{}", mode.looking_message())?;
            builder.build_window_url(Some(*window))
        }
        QueryMode::Filter(filter) => {
            let selection = match filter {
                FilterInput::Given(selection) => selection.clone(),
                FilterInput::Prompt => prompt_filter_selection(input, out)?,
            };
            writeln!(
                out,
                "{} {} {} {}",
                mode.looking_message(),
                selection.joined(FilterCategory::Age),
                selection.joined(FilterCategory::Size),
                selection.joined(FilterCategory::Gender)
            )?;
            builder.build_selection_url(&selection)
        }
    };

    match fetch_listings(client, &url, token).await {
        Ok(listings) => ui::write_listings(out, &listings, mode.no_results_message())?,
        Err(e) => {
            warn!(error = %e, "Skipping query after failed fetch");
            writeln!(out, "{e}")?;
        }
    }
    Ok(())
}

/// Shows the filter options and reads one comma-separated line per category.
///
/// Invalid tokens are dropped; an empty line (or end of input) selects
/// nothing for that category.
pub fn prompt_filter_selection<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> AppResult<FilterSelection> {
    ui::write_filter_banner(output)?;
    Ok(FilterSelection {
        ages: prompt_category(input, output, FilterCategory::Age)?,
        sizes: prompt_category(input, output, FilterCategory::Size)?,
        genders: prompt_category(input, output, FilterCategory::Gender)?,
    })
}

fn prompt_category<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    category: FilterCategory,
) -> AppResult<Vec<String>> {
    write!(output, "Enter {} options: ", category.display_name())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(category.select(&line))
}
