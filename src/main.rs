use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pokedex_lookup::lookup_interface::{
    display_comparison, display_detail_state, display_lookup_error, handle_page_command,
    handle_search_command, CommandOutcome, HELP_TEXT,
};
use pokedex_lookup::{
    compare, detail, logging, CanonicalKey, ConfigArgs, LookupConfig, MatchPolicy, PageKind,
    PageSession, PokeApiClient, SuggestionRule,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about = "Search and look up Pokemon from the PokeAPI catalog")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Match anywhere in the name, at most ten rows
    Substring,
    /// Match the start of the name, every row
    Prefix,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List autocomplete suggestions for a partial name
    Search {
        query: String,
        #[arg(long, value_enum, default_value_t = PolicyArg::Substring)]
        policy: PolicyArg,
        /// Override the number of rows shown (at most 10 for substring search)
        #[arg(long)]
        limit_suggestions: Option<usize>,
    },
    /// Show the detail record for one Pokemon
    Show {
        name: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compare base stats and type matchups of two Pokemon
    Compare {
        p1: String,
        p2: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Line-driven search session
    Interactive,
}

impl PolicyArg {
    fn rule(
        self,
        config: &LookupConfig,
        limit_suggestions: Option<usize>,
    ) -> Result<SuggestionRule> {
        let rule = match self {
            PolicyArg::Substring => config.home_rule(),
            PolicyArg::Prefix => config.detail_rule(),
        };
        match limit_suggestions {
            Some(rows) => rule
                .limited_to(rows)
                .map_err(|e| anyhow!(e))
                .context("invalid --limit-suggestions"),
            None => Ok(rule),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = LookupConfig::resolve(&cli.config).context("loading configuration")?;
    debug!(?config, "configuration resolved");
    let client = Arc::new(PokeApiClient::new(&config).context("building HTTP client")?);

    match cli.command {
        Command::Search {
            query,
            policy,
            limit_suggestions,
        } => {
            let rule = policy.rule(&config, limit_suggestions)?;
            let kind = match rule.policy {
                MatchPolicy::Substring => PageKind::Home,
                MatchPolicy::Prefix => PageKind::Detail,
            };
            let session = PageSession::new(kind, client, &config);
            let listing = session.mount().await;
            println!("{}", handle_search_command(listing, &query, rule));
        }
        Command::Show { name, json } => {
            let key = CanonicalKey::new(&name).context("a name is required")?;
            let state = detail::fetch_detail(client.as_ref(), &key).await;
            match (&state, json) {
                (detail::DetailState::Loaded(summary), true) => {
                    println!("{}", serde_json::to_string_pretty(summary)?)
                }
                _ => println!("{}", display_detail_state(Some(&key), &state)),
            }
        }
        Command::Compare { p1, p2, json } => match compare(client.as_ref(), &p1, &p2).await {
            Ok(comparison) if json => println!("{}", serde_json::to_string_pretty(&comparison)?),
            Ok(comparison) => println!("{}", display_comparison(&comparison)),
            Err(err) => println!("{}", display_lookup_error(&err)),
        },
        Command::Interactive => run_interactive(client, &config).await?,
    }

    Ok(())
}

async fn run_interactive(client: Arc<PokeApiClient>, config: &LookupConfig) -> Result<()> {
    println!("{}", HELP_TEXT);
    let mut session = PageSession::home(client.clone(), config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let page = match session.kind() {
            PageKind::Home => "home",
            PageKind::Detail => "detail",
        };
        eprint!("[{}]> ", page);

        let Some(line) = lines.next_line().await.context("reading input")? else {
            break;
        };

        match handle_page_command(&mut session, &line).await {
            CommandOutcome::Output(text) => {
                if !text.is_empty() {
                    println!("{}", text);
                }
            }
            // Switching pages starts a fresh session with its own listing load.
            CommandOutcome::SwitchPage(kind) => {
                session = PageSession::new(kind, client.clone(), config);
            }
            CommandOutcome::Quit => break,
        }
    }
    Ok(())
}
