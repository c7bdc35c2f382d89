//! Text front end shared by the CLI and the MCP server.
//!
//! Everything here turns lookup results into the plain text a user or an LLM
//! reads, and maps line commands onto a `PageSession`.

use crate::assets::sprite_url;
use crate::client::CatalogSource;
use crate::compare::Comparison;
use crate::detail::DetailState;
use crate::errors::{FetchError, LookupError};
use crate::matcher::{match_entries, SuggestionRule};
use crate::navigation::CanonicalKey;
use crate::session::{PageKind, PageSession};
use schema::{CatalogEntry, CatalogListing};

pub const HELP_TEXT: &str = "Commands:
  type <text>     update the search box and list suggestions
  pick <n>        open suggestion number n
  go <text>       submit <text> as a name and open it
  open <route>    open a route such as /pokemon/pikachu
  page <kind>     switch to the 'home' or 'detail' page
  help            show this text
  quit            leave";

/// Formats a suggestion list, one numbered row per entry with its sprite.
pub fn display_suggestions(query: &str, suggestions: &[&CatalogEntry]) -> String {
    if query.trim().is_empty() {
        return "Start typing a name to see suggestions.".to_string();
    }
    if suggestions.is_empty() {
        return format!("No suggestions for '{}'.", query.trim());
    }

    let mut output = format!("Suggestions for '{}':\n", query.trim());
    for (i, entry) in suggestions.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {} {}\n",
            i + 1,
            entry.name,
            sprite_url(entry.sequence_index)
        ));
    }
    output
}

/// Runs a one-off search against a loaded listing.
pub fn handle_search_command(listing: &CatalogListing, query: &str, rule: SuggestionRule) -> String {
    let suggestions = match_entries(listing, query, rule);
    display_suggestions(query, &suggestions)
}

/// Formats the detail page for whatever state it is in.
pub fn display_detail_state(key: Option<&CanonicalKey>, state: &DetailState) -> String {
    match state {
        DetailState::Loading => "Loading...".to_string(),
        DetailState::Loaded(summary) => format!("--- Pokemon Details ---\n{}", summary),
        DetailState::Failed(FetchError::NotFound(name)) => {
            format!("No Pokemon named '{}' was found.", name)
        }
        DetailState::Failed(err) => match key {
            Some(key) => format!("Could not load '{}': {}", key, err),
            None => format!("Could not load details: {}", err),
        },
    }
}

pub fn display_comparison(comparison: &Comparison) -> String {
    format!("--- Comparison ---\n{}", comparison)
}

pub fn display_lookup_error(err: &LookupError) -> String {
    match err {
        LookupError::Fetch(FetchError::NotFound(name)) => {
            format!("No Pokemon named '{}' was found.", name)
        }
        LookupError::StaleResponse { .. } => {
            "That request was superseded by a newer one.".to_string()
        }
        other => format!("Error: {}", other),
    }
}

/// What the caller should do after a line command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Output(String),
    SwitchPage(PageKind),
    Quit,
}

/// Applies one line of input to a page session.
pub async fn handle_page_command<S: CatalogSource>(
    session: &mut PageSession<S>,
    line: &str,
) -> CommandOutcome {
    let line = line.trim();
    let (command, args) = match line.split_once(char::is_whitespace) {
        Some((command, args)) => (command, args.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "" => CommandOutcome::Output(String::new()),
        "type" | "t" => {
            session.mount().await;
            session.set_query(args);
            let suggestions = session.suggestions();
            CommandOutcome::Output(display_suggestions(args, &suggestions))
        }
        "pick" | "p" => {
            let Ok(number) = args.parse::<usize>() else {
                return CommandOutcome::Output(
                    "Invalid suggestion number. Please use a number.".to_string(),
                );
            };
            match number.checked_sub(1).and_then(|index| session.select(index)) {
                Some(key) => CommandOutcome::Output(open_detail(session, key).await),
                None => CommandOutcome::Output("No suggestion at that position.".to_string()),
            }
        }
        "go" | "g" => {
            if !args.is_empty() {
                session.set_query(args);
            }
            match session.submit() {
                Some(key) => CommandOutcome::Output(open_detail(session, key).await),
                None => CommandOutcome::Output(
                    "What Pokemon do you want to open? (e.g., 'go pikachu')".to_string(),
                ),
            }
        }
        "open" | "o" => match CanonicalKey::from_route(args) {
            Some(key) => CommandOutcome::Output(open_detail(session, key).await),
            None => CommandOutcome::Output(format!("'{}' is not a detail route.", args)),
        },
        "page" => match args.to_lowercase().as_str() {
            "home" => CommandOutcome::SwitchPage(PageKind::Home),
            "detail" => CommandOutcome::SwitchPage(PageKind::Detail),
            _ => CommandOutcome::Output("Unknown page. Use 'home' or 'detail'.".to_string()),
        },
        "help" | "?" => CommandOutcome::Output(HELP_TEXT.to_string()),
        "quit" | "exit" | "q" => CommandOutcome::Quit,
        _ => CommandOutcome::Output(format!("Unknown command '{}'. Type 'help'.", command)),
    }
}

async fn open_detail<S: CatalogSource>(session: &mut PageSession<S>, key: CanonicalKey) -> String {
    let route = key.route_path();
    match session.navigate(key.clone()).await {
        Ok(state) => format!("{}\n{}", route, display_detail_state(Some(&key), state)),
        Err(err) => display_lookup_error(&err),
    }
}
