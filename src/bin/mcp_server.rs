//! Pokedex Lookup MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp)
//! that exposes catalog search, detail lookup and comparison to an LLM.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use clap::Parser;
use pokedex_lookup::lookup_interface::{
    display_comparison, display_detail_state, display_lookup_error, handle_search_command,
};
use pokedex_lookup::{
    compare, logging, CanonicalKey, CatalogLoader, ConfigArgs, DetailSession, IndexPolicy,
    LookupConfig, MatchPolicy, PokeApiClient, SuggestionRule,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "pokedex-mcp", version, about = "MCP server for Pokedex lookups over stdio")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct PokedexService {
    tool_router: ToolRouter<PokedexService>,
    client: Arc<PokeApiClient>,
    config: Arc<LookupConfig>,
    // Loaded once for the lifetime of the server.
    listing: Arc<CatalogLoader<PokeApiClient>>,
    detail: Arc<Mutex<DetailSession>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    #[schemars(description = "Partial Pokemon name to search for")]
    pub query: String,
    #[schemars(
        description = "Matching policy: 'substring' (default, at most 10 results) or 'prefix' (all results)"
    )]
    pub policy: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupPokemonRequest {
    #[schemars(description = "Name of the Pokemon to look up")]
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComparePokemonRequest {
    #[schemars(description = "First Pokemon name")]
    pub p1: String,
    #[schemars(description = "Second Pokemon name")]
    pub p2: String,
}

#[tool_router]
impl PokedexService {
    pub fn new(client: Arc<PokeApiClient>, config: LookupConfig) -> Self {
        let listing = CatalogLoader::new(client.clone(), config.listing_limit, IndexPolicy::Positional);
        Self {
            tool_router: Self::tool_router(),
            client,
            config: Arc::new(config),
            listing: Arc::new(listing),
            detail: Arc::new(Mutex::new(DetailSession::new())),
        }
    }

    #[tool(description = "Suggest Pokemon names matching a partial query")]
    async fn search_pokemon(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        let policy = match request.policy.as_deref() {
            None => MatchPolicy::Substring,
            Some(raw) => raw.parse::<MatchPolicy>().map_err(|e| McpError {
                code: ErrorCode(-32602),
                message: Cow::from(e),
                data: None,
            })?,
        };
        let rule: SuggestionRule = match policy {
            MatchPolicy::Substring => self.config.home_rule(),
            MatchPolicy::Prefix => self.config.detail_rule(),
        };

        let listing = self.listing.listing().await;
        let text = handle_search_command(listing, &request.query, rule);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Look up types, base stats and abilities of a Pokemon")]
    async fn lookup_pokemon(
        &self,
        Parameters(request): Parameters<LookupPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let Some(key) = CanonicalKey::new(&request.name) else {
            let text = "What Pokemon do you want to look up? (e.g., 'pikachu')".to_string();
            return Ok(CallToolResult::success(vec![Content::text(text)]));
        };

        let token = self.lock_detail()?.begin(key.clone());
        let result = pokedex_lookup::CatalogSource::fetch_detail(self.client.as_ref(), &key).await;

        let mut detail = self.lock_detail()?;
        let text = match detail.complete(token, result) {
            Ok(state) => display_detail_state(Some(&key), state),
            Err(err) => display_lookup_error(&err),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Compare base stats and type matchups of two Pokemon")]
    async fn compare_pokemon(
        &self,
        Parameters(request): Parameters<ComparePokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = match compare(self.client.as_ref(), &request.p1, &request.p2).await {
            Ok(comparison) => display_comparison(&comparison),
            Err(err) => display_lookup_error(&err),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

impl PokedexService {
    fn lock_detail(&self) -> Result<std::sync::MutexGuard<'_, DetailSession>, McpError> {
        self.detail.lock().map_err(|_| McpError {
            code: ErrorCode(-32603),
            message: Cow::from("detail state poisoned"),
            data: None,
        })
    }
}

#[tool_handler]
impl ServerHandler for PokedexService {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    let config = LookupConfig::resolve(&args.config)?;
    let client = Arc::new(PokeApiClient::new(&config)?);

    info!(api_base = %config.api_base, "Pokedex MCP server starting");
    let service = PokedexService::new(client, config);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    info!("server running, waiting for shutdown");
    let quit_reason = server.waiting().await?;

    info!(?quit_reason, "Pokedex MCP server exiting");
    Ok(())
}
