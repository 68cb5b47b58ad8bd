//! Token listing command

use crate::cli::CommandContext;
use crate::cli::args::{GlobalOptions, LimitArgs};
use crate::error::Result;
use crate::models::TokenDisplay;
use crate::output;
use crate::retrieval::TokenStrategy;

/// Run the tokens command
pub async fn run(
    opts: &GlobalOptions,
    login: &str,
    limit: &LimitArgs,
    strategy: Option<TokenStrategy>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let credential = ctx.authenticate().await?;

    let tokens = ctx
        .token_fetcher(strategy)
        .fetch_tokens(&credential, login, limit.resolve(ctx.config.limit))
        .await;

    let display = tokens.map_records(TokenDisplay::from);
    output::print_fetched(&display, ctx.format, "No tokens found or an error occurred.")
}
