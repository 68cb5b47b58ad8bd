//! Token lookup for a single owner

use std::cmp::Reverse;
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::FetchOutcome;
use crate::client::models::{Credential, TokenRecord};
use crate::client::{PageRequest, RecordsApi, bounded_limit};
use crate::error::Result;

/// How the tokens of one owner are located
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TokenStrategy {
    /// Page through every token in the organization and match on owner
    #[default]
    OwnerFiltered,
    /// Ask the user-scoped endpoint, already filtered server-side
    OwnerScoped,
}

/// Most pages the owner-filtered walk will request
const MAX_TOKEN_PAGES: usize = 1000;

/// Fetches the tokens of one owner, bounded to [`MAX_RESULTS`](crate::client::pagination::MAX_RESULTS).
pub struct TokenFetcher<C> {
    client: Arc<C>,
    strategy: TokenStrategy,
    first_page: PageRequest,
    max_pages: usize,
}

impl<C: RecordsApi> TokenFetcher<C> {
    pub fn new(client: Arc<C>, strategy: TokenStrategy) -> Self {
        Self {
            client,
            strategy,
            first_page: PageRequest::first(),
            max_pages: MAX_TOKEN_PAGES,
        }
    }

    #[cfg(test)]
    fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Override the page size used by the owner-filtered strategy
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.first_page = self.first_page.page_size(size);
        self
    }

    /// Tokens owned by `identity`, at most `min(limit, MAX_RESULTS)`.
    ///
    /// Failures are logged and degrade to an empty list; the cause stays
    /// available on the outcome.
    pub async fn fetch_tokens(
        &self,
        credential: &Credential,
        identity: &str,
        limit: usize,
    ) -> FetchOutcome<TokenRecord> {
        let limit = bounded_limit(limit);
        if limit == 0 {
            return FetchOutcome::found(Vec::new());
        }

        let result = match self.strategy {
            TokenStrategy::OwnerFiltered => self.owner_filtered(credential, identity, limit).await,
            TokenStrategy::OwnerScoped => self.owner_scoped(credential, identity, limit).await,
        };

        match result {
            Ok(tokens) => FetchOutcome::found(tokens),
            Err(err) => {
                warn!("Token lookup for {} failed: {}", identity, err);
                FetchOutcome::failed(err)
            }
        }
    }

    async fn owner_filtered(
        &self,
        credential: &Credential,
        identity: &str,
        limit: usize,
    ) -> Result<Vec<TokenRecord>> {
        let wanted = normalize_login(identity);
        let mut matches = Vec::new();
        let mut page = self.first_page;

        loop {
            let records = self.client.list_all_tokens(credential, &page).await?;
            let received = records.len();
            debug!(
                "Token page {} returned {} records",
                page.page_number, received
            );

            matches.extend(
                records
                    .into_iter()
                    .filter(|t| normalize_login(&t.owner) == wanted),
            );

            if matches.len() >= limit || page.is_last(received) {
                break;
            }
            if page.page_number >= self.max_pages {
                warn!(
                    "Stopping token walk for {} after {} full pages",
                    identity, page.page_number
                );
                break;
            }
            page = page.next();
        }

        matches.sort_by_key(|t| Reverse(t.id));
        matches.truncate(limit);
        Ok(matches)
    }

    async fn owner_scoped(
        &self,
        credential: &Credential,
        identity: &str,
        limit: usize,
    ) -> Result<Vec<TokenRecord>> {
        let mut tokens = self
            .client
            .list_user_tokens(credential, identity.trim())
            .await?;
        tokens.truncate(limit);
        Ok(tokens)
    }
}

/// Case-folded, trimmed login for owner comparison
fn normalize_login(login: &str) -> String {
    login.trim().to_lowercase()
}
