//! Enrollment task lookup across login casing variants

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use super::variants::{CasingVariants, VariantStrategy};
use crate::client::models::{Credential, EnrollmentTask};
use crate::client::{RecordsApi, fan_out};
use crate::error::VariantError;

/// Merged enrollment tasks plus every variant that failed.
///
/// A non-empty `errors` list means the result is partial (or empty because
/// everything failed), even when some tasks were recovered.
#[derive(Debug, Default)]
pub struct EnrollmentOutcome {
    pub tasks: Vec<EnrollmentTask>,
    pub errors: Vec<VariantError>,
}

impl EnrollmentOutcome {
    /// Whether every variant query succeeded
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Queries enrollments under each login variant and merges the results.
pub struct EnrollmentResolver<C> {
    client: Arc<C>,
    strategy: Box<dyn VariantStrategy>,
    max_concurrent: usize,
}

impl<C: RecordsApi> EnrollmentResolver<C> {
    /// Resolver using [`CasingVariants`]
    pub fn new(client: Arc<C>, max_concurrent: usize) -> Self {
        Self {
            client,
            strategy: Box::new(CasingVariants),
            max_concurrent,
        }
    }

    /// Replace the variant rule
    #[cfg(test)]
    pub fn with_strategy(mut self, strategy: impl VariantStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Enrollment tasks for every casing of `identity`, de-duplicated by id.
    ///
    /// Each variant is classified on its own; a failing variant is recorded
    /// and the rest still run. Results are merged in variant order, so a later
    /// variant replaces an earlier task with the same id.
    pub async fn fetch_enrollments(
        &self,
        credential: &Credential,
        identity: &str,
    ) -> EnrollmentOutcome {
        let variants = self.strategy.variants(identity);
        if variants.is_empty() {
            debug!("No login variants for '{}'", identity);
            return EnrollmentOutcome::default();
        }
        debug!("Querying enrollments for variants {:?}", variants);

        let client = &self.client;
        let outcomes = fan_out(
            variants,
            |login: String| async move { client.list_enrollments(credential, &login).await },
            self.max_concurrent,
        )
        .await;

        let mut outcome = EnrollmentOutcome::default();
        let mut positions: HashMap<i64, usize> = HashMap::new();

        for (variant, result) in outcomes {
            match result {
                Ok(tasks) => {
                    debug!("Variant {} returned {} tasks", variant, tasks.len());
                    for task in tasks {
                        match positions.get(&task.id) {
                            Some(&pos) => outcome.tasks[pos] = task,
                            None => {
                                positions.insert(task.id, outcome.tasks.len());
                                outcome.tasks.push(task);
                            }
                        }
                    }
                }
                Err(err) => {
                    warn!("Enrollment lookup for variant {} failed: {}", variant, err);
                    outcome.errors.push(VariantError {
                        variant,
                        message: err.to_string(),
                    });
                }
            }
        }

        outcome
    }
}
