use chrono::{DateTime, Local, NaiveDate};
use meditrack_core::locale;
use meditrack_core::models::{BonusHistoryEntry, BonusResult};
use meditrack_core::reports::calculator_total;
use tracing::{error, info, instrument, warn};

use crate::client::ApiClient;

/// Weekly bonus calculator with its run history.
///
/// Unlike the read-only pages this one keeps state between actions: the
/// last results stay on screen while history refreshes.
#[derive(Debug, Clone)]
pub struct BonusCalculatorPage {
    client: ApiClient,
    pub results: Vec<BonusResult>,
    pub history: Vec<BonusHistoryEntry>,
    pub last_calculated: Option<DateTime<Local>>,
    pub error: Option<String>,
    pub loading: bool,
}

impl BonusCalculatorPage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            results: Vec::new(),
            history: Vec::new(),
            last_calculated: None,
            error: None,
            loading: false,
        }
    }

    /// Calculate for the week ending on `date` (today when `None`), then
    /// refresh the history.
    #[instrument(skip(self))]
    pub async fn calculate(&mut self, date: Option<NaiveDate>) {
        self.loading = true;
        self.error = None;

        match self.client.calculate_bonus(date).await {
            Ok(results) => {
                info!(doctors = results.len(), "Bonus calculated");
                self.results = results;
                self.last_calculated = Some(Local::now());
                self.refresh_history().await;
            }
            Err(e) => {
                error!(error = %e, "Bonus calculation failed");
                self.error = Some(e.user_message(locale::ERR_CALCULATE_BONUS));
            }
        }
        self.loading = false;
    }

    /// Reload past runs. Failures keep the previous history.
    #[instrument(skip(self))]
    pub async fn refresh_history(&mut self) {
        match self.client.bonus_history().await {
            Ok(history) => self.history = history,
            Err(e) => warn!(error = %e, "Could not load bonus history"),
        }
    }

    /// Sum of the current results.
    pub fn total(&self) -> f64 {
        calculator_total(&self.results)
    }
}
