use std::sync::Arc;

use shared::domain::Roster;
use tracing::{error, info};

use crate::{error::FetchError, ActivitiesApi};

/// Pulls the current roster. One request per call, no retry.
pub struct RosterFetcher {
    api: Arc<dyn ActivitiesApi>,
}

impl RosterFetcher {
    pub fn new(api: Arc<dyn ActivitiesApi>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self) -> Result<Roster, FetchError> {
        match self.api.fetch_roster().await {
            Ok(roster) => {
                info!(activities = roster.len(), "fetched activity roster");
                Ok(roster)
            }
            Err(err) => {
                error!(error = %err, "error fetching activities");
                Err(err)
            }
        }
    }
}
