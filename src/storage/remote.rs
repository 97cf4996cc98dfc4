use crate::errors::AppError;
use crate::helper;
use log::{error, info};
use reqwest::blocking;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_USERS_TABLE: &str = "users";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch user data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// What the caller gets back from a fetch: users on success, an error
/// indicator (and no users) otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchOutcome {
    pub users: Vec<UserData>,
    pub error: Option<String>,
}

impl FetchOutcome {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Reads rows from a hosted Postgres REST endpoint.
pub struct UserDataClient {
    pub base_url: Option<String>,
    api_key: Option<String>,
    pub table: String,
}

impl UserDataClient {
    /// Configured from `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    pub fn new() -> Self {
        Self {
            base_url: helper::get_env_value_by_key("SUPABASE_URL").ok(),
            api_key: helper::get_env_value_by_key("SUPABASE_ANON_KEY").ok(),
            table: DEFAULT_USERS_TABLE.to_string(),
        }
    }

    pub fn with_base_url(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: Some(base_url.to_string()),
            api_key: api_key.map(str::to_string),
            table: DEFAULT_USERS_TABLE.to_string(),
        }
    }

    pub fn table(mut self, table: &str) -> Self {
        self.table = table.to_string();
        self
    }

    /// `{base}/rest/v1/{table}?select=*`, narrowed to one id when given.
    pub fn format_select_url(&self, user_id: Option<&str>) -> Result<Url, AppError> {
        let base_url = self
            .base_url
            .as_ref()
            .ok_or(AppError::NotFound("Base URL.".to_string()))?;

        let mut url = Url::parse(base_url)?.join(&format!("rest/v1/{}", self.table))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*");
            if let Some(id) = user_id {
                query.append_pair("id", &format!("eq.{}", id));
            }
        }
        Ok(url)
    }

    pub fn try_fetch(&self, user_id: Option<&str>) -> Result<Vec<UserData>, AppError> {
        let url = self.format_select_url(user_id)?;

        let client = blocking::Client::new();
        let mut request = client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request.send()?.error_for_status()?;

        // the endpoint answers `null` for an empty selection on some deployments
        let users: Option<Vec<UserData>> = serde_json::from_str(&response.text()?)?;
        Ok(users.unwrap_or_default())
    }

    /// Like [`Self::try_fetch`] but every failure becomes an empty, flagged outcome.
    pub fn fetch_user_data(&self, user_id: Option<&str>) -> FetchOutcome {
        match self.try_fetch(user_id) {
            Ok(users) => {
                info!("Fetched {} users", users.len());
                FetchOutcome { users, error: None }
            }
            Err(e) => {
                error!("Error fetching user data: {}", e);
                FetchOutcome {
                    users: Vec::new(),
                    error: Some(FETCH_FAILED_MESSAGE.to_string()),
                }
            }
        }
    }
}

impl Default for UserDataClient {
    fn default() -> Self {
        Self::new()
    }
}
