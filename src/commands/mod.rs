pub mod broker;
pub mod financials;
pub mod insider;
pub mod keystats;
pub mod performance;
pub mod profile;
pub mod quote;
pub mod refresh;
pub mod search;
pub mod stream;
pub mod watchlist;

use crate::error::{AppError, Result};
use crate::services::{AccessToken, DashboardClient};
use crate::utils;

/// Build a client from the environment. The token is required; the session
/// cookie is optional.
pub(crate) fn build_client() -> Result<DashboardClient> {
    let bearer = utils::get_access_token()
        .ok_or_else(|| AppError::Config("MARKETDECK_ACCESS_TOKEN is not set".to_string()))?;
    let mut token = AccessToken::new(bearer);
    if let Some(cookie) = utils::get_session_cookie() {
        token = token.with_session(cookie);
    }
    DashboardClient::new(utils::get_base_url(), token)
}

/// Pretty-print the `data` subtree of a raw response (or the whole body when
/// the envelope is absent).
pub(crate) fn print_data(response: &serde_json::Value) {
    let data = response.get("data").unwrap_or(response);
    println!(
        "{}",
        serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
    );
}

pub(crate) fn exit_with_error(err: AppError) -> ! {
    eprintln!("❌ {}", err);
    std::process::exit(1);
}
