use crate::error::{Result, YgoError};

pub const API_BASE: &str = "https://db.ygoprodeck.com/api/v7";
pub const CARDSETS_PATH: &str = "cardsets.php";
pub const CARDINFO_PATH: &str = "cardinfo.php";

pub const USER_AGENT: &str = concat!("ygoprodeck-browser/", env!("CARGO_PKG_VERSION"));

// User-facing text shown by the controller.
pub const SELECTOR_LABEL: &str = "Select a Set:";
pub const BUTTON_LABEL: &str = "Show Cards";
pub const NO_CARDS_MESSAGE: &str = "No cards found for this set.";
pub const LOADING_SETS_MESSAGE: &str = "Fetching list of Yu-Gi-Oh! card sets...";
pub const SETS_FAILED_MESSAGE: &str =
    "Failed to fetch the list of card sets. Please check your internet connection.";

/// Validate and normalize an API base URL (scheme required, no trailing slash).
pub fn normalize_api_base(base: &str) -> Result<String> {
    let trimmed = base.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(YgoError::InvalidArgument(format!(
            "API base must be an http(s) URL: {}",
            base
        )));
    }
    Ok(trimmed.to_string())
}

pub fn cardsets_url(api_base: &str) -> String {
    format!("{}/{}", api_base, CARDSETS_PATH)
}

/// The set name is percent-encoded; names routinely contain spaces, `&` and `:`.
pub fn cardinfo_url(api_base: &str, set_name: &str) -> String {
    format!(
        "{}/{}?cardset={}",
        api_base,
        CARDINFO_PATH,
        urlencoding::encode(set_name)
    )
}

pub fn fetching_cards_message(set_name: &str) -> String {
    format!("Fetching cards from '{}'...", set_name)
}

pub fn cards_failed_message(set_name: &str) -> String {
    format!("Could not retrieve card information for '{}'.", set_name)
}
