use url::form_urlencoded;

use crate::content::models::Address;

pub const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Map search link for an address: `"<street>, <postal> <city>"`, form-urlencoded.
pub fn maps_search_url(address: &Address) -> String {
    let query = format!("{}, {}", address.street, address.postal_line());
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{MAPS_SEARCH_BASE}{encoded}")
}
