//! URL utility functions for reading query parameters

use std::collections::HashMap;

use web_sys::window;

/// Parse a `location.search` string (`?a=1&b=two`) into decoded key/value pairs.
///
/// Keys without a value map to an empty string; later duplicates win.
pub fn parse_query(search: &str) -> HashMap<String, String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);

    query_string
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(value: &str) -> String {
    let value = value.replace('+', " ");
    urlencoding::decode(&value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.clone())
}

/// Query parameters of the current page; empty outside the browser.
pub fn get_query_params() -> HashMap<String, String> {
    if !cfg!(target_arch = "wasm32") {
        return HashMap::new();
    }

    window()
        .and_then(|window| window.location().search().ok())
        .map(|search| parse_query(&search))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let params = parse_query("?network=mainnet&endpoint=https%3A%2F%2Frpc.example.com&flag");
        assert_eq!(params.get("network").map(String::as_str), Some("mainnet"));
        assert_eq!(params.get("endpoint").map(String::as_str), Some("https://rpc.example.com"));
        assert_eq!(params.get("flag").map(String::as_str), Some(""));
    }

    #[test]
    fn test_parse_empty_query() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let params = parse_query("name=My+dApp");
        assert_eq!(params.get("name").map(String::as_str), Some("My dApp"));
    }
}
