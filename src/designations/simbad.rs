//! SIMBAD identifier lookups over TAP
//!
//! Each batch is one synchronous ADQL query joining the `ident` table (the
//! identifiers we ask for) with `ids` (every identifier of the same object,
//! `|`-separated).

use serde::Deserialize;
use std::time::Duration;

use super::{DesignationSource, IdentifierRow};
use crate::{Result, Settings, StarprepError};

/// Client for the SIMBAD TAP service
pub struct SimbadClient {
    url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct TapRow {
    identifier: String,
    ids: Option<String>,
}

impl SimbadClient {
    /// Create a client for the given TAP `sync` endpoint
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    /// Create a client from pipeline settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.simbad_url, settings.http_timeout())
    }

    /// TAP endpoint this client queries
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Build the ADQL query returning all identifiers of the given objects
pub fn build_query(identifiers: &[String]) -> String {
    let list = identifiers
        .iter()
        .map(|id| format!("'{}'", id.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "SELECT id1.id AS identifier, ids.ids AS ids \
         FROM ident AS id1 JOIN ids ON id1.oidref = ids.oidref \
         WHERE id1.id IN ({})",
        list
    )
}

/// Parse a TAP CSV response into identifier rows
pub fn parse_tap_csv(text: &str) -> Result<Vec<IdentifierRow>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let has = |name: &str| headers.iter().any(|h| h == name);
    if !has("identifier") || !has("ids") {
        return Err(StarprepError::LookupError(format!(
            "Missing some fields in response, got columns: {}",
            headers.iter().collect::<Vec<_>>().join(", ")
        )));
    }

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let row: TapRow = row?;
        rows.push(IdentifierRow {
            identifier: row.identifier,
            ids: row.ids.unwrap_or_default(),
        });
    }
    Ok(rows)
}

impl DesignationSource for SimbadClient {
    fn lookup(&self, identifiers: &[String]) -> Result<Vec<IdentifierRow>> {
        let query = build_query(identifiers);
        let params = [
            ("REQUEST", "doQuery"),
            ("LANG", "ADQL"),
            ("FORMAT", "csv"),
            ("QUERY", query.as_str()),
        ];

        let response = self.client.post(&self.url).form(&params).send()?;
        if !response.status().is_success() {
            return Err(StarprepError::LookupError(format!(
                "SIMBAD query failed, status: {}",
                response.status()
            )));
        }

        let text = response.text()?;
        parse_tap_csv(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query() {
        let ids = vec!["HIP 1".to_string(), "HIP 32349".to_string()];
        let query = build_query(&ids);
        assert!(query.starts_with("SELECT id1.id AS identifier, ids.ids AS ids FROM ident"));
        assert!(query.ends_with("WHERE id1.id IN ('HIP 1', 'HIP 32349')"));
    }

    #[test]
    fn test_build_query_escapes_quotes() {
        let query = build_query(&["NAME Barnard's Star".to_string()]);
        assert!(query.contains("'NAME Barnard''s Star'"));
    }

    #[test]
    fn test_parse_tap_csv() {
        let text = "identifier,ids\n\
                    \"HIP 32349\",\"* alf CMa|* 9 CMa|NAME Sirius|HIP 32349\"\n\
                    \"HIP 1\",\n";
        let rows = parse_tap_csv(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].identifier, "HIP 32349");
        assert_eq!(rows[0].ids, "* alf CMa|* 9 CMa|NAME Sirius|HIP 32349");
        assert_eq!(rows[1].ids, "");
    }

    #[test]
    fn test_parse_tap_csv_missing_columns() {
        let err = parse_tap_csv("main_id\nfoo\n").unwrap_err();
        assert!(matches!(err, StarprepError::LookupError(_)));
    }

    #[test]
    fn test_client_from_settings() {
        let settings = Settings::default();
        let client = SimbadClient::from_settings(&settings).unwrap();
        assert_eq!(client.url(), crate::constants::SIMBAD_TAP_URL);
    }
}
