use reqwest::blocking::{Client, Response};
use tracing::{debug, info};

use crate::catalog::{latest_elements_path, CatalogEntry, CatalogPage, CatalogSource, PageQuery};
use crate::config::SpaceTrackConfig;
use crate::error::{Error, Result};
use crate::tle::ElementSource;

/// Blocking Space-Track client.
///
/// Every call logs in with the configured credentials and runs one query in the
/// same request (`ajaxauth/login` with a `query` form field). There is no
/// session reuse, no retry and no caching.
pub struct SpaceTrackClient {
    config: SpaceTrackConfig,
    client: Client,
}

impl SpaceTrackClient {
    pub fn new(config: SpaceTrackConfig) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &SpaceTrackConfig {
        &self.config
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    fn run_query(&self, path: &str) -> Result<Response> {
        let query = self.config.query_url(path);
        let form = [
            ("identity", self.config.identity.as_str()),
            ("password", self.config.password.as_str()),
            ("query", query.as_str()),
        ];

        let response = self
            .client
            .post(self.config.auth_url())
            .form(&form)
            .send()
            .map_err(Error::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteStatus {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

impl CatalogSource for SpaceTrackClient {
    fn fetch_page(&self, page_index: usize, page_size: usize) -> Result<CatalogPage> {
        let query = PageQuery::new(page_index, page_size);
        debug!(page = page_index, offset = query.offset(), limit = page_size, "fetching catalog page");

        let body = self.run_query(&query.query_path())?.text().map_err(Error::Transport)?;
        let entries = decode_page(&body)?;

        info!(page = page_index, entries = entries.len(), "catalog page loaded");
        Ok(CatalogPage::new(page_index, entries))
    }
}

impl ElementSource for SpaceTrackClient {
    fn fetch_latest_elements(&self, catalog_id: &str) -> Result<String> {
        debug!(catalog_id, "fetching latest element set");
        self.run_query(&latest_elements_path(catalog_id))?
            .text()
            .map_err(Error::Transport)
    }
}

/// Decode one `satcat` response body.
pub fn decode_page(body: &str) -> Result<Vec<CatalogEntry>> {
    Ok(serde_json::from_str(body)?)
}

fn build_client(config: &SpaceTrackConfig) -> Result<Client> {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(user_agent())
        .build()
        .map_err(Error::Transport)
}

fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
