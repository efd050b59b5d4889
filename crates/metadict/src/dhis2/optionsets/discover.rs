use crate::dhis2::Dhis2Config;
use crate::prelude::*;

use metadict_core::option_set::{OptionSet, OptionSetsResponse};
use metadict_core::pagination::{pagination_filters, PagingResponse};

/// Field selector for full option set page fetches.
const OPTION_SET_FIELDS: &str = "id,name,code,valueType,options[id,name,code]";

/// Default number of option sets requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 200;

/// What to do when a single page fetch fails mid-discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OnPageError {
    /// Log the failure, keep what was merged so far and continue with the
    /// next page; discovery returns partial data.
    Skip,
    /// Stop at the first failing page and report the error.
    Abort,
}

/// Run the count phase and plan the page filters covering the collection.
///
/// Issues one minimal request (`fields=none&pageSize=1&paging=true`) to learn
/// the server-reported total. A count-phase failure is logged and falls back
/// to planning a single page; discovery never aborts here.
pub async fn discover_option_set_filters(
    client: &reqwest::Client,
    config: &Dhis2Config,
    page_size: usize,
) -> Vec<String> {
    log::info!("Discovering option set pagination from the server");

    let url = format!(
        "{}?fields=none&pageSize=1&paging=true",
        config.option_sets_url()
    );

    let response = match get_json::<PagingResponse>(client, &url).await {
        Ok(response) => response,
        Err(err) => {
            log::error!("Count request failed, planning a single page: {err}");
            PagingResponse::default()
        }
    };

    pagination_filters(&response, page_size)
}

/// Run the full two-phase discovery, merging every fetched page in order.
///
/// Pages are fetched strictly sequentially. A failing page is handled per
/// `on_page_error`: `Skip` keeps whatever was already merged and moves on,
/// so the result may be a strict subset of the remote total; `Abort`
/// propagates the page error.
pub async fn discover_option_sets(
    client: &reqwest::Client,
    config: &Dhis2Config,
    page_size: usize,
    on_page_error: OnPageError,
) -> Result<Vec<OptionSet>, Error> {
    let page_filters = discover_option_set_filters(client, config, page_size).await;

    let mut option_sets: Vec<OptionSet> = Vec::new();
    for page_filter in &page_filters {
        log::info!("Discovering option sets from the server: {page_filter}");

        let url = format!(
            "{}?fields={OPTION_SET_FIELDS}&{page_filter}",
            config.option_sets_url()
        );

        match get_json::<OptionSetsResponse>(client, &url).await {
            Ok(response) => option_sets.extend(response.option_sets),
            Err(err) => match on_page_error {
                OnPageError::Skip => {
                    log::error!("Skipping failed page {page_filter}: {err}");
                }
                OnPageError::Abort => {
                    log::error!("Aborting discovery at failed page {page_filter}: {err}");
                    return Err(err);
                }
            },
        }
    }

    Ok(option_sets)
}

/// Issue an authenticated GET and decode the JSON body.
async fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, Error> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api { status, body });
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
}
