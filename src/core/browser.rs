// src/core/browser.rs
//
// Page fetch through headless Chromium (CDP). The wiki tables are filled
// in client-side, so a plain HTTP GET would miss them; we read the DOM
// back out after the page has rendered.

use std::error::Error;

use chromiumoxide::{Browser, BrowserConfig};
use futures_util::StreamExt;
use tokio::runtime::Runtime;

/// Fetch the fully rendered HTML for `url`.
///
/// Launches a headless browser, navigates, reads the page source and shuts
/// the browser down again before returning. The rest of the pipeline stays
/// synchronous; the async machinery is confined to this module.
pub fn fetch_rendered(url: &str) -> Result<String, Box<dyn Error>> {
    let rt = Runtime::new()?;
    rt.block_on(fetch(url))
}

async fn fetch(url: &str) -> Result<String, Box<dyn Error>> {
    let config = BrowserConfig::builder().build()?;
    let (mut browser, mut handler) = Browser::launch(config).await?;

    // The handler stream must be pumped for the browser to function.
    let events = tokio::spawn(async move { while handler.next().await.is_some() {} });

    let result = page_source(&browser, url).await;

    // Teardown runs on success and failure alike; the browser process must
    // not outlive the fetch.
    if let Err(e) = browser.close().await {
        loge!("browser close: {e}");
    }
    let _ = browser.wait().await;
    let _ = events.await;

    result
}

async fn page_source(browser: &Browser, url: &str) -> Result<String, Box<dyn Error>> {
    let page = browser.new_page(url).await?;
    page.wait_for_navigation().await?;
    let html = page.content().await?;
    Ok(html)
}
