use thirtyfour::error::WebDriverResult;
use thirtyfour::{ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    /// Opens a headless Chrome session against the configured WebDriver
    /// server.
    pub async fn new(server_url: &str) -> WebDriverResult<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.set_headless()?;

        let driver = WebDriver::new(server_url, caps).await?;

        Ok(Droid { driver })
    }

    /// Ends the browser session. Runs on every exit path of a scrape; a
    /// failed teardown is logged rather than propagated so it cannot mask
    /// the scrape outcome.
    pub async fn quit(self) {
        if let Err(e) = self.driver.quit().await {
            log::error!("Failed to end the webdriver session: {:?}", e);
        }
    }
}
