use anyhow::{anyhow, Context, Result};
use url::Url;

use crate::domain::acquisition::{mine_acquisition_mentions, AcquisitionMention};
use crate::services::Droid;

pub struct CrunchbaseClient {
    base_url: String,
    webdriver_url: String,
}

impl CrunchbaseClient {
    pub fn new(base_url: String, webdriver_url: String) -> Self {
        CrunchbaseClient {
            base_url,
            webdriver_url,
        }
    }

    /// Renders the company-financials profile in a headless browser and
    /// mines the visible text for acquisition mentions. Zero matches is a
    /// valid outcome, not an error.
    pub async fn fetch_acquisition_mentions(
        &self,
        company_name: &str,
    ) -> Result<Vec<AcquisitionMention>> {
        let profile_url = self.company_financials_url(company_name)?;
        log::info!("Loading {}", profile_url);

        let droid = Droid::new(&self.webdriver_url)
            .await
            .context("Failed to open a browser session")?;

        // The session is released before any scrape error propagates.
        let result = scrape_rendered_mentions(&droid, profile_url.as_str()).await;
        droid.quit().await;

        result
    }

    /// Free-form company names go through path-segment percent-encoding.
    fn company_financials_url(&self, company_name: &str) -> Result<Url> {
        let mut profile_url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid crunchbase base url {}", self.base_url))?;

        profile_url
            .path_segments_mut()
            .map_err(|_| anyhow!("Crunchbase base url {} cannot hold a path", self.base_url))?
            .pop_if_empty()
            .extend(["organization", company_name, "company_financials"]);

        Ok(profile_url)
    }
}

async fn scrape_rendered_mentions(droid: &Droid, url: &str) -> Result<Vec<AcquisitionMention>> {
    droid
        .driver
        .goto(url)
        .await
        .with_context(|| format!("Failed to open {}", url))?;

    let page_source = droid
        .driver
        .source()
        .await
        .context("Failed to read the rendered page source")?;

    Ok(mine_acquisition_mentions(&page_source))
}

#[cfg(test)]
mod tests {
    use super::CrunchbaseClient;

    #[test]
    fn company_profile_url_is_built_from_the_base() {
        let client = CrunchbaseClient::new(
            "https://www.crunchbase.com".to_string(),
            "http://localhost:4444".to_string(),
        );

        let url = client.company_financials_url("acme").unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.crunchbase.com/organization/acme/company_financials"
        );
    }

    #[test]
    fn company_names_are_percent_encoded() {
        let client = CrunchbaseClient::new(
            "https://www.crunchbase.com".to_string(),
            "http://localhost:4444".to_string(),
        );

        let url = client.company_financials_url("Acme Corp").unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.crunchbase.com/organization/Acme%20Corp/company_financials"
        );
    }
}
