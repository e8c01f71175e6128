use anyhow::{Context, Result};
use reqwest::StatusCode;
use scraper::{Html, Selector};
use serde::Serialize;
use serde_json::{json, Value};

const ACCOUNT_PATH: &str = "/app/account";
const LOGIN_PATH: &str = "/app/api/console/account/login";
const ACQUISITIONS_PATH: &str = "/app/api/v1/surface_browser/acquisitions";

/// The account page declares the anti-forgery token in an inline script;
/// the declaration is located by this marker rather than by script position.
const CSRF_TOKEN_MARKER: &str = "_csrf_token";

pub struct SecurityTrailsClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct LoginPayload {
    _csrf_token: String,
    login: LoginCredentials,
}

#[derive(Serialize)]
struct LoginCredentials {
    email: String,
    password: String,
}

impl SecurityTrailsClient {
    /// The CSRF fetch, login and acquisitions query must share one cookie
    /// jar.
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to build the http client")?;

        Ok(SecurityTrailsClient { client, base_url })
    }

    /// Logs in and queries the acquisitions endpoint for the domain. A
    /// non-200 acquisitions response is returned as an error value inside
    /// the payload, not as a failure; transport and token-extraction
    /// failures are fatal.
    pub async fn fetch_acquisitions(
        &self,
        domain: &str,
        email: &str,
        password: &str,
    ) -> Result<Value> {
        let account_page = self
            .client
            .get(format!("{}{}", self.base_url, ACCOUNT_PATH))
            .send()
            .await
            .context("Failed to fetch the account page")?
            .text()
            .await
            .context("Failed to read the account page body")?;

        let csrf_token = extract_csrf_token(&account_page)
            .context("No csrf token declaration found in the account page")?;

        let login_response = self
            .client
            .post(format!("{}{}", self.base_url, LOGIN_PATH))
            .json(&LoginPayload {
                _csrf_token: csrf_token,
                login: LoginCredentials {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            })
            .send()
            .await
            .context("Login request failed")?;
        log::info!("Login request returned status {}", login_response.status());

        let acquisition_response = self
            .client
            .get(format!(
                "{}{}/{}",
                self.base_url, ACQUISITIONS_PATH, domain
            ))
            .send()
            .await
            .with_context(|| format!("Acquisitions request for {} failed", domain))?;

        match acquisition_response.status() {
            StatusCode::OK => acquisition_response
                .json::<Value>()
                .await
                .context("Failed to parse the acquisitions response body"),
            status => {
                log::warn!(
                    "Acquisitions query for {} returned status {}",
                    domain,
                    status
                );
                Ok(json!({
                    "error": format!(
                        "Failed to retrieve data for domain {}. Status code: {}",
                        domain,
                        status.as_u16()
                    )
                }))
            }
        }
    }
}

/// Finds the first script whose text carries the token marker and takes
/// the first quoted string after it. Missing declarations surface as
/// `None` and are fatal to the run.
fn extract_csrf_token(page_source: &str) -> Option<String> {
    let html_document = Html::parse_document(page_source);
    let script_selector = Selector::parse("script").unwrap();

    html_document
        .select(&script_selector)
        .map(|script| script.text().collect::<String>())
        .find(|content| content.contains(CSRF_TOKEN_MARKER))
        .and_then(|content| {
            let (_, after_marker) = content.split_once(CSRF_TOKEN_MARKER)?;
            let token = after_marker.split('"').nth(1)?;

            match token.is_empty() {
                true => None,
                false => Some(token.to_string()),
            }
        })
}
