mod error;

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

pub use error::Error;

/// Query parameter the daily-menu view filters on.
pub const DATE_PARAM: &str = "field_uw_fs_dm_date_value[value][date]";

/// Anything that can hand back the raw menu page for a date.
pub trait MenuSource {
    async fn fetch(&self, date: NaiveDate) -> Result<String, Error>;
}

pub fn make_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().gzip(true).timeout(timeout).build()
}

/// The live daily-menu page, one GET per date.
#[derive(Debug, Clone)]
pub struct MenuPage {
    client: Client,
    base_url: Url,
}

impl MenuPage {
    pub const fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn url_for(&self, date: NaiveDate) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair(DATE_PARAM, date.format("%Y-%m-%d").to_string().as_str());
        url
    }
}

impl MenuSource for MenuPage {
    #[instrument(skip(self, date), fields(date = %date.format("%Y-%m-%d")), level = Level::DEBUG, err)]
    async fn fetch(&self, date: NaiveDate) -> Result<String, Error> {
        let url = self.url_for(date);
        let start = std::time::Instant::now();
        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        let text = res.text().await?;
        log::trace!("Got text of menu page in \t {:?}", start.elapsed());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    fn page_for(server: &MockServer) -> MenuPage {
        let base_url = Url::parse(&format!("{}/daily-menu", server.uri())).unwrap();
        MenuPage::new(make_client(Duration::from_secs(5)).unwrap(), base_url)
    }

    #[test]
    fn test_url_for_appends_date() {
        let page = MenuPage::new(
            Client::new(),
            Url::parse("https://uwaterloo.ca/food-services-information/locations-and-hours/daily-menu")
                .unwrap(),
        );
        let url = page.url_for(date());
        let pairs: Vec<_> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![(DATE_PARAM.to_owned(), "2024-03-14".to_owned())]);
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/daily-menu"))
            .and(query_param(DATE_PARAM, "2024-03-14"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>menu</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let page = page_for(&server);
        assert_eq!(page.fetch(date()).await.unwrap(), "<html>menu</html>");
    }

    #[tokio::test]
    async fn test_fetch_non_success_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let page = page_for(&server);
        let err = page.fetch(date()).await.unwrap_err();
        assert!(matches!(err, Error::Status(503)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let base_url = Url::parse(&server.uri()).unwrap();
        let page = MenuPage::new(make_client(Duration::from_millis(100)).unwrap(), base_url);
        let err = page.fetch(date()).await.unwrap_err();
        assert!(matches!(err, Error::Request(_)), "got {err:?}");
    }
}
