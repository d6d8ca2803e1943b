//! Fetch, decode and convert pipeline.

use chrono::{Local, NaiveDate};
use kabuplus_format::transform_to_kdb;
use kabuplus_types::{Credentials, KabuPlusError, Result};
use tracing::debug;

use crate::{ClientConfig, FetchError, PriceClient, decode_shift_jis};

/// Client for the KABU+ daily stock price feed.
///
/// Holds the login for its whole lifetime. Every call downloads the file
/// again; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct KabuPlus {
    client: PriceClient,
}

impl KabuPlus {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(user, password), ClientConfig::default())
    }

    /// Creates a client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let client = PriceClient::new(credentials, config)
            .map_err(|e| KabuPlusError::Http(e.to_string()))?;
        Ok(Self { client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &PriceClient {
        &self.client
    }

    /// Downloads the price file for `date` and returns it as UTF-8 CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails, the status is not `200 OK` or
    /// the body is not valid Shift-JIS.
    pub fn fetch_raw_prices(&self, date: NaiveDate) -> Result<Vec<u8>> {
        self.fetch_text(date).map(String::into_bytes)
    }

    /// Downloads today's price file, using the local calendar date.
    ///
    /// # Errors
    ///
    /// See [`KabuPlus::fetch_raw_prices`].
    pub fn fetch_raw_prices_today(&self) -> Result<Vec<u8>> {
        self.fetch_raw_prices(Local::now().date_naive())
    }

    /// Downloads the price file for `date` and converts it to KDB CSV.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as
    /// [`KabuPlus::fetch_raw_prices`], or if any data row is malformed.
    pub fn fetch_transformed_prices(&self, date: NaiveDate) -> Result<Vec<u8>> {
        let text = self.fetch_text(date)?;
        transform_to_kdb(&text).map_err(|e| KabuPlusError::Transform(e.to_string()))
    }

    fn fetch_text(&self, date: NaiveDate) -> Result<String> {
        let body = self.client.fetch(date).map_err(|e| match e {
            FetchError::Status { status } => KabuPlusError::Status(status.to_string()),
            FetchError::Http(e) => KabuPlusError::Http(e.to_string()),
        })?;

        let text = decode_shift_jis(&body).map_err(|e| KabuPlusError::Decode(e.to_string()))?;
        debug!(bytes = body.len(), utf8_bytes = text.len(), %date, "decoded price file");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::SHIFT_JIS;
    use wiremock::matchers::{basic_auth, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PRICE_PATH: &str = "/japan-all-stock-prices/daily/japan-all-stock-prices_20200110.csv";

    const FEED: &str = "SC,名称,市場,業種,日時,株価,前日比,前日比（％）,前日終値,始値,高値,安値,出来高,売買代金（千円）\r\n\
1301,極洋,東証一部,水産・農林業,2020/01/10 15:00,2905,25,0.87,2880,2880,2910,2875,12300,35640\r\n\
3070,アマガサ,JQG,小売業,2020/01/10 15:00,480,-,-,480,-,-,-,0,-\r\n";

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 10).unwrap()
    }

    fn shift_jis(text: &str) -> Vec<u8> {
        let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
        assert!(!had_errors);
        bytes.into_owned()
    }

    async fn serve(status: u16, body: Vec<u8>) -> MockServer {
        serve_at(PRICE_PATH, status, body).await
    }

    async fn serve_at(price_path: &str, status: u16, body: Vec<u8>) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(price_path))
            .and(basic_auth("user", "pass"))
            .respond_with(ResponseTemplate::new(status).set_body_bytes(body))
            .mount(&server)
            .await;
        server
    }

    /// Runs `call` on a blocking thread against `server`.
    async fn run<T, F>(server: &MockServer, call: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&KabuPlus) -> Result<T> + Send + 'static,
    {
        let config = ClientConfig::default().with_base_url(server.uri());
        tokio::task::spawn_blocking(move || {
            let client = KabuPlus::with_config(Credentials::new("user", "pass"), config)?;
            call(&client)
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_raw_prices() {
        let server = serve(200, shift_jis(FEED)).await;
        let raw = run(&server, |c| c.fetch_raw_prices(test_date()))
            .await
            .unwrap();

        assert_eq!(String::from_utf8(raw).unwrap(), FEED);
    }

    #[tokio::test]
    async fn test_fetch_raw_prices_today_uses_local_date() {
        let today = Local::now().date_naive().format("%Y%m%d");
        let today_path =
            format!("/japan-all-stock-prices/daily/japan-all-stock-prices_{today}.csv");
        let server = serve_at(&today_path, 200, shift_jis(FEED)).await;

        let raw = run(&server, KabuPlus::fetch_raw_prices_today)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(raw).unwrap(), FEED);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KabuPlus>();
    }

    #[tokio::test]
    async fn test_fetch_transformed_prices() {
        let server = serve(200, shift_jis(FEED)).await;
        let kdb = run(&server, |c| c.fetch_transformed_prices(test_date()))
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(kdb).unwrap(),
            "コード,銘柄名,市場,始値,高値,安値,終値,出来高,売買代金\n\
1301-T,極洋,東証1部,2880,2910,2875,2905,12300,35640000\n\
3070-T,アマガサ,JQグロース,-,-,-,480,0,-\n"
        );
    }

    #[tokio::test]
    async fn test_non_200_is_error() {
        let server = serve(500, shift_jis(FEED)).await;
        let result = run(&server, |c| c.fetch_raw_prices(test_date())).await;

        match result {
            Err(KabuPlusError::Status(status)) => assert_eq!(status, "500 Internal Server Error"),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = serve(200, vec![b'a', 0xFF, b'b']).await;
        let result = run(&server, |c| c.fetch_raw_prices(test_date())).await;

        assert!(matches!(result, Err(KabuPlusError::Decode(_))));
    }

    #[tokio::test]
    async fn test_short_row_is_transform_error() {
        let feed = "header\r\n1301,極洋\r\n";
        let server = serve(200, shift_jis(feed)).await;
        let result = run(&server, |c| c.fetch_transformed_prices(test_date())).await;

        assert!(matches!(result, Err(KabuPlusError::Transform(_))));
    }

    #[test]
    fn test_unreachable_host_is_http_error() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:1");
        let client = KabuPlus::with_config(Credentials::new("user", "pass"), config).unwrap();

        let result = client.fetch_raw_prices_today();
        assert!(matches!(result, Err(KabuPlusError::Http(_))));
    }
}
