use reqwest::Client;
use url::Url;

use crate::error::{PipeboardError, Result};
use crate::model::{HistoryEntry, PipelineGroup};

/// HTTP client for the dashboard API.
///
/// Stateless: no caching and no retries, the refresh loop is the retry.
pub struct DashboardClient {
    client: Client,
    base_url: Url,
}

impl DashboardClient {
    /// Creates a client for the dashboard server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the base URL cannot be parsed.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pipeboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PipeboardError::Config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = Url::parse(base_url)
            .map_err(|e| PipeboardError::Config(format!("Invalid base URL: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Fetches the full pipeline group listing.
    pub async fn pipeline_groups(&self) -> Result<Vec<PipelineGroup>> {
        let url = self.join("api/pipeline_groups.json")?;
        self.get_json(url).await
    }

    /// Fetches the run history for one pipeline, newest first.
    pub async fn pipeline_history(&self, pipeline: &str) -> Result<Vec<HistoryEntry>> {
        let mut url = self.join("api/pipeline_history.json")?;
        url.query_pairs_mut().append_pair("pipeline", pipeline);
        self.get_json(url).await
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PipeboardError::Config(format!("Invalid endpoint URL: {e}")))
    }

    async fn get_json<T>(&self, url: Url) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(PipeboardError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RunResult;
    use mockito::Matcher;

    #[test]
    fn test_invalid_base_url_is_a_config_error() {
        let result = DashboardClient::new("not a url");
        assert!(matches!(result, Err(PipeboardError::Config(_))));
    }

    #[tokio::test]
    async fn test_pipeline_groups_parses_listing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/pipeline_groups.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"Name":"build","Pipelines":["api","web"]},{"Name":"deploy","Pipelines":[]}]"#)
            .create_async()
            .await;

        let client = DashboardClient::new(&server.url()).unwrap();
        let groups = client.pipeline_groups().await.unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "build");
        assert_eq!(groups[0].pipelines, vec!["api", "web"]);
        assert!(groups[1].pipelines.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_pipeline_history_encodes_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/pipeline_history.json")
            .match_query(Matcher::UrlEncoded(
                "pipeline".into(),
                "release train".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"Result":"Passed"},{"Result":"Failed"}]"#)
            .create_async()
            .await;

        let client = DashboardClient::new(&server.url()).unwrap();
        let history = client.pipeline_history("release train").await.unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].result, RunResult::Passed);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/pipeline_groups.json")
            .with_status(503)
            .with_body("upstream down")
            .create_async()
            .await;

        let client = DashboardClient::new(&server.url()).unwrap();
        let err = client.pipeline_groups().await.unwrap_err();

        match err {
            PipeboardError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
