use std::time::Duration;

use async_trait::async_trait;

use crate::daemon::{DaemonClient, DaemonCommand};
use crate::error::daemon::DaemonError;

/// reqwest-backed [`DaemonClient`] talking to each node's daemon API.
///
/// One client serves every node; the target endpoint and bearer token come
/// from the node record on each call.
pub struct HttpDaemonClient {
    http: reqwest::Client,
}

impl HttpDaemonClient {
    /// Builds a client with a bounded per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http })
    }

    fn base_url(node: &entity::node::Model) -> String {
        format!("{}://{}:{}", node.scheme, node.fqdn, node.daemon_listen)
    }
}

#[async_trait]
impl DaemonClient for HttpDaemonClient {
    async fn send_command(
        &self,
        node: &entity::node::Model,
        command: DaemonCommand,
    ) -> Result<(), DaemonError> {
        let url = format!("{}{}", Self::base_url(node), command.path());

        tracing::debug!(node = node.id, %url, "sending daemon command");

        let mut request = self
            .http
            .request(command.method(), &url)
            .bearer_auth(&node.daemon_token);
        if let Some(body) = command.body() {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(DaemonError::Connection)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();

        Err(DaemonError::Http { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn base_url_is_built_from_the_node_endpoint_fields() {
        let node = entity::node::Model {
            id: 1,
            uuid: Uuid::new_v4(),
            location_id: 1,
            name: "Node".to_string(),
            fqdn: "daemon.example.com".to_string(),
            scheme: "https".to_string(),
            daemon_listen: 8443,
            daemon_token: "secret".to_string(),
            created_at: Utc::now(),
        };

        assert_eq!(
            HttpDaemonClient::base_url(&node),
            "https://daemon.example.com:8443"
        );
    }
}
