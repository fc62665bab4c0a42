//! HTTP implementation of the inventory API
//!
//! Endpoints, relative to the configured base URL:
//! - `vehicles`, `vehicles/{id}`
//! - `rooftops`, `rooftops/{id}`
//! - `images/vehicle/{id}`, `videos/vehicle/{id}`, `spins/vehicle/{id}`
//!
//! Failures are never retried here; the page decides what to show.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::InventoryApi;
use crate::config::ApiConfig;
use crate::errors::{Action, ClientError, ClientResult};
use crate::models::{
    Rooftop, RooftopRecord, Vehicle, VehicleImage, VehicleRecord, VehicleSpin, VehicleVideo,
};

/// Describes one API call for error reporting
#[derive(Debug, Clone, Copy)]
struct Call {
    action: Action,
    entity: &'static str,
    /// Resource and id reported when the API answers 404
    target: Option<(&'static str, i64)>,
}

impl Call {
    fn new(action: Action, entity: &'static str) -> Self {
        Self {
            action,
            entity,
            target: None,
        }
    }

    fn on(mut self, resource: &'static str, id: i64) -> Self {
        self.target = Some((resource, id));
        self
    }

    fn failed(&self, message: impl Into<String>) -> ClientError {
        ClientError::transport(self.action, self.entity, message)
    }
}

#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    client: Client,
    base_url: String,
}

impl HttpInventoryClient {
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClientError::configuration(format!("invalid base_url '{}': {}", config.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn execute(&self, request: RequestBuilder, call: Call) -> ClientResult<Response> {
        let response = request.send().await.map_err(|e| {
            warn!(entity = call.entity, action = %call.action, "Inventory API request failed: {}", e);
            call.failed(e.to_string())
        })?;

        let status = response.status();
        debug!(entity = call.entity, action = %call.action, status = %status, "Inventory API response");

        if status == StatusCode::NOT_FOUND {
            if let Some((resource, id)) = call.target {
                return Err(ClientError::not_found(resource, id));
            }
        }

        if !status.is_success() {
            warn!(entity = call.entity, action = %call.action, status = %status, "Inventory API returned an error status");
            return Err(call.failed(format!("HTTP error: {}", status)));
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call: Call,
    ) -> ClientResult<T> {
        let response = self.execute(request, call).await?;
        response.json::<T>().await.map_err(|e| {
            warn!(entity = call.entity, action = %call.action, "Undecodable inventory API body: {}", e);
            call.failed(format!("invalid response body: {}", e))
        })
    }

    async fn send_empty(&self, request: RequestBuilder, call: Call) -> ClientResult<()> {
        self.execute(request, call).await.map(|_| ())
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryClient {
    async fn list_vehicles(&self) -> ClientResult<Vec<Vehicle>> {
        let request = self.client.get(self.endpoint("vehicles"));
        self.send_json(request, Call::new(Action::Fetch, "vehicles"))
            .await
    }

    async fn get_vehicle(&self, id: i64) -> ClientResult<Vehicle> {
        let request = self.client.get(self.endpoint(&format!("vehicles/{}", id)));
        self.send_json(request, Call::new(Action::Fetch, "vehicle").on("vehicle", id))
            .await
    }

    async fn create_vehicle(&self, record: &VehicleRecord) -> ClientResult<Vehicle> {
        let request = self.client.post(self.endpoint("vehicles")).json(record);
        self.send_json(request, Call::new(Action::Create, "vehicle"))
            .await
    }

    async fn update_vehicle(&self, id: i64, record: &VehicleRecord) -> ClientResult<()> {
        let request = self
            .client
            .put(self.endpoint(&format!("vehicles/{}", id)))
            .json(record);
        self.send_empty(request, Call::new(Action::Update, "vehicle").on("vehicle", id))
            .await
    }

    async fn delete_vehicle(&self, id: i64) -> ClientResult<()> {
        let request = self
            .client
            .delete(self.endpoint(&format!("vehicles/{}", id)));
        self.send_empty(request, Call::new(Action::Delete, "vehicle").on("vehicle", id))
            .await
    }

    async fn list_rooftops(&self) -> ClientResult<Vec<Rooftop>> {
        let request = self.client.get(self.endpoint("rooftops"));
        self.send_json(request, Call::new(Action::Fetch, "rooftops"))
            .await
    }

    async fn get_rooftop(&self, id: i64) -> ClientResult<Rooftop> {
        let request = self.client.get(self.endpoint(&format!("rooftops/{}", id)));
        self.send_json(request, Call::new(Action::Fetch, "rooftop").on("rooftop", id))
            .await
    }

    async fn create_rooftop(&self, record: &RooftopRecord) -> ClientResult<Rooftop> {
        let request = self.client.post(self.endpoint("rooftops")).json(record);
        self.send_json(request, Call::new(Action::Create, "rooftop"))
            .await
    }

    async fn update_rooftop(&self, id: i64, record: &RooftopRecord) -> ClientResult<()> {
        let request = self
            .client
            .put(self.endpoint(&format!("rooftops/{}", id)))
            .json(record);
        self.send_empty(request, Call::new(Action::Update, "rooftop").on("rooftop", id))
            .await
    }

    async fn delete_rooftop(&self, id: i64) -> ClientResult<()> {
        let request = self
            .client
            .delete(self.endpoint(&format!("rooftops/{}", id)));
        self.send_empty(request, Call::new(Action::Delete, "rooftop").on("rooftop", id))
            .await
    }

    async fn list_images(&self, vehicle_id: i64) -> ClientResult<Vec<VehicleImage>> {
        let request = self
            .client
            .get(self.endpoint(&format!("images/vehicle/{}", vehicle_id)));
        self.send_json(request, Call::new(Action::Fetch, "vehicle images"))
            .await
    }

    async fn list_videos(&self, vehicle_id: i64) -> ClientResult<Vec<VehicleVideo>> {
        let request = self
            .client
            .get(self.endpoint(&format!("videos/vehicle/{}", vehicle_id)));
        self.send_json(request, Call::new(Action::Fetch, "vehicle videos"))
            .await
    }

    async fn list_spins(&self, vehicle_id: i64) -> ClientResult<Vec<VehicleSpin>> {
        let request = self
            .client
            .get(self.endpoint(&format!("spins/vehicle/{}", vehicle_id)));
        self.send_json(request, Call::new(Action::Fetch, "vehicle 360 spins"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = HttpInventoryClient::new(&ApiConfig {
            base_url: "http://localhost:3000/api/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();

        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.endpoint("vehicles/4"), "http://localhost:3000/api/vehicles/4");
    }

    #[test]
    fn test_invalid_base_url_is_a_configuration_error() {
        let result = HttpInventoryClient::new(&ApiConfig {
            base_url: "not a url".to_string(),
            timeout_secs: 5,
        });

        assert!(matches!(result, Err(ClientError::Configuration { .. })));
    }
}
