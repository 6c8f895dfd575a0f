//! Remote client adapter
//!
//! Mirror image of the REST surface for presentation code. Network failures
//! and non-success statuses are normalized into empty results: list calls
//! return an empty vec, lookups return `None`, mutations return `false`.
//! Callers treat "no data" and "operation failed" as expected outcomes, not
//! exceptions. Construct one client per process and pass it to consumers.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::dto::car_dto::{CarPayload, CarResponse, UpdateCarRequest};
use crate::dto::part_dto::{PartPayload, PartResponse, UpdatePartRequest};
use crate::dto::service_dto::{
    ServicePayload, ServiceResponse, UpdateServiceRequest, WorksheetResponse,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ShopClient {
    client: reqwest::Client,
    base_url: String,
}

impl ShopClient {
    /// `base_url` points at the API root, e.g. `http://localhost:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let result = async {
            self.client
                .get(self.url(path))
                .send()
                .await?
                .error_for_status()?
                .json::<T>()
                .await
        }
        .await;

        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("GET {} failed: {}", path, e);
                None
            }
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Option<T> {
        let result = async {
            self.client
                .post(self.url(path))
                .json(body)
                .send()
                .await?
                .error_for_status()?
                .json::<T>()
                .await
        }
        .await;

        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("POST {} failed: {}", path, e);
                None
            }
        }
    }

    async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> bool {
        match self.client.put(self.url(path)).json(body).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("PUT {} failed: {}", path, e);
                false
            }
        }
    }

    async fn delete(&self, path: &str) -> bool {
        match self.client.delete(self.url(path)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("DELETE {} failed: {}", path, e);
                false
            }
        }
    }

    // Car CRUD

    pub async fn cars(&self) -> Vec<CarResponse> {
        self.get_json("car").await.unwrap_or_default()
    }

    pub async fn car(&self, id: i64) -> Option<CarResponse> {
        self.get_json(&format!("car/{}", id)).await
    }

    pub async fn add_car(&self, payload: &CarPayload) -> Option<CarResponse> {
        self.post_json("car", payload).await
    }

    pub async fn update_car(&self, request: &UpdateCarRequest) -> bool {
        self.put_json(&format!("car/{}", request.id), request).await
    }

    pub async fn delete_car(&self, id: i64) -> bool {
        self.delete(&format!("car/{}", id)).await
    }

    // Service CRUD

    pub async fn services(&self) -> Vec<ServiceResponse> {
        self.get_json("service").await.unwrap_or_default()
    }

    pub async fn service(&self, id: i64) -> Option<ServiceResponse> {
        self.get_json(&format!("service/{}", id)).await
    }

    pub async fn services_for_car(&self, car_id: i64) -> Vec<ServiceResponse> {
        self.get_json(&format!("service/bycar/{}", car_id))
            .await
            .unwrap_or_default()
    }

    pub async fn add_service(&self, payload: &ServicePayload) -> Option<ServiceResponse> {
        self.post_json("service", payload).await
    }

    pub async fn update_service(&self, request: &UpdateServiceRequest) -> bool {
        self.put_json(&format!("service/{}", request.id), request)
            .await
    }

    pub async fn delete_service(&self, id: i64) -> bool {
        self.delete(&format!("service/{}", id)).await
    }

    /// Everything the worksheet printout needs for one service job.
    pub async fn worksheet(&self, service_id: i64) -> Option<WorksheetResponse> {
        self.get_json(&format!("service/{}/worksheet", service_id))
            .await
    }

    // Part CRUD

    pub async fn parts(&self) -> Vec<PartResponse> {
        self.get_json("part").await.unwrap_or_default()
    }

    pub async fn part(&self, id: i64) -> Option<PartResponse> {
        self.get_json(&format!("part/{}", id)).await
    }

    pub async fn parts_for_service(&self, service_id: i64) -> Vec<PartResponse> {
        self.get_json(&format!("part/byservice/{}", service_id))
            .await
            .unwrap_or_default()
    }

    pub async fn add_part(&self, payload: &PartPayload) -> Option<PartResponse> {
        self.post_json("part", payload).await
    }

    pub async fn update_part(&self, request: &UpdatePartRequest) -> bool {
        self.put_json(&format!("part/{}", request.id), request).await
    }

    pub async fn delete_part(&self, id: i64) -> bool {
        self.delete(&format!("part/{}", id)).await
    }
}
