use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;

use common::model::card::{DataEnvelope, DigitalCard};
use common::model::config::ClientConfig;
use common::model::page::CardPage;
use common::requests::{ListParams, ToggleStatusRequest, UpdateDigitalCardRequest};

use super::error::ApiError;

/// Multipart field the API expects the photo under.
const IMAGE_FIELD: &str = "image";

/// Thin async client over `{api_origin}/api/digital-cards`.
///
/// Cheap to clone so each spawned request can own a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct CardsApi {
    base: String,
}

impl CardsApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base: format!(
                "{}/api/digital-cards",
                config.api_origin.trim_end_matches('/')
            ),
        }
    }

    fn card_url(&self, id: u64) -> String {
        format!("{}/{}", self.base, id)
    }

    pub async fn get(&self, id: u64) -> Result<DigitalCard, ApiError> {
        let response = Request::get(&self.card_url(id))
            .header("Accept", "application/json")
            .send()
            .await?;
        read_json::<DataEnvelope<DigitalCard>>(response)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn update(
        &self,
        id: u64,
        payload: &UpdateDigitalCardRequest,
    ) -> Result<DigitalCard, ApiError> {
        let response = Request::put(&self.card_url(id))
            .header("Accept", "application/json")
            .json(payload)?
            .send()
            .await?;
        read_json::<DataEnvelope<DigitalCard>>(response)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn upload_image(&self, id: u64, file: &web_sys::File) -> Result<(), ApiError> {
        let form = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let response = Request::post(&format!("{}/image", self.card_url(id)))
            .header("Accept", "application/json")
            .body(form)?
            .send()
            .await?;
        expect_success(response).await
    }

    pub async fn delete_image(&self, id: u64) -> Result<(), ApiError> {
        let response = Request::delete(&format!("{}/image", self.card_url(id)))
            .header("Accept", "application/json")
            .send()
            .await?;
        expect_success(response).await
    }

    pub async fn toggle_status(
        &self,
        id: u64,
        request: &ToggleStatusRequest,
    ) -> Result<DigitalCard, ApiError> {
        let response = Request::patch(&format!("{}/toggle-status", self.card_url(id)))
            .header("Accept", "application/json")
            .json(request)?
            .send()
            .await?;
        read_json::<DataEnvelope<DigitalCard>>(response)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let response = Request::delete(&self.card_url(id))
            .header("Accept", "application/json")
            .send()
            .await?;
        expect_success(response).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<CardPage, ApiError> {
        let response = Request::get(&self.base)
            .header("Accept", "application/json")
            .query(params.to_query().iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await?;
        read_json::<CardPage>(response).await
    }
}

async fn expect_success(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn status_error(response: Response) -> ApiError {
    ApiError::Status {
        status: response.status(),
        body: response.text().await.unwrap_or_default(),
    }
}
