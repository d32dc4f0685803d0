use reqwest::StatusCode;

use crate::{
    client::API_URL,
    data::{ApiErrorBody, GenerateGameRequest, GenerateGameResponse},
};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server responded {status}: {message}")]
    Server { status: StatusCode, message: String },
}

pub async fn generate(request: &GenerateGameRequest) -> Result<GenerateGameResponse, ApiError> {
    let response = reqwest::Client::new()
        .post(format!("{API_URL}/api/v1/generate"))
        .json(request)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        let message = error_message(response.text().await?);
        return Err(ApiError::Server { status, message });
    }
    Ok(response.json::<GenerateGameResponse>().await?)
}

/// Extracts the backend's error envelope, falling back to the raw body.
fn error_message(body: String) -> String {
    serde_json::from_str::<ApiErrorBody>(&body)
        .map(|body| body.error)
        .unwrap_or(body)
}
