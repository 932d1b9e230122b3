//! Requests to the Etiqueta API.
//!
//! Only the web build talks to the API; other builds get an error from every call.

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::model::{
    analytics::LabelAnalyticsDto,
    label::{CreateLabelDto, ExpirationAlertDto, FoodLabelDto, LabelStatus, UpdateLabelStatusDto},
    print::{PrintJobDto, PrintRequestDto, PrinterDto},
    product::{CreateProductDto, ProductDto},
    template::{LabelTemplateDto, SaveTemplateDto},
    user::{CookDto, CreateCookDto, GeneratedPinDto, PinLoginDto, UserDto},
};

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(feature = "web")]
async fn request<T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: Option<String>,
) -> Result<Option<T>, String> {
    use reqwasm::http::{Request, RequestCredentials};

    let request = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    let request = match body {
        Some(body) => request
            .header("Content-Type", "application/json")
            .body(body),
        None => request,
    };

    let response = request
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 | 201 => {
            let data = response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response from {}: {}", url, e))?;
            Ok(Some(data))
        }
        // No content, only valid for `T = ()`
        204 => serde_json::from_value(serde_json::Value::Null)
            .map(Some)
            .map_err(|e| format!("Unexpected empty response from {}: {}", url, e)),
        404 => Ok(None),
        status => {
            use crate::model::api::ErrorDto;

            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                Err(error_dto.error)
            } else {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(format!("Request failed with status {}: {}", status, error_text))
            }
        }
    }
}

#[cfg(not(feature = "web"))]
async fn request<T: DeserializeOwned>(
    method: Method,
    url: &str,
    _body: Option<String>,
) -> Result<Option<T>, String> {
    Err(format!(
        "{:?} {} is only available in the web build",
        method, url
    ))
}

fn to_body<B: Serialize>(body: &B) -> Result<Option<String>, String> {
    serde_json::to_string(body)
        .map(Some)
        .map_err(|e| format!("Failed to serialize request: {}", e))
}

/// Requests that must find their resource; a 404 becomes an error
async fn expect<T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: Option<String>,
) -> Result<T, String> {
    request(method, url, body)
        .await?
        .ok_or_else(|| "Not found".to_string())
}

/// Signed-in user, `None` when signed out
pub async fn get_current_user() -> Result<Option<UserDto>, String> {
    request(Method::Get, "/api/auth/user", None).await
}

pub async fn pin_login(login: &PinLoginDto) -> Result<UserDto, String> {
    expect(Method::Post, "/api/auth/pin", to_body(login)?).await
}

/// The whole catalog; pages filter it locally with `ProductDto::matches_search`
pub async fn get_products() -> Result<Vec<ProductDto>, String> {
    expect(Method::Get, "/api/products", None).await
}

pub async fn create_product(product: &CreateProductDto) -> Result<ProductDto, String> {
    expect(Method::Post, "/api/products", to_body(product)?).await
}

pub async fn get_labels() -> Result<Vec<FoodLabelDto>, String> {
    expect(Method::Get, "/api/labels", None).await
}

pub async fn create_label(label: &CreateLabelDto) -> Result<FoodLabelDto, String> {
    expect(Method::Post, "/api/labels", to_body(label)?).await
}

pub async fn update_label_status(
    label_id: Uuid,
    status: LabelStatus,
) -> Result<FoodLabelDto, String> {
    expect(
        Method::Put,
        &format!("/api/labels/{}/status", label_id),
        to_body(&UpdateLabelStatusDto { status })?,
    )
    .await
}

pub async fn get_alerts() -> Result<Vec<ExpirationAlertDto>, String> {
    expect(Method::Get, "/api/labels/alerts", None).await
}

pub async fn print_labels(request: &PrintRequestDto) -> Result<PrintJobDto, String> {
    expect(Method::Post, "/api/labels/print", to_body(request)?).await
}

pub async fn get_printers() -> Result<Vec<PrinterDto>, String> {
    expect(Method::Get, "/api/printers", None).await
}

pub async fn get_templates() -> Result<Vec<LabelTemplateDto>, String> {
    expect(Method::Get, "/api/templates", None).await
}

pub async fn create_template(template: &SaveTemplateDto) -> Result<LabelTemplateDto, String> {
    expect(Method::Post, "/api/templates", to_body(template)?).await
}

pub async fn update_template(
    template_id: &str,
    template: &SaveTemplateDto,
) -> Result<LabelTemplateDto, String> {
    expect(
        Method::Put,
        &format!("/api/templates/{}", template_id),
        to_body(template)?,
    )
    .await
}

/// Deletes a custom template, built-in templates are rejected by the server
pub async fn delete_template(template_id: &str) -> Result<(), String> {
    expect(Method::Delete, &format!("/api/templates/{}", template_id), None).await
}

pub async fn get_analytics() -> Result<LabelAnalyticsDto, String> {
    expect(Method::Get, "/api/analytics", None).await
}

pub async fn get_cooks() -> Result<Vec<CookDto>, String> {
    expect(Method::Get, "/api/users/cooks", None).await
}

pub async fn create_cook(cook: &CreateCookDto) -> Result<CookDto, String> {
    expect(Method::Post, "/api/users/cooks", to_body(cook)?).await
}

pub async fn generate_pin() -> Result<String, String> {
    expect::<GeneratedPinDto>(Method::Get, "/api/users/cooks/pin", None)
        .await
        .map(|generated| generated.pin)
}
