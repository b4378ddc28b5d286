//! Thin wrappers over the backend JSON API.
//!
//! Every call returns `Err(String)` on transport failure, non-2xx status or
//! undecodable body; callers show a generic message and log the detail.

use common::model::inspection::{Inspection, InspectionSummary};
use common::model::template::InspectionTemplate;
use common::requests::{QrCodeResponse, UpdateQrCodeRequest, UpdateQrCodeResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

async fn read_json<T: DeserializeOwned>(response: Result<Response, gloo_net::Error>) -> Result<T, String> {
    let response = response.map_err(|e| e.to_string())?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", status, body));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

pub async fn fetch_inspections() -> Result<Vec<InspectionSummary>, String> {
    read_json(Request::get("/api/inspections").send().await).await
}

pub async fn fetch_inspection(id: i64) -> Result<Inspection, String> {
    read_json(Request::get(&format!("/api/inspections/{}", id)).send().await).await
}

pub async fn fetch_template(template_id: &str) -> Result<InspectionTemplate, String> {
    read_json(Request::get(&format!("/api/templates/{}", template_id)).send().await).await
}

pub async fn fetch_qr_code(id: i64, codeword: Option<&str>) -> Result<QrCodeResponse, String> {
    let mut request = Request::get(&format!("/api/inspections/{}/qr", id));
    if let Some(codeword) = codeword {
        request = request.query([("codeword", codeword)]);
    }
    read_json(request.send().await).await
}

pub async fn store_qr_code(id: i64, qr_code: String) -> Result<UpdateQrCodeResponse, String> {
    let request = Request::post(&format!("/api/inspections/{}/qr-code", id))
        .json(&UpdateQrCodeRequest { qr_code })
        .map_err(|e| e.to_string())?;
    read_json(request.send().await).await
}
