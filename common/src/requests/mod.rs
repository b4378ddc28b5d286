use serde::{Deserialize, Serialize};

/// Body of `POST /api/inspections/{id}/qr-code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQrCodeRequest {
    pub qr_code: String,
}

/// Reply of `POST /api/inspections/{id}/qr-code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateQrCodeResponse {
    /// `false` when the stored image was already identical.
    pub changed: bool,
}

/// Reply of `GET /api/inspections/{id}/qr`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeResponse {
    /// Data URL of the composited image, or the remote QR URL on fallback.
    pub url: String,
    pub composited: bool,
    pub public_url: String,
}

/// Query string of `GET /api/inspections`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListInspectionsQuery {
    pub equipment_type: Option<String>,
}

/// Query string of `GET /api/inspections/{id}/qr`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QrCodeQuery {
    pub codeword: Option<String>,
}
