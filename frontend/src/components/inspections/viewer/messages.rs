use common::model::inspection::Inspection;
use common::model::template::InspectionTemplate;
use common::requests::QrCodeResponse;

pub enum Msg {
    InspectionLoaded(Inspection),
    TemplateLoaded(InspectionTemplate),
    TemplateFailed(String),
    QrLoaded(QrCodeResponse),
    LoadFailed(String),
    RegenerateQr,
    QrStored { qr: QrCodeResponse, changed: bool },
    QrFailed(String),
    OpenQrSheet,
    CloseQrSheet,
}
