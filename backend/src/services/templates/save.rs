use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::model::template::InspectionTemplate;
use log::info;
use uuid::Uuid;

pub async fn process(
    payload: web::Json<InspectionTemplate>,
    state: web::Data<AppState>,
) -> impl Responder {
    let mut template = payload.into_inner();
    if template.id.trim().is_empty() {
        template.id = Uuid::new_v4().to_string();
    }

    match state.store.save_template(&template) {
        Ok(()) => {
            info!("Template {} saved ({} sections)", template.id, template.structure.sections.len());
            HttpResponse::Ok().json(template)
        }
        Err(e) => store_error_response("Error saving template", &e),
    }
}

#[cfg(test)]
mod tests {
    use crate::services::templates::configure_routes;
    use crate::services::test_support::app_state;
    use actix_web::{test, App};
    use common::model::template::InspectionTemplate;
    use serde_json::json;

    fn harness_template(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Harnais",
            "equipmentType": "harness",
            "structure": { "sections": [
                { "id": "sangles", "title": "Sangles", "layout": "title-content", "subsections": [
                    { "id": "usure", "label": "Coupure, usure", "hasStatus": true, "crossableWords": true }
                ]}
            ]}
        })
    }

    #[actix_web::test]
    async fn saved_template_gets_an_id_and_is_listed() {
        let (_dir, state) = app_state();
        let app = test::init_service(App::new().app_data(state).service(configure_routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/templates/save")
            .set_json(harness_template(""))
            .to_request();
        let saved: InspectionTemplate = test::call_and_read_body_json(&app, req).await;
        assert!(!saved.id.is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/api/templates/{}", saved.id))
            .to_request();
        let loaded: InspectionTemplate = test::call_and_read_body_json(&app, req).await;
        assert_eq!(loaded, saved);

        let req = test::TestRequest::get().uri("/api/templates").to_request();
        let all: Vec<InspectionTemplate> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 1);
    }

    #[actix_web::test]
    async fn duplicate_sections_are_rejected() {
        let (_dir, state) = app_state();
        let app = test::init_service(App::new().app_data(state).service(configure_routes())).await;

        let mut body = harness_template("tpl");
        let section = body["structure"]["sections"][0].clone();
        body["structure"]["sections"]
            .as_array_mut()
            .unwrap()
            .push(section);

        let req = test::TestRequest::post()
            .uri("/api/templates/save")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn unknown_template_is_404() {
        let (_dir, state) = app_state();
        let app = test::init_service(App::new().app_data(state).service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/templates/absent").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }
}
