use crate::html::{render_error_page, render_public_page};
use crate::state::AppState;
use crate::store::StoreError;
use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use chrono::Local;
use common::link::{parse_public_slug, public_slug, PUBLIC_PATH};
use common::model::inspection::Inspection;
use common::render::{check_template_match, render_inspection, RenderedSection, TemplateMismatch};
use log::{error, warn};

const HTML: &str = "text/html; charset=utf-8";

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(HTML)
        .body(render_error_page("Cette fiche d'inspection n'existe pas."))
}

fn unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable()
        .content_type(HTML)
        .body(render_error_page(
            "Une erreur est survenue lors du chargement de l'inspection.",
        ))
}

const MISSING_TEMPLATE: &str = "Le modèle de cette inspection est introuvable. \
     Le détail des points de contrôle ne peut pas être affiché.";

/// Renders the checklist of `inspection` with its template, when it has one.
/// `Ok(None)` means the template is gone and no checklist can be shown.
fn render_checklist(
    state: &AppState,
    inspection: &Inspection,
) -> Result<Option<(Vec<RenderedSection>, Option<TemplateMismatch>)>, StoreError> {
    let Some(template_id) = inspection.template_id.as_deref() else {
        return Ok(Some((render_inspection(inspection, None), None)));
    };
    match state.store.get_template(template_id) {
        Ok(template) => Ok(Some((
            render_inspection(inspection, Some(&template)),
            check_template_match(inspection, &template),
        ))),
        Err(StoreError::NotFound(_)) => {
            warn!(
                "Template {} of inspection {} is missing",
                template_id, inspection.id
            );
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub async fn process(slug: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    let Some(id) = parse_public_slug(&slug) else {
        return not_found();
    };
    let inspection = match state.store.get_inspection(id) {
        Ok(inspection) => inspection,
        Err(StoreError::NotFound(_)) => return not_found(),
        Err(e) => {
            error!("Public view of inspection {} failed: {}", id, e);
            return unavailable();
        }
    };

    let canonical = public_slug(inspection.id, &inspection.reference);
    if slug.as_str() != canonical {
        return HttpResponse::PermanentRedirect()
            .insert_header((header::LOCATION, format!("{}/{}", PUBLIC_PATH, canonical)))
            .finish();
    }

    let today = Local::now().date_naive();
    let page = match render_checklist(&state, &inspection) {
        Ok(Some((sections, mismatch))) => {
            let warning = mismatch.map(|m| m.to_string());
            render_public_page(&inspection, Some(sections.as_slice()), warning.as_deref(), today)
        }
        Ok(None) => render_public_page(&inspection, None, Some(MISSING_TEMPLATE), today),
        Err(e) => {
            error!("Template lookup for inspection {} failed: {}", id, e);
            return unavailable();
        }
    };

    HttpResponse::Ok().content_type(HTML).body(page)
}

#[cfg(test)]
mod tests {
    use crate::services::public::configure_routes;
    use crate::services::test_support::app_state;
    use crate::store::tests::{new_inspection, template};
    use actix_web::{test, App};
    use common::model::point::{InspectionPoint, PointStatus, TemplateSections};

    #[actix_web::test]
    async fn renders_static_inspection_with_visible_points_only() {
        let (_dir, state) = app_state();
        let mut payload = new_inspection("Casque Vertex", "helmet");
        payload
            .points
            .insert("jugulaire.boucle".to_string(), InspectionPoint::new(PointStatus::V));
        let insp = state.store.create_inspection(payload).unwrap();
        let app = test::init_service(App::new().app_data(state).service(configure_routes())).await;

        let req = test::TestRequest::get()
            .uri(&format!("/public/inspection/{}-casque-vertex", insp.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();

        assert!(body.contains("Casque Casque Vertex"));
        assert!(body.contains("Fissure arrière"));
        assert!(body.contains("<h2>Calotte</h2>"));
        assert!(!body.contains("<h2>Jugulaire</h2>"));
    }

    #[actix_web::test]
    async fn stale_slug_redirects_to_canonical() {
        let (_dir, state) = app_state();
        let insp = state
            .store
            .create_inspection(new_inspection("Harnais Avao", "harness"))
            .unwrap();
        let app = test::init_service(App::new().app_data(state).service(configure_routes())).await;

        let req = test::TestRequest::get()
            .uri(&format!("/public/inspection/{}-ancien-nom", insp.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 308);
        assert_eq!(
            resp.headers().get("location").unwrap(),
            &format!("/public/inspection/{}-harnais-avao", insp.id)
        );
    }

    #[actix_web::test]
    async fn unknown_or_malformed_slugs_are_404() {
        let (_dir, state) = app_state();
        let app = test::init_service(App::new().app_data(state).service(configure_routes())).await;
        for uri in ["/public/inspection/77-x", "/public/inspection/casque"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 404);
        }
    }

    #[actix_web::test]
    async fn template_driven_inspection_uses_its_template() {
        let (_dir, state) = app_state();
        state.store.save_template(&template("tpl-h")).unwrap();

        let mut payload = new_inspection("H1", "harness");
        payload.template_id = Some("tpl-h".to_string());
        let mut sections = TemplateSections::new();
        sections
            .entry("sangles".to_string())
            .or_default()
            .insert("usure".to_string(), InspectionPoint::new(PointStatus::V));
        payload.template_sections = Some(sections);
        payload
            .crossed_out_words
            .entry("sangles.usure".to_string())
            .or_default()
            .insert("Usure".to_string(), true);
        let insp = state.store.create_inspection(payload).unwrap();
        let app = test::init_service(App::new().app_data(state).service(configure_routes())).await;

        let req = test::TestRequest::get()
            .uri(&format!("/public/inspection/{}-h1", insp.id))
            .to_request();
        let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
        assert!(body.contains("<h2>Sangles</h2>"));
        assert!(body.contains("<s>Usure</s>"));
        assert!(!body.contains("class=\"warning\""));
        // Static points are ignored for template-driven inspections.
        assert!(!body.contains("Fissure arrière"));
    }

    #[actix_web::test]
    async fn missing_template_is_never_reported_as_all_clear() {
        let (_dir, state) = app_state();
        let mut payload = new_inspection("H1", "harness");
        payload.template_id = Some("gone".to_string());
        let mut sections = TemplateSections::new();
        sections.entry("sangles".to_string()).or_default().insert(
            "usure".to_string(),
            InspectionPoint::with_comment(PointStatus::X, "coupure nette"),
        );
        payload.template_sections = Some(sections);
        let insp = state.store.create_inspection(payload).unwrap();
        let app = test::init_service(App::new().app_data(state).service(configure_routes())).await;

        let req = test::TestRequest::get()
            .uri(&format!("/public/inspection/{}-h1", insp.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("class=\"warning\""));
        assert!(body.contains("Le modèle de cette inspection est introuvable"));
        assert!(!body.contains("Aucune anomalie"));
    }
}
