use crate::components::inspections::list::InspectionListComponent;
use crate::components::inspections::viewer::InspectionViewerComponent;
use web_sys::UrlSearchParams;
use yew::{html, Component, Context, Html};

/// Page selected from the browser location.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    List,
    Viewer { id: i64, admin: bool },
    NotFound,
}

/// `/`, `/inspections/{id}` and `/admin/inspections/{id}`.
pub fn parse_route(pathname: &str) -> Route {
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => Route::List,
        ["inspections", id] => id
            .parse()
            .map(|id| Route::Viewer { id, admin: false })
            .unwrap_or(Route::NotFound),
        ["admin", "inspections", id] => id
            .parse()
            .map(|id| Route::Viewer { id, admin: true })
            .unwrap_or(Route::NotFound),
        _ => Route::NotFound,
    }
}

fn current_location() -> (String, Option<String>) {
    let location = web_sys::window().map(|w| w.location());
    let pathname = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let template = location
        .and_then(|l| l.search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("template"));
    (pathname, template)
}

pub struct App {
    route: Route,
    template_override: Option<String>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let (pathname, template_override) = current_location();
        Self {
            route: parse_route(&pathname),
            template_override,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.route {
            Route::List => html! { <InspectionListComponent /> },
            Route::Viewer { id, admin } => html! {
                <InspectionViewerComponent
                    id={*id}
                    admin={*admin}
                    template_id={self.template_override.clone()}
                />
            },
            Route::NotFound => html! {
                <div class="error-box">{"Page introuvable."}</div>
            },
        }
    }
}
