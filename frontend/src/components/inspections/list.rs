use crate::api::fetch_inspections;
use crate::components::helpers::{format_date, today};
use common::model::inspection::InspectionSummary;
use yew::platform::spawn_local;
use yew::prelude::*;

pub enum Msg {
    Loaded(Vec<InspectionSummary>),
    Failed(String),
}

/// Table of every inspection, newest first.
pub struct InspectionListComponent {
    inspections: Vec<InspectionSummary>,
    loading: bool,
    error: Option<String>,
}

impl Component for InspectionListComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match fetch_inspections().await {
                Ok(list) => link.send_message(Msg::Loaded(list)),
                Err(e) => link.send_message(Msg::Failed(e)),
            }
        });
        Self {
            inspections: Vec::new(),
            loading: true,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.loading = false;
        match msg {
            Msg::Loaded(list) => self.inspections = list,
            Msg::Failed(e) => {
                gloo_console::error!(format!("Inspection list failed: {}", e));
                self.error = Some("Erreur lors du chargement des inspections.".to_string());
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <div class="spinner" /> };
        }
        if let Some(error) = &self.error {
            return html! { <div class="error-box">{ error.clone() }</div> };
        }
        let today = today();
        html! {
            <table class="inspection-list">
                <thead>
                    <tr>
                        <th>{"Référence"}</th>
                        <th>{"Type"}</th>
                        <th>{"N° de série"}</th>
                        <th>{"État"}</th>
                        <th>{"Contrôlé le"}</th>
                        <th>{"Prochain contrôle"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for self.inspections.iter().map(|insp| {
                        let overdue = match (insp.next_inspection_date, today) {
                            (Some(due), Some(today)) => due < today,
                            _ => false,
                        };
                        html! {
                            <tr key={insp.id}>
                                <td><a href={format!("/inspections/{}", insp.id)}>{ insp.reference.clone() }</a></td>
                                <td>{ insp.equipment_type.label() }</td>
                                <td>{ insp.serial_number.clone() }</td>
                                <td><span class={classes!("state", insp.state.css_class())}>{ insp.state.label() }</span></td>
                                <td>{ format_date(insp.inspection_date) }</td>
                                <td class={classes!(overdue.then_some("overdue"))}>{ format_date(insp.next_inspection_date) }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    }
}
