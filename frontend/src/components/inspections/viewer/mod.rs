//! Inspection viewer: header, QR code and checklist of one inspection.
//!
//! Split like the other stateful components: `state` holds the data,
//! `update` handles messages and `view` renders.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::fetch_inspection;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::InspectionViewerProps;
pub use state::InspectionViewerComponent;

impl Component for InspectionViewerComponent {
    type Message = Msg;
    type Properties = InspectionViewerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let id = ctx.props().id;
        let link = ctx.link().clone();
        spawn_local(async move {
            match fetch_inspection(id).await {
                Ok(inspection) => link.send_message(Msg::InspectionLoaded(inspection)),
                Err(e) => link.send_message(Msg::LoadFailed(e)),
            }
        });
        InspectionViewerComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
