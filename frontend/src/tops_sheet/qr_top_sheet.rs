use yew::{html, Callback, Component, Context, Html, MouseEvent, NodeRef, Properties};

/// Sliding sheet showing the QR code full size, for printing a label.
pub struct QrTopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub node_ref: NodeRef,
    /// Image source: a data URL or the remote QR URL.
    pub src: String,
    pub public_url: String,
    pub on_close: Callback<MouseEvent>,
}

impl Component for QrTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="top-sheet" ref={props.node_ref.clone()}>
                <img class="qr-large" src={props.src.clone()} alt="QR code" />
                <p class="qr-link">{ props.public_url.clone() }</p>
                <button class="icon-btn" onclick={props.on_close.clone()}>
                    <i class="material-icons">{"close"}</i>
                    <span class="icon-label">{"Fermer"}</span>
                </button>
            </div>
        }
    }
}

/// Slides the sheet in after a short delay so the CSS transition runs.
pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;
        if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::Element>() {
            let _ = top_sheet.class_list().add_1("show");
        }
    });
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::Element>() {
        let _ = top_sheet.class_list().remove_1("show");
    }
}
