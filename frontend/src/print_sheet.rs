use yew::{html, Children, Component, Context, Html, Properties};

const SHEET_STYLE: &str = "width: 21cm;
     min-height: 29.7cm;
     margin: auto;
     padding: 10mm;
     box-sizing: border-box;
     background: white;
     box-shadow: 0 0 8px #ccc;";

#[derive(Properties, PartialEq)]
pub struct PrintSheetProps {
    pub children: Children,
}

/// A4-sized white sheet the inspection is laid out on, so the page prints as
/// it looks on screen.
pub struct PrintSheet;

impl Component for PrintSheet {
    type Message = ();
    type Properties = PrintSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PrintSheet
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="print-sheet" style={SHEET_STYLE}>
                { for ctx.props().children.iter() }
            </div>
        }
    }
}
