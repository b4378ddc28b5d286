use crate::app::App;

mod api;
mod app;
mod components;
mod print_sheet;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
