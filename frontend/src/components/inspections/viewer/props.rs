use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InspectionViewerProps {
    pub id: i64,
    /// Admin view: adds QR regeneration.
    #[prop_or_default]
    pub admin: bool,
    /// Template to display the inspection with, instead of the one it was
    /// filled against (`?template=` in the URL).
    #[prop_or_default]
    pub template_id: Option<String>,
}
