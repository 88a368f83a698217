//! Properties for the `EditCardComponent`.

use yew::prelude::*;

use common::model::config::ClientConfig;

use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct EditCardProps {
    /// Card to load on first render.
    pub card_id: u64,
    /// Where the API lives and how image paths resolve.
    pub config: ClientConfig,
    /// Asks the shell to switch views, e.g. back to the list after saving.
    pub on_navigate: Callback<Route>,
}
