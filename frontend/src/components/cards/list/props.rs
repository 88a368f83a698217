use yew::prelude::*;

use common::model::config::ClientConfig;

use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct CardListProps {
    pub config: ClientConfig,
    pub on_navigate: Callback<Route>,
}
