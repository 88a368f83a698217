//! Component state for the card editor.
//!
//! All workflow state lives in the [`EditMachine`]; the component only adds
//! the API client and the DOM refs the view needs.

use yew::prelude::*;

use crate::api::CardsApi;

use super::machine::EditMachine;
use super::props::EditCardProps;

pub struct EditCardComponent {
    pub machine: EditMachine<web_sys::File>,
    pub api: CardsApi,
    /// Hidden `<input type="file">` opened by the "change photo" button.
    pub file_input_ref: NodeRef,
    /// Guard so the first-render load runs once.
    pub loaded: bool,
}

impl EditCardComponent {
    pub fn new(props: &EditCardProps) -> Self {
        Self {
            machine: EditMachine::new(props.card_id, props.config.clone()),
            api: CardsApi::new(&props.config),
            file_input_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
