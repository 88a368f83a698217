//! Card list: search, pagination, status toggles and confirmed delete.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CardListProps;
pub use state::ListState;

use crate::api::CardsApi;

pub struct CardListComponent {
    pub state: ListState,
    pub api: CardsApi,
    /// Search box contents, committed on submit.
    pub draft: String,
}

impl Component for CardListComponent {
    type Message = Msg;
    type Properties = CardListProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            state: ListState::default(),
            api: CardsApi::new(&ctx.props().config),
            draft: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
