//! Card editor: root module wiring the Yew `Component` implementation with
//! the pure edit workflow and its submodules.
//!
//! - `validators`, `form`, `payload` and `machine` hold the workflow and are
//!   free of DOM access.
//! - `state`, `update` and `view` adapt it to Yew; `update` executes the
//!   commands the machine emits.
//! - On first render the card is fetched; when the component goes away the
//!   global dirty flag is cleared.

use yew::prelude::*;

mod form;
mod helpers;
mod machine;
mod messages;
mod payload;
mod props;
mod state;
mod update;
mod validators;
mod view;

pub use machine::LOAD_FAILURE_REDIRECT_MS;
pub use messages::Msg;
pub use props::EditCardProps;
pub use state::EditCardComponent;

impl Component for EditCardComponent {
    type Message = Msg;
    type Properties = EditCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        EditCardComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            for command in self.machine.load() {
                update::execute(self, ctx, command);
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        helpers::set_window_dirty_flag(false);
    }
}
