use yew::platform::spawn_local;
use yew::prelude::*;

use crate::notifications::{dispatch, Notifier, ToastNotifier};

use super::messages::Msg;
use super::state::ListCommand;
use super::CardListComponent;

pub fn update(component: &mut CardListComponent, ctx: &Context<CardListComponent>, msg: Msg) -> bool {
    let state = &mut component.state;

    let commands = match msg {
        Msg::Load => state.load(),
        Msg::Loaded(result) => state.loaded(result),
        Msg::SearchInput(value) => {
            component.draft = value;
            return false;
        }
        Msg::Search => state.search(component.draft.trim().to_string()),
        Msg::GoToPage(page) => state.go_to_page(page),
        Msg::Toggle(id, field) => state.toggle(id, field),
        Msg::Toggled(field, result) => state.toggled(field, result),
        Msg::RequestDelete(id) => state.request_delete(id),
        Msg::ConfirmDelete(id) => state.delete_confirmed(id),
        Msg::CancelDelete => state.delete_cancelled(),
        Msg::Deleted(id, result) => state.deleted(id, result),
        Msg::Open(route) => state.open(route),
    };

    for command in commands {
        execute(component, ctx, command);
    }
    true
}

fn execute(component: &CardListComponent, ctx: &Context<CardListComponent>, command: ListCommand) {
    let link = ctx.link().clone();
    let api = component.api.clone();

    match command {
        ListCommand::Fetch(params) => spawn_local(async move {
            link.send_message(Msg::Loaded(api.list(&params).await));
        }),
        ListCommand::Toggle { id, field, request } => spawn_local(async move {
            link.send_message(Msg::Toggled(field, api.toggle_status(id, &request).await));
        }),
        ListCommand::Delete { id } => spawn_local(async move {
            link.send_message(Msg::Deleted(id, api.delete(id).await));
        }),
        ListCommand::ConfirmDelete { id, label } => {
            let on_cancel = link.clone();
            ToastNotifier.confirm_delete(
                &label,
                Box::new(move || link.send_message(Msg::ConfirmDelete(id))),
                Some(Box::new(move || on_cancel.send_message(Msg::CancelDelete))),
            );
        }
        ListCommand::Notify(notice) => {
            if let Some(detail) = notice.detail() {
                gloo_console::error!(format!("{:?}", notice), detail);
            }
            dispatch(&ToastNotifier, &notice);
        }
        ListCommand::Navigate(route) => ctx.props().on_navigate.emit(route),
    }
}
