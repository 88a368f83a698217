//! Update function for the card editor.
//!
//! Every message is forwarded to the [`EditMachine`]; the commands it returns
//! are executed here. HTTP calls run on `spawn_local` and report back through
//! the component link, notices go through [`dispatch`], and navigation is
//! emitted to the parent after the requested delay.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::notifications::{dispatch, Notifier, ToastNotifier};

use super::helpers::{read_data_url, set_window_dirty_flag};
use super::machine::Command;
use super::messages::Msg;
use super::state::EditCardComponent;

/// Handles one editor message.
///
/// The message is applied to the machine, `window.app_dirty` is refreshed and
/// every returned command is executed.
///
/// # Returns
/// Always `true`, except when only the file dialog is opened.
pub fn update(component: &mut EditCardComponent, ctx: &Context<EditCardComponent>, msg: Msg) -> bool {
    let machine = &mut component.machine;

    let commands = match msg {
        Msg::Loaded(result) => machine.card_loaded(result),
        Msg::NextStep => {
            machine.next_step();
            Vec::new()
        }
        Msg::PreviousStep => {
            machine.previous_step();
            Vec::new()
        }
        Msg::SetField { group, key, value } => {
            machine.set_field(group, key, value);
            Vec::new()
        }
        Msg::TouchField { group, key } => {
            machine.touch_field(group, key);
            Vec::new()
        }
        Msg::AddSkill => {
            machine.add_skill();
            Vec::new()
        }
        Msg::RemoveSkill(index) => {
            machine.remove_skill(index);
            Vec::new()
        }
        Msg::SetSkill(index, value) => {
            machine.set_skill(index, value);
            Vec::new()
        }
        Msg::TouchSkill(index) => {
            machine.touch_skill(index);
            Vec::new()
        }
        Msg::SetActive(value) => {
            machine.set_active(value);
            Vec::new()
        }
        Msg::SetPublic(value) => {
            machine.set_public(value);
            Vec::new()
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            return false;
        }
        Msg::FileSelected(file) => machine.stage_image(file),
        Msg::PreviewReady {
            generation,
            data_url,
        } => {
            machine.preview_ready(generation, data_url);
            Vec::new()
        }
        Msg::RequestImageDeletion => machine.request_image_deletion(),
        Msg::ConfirmImageDeletion => machine.confirm_image_deletion(),
        Msg::CancelImageDeletion => machine.cancel_image_deletion(),
        Msg::ImageDeleted(result) => machine.image_deleted(result),
        Msg::Submit => machine.submit(),
        Msg::UpdateFinished(result) => machine.update_finished(result),
        Msg::UploadFinished(result) => machine.upload_finished(result),
        Msg::Cancel => machine.cancel(),
    };

    set_window_dirty_flag(component.machine.is_dirty());

    for command in commands {
        execute(component, ctx, command);
    }
    true
}

/// Runs one side effect requested by the machine.
///
/// Asynchronous work never touches the component directly. Its result is sent
/// back as a [`Msg`] so the machine stays the single owner of the state.
///
/// # Arguments
/// * `component` - Source of the API client used for HTTP commands.
/// * `ctx` - Provides the link for replies and the `on_navigate` callback.
/// * `command` - The effect to perform.
pub fn execute(
    component: &EditCardComponent,
    ctx: &Context<EditCardComponent>,
    command: Command<web_sys::File>,
) {
    let link = ctx.link().clone();
    let api = component.api.clone();

    match command {
        Command::FetchCard { id } => spawn_local(async move {
            link.send_message(Msg::Loaded(api.get(id).await));
        }),
        Command::UpdateCard { id, payload } => spawn_local(async move {
            link.send_message(Msg::UpdateFinished(api.update(id, &payload).await));
        }),
        Command::UploadImage { id, file } => spawn_local(async move {
            link.send_message(Msg::UploadFinished(api.upload_image(id, &file).await));
        }),
        Command::DeleteImage { id } => spawn_local(async move {
            link.send_message(Msg::ImageDeleted(api.delete_image(id).await));
        }),
        Command::ReadPreview { file, generation } => spawn_local(async move {
            match read_data_url(file).await {
                Ok(data_url) => link.send_message(Msg::PreviewReady {
                    generation,
                    data_url,
                }),
                Err(err) => gloo_console::error!("No se pudo leer la imagen:", err),
            }
        }),
        Command::ConfirmImageDeletion { label } => {
            let on_cancel = link.clone();
            ToastNotifier.confirm_delete(
                &label,
                Box::new(move || link.send_message(Msg::ConfirmImageDeletion)),
                Some(Box::new(move || on_cancel.send_message(Msg::CancelImageDeletion))),
            );
        }
        Command::Notify(notice) => {
            if let Some(detail) = notice.detail() {
                gloo_console::error!(format!("{:?}", notice), detail);
            }
            dispatch(&ToastNotifier, &notice);
        }
        Command::Navigate { route, after_ms } => {
            let on_navigate = ctx.props().on_navigate.clone();
            if after_ms == 0 {
                on_navigate.emit(route);
            } else {
                spawn_local(async move {
                    TimeoutFuture::new(after_ms).await;
                    on_navigate.emit(route);
                });
            }
        }
    }
}
