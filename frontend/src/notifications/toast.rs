use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::{Action, Notifier};

/// How long a toast stays on screen.
const TOAST_LIFETIME_MS: u32 = 3000;

#[derive(Clone, Copy)]
enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "rgba(46, 125, 50, 0.92)",
            ToastKind::Error => "rgba(198, 40, 40, 0.92)",
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
        }
    }
}

/// Browser notifier: transient toasts at the bottom of the page and the
/// native confirm dialog for destructive actions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn success(&self, title: &str, body: &str) {
        show_toast(ToastKind::Success, title, body);
    }

    fn error(&self, title: &str, body: &str) {
        show_toast(ToastKind::Error, title, body);
    }

    fn info(&self, title: &str, body: &str) {
        show_toast(ToastKind::Info, title, body);
    }

    fn confirm_delete(&self, label: &str, on_confirm: Action, on_cancel: Option<Action>) {
        let question = format!(
            "¿Está seguro de eliminar \"{}\"? Esta acción no se puede deshacer.",
            label
        );
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&question).ok())
            .unwrap_or(false);

        if confirmed {
            on_confirm();
        } else if let Some(on_cancel) = on_cancel {
            on_cancel();
        }
    }
}

/// Injects a styled `div` into the body and removes it after
/// [`TOAST_LIFETIME_MS`]. Text is set through `textContent`, never as HTML.
fn show_toast(kind: ToastKind, title: &str, body: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(page)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(&format!("{}: {}", title, body)));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if page.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
