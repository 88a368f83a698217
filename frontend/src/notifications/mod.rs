//! User-facing notifications.
//!
//! Views never talk to the DOM toast layer directly. They emit [`Notice`]s
//! describing *what happened*; [`dispatch`] maps each notice onto the
//! [`Notifier`] capability set (`success`, `error`, `info`, confirmations and
//! the card-specific wrappers). [`ToastNotifier`] is the browser
//! implementation.

mod toast;

pub use toast::ToastNotifier;

/// Boxed callback used by confirmation prompts.
pub type Action = Box<dyn FnOnce()>;

/// Everything the views can tell the user.
///
/// Variants carrying a `detail` hold the raw error text; the shell logs it to
/// the console in addition to showing the friendly message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoadFailed { detail: String },
    ListLoadFailed { detail: String },
    ValidationFailed,
    CardUpdated { name: String },
    CardAndImageUpdated { name: String },
    /// The record was saved but the follow-up image upload failed.
    ImageUploadFailed { name: String, detail: String },
    UpdateFailed { detail: String },
    InvalidImageType,
    ImageTooLarge { max_bytes: u64 },
    ImageDeleted,
    ImageDeleteFailed { detail: String },
    OperationCancelled { what: String },
    StatusToggled { name: String, field_label: String, enabled: bool },
    StatusToggleFailed { field_label: String, detail: String },
    CardDeleted { name: String },
    CardDeleteFailed { name: String, detail: String },
}

impl Notice {
    /// Raw diagnostic text to log next to the user message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Notice::LoadFailed { detail }
            | Notice::ListLoadFailed { detail }
            | Notice::ImageUploadFailed { detail, .. }
            | Notice::UpdateFailed { detail }
            | Notice::ImageDeleteFailed { detail }
            | Notice::StatusToggleFailed { detail, .. }
            | Notice::CardDeleteFailed { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

/// Notification sink used by every view.
///
/// Implementors provide the three primitive toasts and the confirmation
/// prompt; the card-specific messages are compositions of those.
pub trait Notifier {
    fn success(&self, title: &str, body: &str);
    fn error(&self, title: &str, body: &str);
    fn info(&self, title: &str, body: &str);

    /// Asks the user to confirm deleting `label`. Exactly one of the callbacks
    /// runs; a missing `on_cancel` means cancelling is silent.
    fn confirm_delete(&self, label: &str, on_confirm: Action, on_cancel: Option<Action>);

    fn validation_error(&self) {
        self.error(
            "Formulario incompleto",
            "Por favor complete todos los campos requeridos correctamente.",
        );
    }

    fn card_updated(&self, name: &str) {
        self.success(
            "Tarjeta actualizada",
            &format!("La tarjeta \"{}\" se actualizó exitosamente.", name),
        );
    }

    fn card_deleted(&self, name: &str) {
        self.success(
            "Tarjeta eliminada",
            &format!("La tarjeta \"{}\" ha sido eliminada.", name),
        );
    }

    fn card_delete_error(&self, name: &str) {
        self.error(
            "Error al eliminar",
            &format!("No se pudo eliminar la tarjeta \"{}\".", name),
        );
    }

    fn image_uploaded(&self) {
        self.success("Imagen actualizada", "La imagen se subió correctamente.");
    }

    fn image_upload_error(&self) {
        self.error("Error de imagen", "No se pudo subir la imagen.");
    }
}

/// Shows `notice` through `notifier`.
pub fn dispatch<N: Notifier + ?Sized>(notifier: &N, notice: &Notice) {
    match notice {
        Notice::LoadFailed { .. } => notifier.error(
            "Error",
            "Error al cargar la tarjeta. Redirigiendo...",
        ),
        Notice::ListLoadFailed { .. } => notifier.error(
            "Error al cargar tarjetas",
            "No se pudieron cargar las tarjetas digitales. Por favor, inténtelo de nuevo.",
        ),
        Notice::ValidationFailed => notifier.validation_error(),
        Notice::CardUpdated { name } => notifier.card_updated(name),
        Notice::CardAndImageUpdated { name } => {
            notifier.card_updated(name);
            notifier.image_uploaded();
        }
        Notice::ImageUploadFailed { .. } => {
            notifier.success(
                "Tarjeta actualizada",
                "Tarjeta actualizada. Hubo un problema al subir la imagen.",
            );
            notifier.image_upload_error();
        }
        Notice::UpdateFailed { .. } => notifier.error(
            "Error al actualizar",
            "Error al actualizar la tarjeta digital. Verifique los datos e intente nuevamente.",
        ),
        Notice::InvalidImageType => notifier.error(
            "Archivo no válido",
            "Por favor seleccione un archivo de imagen válido.",
        ),
        Notice::ImageTooLarge { max_bytes } => notifier.error(
            "Archivo demasiado grande",
            &format!(
                "La imagen no debe superar los {}MB.",
                max_bytes / (1024 * 1024)
            ),
        ),
        Notice::ImageDeleted => {
            notifier.success("Imagen eliminada", "La imagen actual fue eliminada.")
        }
        Notice::ImageDeleteFailed { .. } => notifier.error(
            "Error de imagen",
            "No se pudo eliminar la imagen. Inténtelo de nuevo.",
        ),
        Notice::OperationCancelled { what } => notifier.info("Operación cancelada", what),
        Notice::StatusToggled {
            name,
            field_label,
            enabled,
        } => notifier.success(
            "Estado actualizado",
            &format!(
                "El {} de \"{}\" ha sido {}.",
                field_label,
                name,
                if *enabled { "activado" } else { "desactivado" }
            ),
        ),
        Notice::StatusToggleFailed { field_label, .. } => notifier.error(
            "Error",
            &format!("No se pudo cambiar {}.", field_label),
        ),
        Notice::CardDeleted { name } => notifier.card_deleted(name),
        Notice::CardDeleteFailed { name, .. } => notifier.card_delete_error(name),
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::testing::RecordingNotifier;
    use super::*;

    #[test]
    fn partial_success_is_distinct_from_full_success() {
        let notifier = RecordingNotifier::new(true);
        dispatch(
            &notifier,
            &Notice::ImageUploadFailed {
                name: "Ana".to_string(),
                detail: "413".to_string(),
            },
        );
        dispatch(
            &notifier,
            &Notice::CardUpdated {
                name: "Ana".to_string(),
            },
        );

        assert_eq!(notifier.kinds(), vec!["success", "error", "success"]);
        let calls = notifier.calls.borrow();
        assert!(calls[0].2.contains("problema al subir la imagen"));
        assert_eq!(calls[1].2, "No se pudo subir la imagen.");
        assert_ne!(calls[0].2, calls[2].2);
    }

    #[test]
    fn card_and_image_update_shows_both_wrappers() {
        let notifier = RecordingNotifier::new(true);
        dispatch(
            &notifier,
            &Notice::CardAndImageUpdated {
                name: "Ana".to_string(),
            },
        );
        assert_eq!(notifier.kinds(), vec!["success", "success"]);
    }

    #[test]
    fn validation_failure_uses_the_error_channel() {
        let notifier = RecordingNotifier::new(true);
        dispatch(&notifier, &Notice::ValidationFailed);
        assert_eq!(notifier.kinds(), vec!["error"]);
    }

    #[test]
    fn toggle_notice_names_the_new_state() {
        let notifier = RecordingNotifier::new(true);
        dispatch(
            &notifier,
            &Notice::StatusToggled {
                name: "Ana".to_string(),
                field_label: "estado activo".to_string(),
                enabled: false,
            },
        );
        let calls = notifier.calls.borrow();
        assert_eq!(calls[0].2, "El estado activo de \"Ana\" ha sido desactivado.");
    }

    #[test]
    fn oversized_notice_reports_megabytes() {
        let notifier = RecordingNotifier::new(true);
        dispatch(
            &notifier,
            &Notice::ImageTooLarge {
                max_bytes: 2 * 1024 * 1024,
            },
        );
        assert_eq!(
            notifier.calls.borrow()[0].2,
            "La imagen no debe superar los 2MB."
        );
    }

    #[test]
    fn confirm_runs_exactly_one_callback() {
        let confirmed = Rc::new(Cell::new(0));
        let cancelled = Rc::new(Cell::new(0));

        for answer in [true, false] {
            let notifier = RecordingNotifier::new(answer);
            let c = confirmed.clone();
            let x = cancelled.clone();
            notifier.confirm_delete(
                "Ana",
                Box::new(move || c.set(c.get() + 1)),
                Some(Box::new(move || x.set(x.get() + 1))),
            );
        }

        assert_eq!(confirmed.get(), 1);
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn only_failures_carry_detail() {
        assert_eq!(
            Notice::UpdateFailed {
                detail: "500".to_string()
            }
            .detail(),
            Some("500")
        );
        assert_eq!(Notice::ImageDeleted.detail(), None);
    }
}
