//! Paginated card list.
//!
//! [`ListState`] follows the same shape as the editor: operations mutate the
//! local list and return [`ListCommand`]s for the component to execute.

use num_format::{Locale, ToFormattedString};

use common::model::card::DigitalCard;
use common::model::page::CardPage;
use common::requests::{ListParams, StatusField, ToggleStatusRequest};

use crate::api::ApiError;
use crate::notifications::Notice;
use crate::routes::Route;

pub const PER_PAGE: u32 = 10;

const LOAD_ERROR: &str = "No se pudieron cargar las tarjetas digitales.";

/// Label used in toggle notices.
pub fn field_label(field: StatusField) -> &'static str {
    match field {
        StatusField::Active => "estado activo",
        StatusField::Public => "visibilidad pública",
    }
}

fn flag(card: &DigitalCard, field: StatusField) -> bool {
    match field {
        StatusField::Active => card.is_active,
        StatusField::Public => card.is_public,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListCommand {
    Fetch(ListParams),
    Toggle {
        id: u64,
        field: StatusField,
        request: ToggleStatusRequest,
    },
    ConfirmDelete { id: u64, label: String },
    Delete { id: u64 },
    Notify(Notice),
    Navigate(Route),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub cards: Vec<DigitalCard>,
    pub loading: bool,
    /// Inline message kept after a failed load.
    pub error: Option<String>,
    pub search: String,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            loading: false,
            error: None,
            search: String::new(),
            page: 1,
            per_page: PER_PAGE,
            total: 0,
            total_pages: 1,
        }
    }
}

impl ListState {
    pub fn params(&self) -> ListParams {
        ListParams {
            page: self.page,
            per_page: self.per_page,
            search: Some(self.search.clone()),
        }
    }

    pub fn load(&mut self) -> Vec<ListCommand> {
        self.loading = true;
        self.error = None;
        vec![ListCommand::Fetch(self.params())]
    }

    pub fn loaded(&mut self, result: Result<CardPage, ApiError>) -> Vec<ListCommand> {
        self.loading = false;
        match result {
            Ok(page) => {
                self.cards = page.data;
                self.total = page.meta.total;
                self.total_pages = page.meta.last_page.max(1);
                Vec::new()
            }
            Err(err) => {
                self.error = Some(LOAD_ERROR.to_string());
                vec![ListCommand::Notify(Notice::ListLoadFailed {
                    detail: err.to_string(),
                })]
            }
        }
    }

    /// New search term; always restarts from the first page.
    pub fn search(&mut self, term: String) -> Vec<ListCommand> {
        self.search = term;
        self.page = 1;
        self.load()
    }

    pub fn go_to_page(&mut self, page: u32) -> Vec<ListCommand> {
        if page < 1 || page > self.total_pages || page == self.page {
            return Vec::new();
        }
        self.page = page;
        self.load()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    fn find(&self, id: u64) -> Option<&DigitalCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn toggle(&self, id: u64, field: StatusField) -> Vec<ListCommand> {
        match self.find(id) {
            Some(card) => vec![ListCommand::Toggle {
                id,
                field,
                request: ToggleStatusRequest::new(field, !flag(card, field)),
            }],
            None => Vec::new(),
        }
    }

    /// Replaces the card with the server's copy on success.
    pub fn toggled(
        &mut self,
        field: StatusField,
        result: Result<DigitalCard, ApiError>,
    ) -> Vec<ListCommand> {
        match result {
            Ok(updated) => {
                let notice = Notice::StatusToggled {
                    name: updated.display_name(),
                    field_label: field_label(field).to_string(),
                    enabled: flag(&updated, field),
                };
                if let Some(slot) = self.cards.iter_mut().find(|card| card.id == updated.id) {
                    *slot = updated;
                }
                vec![ListCommand::Notify(notice)]
            }
            Err(err) => vec![ListCommand::Notify(Notice::StatusToggleFailed {
                field_label: field_label(field).to_string(),
                detail: err.to_string(),
            })],
        }
    }

    pub fn request_delete(&self, id: u64) -> Vec<ListCommand> {
        match self.find(id) {
            Some(card) => vec![ListCommand::ConfirmDelete {
                id,
                label: card.display_name(),
            }],
            None => Vec::new(),
        }
    }

    pub fn delete_confirmed(&self, id: u64) -> Vec<ListCommand> {
        vec![ListCommand::Delete { id }]
    }

    pub fn delete_cancelled(&self) -> Vec<ListCommand> {
        vec![ListCommand::Notify(Notice::OperationCancelled {
            what: "La tarjeta no ha sido eliminada.".to_string(),
        })]
    }

    /// On success drops the card locally; an emptied page other than the
    /// first falls back one page.
    pub fn deleted(&mut self, id: u64, result: Result<(), ApiError>) -> Vec<ListCommand> {
        let name = self
            .find(id)
            .map(DigitalCard::display_name)
            .unwrap_or_else(|| format!("Tarjeta #{}", id));

        match result {
            Ok(()) => {
                self.cards.retain(|card| card.id != id);
                self.total = self.total.saturating_sub(1);

                let mut commands = vec![ListCommand::Notify(Notice::CardDeleted { name })];
                if self.cards.is_empty() && self.page > 1 {
                    self.page -= 1;
                    commands.extend(self.load());
                }
                commands
            }
            Err(err) => vec![ListCommand::Notify(Notice::CardDeleteFailed {
                name,
                detail: err.to_string(),
            })],
        }
    }

    pub fn open(&self, route: Route) -> Vec<ListCommand> {
        vec![ListCommand::Navigate(route)]
    }

    /// Total count with Spanish digit grouping.
    pub fn formatted_total(&self) -> String {
        self.total.to_formatted_string(&Locale::es)
    }
}
