use common::model::card::DigitalCard;
use common::model::page::CardPage;
use common::requests::StatusField;

use crate::api::ApiError;
use crate::routes::Route;

#[derive(Clone)]
pub enum Msg {
    Load,
    Loaded(Result<CardPage, ApiError>),
    SearchInput(String),
    Search,
    GoToPage(u32),
    Toggle(u64, StatusField),
    Toggled(StatusField, Result<DigitalCard, ApiError>),
    RequestDelete(u64),
    ConfirmDelete(u64),
    CancelDelete,
    Deleted(u64, Result<(), ApiError>),
    Open(Route),
}
