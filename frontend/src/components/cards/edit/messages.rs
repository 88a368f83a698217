use common::model::card::DigitalCard;

use crate::api::ApiError;

use super::form::GroupKind;

#[derive(Clone)]
pub enum Msg {
    Loaded(Result<DigitalCard, ApiError>),
    NextStep,
    PreviousStep,
    SetField {
        group: GroupKind,
        key: &'static str,
        value: String,
    },
    TouchField {
        group: GroupKind,
        key: &'static str,
    },
    AddSkill,
    RemoveSkill(usize),
    SetSkill(usize, String),
    TouchSkill(usize),
    SetActive(bool),
    SetPublic(bool),
    OpenFileDialog,
    FileSelected(web_sys::File),
    PreviewReady { generation: u32, data_url: String },
    RequestImageDeletion,
    ConfirmImageDeletion,
    CancelImageDeletion,
    ImageDeleted(Result<(), ApiError>),
    Submit,
    UpdateFinished(Result<DigitalCard, ApiError>),
    UploadFinished(Result<(), ApiError>),
    Cancel,
}
