//! Four-step edit workflow for a single digital card.
//!
//! [`EditMachine`] owns everything the edit view needs: the loaded card, the
//! form tree, the current step, the staged photo and the save phase. It never
//! performs I/O. Each operation mutates local state and returns the
//! [`Command`]s the component shell must run (HTTP calls, notices, delayed
//! navigation). Results of those calls are fed back through the `*_finished`
//! / `card_loaded` methods.
//!
//! A save is one logical operation made of up to two sequential calls: the
//! metadata update and, only after it succeeds, the photo upload. A failed
//! upload does not roll the update back; the user gets a partial-success
//! notice and is still sent back to the list.

use common::model::card::DigitalCard;
use common::model::config::ClientConfig;
use common::requests::UpdateDigitalCardRequest;

use crate::api::ApiError;
use crate::config::resolve_image_url;
use crate::notifications::Notice;
use crate::routes::Route;

use super::form::{CardForm, GroupKind};
use super::helpers::compute_md5;
use super::payload::assemble;

/// Largest photo accepted for upload (2 MiB).
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

/// Delay before leaving a view whose card could not be loaded.
pub const LOAD_FAILURE_REDIRECT_MS: u32 = 2000;
/// Delay before returning to the list after a complete save.
pub const SAVE_REDIRECT_MS: u32 = 1500;
/// Delay after a save whose photo upload failed; longer so the notice is read.
pub const PARTIAL_SAVE_REDIRECT_MS: u32 = 2000;

/// A file picked by the user. Implemented for `web_sys::File` by the shell.
pub trait ImageFile: Clone {
    /// Declared MIME type, e.g. `image/png`.
    fn mime_type(&self) -> String;
    fn size(&self) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    PersonalInfo = 1,
    Contact = 2,
    About = 3,
    Settings = 4,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::PersonalInfo, Step::Contact, Step::About, Step::Settings];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Información Personal",
            Step::Contact => "Información de Contacto",
            Step::About => "Acerca de",
            Step::Settings => "Configuración",
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::PersonalInfo => Some(Step::Contact),
            Step::Contact => Some(Step::About),
            Step::About => Some(Step::Settings),
            Step::Settings => None,
        }
    }

    fn previous(self) -> Option<Step> {
        match self {
            Step::PersonalInfo => None,
            Step::Contact => Some(Step::PersonalInfo),
            Step::About => Some(Step::Contact),
            Step::Settings => Some(Step::About),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the card; also the state after a failed load.
    Loading,
    Editing,
    /// Metadata update in flight.
    Saving,
    /// Update succeeded, photo upload in flight.
    UploadingImage,
    /// Save done; navigation away is scheduled.
    Finished,
}

/// A photo chosen locally but not uploaded yet.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedImage<F> {
    pub file: F,
    /// `data:` URL, filled in once the file has been read.
    pub preview: Option<String>,
    generation: u32,
}

/// Side effect requested by the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<F> {
    FetchCard { id: u64 },
    UpdateCard { id: u64, payload: UpdateDigitalCardRequest },
    UploadImage { id: u64, file: F },
    /// Read `file` into a data URL and report back with `generation`.
    ReadPreview { file: F, generation: u32 },
    /// Ask the user to confirm removing the stored photo.
    ConfirmImageDeletion { label: String },
    DeleteImage { id: u64 },
    Notify(Notice),
    Navigate { route: Route, after_ms: u32 },
}

#[derive(Debug, Clone)]
pub struct EditMachine<F> {
    card_id: u64,
    config: ClientConfig,
    card: Option<DigitalCard>,
    form: CardForm,
    step: Step,
    phase: Phase,
    /// Display URL of the photo already stored on the server.
    current_image: Option<String>,
    staged: Option<StagedImage<F>>,
    generation: u32,
    deleting_image: bool,
    baseline: Option<String>,
}

impl<F: ImageFile> EditMachine<F> {
    pub fn new(card_id: u64, config: ClientConfig) -> Self {
        Self {
            card_id,
            config,
            card: None,
            form: CardForm::default(),
            step: Step::PersonalInfo,
            phase: Phase::Loading,
            current_image: None,
            staged: None,
            generation: 0,
            deleting_image: false,
            baseline: None,
        }
    }

    pub fn card(&self) -> Option<&DigitalCard> {
        self.card.as_ref()
    }

    pub fn form(&self) -> &CardForm {
        &self.form
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether a save is in flight or already completed.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            Phase::Saving | Phase::UploadingImage | Phase::Finished
        )
    }

    pub fn current_image(&self) -> Option<&str> {
        self.current_image.as_deref()
    }

    pub fn staged_image(&self) -> Option<&StagedImage<F>> {
        self.staged.as_ref()
    }

    /// What the photo slot should display: the staged preview first, then
    /// the stored photo.
    pub fn preview(&self) -> Option<&str> {
        self.staged
            .as_ref()
            .and_then(|s| s.preview.as_deref())
            .or(self.current_image.as_deref())
    }

    pub fn load(&mut self) -> Vec<Command<F>> {
        self.phase = Phase::Loading;
        vec![Command::FetchCard { id: self.card_id }]
    }

    pub fn card_loaded(&mut self, result: Result<DigitalCard, ApiError>) -> Vec<Command<F>> {
        match result {
            Ok(card) => {
                self.populate(card);
                Vec::new()
            }
            Err(err) => vec![
                Command::Notify(Notice::LoadFailed {
                    detail: err.to_string(),
                }),
                Command::Navigate {
                    route: Route::List,
                    after_ms: LOAD_FAILURE_REDIRECT_MS,
                },
            ],
        }
    }

    /// Replaces all form state with `card`. Loading the same card twice
    /// yields the same state.
    fn populate(&mut self, card: DigitalCard) {
        self.form = CardForm::from_card(&card);
        self.current_image = card
            .photo()
            .map(|photo| resolve_image_url(&self.config, Some(photo)));
        self.staged = None;
        self.step = Step::PersonalInfo;
        self.phase = Phase::Editing;
        self.deleting_image = false;
        self.baseline = Some(self.fingerprint());
        self.card = Some(card);
    }

    /// Advances one step if the current step's gate passes. A failing gate
    /// marks the step's controls touched so their errors show up.
    pub fn next_step(&mut self) -> bool {
        let Some(next) = self.step.next() else {
            return false;
        };
        if !self.validate_current_step() {
            return false;
        }
        self.step = next;
        true
    }

    pub fn previous_step(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    fn validate_current_step(&mut self) -> bool {
        match self.step {
            Step::PersonalInfo => {
                self.form.personal_info.mark_all_touched();
                self.form.personal_info.is_valid()
            }
            Step::Contact | Step::About | Step::Settings => true,
        }
    }

    pub fn is_step_completed(&self, step: Step) -> bool {
        match step {
            Step::PersonalInfo => self.form.personal_info.is_valid(),
            Step::Contact | Step::About | Step::Settings => true,
        }
    }

    pub fn set_field(&mut self, group: GroupKind, key: &str, value: String) {
        self.form.group_mut(group).set(key, value);
    }

    pub fn touch_field(&mut self, group: GroupKind, key: &str) {
        self.form.group_mut(group).touch(key);
    }

    pub fn add_skill(&mut self) {
        self.form.add_skill();
    }

    pub fn remove_skill(&mut self, index: usize) {
        self.form.remove_skill(index);
    }

    pub fn set_skill(&mut self, index: usize, value: String) {
        self.form.set_skill(index, value);
    }

    pub fn touch_skill(&mut self, index: usize) {
        self.form.touch_skill(index);
    }

    pub fn set_active(&mut self, value: bool) {
        self.form.settings.is_active = value;
    }

    pub fn set_public(&mut self, value: bool) {
        self.form.settings.is_public = value;
    }

    /// Stages `file` for upload on save. Non-images and files over
    /// [`MAX_IMAGE_BYTES`] are rejected and leave any previous staging alone.
    pub fn stage_image(&mut self, file: F) -> Vec<Command<F>> {
        if !file.mime_type().starts_with("image/") {
            return vec![Command::Notify(Notice::InvalidImageType)];
        }
        if file.size() > MAX_IMAGE_BYTES {
            return vec![Command::Notify(Notice::ImageTooLarge {
                max_bytes: MAX_IMAGE_BYTES,
            })];
        }

        self.generation = self.generation.wrapping_add(1);
        self.staged = Some(StagedImage {
            file: file.clone(),
            preview: None,
            generation: self.generation,
        });
        vec![Command::ReadPreview {
            file,
            generation: self.generation,
        }]
    }

    /// Stores a computed preview unless the user has picked another file
    /// since the read started.
    pub fn preview_ready(&mut self, generation: u32, data_url: String) {
        if let Some(staged) = self.staged.as_mut() {
            if staged.generation == generation {
                staged.preview = Some(data_url);
            }
        }
    }

    pub fn request_image_deletion(&self) -> Vec<Command<F>> {
        if self.current_image.is_none() || self.deleting_image || self.is_busy() {
            return Vec::new();
        }
        vec![Command::ConfirmImageDeletion {
            label: "la imagen actual".to_string(),
        }]
    }

    /// Sends the deletion. While it is in flight `submit` is refused so an
    /// update cannot carry the old photo path back to the server.
    pub fn confirm_image_deletion(&mut self) -> Vec<Command<F>> {
        if self.current_image.is_none() || self.deleting_image || self.is_busy() {
            return Vec::new();
        }
        self.deleting_image = true;
        vec![Command::DeleteImage { id: self.card_id }]
    }

    pub fn cancel_image_deletion(&self) -> Vec<Command<F>> {
        vec![Command::Notify(Notice::OperationCancelled {
            what: "La imagen no ha sido eliminada.".to_string(),
        })]
    }

    /// On success clears the stored photo, the staged file and its preview.
    /// The server already holds that state, so the dirty baseline moves with
    /// it. On failure nothing changes locally.
    pub fn image_deleted(&mut self, result: Result<(), ApiError>) -> Vec<Command<F>> {
        self.deleting_image = false;
        match result {
            Ok(()) => {
                self.current_image = None;
                self.staged = None;
                self.form.personal_info.set("photo", String::new());
                self.baseline = Some(self.fingerprint());
                vec![Command::Notify(Notice::ImageDeleted)]
            }
            Err(err) => vec![Command::Notify(Notice::ImageDeleteFailed {
                detail: err.to_string(),
            })],
        }
    }

    /// Validates and sends the update. Ignored unless the form is idle in
    /// [`Phase::Editing`] with no photo deletion pending, so a double click
    /// cannot send two updates.
    pub fn submit(&mut self) -> Vec<Command<F>> {
        if self.phase != Phase::Editing || self.deleting_image {
            return Vec::new();
        }
        if !self.form.is_valid() {
            self.form.mark_all_touched();
            return vec![Command::Notify(Notice::ValidationFailed)];
        }

        self.phase = Phase::Saving;
        vec![Command::UpdateCard {
            id: self.card_id,
            payload: assemble(&self.form),
        }]
    }

    pub fn update_finished(&mut self, result: Result<DigitalCard, ApiError>) -> Vec<Command<F>> {
        if self.phase != Phase::Saving {
            return Vec::new();
        }
        match result {
            Ok(card) => {
                self.card = Some(card);
                match self.staged.as_ref() {
                    Some(staged) => {
                        self.phase = Phase::UploadingImage;
                        vec![Command::UploadImage {
                            id: self.card_id,
                            file: staged.file.clone(),
                        }]
                    }
                    None => self.finish(Notice::CardUpdated { name: self.name() }, SAVE_REDIRECT_MS),
                }
            }
            Err(err) => {
                self.phase = Phase::Editing;
                vec![Command::Notify(Notice::UpdateFailed {
                    detail: err.to_string(),
                })]
            }
        }
    }

    pub fn upload_finished(&mut self, result: Result<(), ApiError>) -> Vec<Command<F>> {
        if self.phase != Phase::UploadingImage {
            return Vec::new();
        }
        match result {
            Ok(()) => self.finish(
                Notice::CardAndImageUpdated { name: self.name() },
                SAVE_REDIRECT_MS,
            ),
            Err(err) => self.finish(
                Notice::ImageUploadFailed {
                    name: self.name(),
                    detail: err.to_string(),
                },
                PARTIAL_SAVE_REDIRECT_MS,
            ),
        }
    }

    fn finish(&mut self, notice: Notice, after_ms: u32) -> Vec<Command<F>> {
        self.phase = Phase::Finished;
        self.staged = None;
        self.baseline = Some(self.fingerprint());
        vec![
            Command::Notify(notice),
            Command::Navigate {
                route: Route::List,
                after_ms,
            },
        ]
    }

    pub fn cancel(&self) -> Vec<Command<F>> {
        vec![Command::Navigate {
            route: Route::List,
            after_ms: 0,
        }]
    }

    fn name(&self) -> String {
        let typed = self.form.personal_info.value("name").trim();
        if typed.is_empty() {
            format!("Tarjeta #{}", self.card_id)
        } else {
            typed.to_string()
        }
    }

    fn fingerprint(&self) -> String {
        let payload = assemble(&self.form);
        compute_md5(&serde_json::to_string(&payload).unwrap_or_default())
    }

    /// Whether the form differs from what was loaded or last saved.
    pub fn is_dirty(&self) -> bool {
        if self.staged.is_some() {
            return true;
        }
        match &self.baseline {
            Some(baseline) => *baseline != self.fingerprint(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use common::model::card::{AboutInfo, ContactInfo, PersonalInfo};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile {
        mime: &'static str,
        size: u64,
        name: &'static str,
    }

    impl ImageFile for FakeFile {
        fn mime_type(&self) -> String {
            self.mime.to_string()
        }

        fn size(&self) -> u64 {
            self.size
        }
    }

    fn png(name: &'static str, size: u64) -> FakeFile {
        FakeFile {
            mime: "image/png",
            size,
            name,
        }
    }

    fn config() -> ClientConfig {
        ClientConfig {
            api_origin: "https://api.example.com".to_string(),
        }
    }

    fn ana() -> DigitalCard {
        DigitalCard {
            id: 7,
            personal_info: Some(PersonalInfo {
                name: Some("Ana".to_string()),
                ..Default::default()
            }),
            contact_info: Some(ContactInfo::default()),
            about_info: Some(AboutInfo {
                skills: Some(vec![]),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn set_photo(card: &mut DigitalCard, photo: &str) {
        if let Some(personal) = card.personal_info.as_mut() {
            personal.photo = Some(photo.to_string());
        }
    }

    fn loaded(card: DigitalCard) -> EditMachine<FakeFile> {
        let mut machine = EditMachine::new(card.id, config());
        assert_eq!(machine.load(), vec![Command::FetchCard { id: card.id }]);
        assert!(machine.card_loaded(Ok(card)).is_empty());
        machine
    }

    fn network_calls(commands: &[Command<FakeFile>]) -> usize {
        commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    Command::FetchCard { .. }
                        | Command::UpdateCard { .. }
                        | Command::UploadImage { .. }
                        | Command::DeleteImage { .. }
                )
            })
            .count()
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }
    }

    #[test]
    fn starts_on_step_one_loading() {
        let machine: EditMachine<FakeFile> = EditMachine::new(7, config());
        assert_eq!(machine.step(), Step::PersonalInfo);
        assert!(machine.is_loading());
        assert!(machine.card().is_none());
    }

    #[test]
    fn sparse_record_loads_and_optional_step_can_be_skipped() {
        let mut machine = loaded(ana());

        assert_eq!(machine.form().personal_info.value("name"), "Ana");
        assert_eq!(machine.form().personal_info.value("title"), "");
        assert!(machine.form().skills.is_empty());
        assert_eq!(machine.phase(), Phase::Editing);

        assert!(machine.next_step());
        assert_eq!(machine.step(), Step::Contact);
        assert!(machine.next_step());
        assert_eq!(machine.step(), Step::About);
    }

    #[test]
    fn loading_twice_is_idempotent() {
        let mut card = ana();
        card.about_info = Some(AboutInfo {
            skills: Some(vec!["Rust".to_string(), "SQL".to_string()]),
            description: Some("Dev".to_string()),
            experience: Some(5),
        });
        set_photo(&mut card, "avatars/a.png");

        let mut machine = loaded(card.clone());
        let first = (machine.form().clone(), machine.current_image().map(str::to_string));
        machine.load();
        machine.card_loaded(Ok(card));
        let second = (machine.form().clone(), machine.current_image().map(str::to_string));

        assert_eq!(first, second);
        assert_eq!(machine.form().skills.len(), 2);
        assert!(!machine.is_dirty());
    }

    #[test]
    fn stored_photo_is_resolved_against_the_origin() {
        let mut card = ana();
        set_photo(&mut card, "avatars/x.png");
        let machine = loaded(card);
        assert_eq!(
            machine.current_image(),
            Some("https://api.example.com/avatars/x.png")
        );
        assert_eq!(machine.preview(), machine.current_image());
    }

    #[test]
    fn failed_load_notifies_and_redirects() {
        let mut machine: EditMachine<FakeFile> = EditMachine::new(7, config());
        machine.load();
        let commands = machine.card_loaded(Err(server_error()));

        assert_matches!(&commands[0], Command::Notify(Notice::LoadFailed { .. }));
        assert_eq!(
            commands[1],
            Command::Navigate {
                route: Route::List,
                after_ms: LOAD_FAILURE_REDIRECT_MS
            }
        );
        assert!(machine.submit().is_empty());
    }

    #[test]
    fn step_one_gate_blocks_and_reveals_errors() {
        let mut card = ana();
        card.personal_info = None;
        let mut machine = loaded(card);

        assert!(!machine.next_step());
        assert_eq!(machine.step(), Step::PersonalInfo);
        let name = machine.form().personal_info.get("name").expect("name");
        assert!(name.is_touched());
        assert!(!machine.is_step_completed(Step::PersonalInfo));
        assert!(machine.is_step_completed(Step::Settings));
    }

    #[test]
    fn steps_are_bounded() {
        let mut machine = loaded(ana());
        assert!(!machine.previous_step());
        while machine.next_step() {}
        assert_eq!(machine.step(), Step::Settings);
        assert!(machine.previous_step());
        assert_eq!(machine.step(), Step::About);
    }

    #[test]
    fn invalid_submit_makes_no_call() {
        let mut machine = loaded(ana());
        machine.set_field(GroupKind::PersonalInfo, "name", String::new());

        let commands = machine.submit();

        assert_eq!(commands, vec![Command::Notify(Notice::ValidationFailed)]);
        assert_eq!(network_calls(&commands), 0);
        assert!(machine.form().contact.fields().all(|(_, f)| f.is_touched()));
        assert!(machine.form().about.fields().all(|(_, f)| f.is_touched()));
        assert_eq!(machine.phase(), Phase::Editing);
    }

    #[test]
    fn save_without_image_is_a_single_call() {
        let mut machine = loaded(ana());

        let commands = machine.submit();
        assert_eq!(network_calls(&commands), 1);
        assert_matches!(&commands[0], Command::UpdateCard { id: 7, payload } => {
            assert_eq!(payload.personal_info.name, "Ana");
            assert!(payload.contact.is_none());
            assert!(payload.about.is_none());
        });

        let commands = machine.update_finished(Ok(ana()));
        assert_eq!(network_calls(&commands), 0);
        assert_matches!(&commands[0], Command::Notify(Notice::CardUpdated { name }) if name == "Ana");
        assert_eq!(
            commands[1],
            Command::Navigate {
                route: Route::List,
                after_ms: SAVE_REDIRECT_MS
            }
        );
        assert_eq!(machine.phase(), Phase::Finished);
    }

    #[test]
    fn double_submit_sends_one_update() {
        let mut machine = loaded(ana());
        let first = machine.submit();
        let second = machine.submit();
        assert_eq!(network_calls(&first), 1);
        assert!(second.is_empty());

        machine.update_finished(Ok(ana()));
        assert!(machine.submit().is_empty());
    }

    #[test]
    fn image_upload_follows_successful_update() {
        let mut machine = loaded(ana());
        machine.stage_image(png("a.png", 1024));

        let update = machine.submit();
        assert_matches!(&update[0], Command::UpdateCard { .. });
        assert!(machine.is_busy());

        let upload = machine.update_finished(Ok(ana()));
        assert_eq!(
            upload,
            vec![Command::UploadImage {
                id: 7,
                file: png("a.png", 1024)
            }]
        );
        assert_eq!(machine.phase(), Phase::UploadingImage);

        let done = machine.upload_finished(Ok(()));
        assert_matches!(&done[0], Command::Notify(Notice::CardAndImageUpdated { .. }));
        assert_eq!(
            done[1],
            Command::Navigate {
                route: Route::List,
                after_ms: SAVE_REDIRECT_MS
            }
        );
    }

    #[test]
    fn failed_upload_is_a_partial_success_with_longer_delay() {
        let mut machine = loaded(ana());
        machine.stage_image(png("a.png", 1024));

        let mut calls = network_calls(&machine.submit());
        calls += network_calls(&machine.update_finished(Ok(ana())));
        let done = machine.upload_finished(Err(server_error()));

        assert_eq!(calls, 2);
        assert_matches!(&done[0], Command::Notify(Notice::ImageUploadFailed { name, .. }) if name == "Ana");
        assert_eq!(
            done[1],
            Command::Navigate {
                route: Route::List,
                after_ms: PARTIAL_SAVE_REDIRECT_MS
            }
        );
        assert!(PARTIAL_SAVE_REDIRECT_MS > SAVE_REDIRECT_MS);
    }

    #[test]
    fn failed_update_keeps_data_and_allows_retry() {
        let mut machine = loaded(ana());
        assert!(machine.next_step());
        machine.set_field(GroupKind::Contact, "email", "ana@example.com".to_string());
        machine.stage_image(png("a.png", 10));

        machine.submit();
        let commands = machine.update_finished(Err(server_error()));

        assert_matches!(&commands[..], [Command::Notify(Notice::UpdateFailed { .. })]);
        assert_eq!(machine.phase(), Phase::Editing);
        assert_eq!(machine.step(), Step::Contact);
        assert_eq!(machine.form().contact.value("email"), "ana@example.com");
        assert!(machine.staged_image().is_some());
        assert_eq!(network_calls(&machine.submit()), 1);
    }

    #[test]
    fn non_images_are_rejected() {
        let mut machine = loaded(ana());
        let commands = machine.stage_image(FakeFile {
            mime: "application/pdf",
            size: 10,
            name: "cv.pdf",
        });
        assert_eq!(commands, vec![Command::Notify(Notice::InvalidImageType)]);
        assert!(machine.staged_image().is_none());
    }

    #[test]
    fn oversized_file_keeps_previous_staging() {
        let mut machine = loaded(ana());
        machine.stage_image(png("small.png", 100));

        let commands = machine.stage_image(png("huge.png", MAX_IMAGE_BYTES + 1));

        assert_matches!(&commands[..], [Command::Notify(Notice::ImageTooLarge { .. })]);
        assert_eq!(
            machine.staged_image().map(|s| s.file.name),
            Some("small.png")
        );
        assert_eq!(machine.stage_image(png("edge.png", MAX_IMAGE_BYTES)).len(), 1);
    }

    #[test]
    fn stale_previews_are_ignored() {
        let mut machine = loaded(ana());
        let first = machine.stage_image(png("a.png", 1));
        let second = machine.stage_image(png("b.png", 1));

        let generation_of = |commands: &[Command<FakeFile>]| match &commands[0] {
            Command::ReadPreview { generation, .. } => *generation,
            other => panic!("unexpected {:?}", other),
        };

        machine.preview_ready(generation_of(&first), "data:a".to_string());
        assert_eq!(machine.staged_image().and_then(|s| s.preview.clone()), None);

        machine.preview_ready(generation_of(&second), "data:b".to_string());
        assert_eq!(machine.preview(), Some("data:b"));
        assert!(machine.is_dirty());
    }

    #[test]
    fn image_deletion_requires_confirmation() {
        let mut card = ana();
        set_photo(&mut card, "a.png");
        let mut machine = loaded(card);
        machine.stage_image(png("b.png", 1));

        assert_matches!(
            &machine.request_image_deletion()[..],
            [Command::ConfirmImageDeletion { .. }]
        );
        assert_eq!(machine.confirm_image_deletion(), vec![Command::DeleteImage { id: 7 }]);
        assert!(machine.confirm_image_deletion().is_empty());

        let commands = machine.image_deleted(Ok(()));
        assert_eq!(commands, vec![Command::Notify(Notice::ImageDeleted)]);
        assert_eq!(machine.current_image(), None);
        assert!(machine.staged_image().is_none());
        assert_eq!(machine.preview(), None);
        assert!(!machine.is_dirty());
    }

    #[test]
    fn submit_waits_for_pending_image_deletion() {
        let mut card = ana();
        set_photo(&mut card, "a.png");
        let mut machine = loaded(card);

        machine.confirm_image_deletion();
        assert!(machine.submit().is_empty());
        assert_eq!(machine.phase(), Phase::Editing);

        machine.image_deleted(Ok(()));
        let commands = machine.submit();
        assert_matches!(&commands[..], [Command::UpdateCard { payload, .. }] => {
            assert_eq!(payload.personal_info.photo, "");
        });
    }

    #[test]
    fn deletion_is_refused_once_a_save_is_running() {
        let mut card = ana();
        set_photo(&mut card, "a.png");
        let mut machine = loaded(card);

        machine.submit();
        assert!(machine.confirm_image_deletion().is_empty());
        assert!(machine.request_image_deletion().is_empty());
    }

    #[test]
    fn failed_image_deletion_keeps_the_reference() {
        let mut card = ana();
        set_photo(&mut card, "a.png");
        let mut machine = loaded(card);

        machine.confirm_image_deletion();
        let commands = machine.image_deleted(Err(server_error()));

        assert_matches!(&commands[..], [Command::Notify(Notice::ImageDeleteFailed { .. })]);
        assert_eq!(machine.current_image(), Some("https://api.example.com/a.png"));
    }

    #[test]
    fn nothing_to_delete_without_a_stored_photo() {
        let machine = loaded(ana());
        assert!(machine.request_image_deletion().is_empty());
    }

    #[test]
    fn edits_mark_the_form_dirty() {
        let mut machine = loaded(ana());
        assert!(!machine.is_dirty());
        machine.set_field(GroupKind::PersonalInfo, "title", "Ingeniera".to_string());
        assert!(machine.is_dirty());
        machine.set_field(GroupKind::PersonalInfo, "title", String::new());
        assert!(!machine.is_dirty());
    }

    #[test]
    fn step_titles() {
        let titles: Vec<&str> = Step::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Información Personal",
                "Información de Contacto",
                "Acerca de",
                "Configuración"
            ]
        );
        assert_eq!(Step::Settings.index(), 4);
    }
}
