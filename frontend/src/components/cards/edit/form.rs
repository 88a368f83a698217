//! Field tree of the card edit form.
//!
//! The form is an explicit tree: [`CardForm`] owns three [`FieldGroup`]s, the
//! ordered skills list and the two settings flags. Every [`Field`] carries its
//! raw string value, its static rule set and the `touched`/`dirty` flags that
//! decide whether its errors are shown. Validation is a pure function of the
//! tree ([`CardForm::errors`]).

use std::collections::BTreeMap;

use common::model::card::DigitalCard;

use super::validators::{validate, FieldError, Rule};

const NAME_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(255)];
const SHORT_TEXT_RULES: &[Rule] = &[Rule::MaxLength(255)];
const NO_RULES: &[Rule] = &[];
const EMAIL_RULES: &[Rule] = &[Rule::Email, Rule::MaxLength(255)];
const PHONE_RULES: &[Rule] = &[Rule::MaxLength(20)];
const URL_RULES: &[Rule] = &[Rule::Url];
const DESCRIPTION_RULES: &[Rule] = &[Rule::MaxLength(1000)];
const EXPERIENCE_RULES: &[Rule] = &[Rule::Range { min: 0, max: 50 }];
pub const SKILL_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(50)];

type FieldSpec = (&'static str, &'static [Rule]);

pub const PERSONAL_FIELDS: &[FieldSpec] = &[
    ("name", NAME_RULES),
    ("title", SHORT_TEXT_RULES),
    ("location", SHORT_TEXT_RULES),
    ("photo", NO_RULES),
];

pub const CONTACT_FIELDS: &[FieldSpec] = &[
    ("email", EMAIL_RULES),
    ("phone", PHONE_RULES),
    ("website", URL_RULES),
    ("linkedin", URL_RULES),
    ("twitter", URL_RULES),
    ("instagram", URL_RULES),
    ("github", URL_RULES),
    ("youtube", URL_RULES),
    ("tiktok", URL_RULES),
    ("whatsapp", PHONE_RULES),
    ("facebook", URL_RULES),
];

pub const ABOUT_FIELDS: &[FieldSpec] = &[
    ("description", DESCRIPTION_RULES),
    ("experience", EXPERIENCE_RULES),
];

/// One input control.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    value: String,
    rules: &'static [Rule],
    touched: bool,
    dirty: bool,
}

impl Field {
    pub fn new(rules: &'static [Rule]) -> Self {
        Self::with_value(String::new(), rules)
    }

    /// A pristine field holding a value loaded from the server.
    pub fn with_value(value: impl Into<String>, rules: &'static [Rule]) -> Self {
        Self {
            value: value.into(),
            rules,
            touched: false,
            dirty: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// User edit: stores the value and marks the field dirty.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.dirty = true;
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn errors(&self) -> Vec<FieldError> {
        validate(&self.value, self.rules)
    }

    pub fn is_valid(&self) -> bool {
        self.rules.iter().all(|rule| rule.check(&self.value).is_none())
    }

    /// Errors the user should see: none until the field was interacted with.
    pub fn visible_errors(&self) -> Vec<FieldError> {
        if self.touched || self.dirty {
            self.errors()
        } else {
            Vec::new()
        }
    }

    pub fn shows_errors(&self) -> bool {
        (self.touched || self.dirty) && !self.is_valid()
    }

    fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    PersonalInfo,
    Contact,
    About,
}

impl GroupKind {
    /// Path prefix used in error maps, e.g. `personalInfo.name`.
    pub fn path(self) -> &'static str {
        match self {
            GroupKind::PersonalInfo => "personalInfo",
            GroupKind::Contact => "contact",
            GroupKind::About => "about",
        }
    }

    fn specs(self) -> &'static [FieldSpec] {
        match self {
            GroupKind::PersonalInfo => PERSONAL_FIELDS,
            GroupKind::Contact => CONTACT_FIELDS,
            GroupKind::About => ABOUT_FIELDS,
        }
    }
}

/// Named, ordered set of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGroup {
    kind: GroupKind,
    fields: Vec<(&'static str, Field)>,
}

impl FieldGroup {
    pub fn empty(kind: GroupKind) -> Self {
        Self::filled(kind, |_| None)
    }

    /// Builds the group, taking each initial value from `source` (missing
    /// values become empty strings).
    pub fn filled<F>(kind: GroupKind, mut source: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let fields = kind
            .specs()
            .iter()
            .map(|(key, rules)| (*key, Field::with_value(source(*key).unwrap_or_default(), *rules)))
            .collect();
        Self { kind, fields }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Field)> {
        self.fields.iter().map(|(key, field)| (*key, field))
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, f)| f)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Field> {
        self.fields
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, f)| f)
    }

    /// Current value of `key`, or `""` for an unknown key.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).map_or("", Field::value)
    }

    /// Returns `false` when `key` is not part of the group.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.get_mut(key) {
            Some(field) => {
                field.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn touch(&mut self, key: &str) {
        if let Some(field) = self.get_mut(key) {
            field.mark_touched();
        }
    }

    pub fn mark_all_touched(&mut self) {
        self.fields.iter_mut().for_each(|(_, f)| f.mark_touched());
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, f)| f.is_valid())
    }

    /// Whether any field holds something other than whitespace.
    pub fn has_content(&self) -> bool {
        self.fields.iter().any(|(_, f)| !f.is_blank())
    }

    fn collect_errors(&self, into: &mut BTreeMap<String, Vec<FieldError>>) {
        for (key, field) in &self.fields {
            let errors = field.errors();
            if !errors.is_empty() {
                into.insert(format!("{}.{}", self.kind.path(), key), errors);
            }
        }
    }
}

/// The two independent visibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub is_active: bool,
    pub is_public: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_active: true,
            is_public: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardForm {
    pub personal_info: FieldGroup,
    pub contact: FieldGroup,
    pub about: FieldGroup,
    /// Ordered skill controls, each validated on its own.
    pub skills: Vec<Field>,
    pub settings: Settings,
}

impl Default for CardForm {
    fn default() -> Self {
        Self {
            personal_info: FieldGroup::empty(GroupKind::PersonalInfo),
            contact: FieldGroup::empty(GroupKind::Contact),
            about: FieldGroup::empty(GroupKind::About),
            skills: Vec::new(),
            settings: Settings::default(),
        }
    }
}

impl CardForm {
    /// Builds a pristine form from a fetched card. Every absent value becomes
    /// empty (or `0` for experience); the skills list mirrors the source
    /// order and length.
    pub fn from_card(card: &DigitalCard) -> Self {
        let personal = card.personal_info.clone().unwrap_or_default();
        let contact_info = card.contact_info.clone().unwrap_or_default();
        let about = card.about_info.clone().unwrap_or_default();

        let personal_info = FieldGroup::filled(GroupKind::PersonalInfo, |key| match key {
            "name" => personal.name.clone(),
            "title" => personal.title.clone(),
            "location" => personal.location.clone(),
            "photo" => personal.photo.clone(),
            _ => None,
        });
        let contact = FieldGroup::filled(GroupKind::Contact, |key| {
            contact_info.get(key).map(str::to_string)
        });
        let about_group = FieldGroup::filled(GroupKind::About, |key| match key {
            "description" => about.description.clone(),
            "experience" => Some(about.experience.unwrap_or(0).to_string()),
            _ => None,
        });
        let skills = about
            .skills
            .unwrap_or_default()
            .into_iter()
            .map(|skill| Field::with_value(skill, SKILL_RULES))
            .collect();

        Self {
            personal_info,
            contact,
            about: about_group,
            skills,
            settings: Settings {
                is_active: card.is_active,
                is_public: card.is_public,
            },
        }
    }

    pub fn group(&self, kind: GroupKind) -> &FieldGroup {
        match kind {
            GroupKind::PersonalInfo => &self.personal_info,
            GroupKind::Contact => &self.contact,
            GroupKind::About => &self.about,
        }
    }

    pub fn group_mut(&mut self, kind: GroupKind) -> &mut FieldGroup {
        match kind {
            GroupKind::PersonalInfo => &mut self.personal_info,
            GroupKind::Contact => &mut self.contact,
            GroupKind::About => &mut self.about,
        }
    }

    pub fn add_skill(&mut self) {
        self.skills.push(Field::new(SKILL_RULES));
    }

    pub fn remove_skill(&mut self, index: usize) {
        if index < self.skills.len() {
            self.skills.remove(index);
        }
    }

    pub fn set_skill(&mut self, index: usize, value: impl Into<String>) {
        if let Some(skill) = self.skills.get_mut(index) {
            skill.set_value(value);
        }
    }

    pub fn touch_skill(&mut self, index: usize) {
        if let Some(skill) = self.skills.get_mut(index) {
            skill.mark_touched();
        }
    }

    /// Reveals every latent error in the form.
    pub fn mark_all_touched(&mut self) {
        self.personal_info.mark_all_touched();
        self.contact.mark_all_touched();
        self.about.mark_all_touched();
        self.skills.iter_mut().for_each(Field::mark_touched);
    }

    pub fn is_valid(&self) -> bool {
        self.personal_info.is_valid()
            && self.contact.is_valid()
            && self.about.is_valid()
            && self.skills.iter().all(Field::is_valid)
    }

    /// Maps every failing field path to its errors, e.g.
    /// `personalInfo.name` or `about.skills.2`.
    pub fn errors(&self) -> BTreeMap<String, Vec<FieldError>> {
        let mut errors = BTreeMap::new();
        self.personal_info.collect_errors(&mut errors);
        self.contact.collect_errors(&mut errors);
        self.about.collect_errors(&mut errors);
        for (index, skill) in self.skills.iter().enumerate() {
            let skill_errors = skill.errors();
            if !skill_errors.is_empty() {
                errors.insert(format!("about.skills.{}", index), skill_errors);
            }
        }
        errors
    }
}
