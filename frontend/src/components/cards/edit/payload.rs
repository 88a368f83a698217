//! Builds the partial-update request from the form.

use std::collections::HashSet;

use common::requests::{AboutPayload, ContactPayload, PersonalInfoPayload, UpdateDigitalCardRequest};

use super::form::{CardForm, Field, FieldGroup};

/// Assembles the request the API receives on save.
///
/// Personal info and the flags are always sent. `contact` is sent only when
/// at least one contact field is non-blank. `about` is sent when the
/// description is non-blank, any skill control exists, or experience is
/// positive; its skills are trimmed with blanks and duplicates dropped.
pub fn assemble(form: &CardForm) -> UpdateDigitalCardRequest {
    let personal = &form.personal_info;

    UpdateDigitalCardRequest {
        personal_info: PersonalInfoPayload {
            name: personal.value("name").to_string(),
            title: personal.value("title").to_string(),
            location: personal.value("location").to_string(),
            photo: personal.value("photo").to_string(),
        },
        contact: form.contact.has_content().then(|| contact_payload(&form.contact)),
        about: has_about_data(form).then(|| AboutPayload {
            description: form.about.value("description").to_string(),
            skills: clean_skills(&form.skills),
            experience: experience(form),
        }),
        is_active: form.settings.is_active,
        is_public: form.settings.is_public,
    }
}

fn contact_payload(group: &FieldGroup) -> ContactPayload {
    let value = |key: &str| group.value(key).to_string();
    ContactPayload {
        email: value("email"),
        phone: value("phone"),
        website: value("website"),
        linkedin: value("linkedin"),
        twitter: value("twitter"),
        instagram: value("instagram"),
        github: value("github"),
        youtube: value("youtube"),
        tiktok: value("tiktok"),
        whatsapp: value("whatsapp"),
        facebook: value("facebook"),
    }
}

fn has_about_data(form: &CardForm) -> bool {
    !form.about.value("description").trim().is_empty()
        || !form.skills.is_empty()
        || experience(form) > 0
}

/// Empty or unparsable experience counts as zero; range errors are caught by
/// validation before we get here.
fn experience(form: &CardForm) -> i64 {
    form.about
        .value("experience")
        .trim()
        .parse::<i64>()
        .unwrap_or(0)
}

fn clean_skills(skills: &[Field]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|skill| skill.value().trim())
        .filter(|skill| !skill.is_empty())
        .filter(|skill| seen.insert(skill.to_string()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::form::GroupKind;
    use super::*;

    fn named(name: &str) -> CardForm {
        let mut form = CardForm::default();
        form.group_mut(GroupKind::PersonalInfo).set("name", name);
        form
    }

    #[test]
    fn blank_contact_group_is_omitted() {
        let mut form = named("Ana");
        form.contact.set("email", "   ");
        form.contact.set("github", "");
        assert_eq!(assemble(&form).contact, None);
    }

    #[test]
    fn any_contact_field_includes_the_whole_group() {
        let mut form = named("Ana");
        form.contact.set("tiktok", "tiktok.com/@ana");
        let contact = assemble(&form).contact.expect("contact present");
        assert_eq!(contact.tiktok, "tiktok.com/@ana");
        assert_eq!(contact.email, "");
    }

    #[test]
    fn empty_about_group_is_omitted() {
        let mut form = named("Ana");
        form.about.set("description", "  ");
        form.about.set("experience", "0");
        assert_eq!(assemble(&form).about, None);
    }

    #[test]
    fn positive_experience_alone_includes_about() {
        let mut form = named("Ana");
        form.about.set("experience", "4");
        let about = assemble(&form).about.expect("about present");
        assert_eq!(about.experience, 4);
        assert!(about.skills.is_empty());
    }

    #[test]
    fn skills_are_trimmed_deduplicated_and_never_blank() {
        let mut form = named("Ana");
        for skill in ["Rust", "  ", " SQL ", "Rust", "Yew"] {
            form.add_skill();
            let last = form.skills.len() - 1;
            form.set_skill(last, skill);
        }
        let about = assemble(&form).about.expect("skill controls include about");
        assert_eq!(about.skills, vec!["Rust", "SQL", "Yew"]);
    }

    #[test]
    fn settings_flags_are_sent_independently() {
        let mut form = named("Ana");
        form.settings.is_active = false;
        let request = assemble(&form);
        assert!(!request.is_active);
        assert!(request.is_public);
        assert_eq!(request.personal_info.name, "Ana");
    }
}
