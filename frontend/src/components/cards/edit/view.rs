//! View rendering for the card editor.
//!
//! Layout: a header with the unsaved-changes dot, the four-step indicator,
//! the active step's controls and the navigation bar. Field errors are only
//! rendered once a control is touched or dirty.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::config::DEFAULT_AVATAR;

use super::form::{Field, GroupKind};
use super::machine::{Phase, Step};
use super::messages::Msg;
use super::state::EditCardComponent;

type Link = Scope<EditCardComponent>;

pub fn view(component: &EditCardComponent, ctx: &Context<EditCardComponent>) -> Html {
    let link = ctx.link();
    let machine = &component.machine;

    if machine.is_loading() || machine.card().is_none() {
        return html! {
            <div class="card-edit loading">
                <div class="spinner" />
                <p>{"Cargando tarjeta..."}</p>
            </div>
        };
    }

    html! {
        <div class="card-edit">
            { build_header(component) }
            { build_step_indicator(component) }
            <div class="step-body">
                {
                    match machine.step() {
                        Step::PersonalInfo => build_personal_step(component, link),
                        Step::Contact => build_contact_step(component, link),
                        Step::About => build_about_step(component, link),
                        Step::Settings => build_settings_step(component, link),
                    }
                }
            </div>
            { build_navigation(component, link) }
        </div>
    }
}

fn build_header(component: &EditCardComponent) -> Html {
    let machine = &component.machine;
    let title = machine
        .card()
        .map(|card| card.display_name())
        .unwrap_or_default();

    html! {
        <div class="card-edit-header" style="position: relative;">
            <h2>{"Editar Tarjeta Digital"}</h2>
            <span class="subtitle">{title}</span>
            {
                if machine.is_dirty() {
                    html! {
                        <span
                            title="Cambios sin guardar"
                            class="dirty-dot"
                            style="display: inline-block; width: 8px; height: 8px; margin-left: 6px; background: #e53935; border-radius: 50%;"
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_step_indicator(component: &EditCardComponent) -> Html {
    let machine = &component.machine;
    let current = machine.step();

    html! {
        <ol class="step-indicator">
            {
                for Step::ALL.iter().map(|step| {
                    let classes = classes!(
                        "step",
                        (*step == current).then_some("active"),
                        (*step < current && machine.is_step_completed(*step)).then_some("completed"),
                    );
                    html! {
                        <li class={classes}>
                            <span class="step-number">{step.index()}</span>
                            <span class="step-title">{step.title()}</span>
                        </li>
                    }
                })
            }
        </ol>
    }
}

fn build_personal_step(component: &EditCardComponent, link: &Link) -> Html {
    html! {
        <section>
            <h3>{Step::PersonalInfo.title()}</h3>
            { build_image_section(component, link) }
            { text_input(component, link, GroupKind::PersonalInfo, "name", "Nombre *", "text") }
            { text_input(component, link, GroupKind::PersonalInfo, "title", "Cargo", "text") }
            { text_input(component, link, GroupKind::PersonalInfo, "location", "Ubicación", "text") }
        </section>
    }
}

/// Photo slot: the preview, the hidden file input and the change/delete
/// buttons. Both buttons are disabled while a save runs.
fn build_image_section(component: &EditCardComponent, link: &Link) -> Html {
    let machine = &component.machine;
    let src = machine.preview().unwrap_or(DEFAULT_AVATAR).to_string();
    let busy = machine.is_busy();

    let onchange = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.get(0));
        input.set_value("");
        file.map(Msg::FileSelected)
    });

    html! {
        <div class="image-section">
            <img class="card-photo" src={src} alt="Foto de perfil" />
            <input
                ref={component.file_input_ref.clone()}
                type="file"
                accept="image/*"
                style="display: none;"
                {onchange}
            />
            <div class="image-actions">
                <button type="button" disabled={busy} onclick={link.callback(|_| Msg::OpenFileDialog)}>
                    {"Cambiar imagen"}
                </button>
                {
                    if machine.current_image().is_some() {
                        html! {
                            <button
                                type="button"
                                class="danger"
                                disabled={busy}
                                onclick={link.callback(|_| Msg::RequestImageDeletion)}
                            >
                                {"Eliminar imagen"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                match machine.staged_image() {
                    Some(staged) => html! {
                        <small class="staged">
                            {format!("{} se subirá al guardar.", staged.file.name())}
                        </small>
                    },
                    None => html! { <small>{"Formatos de imagen, máximo 2MB."}</small> },
                }
            }
        </div>
    }
}

fn build_contact_step(component: &EditCardComponent, link: &Link) -> Html {
    const CONTROLS: [(&str, &str, &str); 11] = [
        ("email", "Email", "email"),
        ("phone", "Teléfono", "tel"),
        ("whatsapp", "WhatsApp", "tel"),
        ("website", "Sitio web", "url"),
        ("linkedin", "LinkedIn", "url"),
        ("twitter", "Twitter", "url"),
        ("instagram", "Instagram", "url"),
        ("facebook", "Facebook", "url"),
        ("github", "GitHub", "url"),
        ("youtube", "YouTube", "url"),
        ("tiktok", "TikTok", "url"),
    ];

    html! {
        <section>
            <h3>{Step::Contact.title()}</h3>
            {
                for CONTROLS.iter().map(|&(key, label, kind)| {
                    text_input(component, link, GroupKind::Contact, key, label, kind)
                })
            }
        </section>
    }
}

fn build_about_step(component: &EditCardComponent, link: &Link) -> Html {
    let machine = &component.machine;
    let description = machine.form().about.get("description");

    let oninput = link.callback(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetField {
            group: GroupKind::About,
            key: "description",
            value: textarea.value(),
        }
    });
    let onblur = link.callback(|_| Msg::TouchField {
        group: GroupKind::About,
        key: "description",
    });

    html! {
        <section>
            <h3>{Step::About.title()}</h3>
            <div class="form-field">
                <label>{"Descripción"}</label>
                <textarea
                    rows="4"
                    value={description.map(Field::value).unwrap_or_default().to_string()}
                    {oninput}
                    {onblur}
                />
                { field_errors(description) }
            </div>
            { text_input(component, link, GroupKind::About, "experience", "Años de experiencia", "number") }
            { build_skills(component, link) }
        </section>
    }
}

fn build_skills(component: &EditCardComponent, link: &Link) -> Html {
    let skills = &component.machine.form().skills;

    html! {
        <div class="skills">
            <label>{"Habilidades"}</label>
            {
                for skills.iter().enumerate().map(|(index, skill)| {
                    let oninput = link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetSkill(index, input.value())
                    });
                    html! {
                        <div class="skill-row">
                            <input
                                type="text"
                                value={skill.value().to_string()}
                                {oninput}
                                onblur={link.callback(move |_| Msg::TouchSkill(index))}
                            />
                            <button
                                type="button"
                                title="Quitar"
                                onclick={link.callback(move |_| Msg::RemoveSkill(index))}
                            >
                                {"×"}
                            </button>
                            { field_errors(Some(skill)) }
                        </div>
                    }
                })
            }
            <button type="button" onclick={link.callback(|_| Msg::AddSkill)}>
                {"Agregar habilidad"}
            </button>
        </div>
    }
}

fn build_settings_step(component: &EditCardComponent, link: &Link) -> Html {
    let settings = component.machine.form().settings;

    html! {
        <section>
            <h3>{Step::Settings.title()}</h3>
            <label class="switch">
                <input
                    type="checkbox"
                    checked={settings.is_active}
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetActive(input.checked())
                    })}
                />
                {"Tarjeta activa"}
            </label>
            <label class="switch">
                <input
                    type="checkbox"
                    checked={settings.is_public}
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetPublic(input.checked())
                    })}
                />
                {"Tarjeta pública"}
            </label>
        </section>
    }
}

fn build_navigation(component: &EditCardComponent, link: &Link) -> Html {
    let machine = &component.machine;
    let busy = machine.is_busy();
    let step = machine.step();

    let save_label = match machine.phase() {
        Phase::Saving => "Guardando...",
        Phase::UploadingImage => "Subiendo imagen...",
        _ => "Guardar cambios",
    };

    html! {
        <div class="step-navigation">
            <button type="button" disabled={busy} onclick={link.callback(|_| Msg::Cancel)}>
                {"Cancelar"}
            </button>
            <button
                type="button"
                disabled={busy || step == Step::PersonalInfo}
                onclick={link.callback(|_| Msg::PreviousStep)}
            >
                {"Anterior"}
            </button>
            {
                if step == Step::Settings {
                    html! {
                        <button
                            type="button"
                            class="primary"
                            disabled={busy}
                            onclick={link.callback(|_| Msg::Submit)}
                        >
                            {save_label}
                        </button>
                    }
                } else {
                    html! {
                        <button type="button" class="primary" onclick={link.callback(|_| Msg::NextStep)}>
                            {"Siguiente"}
                        </button>
                    }
                }
            }
        </div>
    }
}

/// Renders a labelled `<input>` bound to one field of `group`.
///
/// Typing sends [`Msg::SetField`] and leaving the control sends
/// [`Msg::TouchField`], so errors appear only after interaction.
///
/// # Arguments
/// * `key` - Field name inside the group, e.g. `"email"`.
/// * `label` - Visible label text.
/// * `kind` - The HTML input type (`text`, `email`, `url`, ...).
fn text_input(
    component: &EditCardComponent,
    link: &Link,
    group: GroupKind,
    key: &'static str,
    label: &str,
    kind: &'static str,
) -> Html {
    let field = component.machine.form().group(group).get(key);

    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetField {
            group,
            key,
            value: input.value(),
        }
    });
    let onblur = link.callback(move |_| Msg::TouchField { group, key });

    html! {
        <div class={classes!("form-field", field.is_some_and(Field::shows_errors).then_some("invalid"))}>
            <label>{label.to_string()}</label>
            <input
                type={kind}
                value={field.map(Field::value).unwrap_or_default().to_string()}
                {oninput}
                {onblur}
            />
            { field_errors(field) }
        </div>
    }
}

/// One `<small>` per visible error of `field`; nothing when it is absent.
fn field_errors(field: Option<&Field>) -> Html {
    field
        .map(Field::visible_errors)
        .unwrap_or_default()
        .iter()
        .map(|error| html! { <small class="field-error">{error.to_string()}</small> })
        .collect::<Html>()
}
