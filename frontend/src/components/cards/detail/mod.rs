//! Read-only card viewer.
//!
//! Loads the card on creation; a failed load notifies the user and returns
//! to the list after a short delay.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::card::DigitalCard;
use common::model::config::ClientConfig;

use crate::api::{ApiError, CardsApi};
use crate::components::cards::edit::LOAD_FAILURE_REDIRECT_MS;
use crate::config::resolve_image_url;
use crate::notifications::{dispatch, Notice, ToastNotifier};
use crate::routes::Route;

mod helpers;

use helpers::{contact_entries, format_long_date};

#[derive(Properties, PartialEq, Clone)]
pub struct CardDetailProps {
    pub card_id: u64,
    pub config: ClientConfig,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Loaded(Result<DigitalCard, ApiError>),
    Navigate(Route),
}

pub struct CardDetailComponent {
    card: Option<DigitalCard>,
}

impl Component for CardDetailComponent {
    type Message = Msg;
    type Properties = CardDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = CardsApi::new(&ctx.props().config);
        let id = ctx.props().card_id;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(api.get(id).await));
        });
        Self { card: None }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(card)) => {
                self.card = Some(card);
                true
            }
            Msg::Loaded(Err(err)) => {
                let notice = Notice::LoadFailed {
                    detail: err.to_string(),
                };
                gloo_console::error!("Error al cargar la tarjeta:", err.to_string());
                dispatch(&ToastNotifier, &notice);

                let on_navigate = ctx.props().on_navigate.clone();
                spawn_local(async move {
                    TimeoutFuture::new(LOAD_FAILURE_REDIRECT_MS).await;
                    on_navigate.emit(Route::List);
                });
                false
            }
            Msg::Navigate(route) => {
                ctx.props().on_navigate.emit(route);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(card) = &self.card else {
            return html! {
                <div class="card-detail loading">
                    <div class="spinner" />
                    <p>{"Cargando tarjeta..."}</p>
                </div>
            };
        };

        let link = ctx.link();
        let id = card.id;
        let personal = card.personal_info.clone().unwrap_or_default();
        let contact = card.contact_info.clone().unwrap_or_default();
        let about = card.about_info.clone().unwrap_or_default();
        let photo = resolve_image_url(&ctx.props().config, card.photo());

        html! {
            <div class="card-detail">
                <div class="card-detail-header">
                    <img class="card-photo" src={photo} alt="Foto de perfil" />
                    <div>
                        <h2>{card.display_name()}</h2>
                        <p class="subtitle">{personal.title.unwrap_or_default()}</p>
                        <p class="location">{personal.location.unwrap_or_default()}</p>
                    </div>
                    <div class="badges">
                        <span class={classes!("badge", card.is_active.then_some("on"))}>
                            { if card.is_active { "Activa" } else { "Inactiva" } }
                        </span>
                        <span class={classes!("badge", card.is_public.then_some("on"))}>
                            { if card.is_public { "Pública" } else { "Privada" } }
                        </span>
                    </div>
                </div>

                <section>
                    <h3>{"Información de Contacto"}</h3>
                    <dl>
                        {
                            for contact_entries(&contact).into_iter().map(|(label, value)| html! {
                                <>
                                    <dt>{label}</dt>
                                    <dd>{value.to_string()}</dd>
                                </>
                            })
                        }
                    </dl>
                </section>

                <section>
                    <h3>{"Acerca de"}</h3>
                    <p>{about.description.unwrap_or_default()}</p>
                    <p>{format!("Años de experiencia: {}", about.experience.unwrap_or(0))}</p>
                    <ul class="skills">
                        { for about.skills.unwrap_or_default().into_iter().map(|skill| html! { <li>{skill}</li> }) }
                    </ul>
                </section>

                <section class="timestamps">
                    <p>{format!("Creada: {}", format_long_date(card.created_at.as_deref()))}</p>
                    <p>{format!("Actualizada: {}", format_long_date(card.updated_at.as_deref()))}</p>
                </section>

                <div class="actions">
                    <button type="button" onclick={link.callback(|_| Msg::Navigate(Route::List))}>
                        {"Volver"}
                    </button>
                    <button
                        type="button"
                        class="primary"
                        onclick={link.callback(move |_| Msg::Navigate(Route::Edit(id)))}
                    >
                        {"Editar"}
                    </button>
                </div>
            </div>
        }
    }
}
