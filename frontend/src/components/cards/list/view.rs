use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::card::DigitalCard;
use common::requests::StatusField;

use crate::config::resolve_image_url;
use crate::routes::Route;

use super::messages::Msg;
use super::CardListComponent;

type Link = Scope<CardListComponent>;

pub fn view(component: &CardListComponent, ctx: &Context<CardListComponent>) -> Html {
    let link = ctx.link();
    let state = &component.state;

    let body = if state.loading {
        html! {
            <div class="loading">
                <div class="spinner" />
                <p>{"Cargando tarjetas..."}</p>
            </div>
        }
    } else if let Some(error) = &state.error {
        html! {
            <div class="list-error">
                <p>{error.clone()}</p>
                <button type="button" onclick={link.callback(|_| Msg::Load)}>{"Reintentar"}</button>
            </div>
        }
    } else if state.cards.is_empty() {
        html! { <p class="empty">{"No se encontraron tarjetas digitales."}</p> }
    } else {
        html! {
            <table class="card-table">
                <thead>
                    <tr>
                        <th>{"Foto"}</th>
                        <th>{"Nombre"}</th>
                        <th>{"Cargo"}</th>
                        <th>{"Activa"}</th>
                        <th>{"Pública"}</th>
                        <th>{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for state.cards.iter().map(|card| build_row(ctx, link, card)) }
                </tbody>
            </table>
        }
    };

    html! {
        <div class="card-list">
            <div class="card-list-header">
                <h2>{"Tarjetas Digitales"}</h2>
                <span class="total">{format!("{} tarjetas", state.formatted_total())}</span>
            </div>
            { build_search(component, link) }
            { body }
            { build_pagination(component, link) }
        </div>
    }
}

fn build_search(component: &CardListComponent, link: &Link) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SearchInput(input.value())
    });
    let onkeydown = link.batch_callback(|e: KeyboardEvent| (e.key() == "Enter").then_some(Msg::Search));

    html! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Buscar por nombre..."
                value={component.draft.clone()}
                {oninput}
                {onkeydown}
            />
            <button type="button" onclick={link.callback(|_| Msg::Search)}>{"Buscar"}</button>
        </div>
    }
}

fn build_row(
    ctx: &Context<CardListComponent>,
    link: &Link,
    card: &DigitalCard,
) -> Html {
    let id = card.id;
    let photo = resolve_image_url(&ctx.props().config, card.photo());
    let title = card
        .personal_info
        .as_ref()
        .and_then(|p| p.title.clone())
        .unwrap_or_default();

    html! {
        <tr key={id.to_string()}>
            <td><img class="thumb" src={photo} alt="" /></td>
            <td>{card.display_name()}</td>
            <td>{title}</td>
            <td>
                <input
                    type="checkbox"
                    checked={card.is_active}
                    onclick={link.callback(move |_| Msg::Toggle(id, StatusField::Active))}
                />
            </td>
            <td>
                <input
                    type="checkbox"
                    checked={card.is_public}
                    onclick={link.callback(move |_| Msg::Toggle(id, StatusField::Public))}
                />
            </td>
            <td class="actions">
                <button type="button" onclick={link.callback(move |_| Msg::Open(Route::Detail(id)))}>
                    {"Ver"}
                </button>
                <button type="button" onclick={link.callback(move |_| Msg::Open(Route::Edit(id)))}>
                    {"Editar"}
                </button>
                <button type="button" class="danger" onclick={link.callback(move |_| Msg::RequestDelete(id))}>
                    {"Eliminar"}
                </button>
            </td>
        </tr>
    }
}

fn build_pagination(component: &CardListComponent, link: &Link) -> Html {
    let state = &component.state;
    if state.total_pages <= 1 {
        return html! {};
    }
    let page = state.page;

    html! {
        <div class="pagination">
            <button
                type="button"
                disabled={!state.has_previous()}
                onclick={link.callback(move |_| Msg::GoToPage(page.saturating_sub(1)))}
            >
                {"Anterior"}
            </button>
            <span>{format!("Página {} de {}", page, state.total_pages)}</span>
            <button
                type="button"
                disabled={!state.has_next()}
                onclick={link.callback(move |_| Msg::GoToPage(page + 1))}
            >
                {"Siguiente"}
            </button>
        </div>
    }
}
