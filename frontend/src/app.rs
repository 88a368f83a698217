//! Root component: loads the client configuration once, then renders the
//! view for the current [`Route`].

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::config::ClientConfig;

use crate::components::cards::detail::CardDetailComponent;
use crate::components::cards::edit::EditCardComponent;
use crate::components::cards::list::CardListComponent;
use crate::config::CONFIG_ENDPOINT;
use crate::routes::Route;

pub enum Msg {
    ConfigLoaded(ClientConfig),
    Navigate(Route),
}

pub struct App {
    config: Option<ClientConfig>,
    route: Route,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(fetch_config().await));
        });
        Self {
            config: None,
            route: Route::List,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                gloo_console::log!("API:", config.api_origin.clone());
                self.config = Some(config);
            }
            Msg::Navigate(route) => self.route = route,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(config) = self.config.clone() else {
            return html! { <div class="loading"><div class="spinner" /></div> };
        };
        let on_navigate = ctx.link().callback(Msg::Navigate);

        let page = match self.route {
            Route::List => html! {
                <CardListComponent {config} {on_navigate} />
            },
            Route::Detail(id) => html! {
                <CardDetailComponent key={format!("detail-{}", id)} card_id={id} {config} {on_navigate} />
            },
            Route::Edit(id) => html! {
                <EditCardComponent key={format!("edit-{}", id)} card_id={id} {config} {on_navigate} />
            },
        };

        html! {
            <div class="admin-shell">
                { page }
            </div>
        }
    }
}

/// `GET /api/config`, falling back to the defaults on any failure.
async fn fetch_config() -> ClientConfig {
    let response = match Request::get(CONFIG_ENDPOINT).send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            gloo_console::warn!("Configuración no disponible:", response.status());
            return ClientConfig::default();
        }
        Err(err) => {
            gloo_console::warn!("Configuración no disponible:", err.to_string());
            return ClientConfig::default();
        }
    };
    response.json::<ClientConfig>().await.unwrap_or_else(|err| {
        gloo_console::warn!("Configuración inválida:", err.to_string());
        ClientConfig::default()
    })
}
