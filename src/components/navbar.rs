use yew::prelude::*;

use super::{OutputBox, RouteRequestBox, SkyPlot};
use crate::hooks::use_panels;
use crate::models::Panel;
use crate::utils::constants::APP_TITLE;

fn render_panel(panel: Panel) -> Html {
    match panel {
        Panel::PositionPdop => html! { <OutputBox /> },
        Panel::Skyplot => html! { <SkyPlot /> },
        Panel::Destination => html! { <RouteRequestBox /> },
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let panels = use_panels();

    let links = Panel::ALL
        .iter()
        .map(|&panel| {
            let toggle = panels.toggle.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                toggle.emit(panel);
            });
            let class = if panels.state.is_active(panel) {
                "nav-link active"
            } else {
                "nav-link"
            };
            html! {
                <a href="/" class={class} onclick={onclick}>{panel.label()}</a>
            }
        })
        .collect::<Html>();

    html! {
        <header class="header">
            <div class="logo-and-nav">
                <a href="/" class="logo">{APP_TITLE}</a>
                <nav class="navbar">{links}</nav>
            </div>
            { for panels.state.active().map(render_panel) }
        </header>
    }
}
