use yew::prelude::*;

use super::{MapView, Navbar};
use crate::hooks::use_locations;

#[function_component(App)]
pub fn app() -> Html {
    let locations = use_locations();

    html! {
        <div class="app-root">
            <div class="navbar-layer">
                <Navbar />
            </div>
            <MapView waypoints={locations.waypoints()} />
        </div>
    }
}
