use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_route_form;

/// Convierte un callback de texto en un handler de `oninput`
fn on_text_input(setter: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            setter.emit(input.value());
        }
    })
}

fn on_button(action: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |_e: MouseEvent| action.emit(()))
}

#[function_component(RouteRequestBox)]
pub fn route_request_box() -> Html {
    let form = use_route_form();
    let state = form.state.clone();

    html! {
        <div class="container">
            <div class="top-right-box">
                <div class="label">{"Departure Airport (ICAO CODE):"}</div>
                <input
                    type="text"
                    placeholder="Enter your Origin"
                    class="input-box"
                    value={state.origin.clone()}
                    oninput={on_text_input(form.set_origin.clone())}
                />
                <div class="label">{"Destination Airport (ICAO CODE):"}</div>
                <input
                    type="text"
                    placeholder="Enter your Destination"
                    class="input-box"
                    value={state.destination.clone()}
                    oninput={on_text_input(form.set_destination.clone())}
                />
                <div class="label">{"Departure Date and Time:"}</div>
                <input
                    type="datetime-local"
                    class="input-box"
                    value={state.departure.clone()}
                    oninput={on_text_input(form.set_departure.clone())}
                />
                <button class="request-route-button" onclick={on_button(form.request_route.clone())}>
                    {"Request Route"}
                </button>
                <button class="clear-route-button" onclick={on_button(form.clear.clone())}>
                    {"Clear Route and Waypoint"}
                </button>
                <button class="fas-button" onclick={on_button(form.fetch_route_from_database.clone())}>
                    {"Fetch Route from Database"}
                </button>
                <button class="ff-button" onclick={on_button(form.fetch_gps_tle_data.clone())}>
                    {"Fetch GPS TLE Data"}
                </button>
            </div>
        </div>
    }
}
