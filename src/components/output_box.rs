use yew::prelude::*;

use crate::utils::format_position;

// Valores fijos de muestra: no hay cálculo de PDOP/RAIM detrás
const SAMPLE_LATITUDE: f64 = 13.7563;
const SAMPLE_LONGITUDE: f64 = 100.5018;
const SAMPLE_SATS_IN_VIEW: u32 = 12;
const SAMPLE_PDOP: f64 = 1.5;
const RAIM_MODES: [&str; 3] = ["Mode1", "Mode2", "Mode3"];

#[function_component(OutputBox)]
pub fn output_box() -> Html {
    html! {
        <div class="output-box-container">
            <div class="output-box">
                <div class="label">{"Latitude Longitude:"}</div>
                <div>{format_position(SAMPLE_LATITUDE, SAMPLE_LONGITUDE, 4)}</div>
                <div class="label">{"Sat In View:"}</div>
                <div>{SAMPLE_SATS_IN_VIEW.to_string()}</div>
                <div class="label">{"PDOP:"}</div>
                <div>{format!("{:.1}", SAMPLE_PDOP)}</div>
                <div class="label">{"RAIM Available Mode:"}</div>
                { for RAIM_MODES.iter().map(|mode| html! { <div>{*mode}</div> }) }
            </div>
        </div>
    }
}
