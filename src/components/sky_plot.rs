use yew::prelude::*;

use crate::utils::constants::SKYPLOT_IMAGE_URL;

#[function_component(SkyPlot)]
pub fn sky_plot() -> Html {
    html! {
        <div class="skyplot-container">
            <div class="new-box">
                <div class="label">{"Sky plot:"}</div>
                <img src={SKYPLOT_IMAGE_URL} alt="Sky plot" class="skyplot-image" />
            </div>
        </div>
    }
}
