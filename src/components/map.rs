use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::maps::{LeafletRenderer, MapRenderer};
use crate::models::Waypoint;
use crate::utils::constants::MAP_CONTAINER_ID;
use crate::viewmodels::MapViewModel;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    pub waypoints: Rc<Vec<Waypoint>>,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let renderer = use_mut_ref(|| LeafletRenderer::new(MAP_CONTAINER_ID));

    // Inicializar mapa al montar (el contenedor ya está en el DOM)
    {
        let renderer = renderer.clone();
        use_effect_with((), move |_| {
            if let Err(e) = renderer.borrow_mut().initialize(&CONFIG.map_config) {
                log::error!("❌ Error inicializando mapa: {}", e);
            }
            || ()
        });
    }

    // Redibujo completo cada vez que cambia la lista
    {
        let renderer = renderer.clone();
        use_effect_with(props.waypoints.clone(), move |waypoints| {
            let mut renderer = renderer.borrow_mut();
            if renderer.is_ready() {
                if let Err(e) = MapViewModel::update_map(&mut *renderer, waypoints) {
                    log::error!("❌ Error dibujando waypoints: {}", e);
                }
            } else {
                log::warn!("⚠️ Mapa no inicializado, no se pueden dibujar waypoints");
            }
            || ()
        });
    }

    html! {
        <div id={MAP_CONTAINER_ID} class="map-container"></div>
    }
}
