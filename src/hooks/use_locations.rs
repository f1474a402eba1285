// ============================================================================
// USE LOCATIONS HOOK - Carga única de waypoints al montar
// ============================================================================
// Sin reintentos, sin timeout, sin cancelación: un GET por vida del componente
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::Waypoint;
use crate::services::{load_locations, ApiClient};
use crate::stores::{LocationAction, LocationStore};

/// Handle del hook
#[derive(Clone)]
pub struct UseLocationsHandle {
    pub state: UseReducerHandle<LocationStore>,
}

impl UseLocationsHandle {
    pub fn waypoints(&self) -> Rc<Vec<Waypoint>> {
        Rc::clone(&self.state.waypoints)
    }
}

#[hook]
pub fn use_locations() -> UseLocationsHandle {
    let state = use_reducer(LocationStore::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            if state.can_start_load() {
                state.dispatch(LocationAction::LoadStarted);

                let client = ApiClient::new();
                log::info!("📡 Cargando ubicaciones desde {}", client.locations_url());

                wasm_bindgen_futures::spawn_local(async move {
                    match load_locations(&client).await {
                        Ok(waypoints) => {
                            log::info!("✅ Ubicaciones cargadas: {}", waypoints.len());
                            state.dispatch(LocationAction::Loaded(waypoints));
                        }
                        Err(e) => {
                            // Se registra y se ignora: el mapa sigue con lo que tenía
                            log::error!("❌ Error fetching locations: {}", e);
                            state.dispatch(LocationAction::LoadFailed(e.to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    UseLocationsHandle { state }
}
