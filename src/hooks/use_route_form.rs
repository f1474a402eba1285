// ============================================================================
// USE ROUTE FORM HOOK - Formulario de ruta (solo local)
// ============================================================================
// Las acciones no llaman a ningún backend: solo dejan un log.
// ============================================================================

use yew::prelude::*;

use crate::stores::{RouteFormAction, RouteFormStore};
use crate::utils::current_departure;

#[derive(Clone)]
pub struct UseRouteFormHandle {
    pub state: UseReducerHandle<RouteFormStore>,
    pub set_origin: Callback<String>,
    pub set_destination: Callback<String>,
    pub set_departure: Callback<String>,
    pub request_route: Callback<()>,
    pub clear: Callback<()>,
    pub fetch_route_from_database: Callback<()>,
    pub fetch_gps_tle_data: Callback<()>,
}

#[hook]
pub fn use_route_form() -> UseRouteFormHandle {
    let state = use_reducer(|| RouteFormStore::new(current_departure()));

    let set_origin = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(RouteFormAction::SetOrigin(value)))
    };

    let set_destination = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(RouteFormAction::SetDestination(value)))
    };

    let set_departure = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(RouteFormAction::SetDeparture(value)))
    };

    let request_route = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            log::info!("{}", state.request_summary());
        })
    };

    let clear = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.dispatch(RouteFormAction::Clear {
                departure: current_departure(),
            });
        })
    };

    // Sin endpoint definido todavía
    let fetch_route_from_database = Callback::from(|_: ()| log::info!("Fetch Route from Database clicked"));
    let fetch_gps_tle_data = Callback::from(|_: ()| log::info!("Fetch GPS TLE Data clicked"));

    UseRouteFormHandle {
        state,
        set_origin,
        set_destination,
        set_departure,
        request_route,
        clear,
        fetch_route_from_database,
        fetch_gps_tle_data,
    }
}
