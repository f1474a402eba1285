use yew::prelude::*;

use crate::models::Panel;
use crate::stores::{PanelAction, PanelStore};

#[derive(Clone)]
pub struct UsePanelsHandle {
    pub state: UseReducerHandle<PanelStore>,
    pub toggle: Callback<Panel>,
}

#[hook]
pub fn use_panels() -> UsePanelsHandle {
    let state = use_reducer(PanelStore::default);

    let toggle = {
        let state = state.clone();
        Callback::from(move |panel: Panel| {
            log::info!("Navigating to {}", panel.label());
            state.dispatch(PanelAction::Toggle(panel));
        })
    };

    UsePanelsHandle { state, toggle }
}
