// ============================================================================
// LOCATION STORE - Último listado de waypoints recibido
// ============================================================================
// Carga única por vida del componente: Idle -> Loading -> Loaded | Failed
// ============================================================================

use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::Waypoint;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocationStore {
    pub waypoints: Rc<Vec<Waypoint>>,
    pub status: LoadStatus,
}

#[derive(Debug)]
pub enum LocationAction {
    LoadStarted,
    Loaded(Vec<Waypoint>),
    LoadFailed(String),
}

impl Default for LocationStore {
    fn default() -> Self {
        Self {
            waypoints: Rc::new(Vec::new()),
            status: LoadStatus::Idle,
        }
    }
}

impl LocationStore {
    /// `LoadStarted` solo se acepta desde `Idle`
    pub fn can_start_load(&self) -> bool {
        self.status == LoadStatus::Idle
    }
}

impl Reducible for LocationStore {
    type Action = LocationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LocationAction::LoadStarted => {
                if !self.can_start_load() {
                    log::debug!("Carga de ubicaciones ya iniciada ({:?}), se ignora", self.status);
                    return self;
                }
                Rc::new(Self {
                    waypoints: Rc::clone(&self.waypoints),
                    status: LoadStatus::Loading,
                })
            }
            // Reemplazo completo, sin mezclar con la lista anterior
            LocationAction::Loaded(waypoints) => Rc::new(Self {
                waypoints: Rc::new(waypoints),
                status: LoadStatus::Loaded,
            }),
            LocationAction::LoadFailed(message) => Rc::new(Self {
                waypoints: Rc::clone(&self.waypoints),
                status: LoadStatus::Failed(message),
            }),
        }
    }
}
