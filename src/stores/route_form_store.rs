use std::rc::Rc;

use yew::functional::Reducible;

/// Formulario de petición de ruta. Solo estado local: no se envía a ningún sitio.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteFormStore {
    pub origin: String,
    pub destination: String,
    /// Valor de `<input type="datetime-local">`, `YYYY-MM-DDTHH:MM`
    pub departure: String,
}

#[derive(Debug, Clone)]
pub enum RouteFormAction {
    SetOrigin(String),
    SetDestination(String),
    SetDeparture(String),
    /// Vacía origen y destino; la salida vuelve a la hora indicada
    Clear { departure: String },
}

impl RouteFormStore {
    pub fn new(departure: String) -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            departure,
        }
    }

    pub fn request_summary(&self) -> String {
        format!(
            "Requesting route from {} to {} at {}",
            self.origin, self.destination, self.departure
        )
    }
}

impl Reducible for RouteFormStore {
    type Action = RouteFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RouteFormAction::SetOrigin(origin) => next.origin = origin,
            RouteFormAction::SetDestination(destination) => next.destination = destination,
            RouteFormAction::SetDeparture(departure) => next.departure = departure,
            RouteFormAction::Clear { departure } => next = Self::new(departure),
        }
        Rc::new(next)
    }
}
