/// Paneles conmutables desde la barra de navegación.
/// El orden de las variantes es el orden en que se pintan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Panel {
    PositionPdop,
    Skyplot,
    Destination,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::PositionPdop, Panel::Skyplot, Panel::Destination];

    /// Texto del enlace en la barra de navegación
    pub fn label(&self) -> &'static str {
        match self {
            Panel::PositionPdop => "Position&PDOP",
            Panel::Skyplot => "Skyplot",
            Panel::Destination => "Destination",
        }
    }
}
