use std::collections::BTreeSet;
use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::Panel;

/// Paneles visibles. Pueden estar activos varios a la vez.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelStore {
    active: BTreeSet<Panel>,
}

#[derive(Debug, Clone, Copy)]
pub enum PanelAction {
    Toggle(Panel),
}

impl PanelStore {
    pub fn is_active(&self, panel: Panel) -> bool {
        self.active.contains(&panel)
    }

    /// Paneles activos en orden de pintado
    pub fn active(&self) -> impl Iterator<Item = Panel> + '_ {
        self.active.iter().copied()
    }

    pub fn toggled(&self, panel: Panel) -> Self {
        let mut active = self.active.clone();
        if !active.remove(&panel) {
            active.insert(panel);
        }
        Self { active }
    }
}

impl Reducible for PanelStore {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PanelAction::Toggle(panel) => Rc::new(self.toggled(panel)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_original_set() {
        let original = PanelStore::default().toggled(Panel::Skyplot);
        let restored = original.toggled(Panel::Destination).toggled(Panel::Destination);
        assert_eq!(restored, original);

        let empty = PanelStore::default();
        assert_eq!(empty.toggled(Panel::PositionPdop).toggled(Panel::PositionPdop), empty);
    }

    #[test]
    fn distinct_panels_are_active_together() {
        let store = PanelStore::default()
            .toggled(Panel::Destination)
            .toggled(Panel::PositionPdop);
        assert!(store.is_active(Panel::Destination));
        assert!(store.is_active(Panel::PositionPdop));
        assert!(!store.is_active(Panel::Skyplot));
    }

    #[test]
    fn render_order_ignores_activation_order() {
        let store = PanelStore::default()
            .toggled(Panel::Destination)
            .toggled(Panel::Skyplot)
            .toggled(Panel::PositionPdop);
        let order: Vec<_> = store.active().collect();
        assert_eq!(order, Panel::ALL.to_vec());
    }

    #[test]
    fn reducer_toggles() {
        let store = Rc::new(PanelStore::default()).reduce(PanelAction::Toggle(Panel::Skyplot));
        assert!(store.is_active(Panel::Skyplot));
        let store = store.reduce(PanelAction::Toggle(Panel::Skyplot));
        assert!(!store.is_active(Panel::Skyplot));
    }
}
