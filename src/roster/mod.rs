mod mutate;
mod rotation;
mod types;
mod util;

pub use rotation::{restore, rotate};
pub use types::{RosterError, Selection};

use crate::model::{Child, Event, EventId, Roster};
use chrono::NaiveDate;

/// RosterManager : encapsule le Roster et applique les règles de rotation
#[derive(Debug, Clone, Default)]
pub struct RosterManager {
    roster: Roster,
}

impl RosterManager {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn event(&self, id: EventId) -> Result<&Event, RosterError> {
        self.roster.event(id).ok_or(RosterError::UnknownEvent(id))
    }

    /// Enfants aux positions données (1 = tête de liste), dans l'ordre fourni.
    pub fn children_at(&self, positions: &[usize]) -> Result<Vec<Child>, RosterError> {
        positions
            .iter()
            .map(|&pos| {
                pos.checked_sub(1)
                    .and_then(|idx| self.roster.waitlist.get(idx))
                    .cloned()
                    .ok_or_else(|| {
                        RosterError::Other(anyhow::anyhow!(
                            "no child at waitlist position {pos} (waitlist has {})",
                            self.roster.waitlist.len()
                        ))
                    })
            })
            .collect()
    }

    /// Crée un événement, fait tourner la liste d'attente et renvoie le nouvel id.
    pub fn create_event(
        &mut self,
        date: NaiveDate,
        selection: Selection,
    ) -> Result<EventId, RosterError> {
        mutate::create_event(self, date, selection)
    }

    /// Remplace la date et, si fournis, les enfants d'un événement ; l'ordre
    /// de la liste ne bouge pas.
    pub fn edit_event(
        &mut self,
        id: EventId,
        date: NaiveDate,
        children: Option<Vec<Child>>,
    ) -> Result<(), RosterError> {
        mutate::edit_event(self, id, date, children)
    }

    /// Supprime un événement et remet ses enfants en tête (tout ou rien).
    pub fn delete_event(&mut self, id: EventId) -> Result<Event, RosterError> {
        mutate::delete_event(self, id)
    }

    pub fn import_children(&mut self, children: Vec<Child>) -> Result<usize, RosterError> {
        mutate::import_children(self, children)
    }
}
