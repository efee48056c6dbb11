use crate::model::{Child, Event, EventId, Roster};
use crate::roster::{RosterError, RosterManager, Selection};
use crate::storage::Storage;
use chrono::NaiveDate;
use tracing::warn;

/// État applicatif explicite : roster en mémoire + support de persistance.
///
/// Chaque mutation est appliquée sur un brouillon, sauvegardée, puis seulement
/// alors publiée. Si la sauvegarde échoue, l'état en mémoire reste celui
/// d'avant l'appel et l'opération peut être rejouée.
#[derive(Debug)]
pub struct Session<S: Storage> {
    storage: S,
    manager: RosterManager,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S, roster: Roster) -> Self {
        Self {
            storage,
            manager: RosterManager::new(roster),
        }
    }

    /// Charge le roster depuis `storage`.
    pub fn open(storage: S) -> Result<Self, RosterError> {
        let roster = storage.load().map_err(|err| match err.downcast::<RosterError>() {
            Ok(known) => known,
            Err(other) => RosterError::Other(other),
        })?;
        Ok(Self::new(storage, roster))
    }

    pub fn manager(&self) -> &RosterManager {
        &self.manager
    }

    pub fn roster(&self) -> &Roster {
        self.manager.roster()
    }

    pub fn create_event(
        &mut self,
        date: NaiveDate,
        selection: Selection,
    ) -> Result<EventId, RosterError> {
        self.commit(|draft| draft.create_event(date, selection))
    }

    pub fn edit_event(
        &mut self,
        id: EventId,
        date: NaiveDate,
        children: Option<Vec<Child>>,
    ) -> Result<(), RosterError> {
        self.commit(|draft| draft.edit_event(id, date, children))
    }

    pub fn delete_event(&mut self, id: EventId) -> Result<Event, RosterError> {
        self.commit(|draft| draft.delete_event(id))
    }

    pub fn import_children(&mut self, children: Vec<Child>) -> Result<usize, RosterError> {
        self.commit(|draft| draft.import_children(children))
    }

    fn commit<T>(
        &mut self,
        op: impl FnOnce(&mut RosterManager) -> Result<T, RosterError>,
    ) -> Result<T, RosterError> {
        let mut draft = self.manager.clone();
        let out = op(&mut draft)?;
        if let Err(err) = self.storage.save(draft.roster()) {
            warn!(error = %format!("{err:#}"), "save failed, keeping previous state");
            return Err(RosterError::Persist(err));
        }
        self.manager = draft;
        Ok(out)
    }
}
