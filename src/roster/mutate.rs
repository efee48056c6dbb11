use super::{rotation, util, RosterError, RosterManager, Selection};
use crate::model::{Child, Event, EventId};
use chrono::NaiveDate;
use tracing::{info, warn};

pub(super) fn create_event(
    manager: &mut RosterManager,
    date: NaiveDate,
    selection: Selection,
) -> Result<EventId, RosterError> {
    let waitlist = &manager.roster.waitlist;
    let flags = match &selection {
        Selection::Front(count) => util::front_flags(waitlist.len(), *count),
        Selection::Manual(children) => util::manual_flags(waitlist, children),
    }
    .inspect_err(|err| warn!(%err, "create event rejected"))?;

    // seul un journal dont le dernier id vaut u32::MAX n'a plus de suivant
    let id = manager
        .roster
        .next_event_id()
        .ok_or(RosterError::IdsExhausted(EventId::new(u32::MAX)))
        .inspect_err(|err| warn!(%err, "create event rejected"))?;
    let chosen = util::marked(waitlist, &flags);
    let rotated = rotation::rotate(waitlist, &flags)?;

    manager.roster.waitlist = rotated;
    manager.roster.events.insert(id, Event::new(date, chosen));
    info!(event = %id, %date, "event created");
    Ok(id)
}

pub(super) fn edit_event(
    manager: &mut RosterManager,
    id: EventId,
    date: NaiveDate,
    children: Option<Vec<Child>>,
) -> Result<(), RosterError> {
    if !manager.roster.events.contains_key(&id) {
        return Err(RosterError::UnknownEvent(id));
    }
    // sans nouvelle sélection, les enfants enregistrés restent tels quels,
    // même s'ils ont quitté la liste depuis
    let chosen = match children {
        Some(children) => {
            let waitlist = &manager.roster.waitlist;
            let flags = util::manual_flags(waitlist, &children)
                .inspect_err(|err| warn!(%err, event = %id, "edit event rejected"))?;
            Some(util::marked(waitlist, &flags))
        }
        None => None,
    };

    // la liste d'attente n'est pas touchée par une édition
    if let Some(event) = manager.roster.events.get_mut(&id) {
        event.date = date;
        if let Some(chosen) = chosen {
            event.children = chosen;
        }
    }
    info!(event = %id, %date, "event edited");
    Ok(())
}

pub(super) fn delete_event(manager: &mut RosterManager, id: EventId) -> Result<Event, RosterError> {
    let event = manager
        .roster
        .events
        .get(&id)
        .ok_or(RosterError::UnknownEvent(id))?;

    let restored = rotation::restore(&manager.roster.waitlist, id, &event.children)
        .inspect_err(|err| warn!(%err, "delete event aborted"))?;

    manager.roster.waitlist = restored;
    let removed = manager
        .roster
        .events
        .remove(&id)
        .ok_or(RosterError::UnknownEvent(id))?;
    info!(event = %id, "event deleted, waitlist restored");
    Ok(removed)
}

pub(super) fn import_children(
    manager: &mut RosterManager,
    children: Vec<Child>,
) -> Result<usize, RosterError> {
    for (idx, child) in children.iter().enumerate() {
        if manager.roster.contains(child) || children[..idx].contains(child) {
            return Err(RosterError::DuplicateChild(child.clone()));
        }
    }
    let added = children.len();
    manager.roster.waitlist.extend(children);
    info!(added, "children appended to waitlist");
    Ok(added)
}
