use crate::model::{Child, EventId};
use std::path::PathBuf;
use thiserror::Error;

/// Choix des enfants qui restent à la maison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Les `n` premiers enfants de la liste d'attente.
    Front(usize),
    /// Sélection manuelle ; sa longueur fait office de nombre.
    Manual(Vec<Child>),
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("selection is empty: at least one child must stay home")]
    EmptySelection,
    #[error("not enough children available: requested {requested}, waitlist has {available}")]
    NotEnoughChildren { requested: usize, available: usize },
    #[error("unknown child: {0}")]
    UnknownChild(Child),
    #[error("child selected twice: {0}")]
    DuplicateChild(Child),
    #[error("event ids exhausted: last id is {0}")]
    IdsExhausted(EventId),
    #[error("selection does not match waitlist: {flags} marks for {children} children")]
    SelectionMismatch { flags: usize, children: usize },
    #[error("unknown event: {0}")]
    UnknownEvent(EventId),
    #[error("inconsistent state: {child} of event {event} is not on the waitlist")]
    InconsistentState { event: EventId, child: Child },
    #[error("waitlist source not found: {}", .0.display())]
    WaitlistNotFound(PathBuf),
    #[error("persistence failed, in-memory state kept: {0:#}")]
    Persist(anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
