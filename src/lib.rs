#![forbid(unsafe_code)]
//! Notbetreuung — gestion locale d'une liste d'attente d'enfants (sans BD).
//!
//! - Stockage fichiers (CSV pour la liste, JSON pour le journal).
//! - Rotation par partition stable à la création d'un événement.
//! - Restauration de l'ordre à la suppression, tout ou rien.
//! - Sauvegarde après chaque mutation ; l'état mémoire n'avance que si elle réussit.

pub mod io;
pub mod model;
pub mod overview;
pub mod roster;
pub mod session;
pub mod storage;

pub use model::{Child, Event, EventId, Roster};
pub use overview::{OverviewRenderer, TextOverview};
pub use roster::{RosterError, RosterManager, Selection};
pub use session::Session;
pub use storage::{FileStorage, Storage};
