use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Enfant de la liste d'attente, identifié par (prénom, nom).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Child {
    #[serde(rename = "Vorname")]
    pub first_name: String,
    #[serde(rename = "Nachname")]
    pub last_name: String,
}

impl Child {
    pub fn new<F: Into<String>, L: Into<String>>(first_name: F, last_name: L) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Identifiant fort pour Event (entier croissant, commence à 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u32);

impl EventId {
    pub const FIRST: EventId = EventId(1);

    pub fn new(raw: u32) -> Self {
        Self(raw)
    }
    pub fn get(self) -> u32 {
        self.0
    }
    /// `None` une fois `u32::MAX` atteint.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notbetreuung : une date et les enfants restés à la maison.
///
/// Les enfants sont des copies des noms au moment de la création, pas des
/// références vers la liste d'attente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "datum")]
    pub date: NaiveDate,
    #[serde(rename = "zuhause", default)]
    pub children: Vec<Child>,
}

impl Event {
    pub fn new(date: NaiveDate, children: Vec<Child>) -> Self {
        Self { date, children }
    }
}

/// Roster complet : liste d'attente ordonnée + journal des événements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Tête de liste = prochain enfant sélectionné.
    pub waitlist: Vec<Child>,
    pub events: BTreeMap<EventId, Event>,
}

impl Roster {
    pub fn new(waitlist: Vec<Child>) -> Self {
        Self {
            waitlist,
            events: BTreeMap::new(),
        }
    }

    /// max(id) + 1, ou 1 si le journal est vide ; `None` si les ids sont épuisés.
    pub fn next_event_id(&self) -> Option<EventId> {
        match self.events.last_key_value() {
            Some((id, _)) => id.next(),
            None => Some(EventId::FIRST),
        }
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    pub fn position_of(&self, child: &Child) -> Option<usize> {
        self.waitlist.iter().position(|c| c == child)
    }

    pub fn contains(&self, child: &Child) -> bool {
        self.position_of(child).is_some()
    }
}
