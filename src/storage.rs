use crate::io;
use crate::model::{Event, EventId, Roster};
use crate::roster::RosterError;
use anyhow::Context;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

pub trait Storage {
    /// Charge liste d'attente et journal depuis un support.
    fn load(&self) -> anyhow::Result<Roster>;
    /// Sauvegarde de manière atomique (fichier par fichier).
    ///
    /// L'atomicité ne couvre pas plusieurs fichiers : une erreur renvoyée peut
    /// laisser une partie du roster déjà écrite. Rejouer la même sauvegarde
    /// remet le support en cohérence.
    fn save(&self, roster: &Roster) -> anyhow::Result<()>;
}

/// Liste d'attente en CSV (`Vorname,Nachname`) + journal en JSON.
#[derive(Debug, Clone)]
pub struct FileStorage {
    waitlist_path: PathBuf,
    events_path: PathBuf,
}

impl FileStorage {
    pub fn new<W: AsRef<Path>, E: AsRef<Path>>(waitlist_path: W, events_path: E) -> Self {
        Self {
            waitlist_path: waitlist_path.as_ref().to_path_buf(),
            events_path: events_path.as_ref().to_path_buf(),
        }
    }

    fn load_events(&self) -> anyhow::Result<BTreeMap<EventId, Event>> {
        if !self.events_path.exists() {
            debug!(path = %self.events_path.display(), "no event log yet, starting empty");
            return Ok(BTreeMap::new());
        }
        let data = fs::read(&self.events_path)
            .with_context(|| format!("reading {}", self.events_path.display()))?;
        serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.events_path.display()))
    }
}

impl Storage for FileStorage {
    fn load(&self) -> anyhow::Result<Roster> {
        if !self.waitlist_path.exists() {
            return Err(RosterError::WaitlistNotFound(self.waitlist_path.clone()).into());
        }
        let waitlist = io::import_children_csv(&self.waitlist_path)?;
        let events = self.load_events()?;
        debug!(children = waitlist.len(), events = events.len(), "roster loaded");
        Ok(Roster { waitlist, events })
    }

    /// Les deux fichiers temporaires sont écrits avant tout renommage, journal
    /// d'abord. Si le renommage du journal réussit et celui de la liste
    /// échoue, le disque contient le nouveau journal et l'ancienne liste
    /// tandis que la session garde l'ancien état ; l'erreur est remontée et
    /// une nouvelle tentative réécrit les deux fichiers.
    fn save(&self, roster: &Roster) -> anyhow::Result<()> {
        let mut events_tmp = temp_beside(&self.events_path)?;
        let json = serde_json::to_vec_pretty(&roster.events)?;
        events_tmp.write_all(&json)?;
        events_tmp.flush()?;
        events_tmp.as_file().sync_all()?;

        let mut waitlist_tmp = temp_beside(&self.waitlist_path)?;
        io::write_children_csv(waitlist_tmp.as_file_mut(), &roster.waitlist)?;
        waitlist_tmp.as_file().sync_all()?;

        events_tmp
            .persist(&self.events_path)
            .with_context(|| format!("atomic rename to {}", self.events_path.display()))?;
        waitlist_tmp
            .persist(&self.waitlist_path)
            .with_context(|| format!("atomic rename to {}", self.waitlist_path.display()))?;
        debug!(events = roster.events.len(), children = roster.waitlist.len(), "roster saved");
        Ok(())
    }
}

fn temp_beside(target: &Path) -> anyhow::Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    NamedTempFile::new_in(dir).with_context(|| format!("creating temp file in {}", dir.display()))
}
