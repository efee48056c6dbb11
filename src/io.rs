use crate::model::{Child, Roster};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::collections::HashSet;
use std::path::Path;

/// Import d'enfants depuis CSV: header `Vorname,Nachname`
pub fn import_children_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Child>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out: Vec<Child> = Vec::new();
    let mut seen = HashSet::new();
    for (line, rec) in rdr.deserialize::<Child>().enumerate() {
        let child = rec.with_context(|| format!("{}: row {}", path.display(), line + 1))?;
        if child.first_name.is_empty() || child.last_name.is_empty() {
            bail!("invalid child row {} (empty name)", line + 1);
        }
        if !seen.insert(child.clone()) {
            bail!("duplicate child in {}: {child}", path.display());
        }
        out.push(child);
    }
    Ok(out)
}

/// Écrit la liste d'attente en CSV dans l'ordre de priorité.
pub fn write_children_csv<W: std::io::Write>(out: W, children: &[Child]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(out);
    w.write_record(["Vorname", "Nachname"])?;
    for child in children {
        w.serialize(child)?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV du journal: header `id,datum,Vorname,Nachname`, une ligne par enfant
pub fn export_events_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "datum", "Vorname", "Nachname"])?;
    let mut id_buf = itoa::Buffer::new();
    for (id, event) in &roster.events {
        let id = id_buf.format(id.get());
        let date = event.date.format("%Y-%m-%d").to_string();
        for child in &event.children {
            w.write_record([
                id,
                date.as_str(),
                child.first_name.as_str(),
                child.last_name.as_str(),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Date ISO (`2025-03-04`) ou format du formulaire (`04.03.2025`).
pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d.%m.%Y"))
        .with_context(|| format!("invalid date: {raw} (expected YYYY-MM-DD or DD.MM.YYYY)"))
}

/// Positions "1,3,4" (1 = tête de liste).
pub fn parse_positions(raw: &str) -> anyhow::Result<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .with_context(|| format!("invalid waitlist position: {s}"))
        })
        .collect()
}
