use crate::model::{Child, Event, EventId, Roster};

/// Permet de customiser le rendu de la vue principale (texte, HTML, etc.).
pub trait OverviewRenderer {
    /// Événements planifiés puis liste d'attente par ordre de priorité.
    fn render(&self, roster: &Roster) -> String;
    /// Liste d'attente avec les enfants de l'événement cochés.
    fn render_selection(&self, roster: &Roster, id: EventId, event: &Event) -> String;
}

/// Rendu texte brut pour le terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextOverview;

impl OverviewRenderer for TextOverview {
    fn render(&self, roster: &Roster) -> String {
        let mut lines = Vec::new();
        if roster.events.is_empty() {
            lines.push("Aktuell gibt es keine Notbetreuung.".to_string());
        } else {
            lines.push(format!(
                "Aktuell geplante Notbetreuungen ({})",
                roster.events.len()
            ));
            lines.extend(roster.events.iter().map(|(id, event)| {
                format!(
                    "{id} | {} | {}",
                    event.date.format("%Y-%m-%d"),
                    join_names(&event.children)
                )
            }));
        }

        lines.push(String::new());
        lines.push("Kinder-Warteliste".to_string());
        if roster.waitlist.is_empty() {
            lines.push("(leer)".to_string());
        }
        lines.extend(
            roster
                .waitlist
                .iter()
                .enumerate()
                .map(|(pos, child)| format!("{}. {child}", pos + 1)),
        );
        finish(lines)
    }

    fn render_selection(&self, roster: &Roster, id: EventId, event: &Event) -> String {
        let mut lines = vec![format!("Event {id} | {}", event.date.format("%Y-%m-%d"))];
        lines.extend(roster.waitlist.iter().enumerate().map(|(pos, child)| {
            let mark = if event.children.contains(child) { 'x' } else { ' ' };
            format!("[{mark}] {}. {child}", pos + 1)
        }));
        // enfants de l'événement retirés de la liste entre-temps
        lines.extend(
            event
                .children
                .iter()
                .filter(|c| !roster.contains(c))
                .map(|child| format!("[x] -. {child} (not on waitlist)")),
        );
        finish(lines)
    }
}

fn join_names(children: &[Child]) -> String {
    children
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
