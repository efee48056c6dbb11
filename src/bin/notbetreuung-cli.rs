#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use notbetreuung::{
    io,
    model::EventId,
    overview::{OverviewRenderer, TextOverview},
    roster::Selection,
    session::Session,
    storage::FileStorage,
};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de Notbetreuung (liste d'attente + événements)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier CSV de la liste d'attente (`Vorname,Nachname`)
    #[arg(long, global = true, default_value = "kinder.csv")]
    waitlist: String,

    /// Fichier JSON du journal des événements
    #[arg(long, global = true, default_value = "events.json")]
    events: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher les événements et la liste d'attente
    List {
        /// Export CSV du journal (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Créer un événement à partir de la tête de liste
    Create {
        /// YYYY-MM-DD ou DD.MM.YYYY
        #[arg(long)]
        date: String,
        /// Nombre d'enfants qui restent à la maison
        #[arg(long, conflicts_with = "pick", required_unless_present = "pick")]
        count: Option<usize>,
        /// Sélection manuelle par positions "1,3,4"
        #[arg(long)]
        pick: Option<String>,
    },

    /// Afficher un événement avec sa sélection
    Show {
        #[arg(long)]
        id: u32,
    },

    /// Modifier la date et/ou les enfants d'un événement
    Edit {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        date: Option<String>,
        /// Nouvelle sélection par positions "1,3,4"
        #[arg(long)]
        pick: Option<String>,
    },

    /// Supprimer un événement et rétablir l'ordre de la liste
    Delete {
        #[arg(long)]
        id: u32,
    },

    /// Ajouter des enfants en fin de liste depuis un CSV
    ImportChildren {
        #[arg(long)]
        csv: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    let storage = FileStorage::new(&cli.waitlist, &cli.events);
    let mut session = Session::open(storage)?;
    let renderer = TextOverview;

    match cli.cmd {
        Commands::List { out_csv } => {
            if let Some(path) = out_csv {
                io::export_events_csv(path, session.roster())?;
            }
            print!("{}", renderer.render(session.roster()));
        }
        Commands::Create { date, count, pick } => {
            let date = io::parse_date(&date)?;
            let selection = match (count, pick) {
                (_, Some(raw)) => {
                    let positions = io::parse_positions(&raw)?;
                    Selection::Manual(session.manager().children_at(&positions)?)
                }
                (Some(n), None) => Selection::Front(n),
                (None, None) => bail!("either --count or --pick is required"),
            };
            let id = session.create_event(date, selection)?;
            let event = session.manager().event(id)?;
            let names: Vec<String> = event.children.iter().map(ToString::to_string).collect();
            println!("Event {id} created for {date}: {}", names.join(", "));
        }
        Commands::Show { id } => {
            let id = EventId::new(id);
            let event = session.manager().event(id)?;
            print!("{}", renderer.render_selection(session.roster(), id, event));
        }
        Commands::Edit { id, date, pick } => {
            let id = EventId::new(id);
            let current_date = session.manager().event(id)?.date;
            let date = match date {
                Some(raw) => io::parse_date(&raw)?,
                None => current_date,
            };
            let children = match pick {
                Some(raw) => {
                    let positions = io::parse_positions(&raw)?;
                    Some(session.manager().children_at(&positions)?)
                }
                None => None,
            };
            session.edit_event(id, date, children)?;
            println!("Event {id} updated");
        }
        Commands::Delete { id } => {
            let id = EventId::new(id);
            let removed = session.delete_event(id)?;
            println!(
                "Event {id} deleted, {} child(ren) moved back to the front",
                removed.children.len()
            );
        }
        Commands::ImportChildren { csv } => {
            let children = io::import_children_csv(csv)?;
            let added = session.import_children(children)?;
            println!("{added} child(ren) appended to the waitlist");
        }
    }

    Ok(())
}
