use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use note_store::{NoteId, NoteStore};
use search::{highlight_matches, MatchSpan};
use session::SearchSession;
use std::path::PathBuf;
use tracing::warn;

/// notekeep - a small note-taking and search tool
#[derive(Parser)]
#[command(name = "notekeep")]
#[command(about = "Create, list, and search text notes", long_about = None)]
struct Cli {
    /// Path to the note store file
    #[arg(short, long, default_value = "notekeep.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new note
    Add {
        /// Note title
        #[arg(long)]
        title: String,

        /// Note body
        #[arg(long, default_value = "")]
        body: String,
    },

    /// List all notes in insertion order
    List,

    /// Search notes (title first, body as fallback) and highlight matches
    Search {
        /// The search query; also used as the highlight pattern
        query: String,
    },

    /// Show a single note, optionally with matches highlighted
    Show {
        /// Note id (as printed by `list`)
        id: NoteId,

        /// Highlight this query within the note
        #[arg(long)]
        query: Option<String>,
    },

    /// Remove a note
    Remove {
        /// Note id (as printed by `list`)
        id: NoteId,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut store = NoteStore::load(&cli.store)
        .with_context(|| format!("Failed to load note store from {}", cli.store.display()))?;

    match cli.command {
        Commands::Add { title, body } => {
            let id = store.add(title, body);
            store.save(&cli.store).context("Failed to save note store")?;
            println!("{} Added note {}", "✓".green(), id);
        }
        Commands::List => handle_list(&store),
        Commands::Search { query } => handle_search(&store, &query),
        Commands::Show { id, query } => handle_show(&store, id, query.as_deref())?,
        Commands::Remove { id } => {
            let note = store.remove(id)?;
            store.save(&cli.store).context("Failed to save note store")?;
            println!("{} Removed note {} ({})", "✓".green(), id, note.title);
        }
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(store: &NoteStore) {
    if store.is_empty() {
        println!("No notes yet. Add one with `notekeep add --title ...`");
        return;
    }

    for entry in store.entries() {
        let first_line = entry.note.body.lines().next().unwrap_or("");
        println!(
            "{}: {} {}",
            entry.id.to_string().cyan(),
            entry.note.title.bold(),
            first_line.dimmed()
        );
    }
}

/// Handle the 'search' command
fn handle_search(store: &NoteStore, query: &str) {
    let notes = store.snapshot();
    let mut session = SearchSession::new();
    let result = session.on_query_changed(&notes, query);

    if result.notes.is_empty() {
        println!("No notes match '{query}'");
        return;
    }

    println!(
        "{}",
        format!("{} note(s) match '{}':", result.notes.len(), query).bold()
    );
    for note in &result.notes {
        println!("  {}", highlighted_or_plain(&note.title, query));
        if let Some(first_line) = note.body.lines().next() {
            if !first_line.is_empty() {
                println!("    {}", highlighted_or_plain(first_line, query));
            }
        }
    }
}

/// Handle the 'show' command
fn handle_show(store: &NoteStore, id: NoteId, query: Option<&str>) -> Result<()> {
    let note = store
        .get(id)
        .with_context(|| format!("No note with id {id}"))?;

    match query {
        Some(query) => {
            println!("{}", highlighted_or_plain(&note.title, query));
            println!();
            println!("{}", highlighted_or_plain(&note.body, query));
        }
        None => {
            println!("{}", note.title.bold());
            println!();
            println!("{}", note.body);
        }
    }
    Ok(())
}

/// Render `text` with query matches in red, or plain if the query is not a
/// valid pattern. A malformed query must never abort the command.
fn highlighted_or_plain(text: &str, query: &str) -> String {
    match highlight_matches(text, query) {
        Ok(spans) => render_spans(text, &spans),
        Err(err) => {
            warn!(%err, "highlighting suppressed");
            text.to_string()
        }
    }
}

/// Splice colored segments into `text` at the given character spans.
fn render_spans(text: &str, spans: &[MatchSpan]) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut pos = 0;

    for span in spans {
        let start = span.start.min(chars.len());
        let end = span.end.min(chars.len());
        out.extend(&chars[pos..start]);
        let matched: String = chars[start..end].iter().collect();
        out.push_str(&matched.red().to_string());
        pos = end;
    }
    out.extend(&chars[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_spans_without_color_codes() {
        // Force color off so the assertion sees plain text
        colored::control::set_override(false);
        let spans = vec![MatchSpan::new(0, 4), MatchSpan::new(9, 13)];
        assert_eq!(render_spans("milk and milk", &spans), "milk and milk");
        colored::control::unset_override();
    }

    #[test]
    fn test_render_spans_clamps_out_of_range() {
        colored::control::set_override(false);
        let spans = vec![MatchSpan::new(2, 99)];
        assert_eq!(render_spans("abcd", &spans), "abcd");
        colored::control::unset_override();
    }

    #[test]
    fn test_highlighted_or_plain_swallows_bad_pattern() {
        let rendered = highlighted_or_plain("anything", "[");
        assert_eq!(rendered, "anything");
    }
}
