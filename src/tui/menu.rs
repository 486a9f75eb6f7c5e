//! The main menu: pages through the conversation catalog, scopes it by
//! fuzzy search, and dispatches selections into the viewer.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use super::input::{Key, KeySource, read_number};
use super::render::Theme;
use super::viewer::Viewer;
use super::{clear_screen, paginator, render, settings_menu};
use crate::archive::loader;
use crate::models::{DisplaySettings, IndexEntry};
use crate::search::fuzzy;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    NextPage,
    PrevPage,
    Find,
    Settings,
    Select(char),
    Quit,
    Noop,
}

impl Command {
    fn from_key(key: Key) -> Self {
        match key {
            Key::Char(c) => match c.to_ascii_lowercase() {
                'n' => Command::NextPage,
                'p' => Command::PrevPage,
                'f' => Command::Find,
                's' => Command::Settings,
                'q' => Command::Quit,
                d if d.is_ascii_digit() => Command::Select(d),
                _ => Command::Noop,
            },
            // Enter is a no-op here, unlike the viewer where it advances
            Key::Enter | Key::Other => Command::Noop,
        }
    }
}

/// Top-level interactive loop. Owns the catalog, the navigation state, and
/// the session's display settings.
pub struct Menu {
    entries: Vec<IndexEntry>,
    archive_dir: PathBuf,
    page: usize,
    search_query: Option<String>,
    search_results: Option<Vec<IndexEntry>>,
    settings: DisplaySettings,
}

impl Menu {
    pub fn new(entries: Vec<IndexEntry>, archive_dir: PathBuf) -> Self {
        Self {
            entries,
            archive_dir,
            page: 0,
            search_query: None,
            search_results: None,
            settings: DisplaySettings::default(),
        }
    }

    /// The entry set the menu currently operates over: search results when
    /// a search is in effect, the full catalog otherwise.
    fn active_entries(&self) -> &[IndexEntry] {
        self.search_results.as_deref().unwrap_or(&self.entries)
    }

    fn active_pages(&self) -> usize {
        paginator::num_pages(self.active_entries().len(), paginator::PAGE_SIZE)
    }

    fn next_page(&mut self) {
        self.page = paginator::next_page(self.page, self.active_pages());
    }

    fn prev_page(&mut self) {
        self.page = paginator::prev_page(self.page, self.active_pages());
    }

    fn clear_search(&mut self) {
        self.search_query = None;
        self.search_results = None;
        self.page = 0;
    }

    fn apply_search(&mut self, query: &str) -> bool {
        let results = fuzzy::search(query, &self.entries);
        if results.is_empty() {
            self.clear_search();
            return false;
        }
        self.search_query = Some(query.to_string());
        self.search_results = Some(results);
        self.page = 0;
        true
    }

    /// Resolve a typed number against the `index` field of the active set;
    /// selection is by catalog number, not page position.
    fn find_entry(&self, number: usize) -> Option<&IndexEntry> {
        self.active_entries().iter().find(|entry| entry.index == number)
    }

    pub fn run<K: KeySource + ?Sized>(&mut self, keys: &mut K, theme: &Theme) -> Result<()> {
        loop {
            self.page = paginator::clamp_page(self.page, self.active_pages());
            clear_screen();
            let active = self.active_entries();
            print!(
                "{}",
                render::format_menu_page(
                    paginator::window(active, self.page, paginator::PAGE_SIZE),
                    self.page,
                    self.active_pages(),
                    active.len(),
                    self.search_query.as_deref(),
                    theme,
                )
            );
            print!("Command: ");
            std::io::stdout().flush()?;

            match Command::from_key(keys.read_key()?) {
                Command::NextPage => self.next_page(),
                Command::PrevPage => self.prev_page(),
                Command::Find => self.handle_find(keys)?,
                Command::Settings => settings_menu::run(keys, &mut self.settings, theme)?,
                Command::Select(first) => {
                    let number = read_number(first, keys)?;
                    self.open_conversation(number, keys, theme)?;
                }
                Command::Quit => return Ok(()),
                Command::Noop => {}
            }
        }
    }

    fn handle_find<K: KeySource + ?Sized>(&mut self, keys: &mut K) -> Result<()> {
        let query = keys.read_line("Search: ")?;
        let query = query.trim();
        if query.is_empty() {
            self.clear_search();
            return Ok(());
        }
        if !self.apply_search(query) {
            println!("No matches for \"{}\".", query);
            println!("Press any key to continue.");
            keys.read_key()?;
        }
        Ok(())
    }

    fn open_conversation<K: KeySource + ?Sized>(
        &mut self,
        number: usize,
        keys: &mut K,
        theme: &Theme,
    ) -> Result<()> {
        let Some(entry) = self.find_entry(number).cloned() else {
            println!("\nNo conversation numbered {}.", number);
            println!("Press any key to continue.");
            keys.read_key()?;
            return Ok(());
        };

        match loader::load_conversation(&self.archive_dir, &entry) {
            Ok(conversation) => {
                Viewer::new(conversation).run(keys, &mut self.settings, theme)?;
            }
            Err(err) => {
                // recoverable: report and stay in the menu
                println!("\nFailed to open {}: {:#}", entry.filename, err);
                println!("Press any key to continue.");
                keys.read_key()?;
            }
        }
        Ok(())
    }
}
