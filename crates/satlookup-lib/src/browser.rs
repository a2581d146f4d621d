//! Paginated catalog browsing.
//!
//! The browser fetches one page at a time, appends it to the session and asks a
//! [`ChoicePrompt`] to pick either an entry or the trailing "load next page"
//! choice. A fetch failure, an empty page or a failed prompt ends the session
//! without a selection.

use tracing::{debug, warn};

use crate::catalog::{CatalogEntry, CatalogPage, CatalogSource};
use crate::error::{Error, Result};

/// Label shown above the select list.
pub const SELECT_LABEL: &str = "Select a Satellite 🛰";

/// Text of the synthetic choice that loads another page.
pub fn load_more_label(page_size: usize) -> String {
    format!("Load next {} results", page_size)
}

/// What the select widget is asked to show.
#[derive(Debug, Clone, Copy)]
pub struct SelectRequest<'a> {
    pub label: &'a str,
    pub items: &'a [String],
    /// Row the cursor starts on.
    pub cursor: usize,
}

/// Capability to let the operator pick one of several choices.
pub trait ChoicePrompt {
    /// Present `request.items` and return the index of the chosen item.
    fn present(&mut self, request: &SelectRequest<'_>) -> Result<usize>;
}

/// Resolved meaning of a selection index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Entry(usize),
    LoadMore,
}

/// Entries displayed so far plus the page cursor.
///
/// `accumulated` is append-only: it is the concatenation of every fetched page
/// in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseSession {
    accumulated: Vec<CatalogEntry>,
    current_page: usize,
    last_page_len: usize,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulated(&self) -> &[CatalogEntry] {
        &self.accumulated
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn append_page(&mut self, page: CatalogPage) {
        self.last_page_len = page.entries.len();
        self.accumulated.extend(page.entries);
    }

    /// Move to the next page index.
    pub fn advance(&mut self) {
        self.current_page += 1;
    }

    /// Index of the first entry of the most recently appended page.
    pub fn newest_page_start(&self) -> usize {
        self.accumulated.len() - self.last_page_len
    }

    /// Entry labels followed by the load-more choice, which is always last.
    pub fn choices(&self, page_size: usize) -> Vec<String> {
        self.accumulated
            .iter()
            .map(CatalogEntry::label)
            .chain(std::iter::once(load_more_label(page_size)))
            .collect()
    }

    /// Map a widget index back onto the session.
    pub fn resolve(&self, index: usize) -> Result<Selection> {
        let len = self.accumulated.len();
        if index < len {
            Ok(Selection::Entry(index))
        } else if index == len {
            Ok(Selection::LoadMore)
        } else {
            Err(Error::InvalidSelection {
                index,
                choices: len + 1,
            })
        }
    }
}

/// How a browse session ended.
#[derive(Debug)]
pub enum BrowseOutcome {
    Selected(CatalogEntry),
    /// The service returned an empty page.
    Exhausted,
    FetchFailed(Error),
    PromptFailed(Error),
}

impl BrowseOutcome {
    pub fn selected(&self) -> Option<&CatalogEntry> {
        match self {
            BrowseOutcome::Selected(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn into_selected(self) -> Option<CatalogEntry> {
        match self {
            BrowseOutcome::Selected(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn catalog_id(&self) -> Option<&str> {
        self.selected().map(|entry| entry.catalog_id.as_str())
    }
}

enum State {
    Fetching(usize),
    AwaitingChoice,
}

/// Drives page fetches and operator choices until a selection or an abort.
pub struct CatalogBrowser<'a, S: ?Sized, P: ?Sized> {
    source: &'a S,
    prompt: &'a mut P,
    page_size: usize,
    session: BrowseSession,
}

impl<'a, S, P> CatalogBrowser<'a, S, P>
where
    S: CatalogSource + ?Sized,
    P: ChoicePrompt + ?Sized,
{
    pub fn new(source: &'a S, prompt: &'a mut P, page_size: usize) -> Self {
        Self {
            source,
            prompt,
            page_size: page_size.max(1),
            session: BrowseSession::new(),
        }
    }

    pub fn session(&self) -> &BrowseSession {
        &self.session
    }

    /// Run one browse session from page zero.
    pub fn browse(&mut self) -> BrowseOutcome {
        self.session = BrowseSession::new();
        let mut state = State::Fetching(0);

        loop {
            state = match state {
                State::Fetching(page_index) => {
                    match self.source.fetch_page(page_index, self.page_size) {
                        Ok(page) if page.is_empty() => {
                            debug!(page = page_index, "catalog exhausted");
                            return BrowseOutcome::Exhausted;
                        }
                        Ok(page) => {
                            self.session.append_page(page);
                            State::AwaitingChoice
                        }
                        Err(err) => {
                            warn!(page = page_index, error = %err, "catalog fetch failed");
                            return BrowseOutcome::FetchFailed(err);
                        }
                    }
                }
                State::AwaitingChoice => match self.choose() {
                    Ok(Selection::Entry(index)) => {
                        return BrowseOutcome::Selected(self.session.accumulated[index].clone());
                    }
                    Ok(Selection::LoadMore) => {
                        self.session.advance();
                        State::Fetching(self.session.current_page())
                    }
                    Err(err) => {
                        warn!(error = %err, "catalog selection failed");
                        return BrowseOutcome::PromptFailed(err);
                    }
                },
            };
        }
    }

    fn choose(&mut self) -> Result<Selection> {
        let items = self.session.choices(self.page_size);
        let request = SelectRequest {
            label: SELECT_LABEL,
            items: &items,
            cursor: self.session.newest_page_start(),
        };
        let index = self.prompt.present(&request)?;
        self.session.resolve(index)
    }
}
