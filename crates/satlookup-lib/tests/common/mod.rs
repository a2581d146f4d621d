//! Common test doubles for the catalog browser and detail lookup.
//!
//! The fakes record every call so tests can assert on page indexes, presented
//! choices and cursor positions without touching the network or a terminal.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use satlookup_lib::{
    CatalogEntry, CatalogPage, CatalogSource, ChoicePrompt, ElementSource, Error, Result,
    SelectRequest,
};

/// What the scripted catalog answers for one page index.
pub enum PageScript {
    Entries(Vec<CatalogEntry>),
    Status(u16),
    Malformed,
}

/// Catalog source replaying scripted pages; indexes past the script yield empty pages.
pub struct ScriptedCatalog {
    pages: Vec<PageScript>,
    requests: RefCell<Vec<(usize, usize)>>,
}

impl ScriptedCatalog {
    pub fn new(pages: Vec<PageScript>) -> Self {
        Self {
            pages,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// `(page_index, page_size)` pairs in request order.
    pub fn requests(&self) -> Vec<(usize, usize)> {
        self.requests.borrow().clone()
    }
}

impl CatalogSource for ScriptedCatalog {
    fn fetch_page(&self, page_index: usize, page_size: usize) -> Result<CatalogPage> {
        self.requests.borrow_mut().push((page_index, page_size));
        match self.pages.get(page_index) {
            Some(PageScript::Entries(entries)) => Ok(CatalogPage::new(page_index, entries.clone())),
            Some(PageScript::Status(status)) => Err(Error::RemoteStatus { status: *status }),
            Some(PageScript::Malformed) => Err(Error::Decode {
                message: "expected value at line 1 column 1".to_string(),
            }),
            None => Ok(CatalogPage::new(page_index, Vec::new())),
        }
    }
}

/// One scripted operator action.
pub enum Answer {
    Pick(usize),
    /// Pick whatever is last in the list (the load-more choice).
    LoadMore,
    Interrupt,
}

/// Snapshot of what a prompt was shown.
#[derive(Debug, Clone)]
pub struct Presented {
    pub items: Vec<String>,
    pub cursor: usize,
}

pub struct ScriptedPrompt {
    answers: VecDeque<Answer>,
    pub presented: Vec<Presented>,
}

impl ScriptedPrompt {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            presented: Vec::new(),
        }
    }
}

impl ChoicePrompt for ScriptedPrompt {
    fn present(&mut self, request: &SelectRequest<'_>) -> Result<usize> {
        self.presented.push(Presented {
            items: request.items.to_vec(),
            cursor: request.cursor,
        });
        match self.answers.pop_front() {
            Some(Answer::Pick(index)) => Ok(index),
            Some(Answer::LoadMore) => Ok(request.items.len() - 1),
            Some(Answer::Interrupt) | None => Err(Error::PromptInterrupted),
        }
    }
}

/// Element source returning a fixed blob and recording queried ids.
pub struct FixedElements {
    blob: Option<String>,
    pub queried: RefCell<Vec<String>>,
}

impl FixedElements {
    pub fn ok(blob: &str) -> Self {
        Self {
            blob: Some(blob.to_string()),
            queried: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            blob: None,
            queried: RefCell::new(Vec::new()),
        }
    }
}

impl ElementSource for FixedElements {
    fn fetch_latest_elements(&self, catalog_id: &str) -> Result<String> {
        self.queried.borrow_mut().push(catalog_id.to_string());
        self.blob
            .clone()
            .ok_or(Error::RemoteStatus { status: 500 })
    }
}

/// Build `count` entries whose names sort within page `page`.
pub fn entries(page: usize, count: usize) -> Vec<CatalogEntry> {
    (0..count)
        .map(|i| CatalogEntry::new(format!("SAT P{page:02} #{i:02}"), format!("{}", page * 100 + i)))
        .collect()
}
