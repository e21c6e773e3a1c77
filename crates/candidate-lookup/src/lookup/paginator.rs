use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use super::payload::PageMeta;

/// Which listing traversal the locator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStrategy {
    /// Opaque `page[after]` continuation tokens.
    Cursor,
    /// `page[number]` from 1 up to the reported page count, newest first.
    PageNumber,
}

impl PaginationStrategy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "cursor" => Some(Self::Cursor),
            "page-number" | "page_number" | "pages" => Some(Self::PageNumber),
            _ => None,
        }
    }

    pub fn paginator(self, page_size: u32) -> Box<dyn Paginator> {
        match self {
            Self::Cursor => Box::new(CursorPaginator::new(page_size)),
            Self::PageNumber => Box::new(PageNumberPaginator::new(page_size)),
        }
    }
}

/// Position of a single listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagePosition {
    Cursor(Option<String>),
    Number(u32),
}

/// A single `GET /v1/candidates` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub size: u32,
    pub position: PagePosition,
}

impl PageRequest {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page[size]", self.size.to_string())];
        match &self.position {
            PagePosition::Cursor(Some(after)) => params.push(("page[after]", after.clone())),
            PagePosition::Cursor(None) => {}
            PagePosition::Number(number) => {
                params.push(("page[number]", number.to_string()));
                params.push(("sort", "-created-at".to_string()));
            }
        }
        params
    }
}

/// Drives a listing traversal one page at a time.
///
/// `advance` sees the metadata of the page just fetched and returns the next
/// request, or `None` once the listing is exhausted.
pub trait Paginator: Send {
    fn strategy(&self) -> PaginationStrategy;
    fn first(&mut self) -> PageRequest;
    fn advance(&mut self, meta: &PageMeta) -> Option<PageRequest>;
}

/// Follows `page[after]` tokens; a token issued twice ends the walk.
pub struct CursorPaginator {
    size: u32,
    issued: HashSet<String>,
}

impl CursorPaginator {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            issued: HashSet::new(),
        }
    }
}

impl Paginator for CursorPaginator {
    fn strategy(&self) -> PaginationStrategy {
        PaginationStrategy::Cursor
    }

    fn first(&mut self) -> PageRequest {
        self.issued.clear();
        PageRequest {
            size: self.size,
            position: PagePosition::Cursor(None),
        }
    }

    fn advance(&mut self, meta: &PageMeta) -> Option<PageRequest> {
        let next = meta.next_cursor()?;
        if !self.issued.insert(next.to_string()) {
            warn!(cursor = next, "vendor returned a cursor that was already followed; stopping");
            return None;
        }

        Some(PageRequest {
            size: self.size,
            position: PagePosition::Cursor(Some(next.to_string())),
        })
    }
}

pub struct PageNumberPaginator {
    size: u32,
    number: u32,
    page_count: Option<u32>,
}

impl PageNumberPaginator {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            number: 1,
            page_count: None,
        }
    }

}

impl Paginator for PageNumberPaginator {
    fn strategy(&self) -> PaginationStrategy {
        PaginationStrategy::PageNumber
    }

    fn first(&mut self) -> PageRequest {
        self.number = 1;
        self.page_count = None;
        PageRequest {
            size: self.size,
            position: PagePosition::Number(1),
        }
    }

    fn advance(&mut self, meta: &PageMeta) -> Option<PageRequest> {
        // The total comes from the first response and is not re-read afterwards.
        if self.page_count.is_none() {
            self.page_count = meta.page_count;
        }

        let total = self.page_count?;
        if self.number >= total {
            return None;
        }

        self.number += 1;
        Some(PageRequest {
            size: self.size,
            position: PagePosition::Number(self.number),
        })
    }
}
