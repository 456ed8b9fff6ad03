//! In-memory wallpaper list with request tickets.
//!
//! Every fetch goes through a [`FetchTicket`]. Only the most recently issued
//! ticket of a live list may change it, so a slow refresh that finishes after
//! a newer one, or after the screen was closed, is dropped instead of
//! interleaving with fresher content.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::PhotoError;
use crate::feed::FeedSource;
use crate::models::{Page, WallpaperItem};

use super::Favorites;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Replace the list with page 1.
    Refresh,
    /// Append the next page.
    LoadMore,
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Which list issued it; unique for the process lifetime
    pub instance: u64,
    /// Issue order within that list
    pub seq: u64,
    pub kind: FetchKind,
    /// Page to request
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading(FetchKind),
    /// The last fetch failed. Content from before the failure is kept.
    Error { error: PhotoError, retry: FetchKind },
}

/// What [`WallpaperList::apply`] did with a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The page was applied; `added` new items are now visible.
    Applied { added: usize },
    /// The fetch failed and the list moved to the error state.
    Failed,
    /// A newer ticket was issued since; nothing changed.
    Stale,
    /// The list was disposed; nothing changed.
    Disposed,
}

/// Items of one feed plus its loading state.
#[derive(Debug)]
pub struct WallpaperList {
    source: FeedSource,
    items: Vec<WallpaperItem>,
    status: LoadStatus,
    per_page: u32,
    next_page: u32,
    total: Option<u64>,
    exhausted: bool,
    selected: usize,
    instance: u64,
    seq: u64,
    in_flight: Option<FetchTicket>,
    disposed: bool,
}

impl WallpaperList {
    pub fn new(source: FeedSource, per_page: u32) -> Self {
        Self {
            source,
            items: Vec::new(),
            status: LoadStatus::Idle,
            per_page: per_page.max(1),
            next_page: 1,
            total: None,
            exhausted: false,
            selected: 0,
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            seq: 0,
            in_flight: None,
            disposed: false,
        }
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    pub fn items(&self) -> &[WallpaperItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&WallpaperItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading(_))
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Total match count reported by the last search page.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// False once a paged source has run out of results.
    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn instance(&self) -> u64 {
        self.instance
    }

    fn issue(&mut self, kind: FetchKind, page: u32) -> FetchTicket {
        self.seq += 1;
        let ticket = FetchTicket {
            instance: self.instance,
            seq: self.seq,
            kind,
            page,
        };
        self.in_flight = Some(ticket.clone());
        self.status = LoadStatus::Loading(kind);
        ticket
    }

    /// Start a refresh. Supersedes whatever is in flight.
    pub fn begin_refresh(&mut self) -> Option<FetchTicket> {
        if self.disposed {
            return None;
        }
        if let Some(previous) = &self.in_flight {
            tracing::debug!(
                "{}: refresh supersedes request #{} ({:?})",
                self.source,
                previous.seq,
                previous.kind
            );
        }
        Some(self.issue(FetchKind::Refresh, 1))
    }

    /// Start loading the next page. `None` while another request is in
    /// flight, after the feed ran out, or once disposed.
    pub fn begin_load_more(&mut self) -> Option<FetchTicket> {
        if self.disposed || self.in_flight.is_some() || self.exhausted {
            return None;
        }
        let page = self.next_page;
        Some(self.issue(FetchKind::LoadMore, page))
    }

    /// Re-issue the intent that failed last.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        match self.status {
            LoadStatus::Error { retry: FetchKind::Refresh, .. } => self.begin_refresh(),
            LoadStatus::Error { retry: FetchKind::LoadMore, .. } => self.begin_load_more(),
            _ => None,
        }
    }

    /// Apply the result of a fetch started with `ticket`.
    pub fn apply(&mut self, ticket: &FetchTicket, result: Result<Page, PhotoError>) -> ApplyOutcome {
        if self.disposed {
            return ApplyOutcome::Disposed;
        }
        if self.in_flight.as_ref() != Some(ticket) {
            tracing::debug!("{}: dropping stale response #{}", self.source, ticket.seq);
            return ApplyOutcome::Stale;
        }
        self.in_flight = None;

        let page = match result {
            Ok(page) => page,
            Err(error) => {
                tracing::warn!(
                    "{}: {:?} failed ({}): {}",
                    self.source,
                    ticket.kind,
                    error.category().as_str(),
                    error
                );
                self.status = LoadStatus::Error {
                    error,
                    retry: ticket.kind,
                };
                return ApplyOutcome::Failed;
            }
        };

        let received = page.items.len();
        let added = match ticket.kind {
            FetchKind::Refresh => {
                self.items.clear();
                self.selected = 0;
                self.append_unique(page.items)
            }
            FetchKind::LoadMore => self.append_unique(page.items),
        };

        self.next_page = ticket.page + 1;
        self.total = page.total;
        self.exhausted = self.source.is_paged()
            && (received < self.per_page as usize
                || page
                    .total
                    .is_some_and(|total| u64::from(ticket.page) * u64::from(self.per_page) >= total));
        self.status = LoadStatus::Idle;

        tracing::info!(
            "{}: {:?} page {} applied, {} new of {} received",
            self.source,
            ticket.kind,
            ticket.page,
            added,
            received
        );
        ApplyOutcome::Applied { added }
    }

    fn append_unique(&mut self, incoming: Vec<WallpaperItem>) -> usize {
        let mut seen: HashSet<String> = self.items.iter().map(|item| item.id.clone()).collect();
        let before = self.items.len();
        self.items.extend(
            incoming
                .into_iter()
                .filter(|item| seen.insert(item.id.clone())),
        );
        self.items.len() - before
    }

    /// Re-derive every item's favorite flag from the session favorites.
    pub fn sync_favorites(&mut self, favorites: &Favorites) {
        for item in &mut self.items {
            item.is_favorite = favorites.contains(&item.id);
        }
    }

    /// Put `item` first, replacing any entry with the same id.
    pub fn prepend(&mut self, item: WallpaperItem) {
        self.items.retain(|existing| existing.id != item.id);
        self.items.insert(0, item);
        self.selected = 0;
    }

    /// Stop accepting results. In-flight responses will be discarded.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.in_flight = None;
        if self.is_loading() {
            self.status = LoadStatus::Idle;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&WallpaperItem> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// True when the selection sits on the last row, which is where the
    /// grid asks for another page.
    pub fn at_end(&self) -> bool {
        !self.items.is_empty() && self.selected + 1 >= self.items.len()
    }
}
