//! Coin list state container — app-owned, SDK-provided update logic.
//!
//! Pure state machine behind the paginated coin list: page accumulation,
//! stable sorting, substring filtering, the auto-pagination trigger and the
//! stale-response guard. Fetching itself lives in the async
//! [`manager`](super::manager); this type never touches the network, which is
//! what keeps every transition unit-testable.

use super::Coin;
use crate::error::FetchError;

/// Default number of coins per fetched page.
pub const PAGE_SIZE: u32 = 20;

/// Accumulation hard cap — pagination stops for good at this many coins.
pub const MAX_COINS: usize = 100;

/// Distance from the end of the unfiltered list at which the next page is
/// requested.
pub const LOAD_MORE_THRESHOLD: usize = 5;

/// Lifecycle phase of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Empty,
    Loading,
    Loaded,
    Failed,
}

/// Active sort order. Ties always keep their pre-sort relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by rank; absent rank sorts as 0.
    #[default]
    RankAsc,
    /// Descending by numeric price; absent/unparsable sorts as 0.0.
    PriceDesc,
    /// Descending by 24h percent change; absent/unparsable sorts as 0.0.
    ChangeDesc,
}

/// Whether a load replaces the collection or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    Refresh,
    NextPage,
}

/// Token handed out by `begin_*` and required by [`CoinListState::complete`].
///
/// The `seq` field is the stale-response guard: a completion whose token is
/// no longer current (a newer load began in the meantime) is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub seq: u64,
    pub offset: u32,
    pub limit: u32,
    pub kind: LoadKind,
}

/// Accumulated, sorted coin collection plus paging/filter state.
///
/// The collection is kept sorted in place; the filter is applied on read, so
/// visible order always reflects the active sort (sort-then-filter).
#[derive(Debug, Clone, Default)]
pub struct CoinListState {
    coins: Vec<Coin>,
    phase: LoadPhase,
    /// Number of pages merged since the last refresh.
    page: u32,
    page_size: u32,
    sort: SortKey,
    /// Lowercased, trimmed filter text; empty means no filtering.
    filter: String,
    /// Current load generation, bumped by every `begin_*`.
    seq: u64,
    /// Collection length at which the auto-pagination trigger last fired.
    last_trigger_len: Option<usize>,
    last_error: Option<String>,
}

impl CoinListState {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The accumulated unfiltered collection, in current sort order.
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Human-readable message for the most recent failure, if the last load
    /// failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ── Loads ────────────────────────────────────────────────────────────

    /// Start a refresh from offset zero.
    ///
    /// Valid from any phase: starting a refresh while one is in flight
    /// supersedes it, and the superseded completion will be discarded by the
    /// sequence guard. Previously loaded coins are kept until the new page
    /// arrives, so a failed refresh never clears existing data.
    pub fn begin_first_page(&mut self) -> LoadRequest {
        self.seq += 1;
        self.phase = LoadPhase::Loading;
        self.last_trigger_len = None;
        LoadRequest {
            seq: self.seq,
            offset: 0,
            limit: self.page_size,
            kind: LoadKind::Refresh,
        }
    }

    /// Start fetching the next page, if allowed.
    ///
    /// Returns `None` while a load is already in flight (the call is ignored,
    /// not queued) and once the accumulated collection has reached
    /// [`MAX_COINS`].
    pub fn begin_next_page(&mut self) -> Option<LoadRequest> {
        if self.phase == LoadPhase::Loading || self.coins.len() >= MAX_COINS {
            return None;
        }
        self.seq += 1;
        self.phase = LoadPhase::Loading;
        Some(LoadRequest {
            seq: self.seq,
            offset: self.page * self.page_size,
            limit: self.page_size,
            kind: LoadKind::NextPage,
        })
    }

    /// Apply the outcome of a load started by a `begin_*` call.
    ///
    /// Returns `false` when the completion is stale (its token was superseded
    /// by a newer load) and was discarded. On success a refresh replaces the
    /// collection and resets the cursor; a next page appends and advances it.
    /// Either way the active sort is re-applied. On failure the phase moves
    /// to `Failed` and the accumulated coins are preserved.
    pub fn complete(&mut self, request: LoadRequest, result: Result<Vec<Coin>, FetchError>) -> bool {
        if request.seq != self.seq {
            tracing::debug!(
                stale_seq = request.seq,
                current_seq = self.seq,
                "discarding stale load completion"
            );
            return false;
        }

        match result {
            Ok(coins) => {
                match request.kind {
                    LoadKind::Refresh => {
                        self.coins = coins;
                        self.page = 1;
                    }
                    LoadKind::NextPage => {
                        self.coins.extend(coins);
                        self.page += 1;
                    }
                }
                self.apply_sort();
                self.phase = LoadPhase::Loaded;
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "coin page load failed");
                self.phase = LoadPhase::Failed;
                self.last_error = Some(e.to_string());
            }
        }
        true
    }

    // ── Sort & filter ────────────────────────────────────────────────────

    /// Change the sort order and re-sort the accumulated collection in place.
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
        self.apply_sort();
    }

    /// Set the search text. Matching is a case-insensitive substring test
    /// against name OR symbol; empty or whitespace-only text clears the
    /// filter.
    pub fn set_filter_text(&mut self, text: &str) {
        self.filter = text.trim().to_lowercase();
    }

    pub fn is_filtering(&self) -> bool {
        !self.filter.is_empty()
    }

    /// The read model: current filter applied to the current sort order.
    pub fn visible(&self) -> Vec<&Coin> {
        if self.filter.is_empty() {
            return self.coins.iter().collect();
        }
        self.coins
            .iter()
            .filter(|coin| {
                field_matches(coin.name.as_deref(), &self.filter)
                    || field_matches(coin.symbol.as_deref(), &self.filter)
            })
            .collect()
    }

    // ── Auto-pagination ──────────────────────────────────────────────────

    /// Report that the row at `index` of the unfiltered collection was
    /// rendered; returns a next-page request when the proximity trigger
    /// fires.
    ///
    /// The trigger fires at most once per collection length, so re-rendering
    /// the same tail rows does not fan out repeated fetches, and it stays
    /// silent while filtering, while loading, and once the [`MAX_COINS`] cap
    /// is reached.
    pub fn row_rendered(&mut self, index: usize) -> Option<LoadRequest> {
        let len = self.coins.len();
        let near_end = len > 0 && index + LOAD_MORE_THRESHOLD >= len;
        if self.is_filtering()
            || !near_end
            || len >= MAX_COINS
            || self.last_trigger_len == Some(len)
        {
            return None;
        }

        let request = self.begin_next_page()?;
        self.last_trigger_len = Some(len);
        Some(request)
    }

    fn apply_sort(&mut self) {
        // Vec::sort_by is stable; total_cmp keeps the comparator total even
        // for the 0.0 defaults.
        match self.sort {
            SortKey::RankAsc => self.coins.sort_by_key(|c| c.rank_or_zero()),
            SortKey::PriceDesc => self
                .coins
                .sort_by(|a, b| b.price_f64().total_cmp(&a.price_f64())),
            SortKey::ChangeDesc => self
                .coins
                .sort_by(|a, b| b.change_f64().total_cmp(&a.change_f64())),
        }
    }
}

fn field_matches(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(needle))
}
