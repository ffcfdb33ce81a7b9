//! Async coin list manager — fetch orchestration over [`CoinListState`].
//!
//! One logical owner per instance: every state-changing operation funnels
//! through a single async mutex, so completions land on one mutation context
//! and never interleave. Network awaits happen outside the lock; the state's
//! sequence tokens discard completions that a newer refresh superseded.

use super::state::{CoinListState, LoadPhase, LoadRequest, SortKey};
use super::Coin;
use crate::client::CoinrankClient;
use crate::domain::favorites::FavoritesStore;
use crate::error::FetchError;

use async_lock::Mutex;
use std::sync::Arc;

/// Outcome of a load operation, surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetched page was applied to the collection.
    Applied,
    /// The fetch failed; the list is in `Failed` phase with prior coins
    /// intact and the message ready to show.
    Failed(String),
    /// Nothing happened: the call was rejected (already loading, cap
    /// reached, trigger already fired) or its response arrived stale.
    Ignored,
}

/// One visible row: a coin paired with its current favorite flag.
///
/// Favorite state is read at call time from the shared store, so indicators
/// stay in sync with favorite mutations made from other screens regardless
/// of the coin collection's own refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinRow {
    pub coin: Coin,
    pub is_favorite: bool,
}

/// Paginated coin list bound to a client and a shared favorites store.
pub struct CoinList {
    client: CoinrankClient,
    favorites: Arc<FavoritesStore>,
    state: Mutex<CoinListState>,
}

impl CoinList {
    pub fn new(client: CoinrankClient, favorites: Arc<FavoritesStore>) -> Self {
        Self::with_state(client, favorites, CoinListState::new())
    }

    pub fn with_page_size(
        client: CoinrankClient,
        favorites: Arc<FavoritesStore>,
        page_size: u32,
    ) -> Self {
        Self::with_state(client, favorites, CoinListState::with_page_size(page_size))
    }

    fn with_state(
        client: CoinrankClient,
        favorites: Arc<FavoritesStore>,
        state: CoinListState,
    ) -> Self {
        Self {
            client,
            favorites,
            state: Mutex::new(state),
        }
    }

    // ── Loads ────────────────────────────────────────────────────────────

    /// Refresh from offset zero, replacing the collection on success.
    ///
    /// Callable from any phase; an in-flight load is superseded and its
    /// response discarded when it eventually arrives.
    pub async fn load_first_page(&self) -> LoadOutcome {
        let request = self.state.lock().await.begin_first_page();
        self.run(request).await
    }

    /// Fetch and append the next page. Ignored while a load is in flight or
    /// once the collection holds the maximum number of coins.
    pub async fn load_next_page(&self) -> LoadOutcome {
        let request = self.state.lock().await.begin_next_page();
        match request {
            Some(request) => self.run(request).await,
            None => LoadOutcome::Ignored,
        }
    }

    /// Report that the unfiltered row at `index` was rendered; fetches the
    /// next page when the proximity trigger fires (once per crossing).
    pub async fn row_rendered(&self, index: usize) -> LoadOutcome {
        let request = self.state.lock().await.row_rendered(index);
        match request {
            Some(request) => self.run(request).await,
            None => LoadOutcome::Ignored,
        }
    }

    async fn run(&self, request: LoadRequest) -> LoadOutcome {
        // Fetch without holding the state lock; other readers stay live.
        let fetched = self.client.coins().page(request.offset, request.limit).await;

        let mut state = self.state.lock().await;
        match fetched {
            Ok(page) => {
                if state.complete(request, Ok(page.coins)) {
                    LoadOutcome::Applied
                } else {
                    LoadOutcome::Ignored
                }
            }
            Err(api) => {
                let error = FetchError::from(api);
                let message = error.to_string();
                if state.complete(request, Err(error)) {
                    LoadOutcome::Failed(message)
                } else {
                    LoadOutcome::Ignored
                }
            }
        }
    }

    // ── Sort & filter ────────────────────────────────────────────────────

    pub async fn set_sort(&self, key: SortKey) {
        self.state.lock().await.set_sort(key);
    }

    pub async fn set_filter_text(&self, text: &str) {
        self.state.lock().await.set_filter_text(text);
    }

    // ── Read model ───────────────────────────────────────────────────────

    pub async fn phase(&self) -> LoadPhase {
        self.state.lock().await.phase()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.lock().await.last_error().map(String::from)
    }

    /// The visible sequence: current filter over current sort order.
    pub async fn visible_coins(&self) -> Vec<Coin> {
        self.state
            .lock()
            .await
            .visible()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Visible coins paired with live favorite flags.
    pub async fn visible_rows(&self) -> Vec<CoinRow> {
        self.state
            .lock()
            .await
            .visible()
            .into_iter()
            .map(|coin| CoinRow {
                is_favorite: self.favorites.is_favorite(&coin.id),
                coin: coin.clone(),
            })
            .collect()
    }

    /// The shared favorites store, for toggles and subscriptions.
    pub fn favorites(&self) -> &Arc<FavoritesStore> {
        &self.favorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CoinrankClient;
    use crate::shared::CoinId;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// Minimal HTTP server answering every request with the same JSON body.
    async fn serve(body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let mut buf = [0u8; 4096];
                    let _ = socket.read(&mut buf).await;
                    let resp = format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(resp.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        format!("http://{}", addr)
    }

    fn list_over(base_url: &str, favorites: Arc<FavoritesStore>) -> CoinList {
        let client = CoinrankClient::builder()
            .base_url(base_url)
            .api_key("test-key")
            .build()
            .unwrap();
        CoinList::new(client, favorites)
    }

    #[tokio::test]
    async fn test_load_first_page_applies_and_flags_favorites() {
        let base = serve(
            r#"{"status":"success","data":{"coins":[
                {"uuid":"btc","name":"Bitcoin","symbol":"BTC","rank":1},
                {"uuid":"eth","name":"Ethereum","symbol":"ETH","rank":2}
            ]}}"#,
        )
        .await;

        let favorites = Arc::new(FavoritesStore::in_memory());
        favorites.add(&CoinId::from("eth")).unwrap();

        let list = list_over(&base, favorites);
        assert_eq!(list.load_first_page().await, LoadOutcome::Applied);
        assert_eq!(list.phase().await, LoadPhase::Loaded);

        let rows = list.visible_rows().await;
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].is_favorite);
        assert!(rows[1].is_favorite);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_surfaced_and_recoverable() {
        // Nothing is listening here; the connection is refused.
        let favorites = Arc::new(FavoritesStore::in_memory());
        let list = list_over("http://127.0.0.1:1", favorites);

        match list.load_first_page().await {
            LoadOutcome::Failed(message) => assert!(message.contains("fetch failed")),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(list.phase().await, LoadPhase::Failed);
        assert!(list.last_error().await.is_some());
        assert!(list.visible_coins().await.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_body_status_fails_the_load() {
        let base = serve(r#"{"status":"fail"}"#).await;
        let favorites = Arc::new(FavoritesStore::in_memory());
        let list = list_over(&base, favorites);

        assert!(matches!(
            list.load_first_page().await,
            LoadOutcome::Failed(_)
        ));
        assert_eq!(list.phase().await, LoadPhase::Failed);
    }
}
