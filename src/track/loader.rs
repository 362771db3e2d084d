//! Async track loading with latest-request-wins semantics.
//!
//! Each `load` call is tagged with a monotonically increasing generation
//! token; a resolved load commits its result only if its token is still the
//! current one. A superseded or cancelled load never mutates loader state,
//! so results arriving out of order cannot overwrite a newer request.

use crate::track::{parser::parse_track, Track, TrackError};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Shared async HTTP client for track fetching
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("ridemap/0.1.0")
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("failed to build reqwest async client")
});

/// Retrieval seam for track files, separated from parsing so tests can
/// substitute deterministic fetchers.
#[async_trait]
pub trait TrackFetcher: Send + Sync {
    /// Retrieves the text body at `url`. Every call re-fetches; there is no
    /// caching across calls.
    async fn fetch(&self, url: &str) -> Result<String, TrackError>;
}

/// HTTP GET fetcher over the shared client
#[derive(Debug, Default, Clone)]
pub struct HttpFetcher;

#[async_trait]
impl TrackFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, TrackError> {
        let response = HTTP_CLIENT
            .get(url)
            .send()
            .await
            .map_err(|e| TrackError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackError::Fetch {
                url: url.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        response.text().await.map_err(|e| TrackError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Observable state of the route load, driving the loading indicator and the
/// inline error message shown in place of the map.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteState {
    /// No load requested yet, or the loader was cancelled
    Idle,
    /// A load is in flight
    Loading,
    /// The latest load succeeded
    Ready(Track),
    /// The latest load failed; a new explicit `load` is required to retry
    Failed(String),
}

/// Loads GPX tracks by URL with a single in-flight load per loader.
pub struct TrackLoader<F = HttpFetcher> {
    fetcher: F,
    generation: AtomicU64,
    state: Mutex<RouteState>,
}

impl TrackLoader<HttpFetcher> {
    pub fn new() -> Self {
        Self::with_fetcher(HttpFetcher)
    }
}

impl Default for TrackLoader<HttpFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: TrackFetcher> TrackLoader<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher,
            generation: AtomicU64::new(0),
            state: Mutex::new(RouteState::Idle),
        }
    }

    /// Current observable load state
    pub fn state(&self) -> RouteState {
        self.lock_state().clone()
    }

    /// Invalidates any in-flight load so its result is discarded on arrival.
    /// Used on teardown, when no result may mutate state anymore.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.lock_state() = RouteState::Idle;
    }

    /// Fetches and parses the track at `url`.
    ///
    /// A new call supersedes any previous pending one: if another `load`
    /// starts before this one resolves, this one returns
    /// [`TrackError::Superseded`] and leaves the loader state untouched.
    pub async fn load(&self, url: &str) -> Result<Track, TrackError> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.lock_state() = RouteState::Loading;
        log::debug!("loading track {url} (request {token})");

        let outcome = match self.fetcher.fetch(url).await {
            Ok(text) => parse_track(&text),
            Err(err) => Err(err),
        };

        if self.generation.load(Ordering::SeqCst) != token {
            log::debug!("discarding stale track result for {url} (request {token})");
            return Err(TrackError::Superseded);
        }

        match outcome {
            Ok(track) => {
                *self.lock_state() = RouteState::Ready(track.clone());
                Ok(track)
            }
            Err(err) => {
                log::warn!("track load failed for {url}: {err}");
                *self.lock_state() = RouteState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, RouteState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
