//! Session state for the dashboard: the selected location, the most
//! recent forecast payload, the saved-location registry, and the
//! search box state.
//!
//! One session exists per running client. The UI layer owns it
//! explicitly and drives it from a single logical thread; all mutation
//! goes through `&mut self`, so completions can never run concurrently.

use crate::{
    error::FetchError,
    locations::default_locations,
    model::{ForecastPayload, LocationInfo, SavedLocation},
    provider::ForecastProvider,
    view::{self, DailySlot, HourlySlot},
};

/// Fallback query when nothing has been selected yet.
pub const DEFAULT_LOCATION: &str = "Denver";

/// Search results are truncated to this many candidates.
pub const SEARCH_RESULT_LIMIT: usize = 5;

#[derive(Debug)]
pub struct WeatherSession {
    provider: Box<dyn ForecastProvider>,
    selected_location: String,
    payload: Option<ForecastPayload>,
    loading: bool,
    last_error: Option<String>,
    saved_locations: Vec<SavedLocation>,
    search_results: Vec<SavedLocation>,
    searching: bool,
    /// Bumped at every fetch start; completions carrying an older number
    /// are discarded so a slow response cannot clobber a newer one.
    fetch_seq: u64,
}

impl WeatherSession {
    pub fn new(provider: Box<dyn ForecastProvider>) -> Self {
        Self {
            provider,
            selected_location: DEFAULT_LOCATION.to_string(),
            payload: None,
            loading: false,
            last_error: None,
            saved_locations: default_locations(),
            search_results: Vec::new(),
            searching: false,
            fetch_seq: 0,
        }
    }

    /// Switch to a new location and fetch its forecast.
    ///
    /// The selection and the payload clear happen before the request is
    /// issued, so the old payload is never visible under the new name.
    pub async fn select_location(&mut self, name: &str) {
        self.set_selected_location(name);
        self.fetch_weather(None).await;
    }

    fn set_selected_location(&mut self, name: &str) {
        self.selected_location = name.to_string();
        self.payload = None;
    }

    /// Fetch a forecast for `query`, or for the selected location when
    /// `query` is `None`. Errors land in [`Self::last_error`]; the
    /// previous payload is kept on failure.
    pub async fn fetch_weather(&mut self, query: Option<&str>) {
        let query = match query {
            Some(q) => q.to_string(),
            None if self.selected_location.is_empty() => DEFAULT_LOCATION.to_string(),
            None => self.selected_location.clone(),
        };

        let seq = self.begin_fetch();
        let result = self.provider.forecast(&query).await;
        self.finish_fetch(seq, result);
    }

    fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.last_error = None;
        self.fetch_seq += 1;
        self.fetch_seq
    }

    fn finish_fetch(&mut self, seq: u64, result: Result<ForecastPayload, FetchError>) {
        if seq != self.fetch_seq {
            // A newer fetch owns the state now; it will clear `loading`.
            tracing::debug!(seq, current = self.fetch_seq, "discarding stale fetch completion");
            return;
        }

        match result {
            Ok(payload) => {
                self.payload = Some(payload);
                self.last_error = None;
            }
            Err(err) => {
                tracing::error!("error fetching weather data: {err}");
                self.last_error = Some(err.to_string());
            }
        }

        self.loading = false;
    }

    /// Look up location candidates for the search box.
    ///
    /// Blank queries clear the candidates without touching the network.
    /// Failures are logged and swallowed; the search box just goes empty.
    pub async fn search_locations(&mut self, query: &str) {
        if query.trim().is_empty() {
            self.search_results.clear();
            return;
        }

        self.searching = true;
        match self.provider.search(query).await {
            Ok(mut results) => {
                results.truncate(SEARCH_RESULT_LIMIT);
                self.search_results = results;
            }
            Err(err) => {
                tracing::warn!("location search failed: {err}");
                self.search_results.clear();
            }
        }
        self.searching = false;
    }

    pub fn clear_search_results(&mut self) {
        self.search_results.clear();
    }

    /// Save a location and make it the active selection. No-op when a
    /// location with the same name (case-insensitive) is already saved.
    pub async fn add_saved_location(&mut self, location: SavedLocation) {
        let duplicate =
            self.saved_locations.iter().any(|l| l.name.eq_ignore_ascii_case(&location.name));
        if duplicate {
            return;
        }

        let name = location.name.clone();
        self.saved_locations.insert(0, location);
        self.select_location(&name).await;
    }

    /// Remove a saved location by id. The current selection is kept even
    /// when it pointed at the removed entry.
    pub fn remove_saved_location(&mut self, id: i64) {
        self.saved_locations.retain(|l| l.id != id);
    }

    // --- state accessors ---

    pub fn selected_location(&self) -> &str {
        &self.selected_location
    }

    pub fn payload(&self) -> Option<&ForecastPayload> {
        self.payload.as_ref()
    }

    pub fn location_info(&self) -> Option<&LocationInfo> {
        self.payload.as_ref().map(|p| &p.location)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn saved_locations(&self) -> &[SavedLocation] {
        &self.saved_locations
    }

    pub fn search_results(&self) -> &[SavedLocation] {
        &self.search_results
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    // --- derived views, recomputed on every access ---

    /// Rounded current temperature; zero when no reading is available,
    /// so the display always has an integer to show.
    pub fn current_temperature(&self) -> i32 {
        self.payload
            .as_ref()
            .and_then(|p| p.current.temp_c)
            .map(view::round)
            .unwrap_or(0)
    }

    pub fn current_condition(&self) -> Option<&str> {
        self.payload.as_ref().map(|p| p.current.condition.text.as_str())
    }

    pub fn current_condition_code(&self) -> Option<i32> {
        self.payload.as_ref().map(|p| p.current.condition.code)
    }

    /// Up to five upcoming hours; see [`view::hourly_forecast`].
    pub fn hourly_forecast(&self) -> Vec<HourlySlot> {
        self.payload.as_ref().map(view::hourly_forecast).unwrap_or_default()
    }

    /// Up to three days; see [`view::daily_forecast`].
    pub fn daily_forecast(&self) -> Vec<DailySlot> {
        self.payload.as_ref().map(view::daily_forecast).unwrap_or_default()
    }
}
