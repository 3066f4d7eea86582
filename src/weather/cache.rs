use super::source::{fetch_once, WeatherSource};
use super::types::WeatherState;
use crate::location::Location;

/// Weather carried between watch-mode iterations.
#[derive(Debug, Clone)]
pub struct WeatherCache {
    state: WeatherState,
    stale: bool,
}

impl WeatherCache {
    pub fn load(source: &dyn WeatherSource, location: &Location) -> Self {
        Self {
            state: fetch_once(source, location),
            stale: false,
        }
    }

    pub fn state(&self) -> &WeatherState {
        &self.state
    }

    /// True when the held snapshot survived a failed refresh.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Replaces the state on success. On failure the last snapshot is kept
    /// and marked stale.
    pub fn refresh(&mut self, source: &dyn WeatherSource, location: &Location) {
        match source.fetch(location) {
            Ok(state) => {
                self.state = state;
                self.stale = false;
            }
            Err(e) => {
                log::warn!("Weather refresh failed for {}: {}", location.name(), e);
                if matches!(self.state, WeatherState::Present(_)) {
                    self.stale = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::error::WeatherError;
    use crate::weather::types::fixtures::snapshot;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays a scripted sequence of fetch results.
    struct Scripted(RefCell<VecDeque<Result<WeatherState, WeatherError>>>);

    impl Scripted {
        fn new(results: Vec<Result<WeatherState, WeatherError>>) -> Self {
            Self(RefCell::new(results.into()))
        }
    }

    impl WeatherSource for Scripted {
        fn fetch(&self, _location: &Location) -> Result<WeatherState, WeatherError> {
            self.0
                .borrow_mut()
                .pop_front()
                .unwrap_or(Ok(WeatherState::Unconfigured))
        }
    }

    fn failure() -> Result<WeatherState, WeatherError> {
        Err(WeatherError::InvalidSnapshot("boom".into()))
    }

    #[test]
    fn failed_refresh_keeps_last_snapshot_as_stale() {
        let loc = Location::brussels();
        let source = Scripted::new(vec![
            Ok(WeatherState::Present(snapshot(20.0, true))),
            failure(),
            Ok(WeatherState::Present(snapshot(60.0, true))),
        ]);

        let mut cache = WeatherCache::load(&source, &loc);
        assert!(!cache.is_stale());

        cache.refresh(&source, &loc);
        assert!(cache.is_stale());
        assert_eq!(cache.state().snapshot().unwrap().current_cloud_cover, 20.0);

        cache.refresh(&source, &loc);
        assert!(!cache.is_stale());
        assert_eq!(cache.state().snapshot().unwrap().current_cloud_cover, 60.0);
    }

    #[test]
    fn failure_without_snapshot_stays_unconfigured() {
        let loc = Location::brussels();
        let source = Scripted::new(vec![failure(), failure()]);

        let mut cache = WeatherCache::load(&source, &loc);
        assert_eq!(cache.state(), &WeatherState::Unconfigured);
        cache.refresh(&source, &loc);
        assert_eq!(cache.state(), &WeatherState::Unconfigured);
        assert!(!cache.is_stale());
    }
}
