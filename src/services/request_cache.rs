//! Keyed request cache for the detail dialog's two fetches.
//!
//! Each cache holds at most one entry: the request belonging to the current
//! selection. A result is only recorded if its key still matches the key
//! installed when the request started; anything else is a stale response
//! from an abandoned selection and is dropped. This replaces manual
//! cancellation: re-selecting simply changes the key.

/// Identifies one cached request: what kind of resource, for which id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestKey {
    kind: ResourceKind,
    id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    CountryInfo,
    Photos,
}

impl RequestKey {
    /// Info fetch key: the selected feature's ISO-3 code.
    pub fn country_info(iso_a3: &str) -> Self {
        RequestKey {
            kind: ResourceKind::CountryInfo,
            id: iso_a3.to_string(),
        }
    }

    /// Photo fetch key: the resolved country name.
    pub fn photos(country_name: &str) -> Self {
        RequestKey {
            kind: ResourceKind::Photos,
            id: country_name.to_string(),
        }
    }
}

/// Lifecycle of one keyed request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Single-slot cache: the request for the current key, or nothing.
#[derive(Debug, Default)]
pub struct RequestCache<T> {
    entry: Option<(RequestKey, FetchStatus<T>)>,
}

impl<T> RequestCache<T> {
    pub fn new() -> Self {
        RequestCache { entry: None }
    }

    /// Starts tracking a request for `key`, discarding any prior entry.
    pub fn begin(&mut self, key: RequestKey) {
        self.entry = Some((key, FetchStatus::Loading));
    }

    /// Records the outcome of the request for `key`.
    ///
    /// Returns `false` (and drops the result) if the key no longer matches
    /// the installed one, i.e. the selection changed while the request was
    /// in flight.
    pub fn complete(&mut self, key: &RequestKey, result: Result<T, String>) -> bool {
        match &self.entry {
            Some((current, _)) if current == key => {
                let status = match result {
                    Ok(value) => FetchStatus::Ready(value),
                    Err(msg) => FetchStatus::Failed(msg),
                };
                self.entry = Some((key.clone(), status));
                true
            }
            _ => false,
        }
    }

    /// Status of the request for `key`, or `None` on key mismatch.
    pub fn status_for(&self, key: &RequestKey) -> Option<&FetchStatus<T>> {
        match &self.entry {
            Some((current, status)) if current == key => Some(status),
            _ => None,
        }
    }

    /// True if this exact key is already being tracked (loading or done).
    pub fn matches(&self, key: &RequestKey) -> bool {
        matches!(&self.entry, Some((current, _)) if current == key)
    }

    /// Clears the slot. Called when the selection goes away.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_and_complete() {
        let mut cache = RequestCache::new();
        let key = RequestKey::country_info("JPN");

        cache.begin(key.clone());
        assert_eq!(cache.status_for(&key), Some(&FetchStatus::Loading));

        assert!(cache.complete(&key, Ok(42)));
        assert_eq!(cache.status_for(&key), Some(&FetchStatus::Ready(42)));
    }

    #[test]
    fn test_failure_is_recorded() {
        let mut cache: RequestCache<u32> = RequestCache::new();
        let key = RequestKey::photos("Japan");

        cache.begin(key.clone());
        assert!(cache.complete(&key, Err("boom".to_string())));
        assert_eq!(
            cache.status_for(&key),
            Some(&FetchStatus::Failed("boom".to_string()))
        );
    }

    #[test]
    fn test_stale_result_is_discarded_after_reselection() {
        let mut cache = RequestCache::new();
        let japan = RequestKey::country_info("JPN");
        let france = RequestKey::country_info("FRA");

        cache.begin(japan.clone());
        cache.begin(france.clone());

        // The Japan fetch resolves late; it must not be recorded.
        assert!(!cache.complete(&japan, Ok("japan data")));
        assert_eq!(cache.status_for(&japan), None);
        assert_eq!(cache.status_for(&france), Some(&FetchStatus::Loading));

        assert!(cache.complete(&france, Ok("france data")));
        assert_eq!(
            cache.status_for(&france),
            Some(&FetchStatus::Ready("france data"))
        );
    }

    #[test]
    fn test_invalidate_clears_everything() {
        let mut cache = RequestCache::new();
        let key = RequestKey::country_info("JPN");

        cache.begin(key.clone());
        cache.complete(&key, Ok(1));
        cache.invalidate();

        assert_eq!(cache.status_for(&key), None);
        assert!(!cache.matches(&key));
        // A late result after invalidation is also dropped
        assert!(!cache.complete(&key, Ok(2)));
    }

    #[test]
    fn test_kinds_do_not_collide() {
        let mut cache = RequestCache::new();
        let info = RequestKey::country_info("Japan");
        let photos = RequestKey::photos("Japan");

        cache.begin(info.clone());
        assert!(!cache.complete(&photos, Ok(1)));
        assert_eq!(cache.status_for(&info), Some(&FetchStatus::Loading));
    }
}
