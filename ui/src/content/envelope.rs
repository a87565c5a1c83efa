use jiff::Timestamp;

/// The public state contract every content hook exposes.
///
/// `data` survives refreshes: once a fetch has succeeded (or a cached
/// payload was adopted), later failures report through `error` without
/// clearing it, so already-rendered content never degrades to an error
/// screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEnvelope<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// When the current `data` was obtained, whether from the network or
    /// from the cache's write timestamp.
    pub last_fetched: Option<Timestamp>,
}

impl<T> Default for ContentEnvelope<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            last_fetched: None,
        }
    }
}

impl<T> ContentEnvelope<T> {
    /// True only for the very first load, before any data or error exists.
    pub fn is_initial_loading(&self) -> bool {
        self.loading && self.data.is_none() && self.error.is_none()
    }

    /// Type-erased view for composite aggregation.
    pub fn status(&self) -> EnvelopeStatus {
        EnvelopeStatus {
            loading: self.loading,
            error: self.error.clone(),
            last_fetched: self.last_fetched,
        }
    }
}

/// `ContentEnvelope` minus the payload, so envelopes of different content
/// kinds can be aggregated into one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeStatus {
    pub loading: bool,
    pub error: Option<String>,
    pub last_fetched: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_loading_requires_empty_envelope() {
        let mut env = ContentEnvelope::<String>::default();
        env.loading = true;
        assert!(env.is_initial_loading());

        env.data = Some("hero".into());
        assert!(!env.is_initial_loading());

        env.data = None;
        env.error = Some("failed to load homepage: network error".into());
        assert!(!env.is_initial_loading());
    }
}
