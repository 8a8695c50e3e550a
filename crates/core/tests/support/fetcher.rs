//! URL-keyed fake of the `Fetcher` port.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pitchsync_core::Fetcher;
use pitchsync_domain::{PitchSyncError, Result as DomainResult};
use serde_json::Value;

#[derive(Clone)]
enum Canned {
    Document(Value),
    Forbidden,
}

#[derive(Default)]
struct Inner {
    routes: HashMap<String, Canned>,
    calls: HashMap<String, usize>,
}

/// Serves canned JSON documents by URL and counts every request.
///
/// Unknown URLs fail with `NotFound`; forbidden URLs fail with
/// `PermissionDenied`, like a 403 from the real source.
#[derive(Default, Clone)]
pub struct FakeFetcher {
    inner: Arc<Mutex<Inner>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(&self, url: impl Into<String>, document: Value) -> &Self {
        self.inner.lock().unwrap().routes.insert(url.into(), Canned::Document(document));
        self
    }

    pub fn forbid(&self, url: impl Into<String>) -> &Self {
        self.inner.lock().unwrap().routes.insert(url.into(), Canned::Forbidden);
        self
    }

    pub fn calls(&self, url: &str) -> usize {
        self.inner.lock().unwrap().calls.get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.inner.lock().unwrap().calls.values().sum()
    }

    pub fn reset_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> DomainResult<Value> {
        let mut inner = self.inner.lock().unwrap();
        *inner.calls.entry(url.to_string()).or_default() += 1;
        match inner.routes.get(url).cloned() {
            Some(Canned::Document(document)) => Ok(document),
            Some(Canned::Forbidden) => {
                Err(PitchSyncError::PermissionDenied(format!("403 Forbidden: {url}")))
            }
            None => Err(PitchSyncError::NotFound(format!("no canned response for {url}"))),
        }
    }
}
