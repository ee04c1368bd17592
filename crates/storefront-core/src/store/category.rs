use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError};
use crate::models::Category;

/// Anything that can produce the current category list.
pub trait CategorySource: Send + Sync {
    fn fetch_categories(&self) -> impl Future<Output = Result<Vec<Category>, ApiError>> + Send;
}

#[derive(Debug)]
struct Snapshot {
    categories: Arc<[Category]>,
    updated_at: Option<DateTime<Utc>>,
}

/// Holds the most recently fetched category list.
///
/// Readers get an `Arc<[Category]>` snapshot, so a list is never observed
/// half-replaced. Concurrent `fetch_categories` calls are not sequenced:
/// whichever completes last determines the stored list.
#[derive(Debug)]
pub struct CategoryStore<S = ApiClient> {
    source: S,
    state: RwLock<Snapshot>,
}

impl<S: CategorySource> CategoryStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RwLock::new(Snapshot {
                categories: Arc::from(Vec::new()),
                updated_at: None,
            }),
        }
    }

    /// Fetch categories from the source and replace the stored list.
    ///
    /// On error the stored list is left exactly as it was and the error is
    /// returned to the caller. No retry is attempted.
    pub async fn fetch_categories(&self) -> Result<(), ApiError> {
        let fetched = match self.source.fetch_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!(error = %e, "Category fetch failed, keeping previous list");
                return Err(e);
            }
        };

        let count = fetched.len();
        // Lock is taken only after the await so it is never held across I/O
        let mut state = self.state.write().await;
        state.categories = Arc::from(fetched);
        state.updated_at = Some(Utc::now());
        debug!(count, "Replaced category list");
        Ok(())
    }

    // ===== Getters =====

    /// Current category list, in backend order
    pub async fn categories(&self) -> Arc<[Category]> {
        Arc::clone(&self.state.read().await.categories)
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.categories.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.categories.is_empty()
    }

    /// When the list was last replaced; `None` until a fetch succeeds
    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.updated_at
    }

    /// First category with the given id
    pub async fn category_by_id(&self, id: i64) -> Option<Category> {
        self.state
            .read()
            .await
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// First category whose name matches, ignoring ASCII case
    pub async fn category_by_name(&self, name: &str) -> Option<Category> {
        self.state
            .read()
            .await
            .categories
            .iter()
            .find(|c| c.matches_name(name))
            .cloned()
    }
}
