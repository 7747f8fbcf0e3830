use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{ItemRow, PopularityRow, RecommendationRow, SimilarityRow};
use crate::services::CatalogStore;

mod s3;

pub use s3::S3BlobStore;

/// Read access to the blob store holding the precomputed catalog datasets
///
/// The transport behind it is out of core scope; this seam keeps the loader
/// testable and the backend swappable.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Fetches one object's full contents
    async fn fetch(&self, key: &str) -> AppResult<Vec<u8>>;
}

/// Loads all four catalog datasets and builds the in-memory store
///
/// All-or-nothing: failure to fetch or parse any dataset fails the whole
/// load, and the caller treats that as fatal to startup.
pub async fn load_catalog(store: &dyn BlobStore, config: &Config) -> AppResult<CatalogStore> {
    let recommendations: Vec<RecommendationRow> =
        load_dataset(store, &config.key_recommendations).await?;
    let top_popular: Vec<PopularityRow> = load_dataset(store, &config.key_top_popular).await?;
    let similar: Vec<SimilarityRow> = load_dataset(store, &config.key_similar).await?;
    let items: Vec<ItemRow> = load_dataset(store, &config.key_items).await?;

    Ok(CatalogStore::new(recommendations, top_popular, similar, items))
}

async fn load_dataset<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> AppResult<Vec<T>> {
    let bytes = store.fetch(key).await?;
    let rows: Vec<T> = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Dataset(format!("{}: {}", key, e)))?;
    tracing::info!(key, rows = rows.len(), bytes = bytes.len(), "dataset loaded");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            s3_bucket_name: "catalog".to_string(),
            s3_endpoint_url: None,
            key_recommendations: "recommendations.json".to_string(),
            key_top_popular: "top_popular.json".to_string(),
            key_similar: "similar.json".to_string(),
            key_items: "items.json".to_string(),
            max_events_per_user: 20,
        }
    }

    fn expect_json(store: &mut MockBlobStore, key: &'static str, body: &'static str) {
        store
            .expect_fetch()
            .with(eq(key))
            .returning(move |_| Ok(body.as_bytes().to_vec()));
    }

    #[tokio::test]
    async fn test_load_catalog_builds_all_datasets() {
        let mut store = MockBlobStore::new();
        expect_json(
            &mut store,
            "recommendations.json",
            r#"[{"user_id": 1, "track_id": 10, "rank": 1}]"#,
        );
        expect_json(
            &mut store,
            "top_popular.json",
            r#"[{"track_id": 10, "popularity_rank": 1}, {"track_id": 20, "popularity_rank": 2}]"#,
        );
        expect_json(&mut store, "similar.json", r#"[{"track_id": 30}]"#);
        expect_json(
            &mut store,
            "items.json",
            r#"[{"track_id": 10, "track_name": "T", "artist_name": "A", "genre_name": "g", "album_name": "al"}]"#,
        );

        let catalog = load_catalog(&store, &test_config()).await.unwrap();

        assert_eq!(catalog.offline_for_user(1, 10), Some(vec![10]));
        assert_eq!(catalog.top_popular(10), vec![10, 20]);
        assert_eq!(catalog.candidate_pool(), &[30]);
        assert_eq!(catalog.item(10).unwrap().track_name, "T");
    }

    #[tokio::test]
    async fn test_missing_dataset_fails_the_load() {
        let mut store = MockBlobStore::new();
        expect_json(
            &mut store,
            "recommendations.json",
            r#"[{"user_id": 1, "track_id": 10, "rank": 1}]"#,
        );
        store
            .expect_fetch()
            .with(eq("top_popular.json"))
            .returning(|_| Err(AppError::Storage("no such key".to_string())));

        let result = load_catalog(&store, &test_config()).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_malformed_dataset_fails_the_load() {
        let mut store = MockBlobStore::new();
        expect_json(&mut store, "recommendations.json", "not json");

        let result = load_catalog(&store, &test_config()).await;
        assert!(matches!(result, Err(AppError::Dataset(_))));
    }
}
