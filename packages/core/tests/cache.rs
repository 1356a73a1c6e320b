//! Result cache isolation, capacity and eviction order

use std::sync::Arc;

use serde_json::{Value, json};
use treepath_core::{
    QueryConfig, QueryEngine, QueryOutput,
    cache::{CacheKey, DocumentIds, QueryCache, SharedQueryCache},
};

#[cfg(test)]
mod cache_isolation_tests {
    use super::*;

    #[test]
    fn test_same_path_on_distinct_documents_is_isolated() {
        let engine: QueryEngine<Value> = QueryEngine::new();
        let first = Arc::new(json!({"name": "first"}));
        let second = Arc::new(json!({"name": "second"}));

        for _ in 0..3 {
            assert_eq!(
                engine.query(&first, "$.name").expect("Failed to query"),
                QueryOutput::Single(json!("first"))
            );
            assert_eq!(
                engine.query(&second, "$.name").expect("Failed to query"),
                QueryOutput::Single(json!("second"))
            );
        }
        assert_eq!(engine.cache_stats().size, 2);
    }

    #[test]
    fn test_equal_but_distinct_documents_do_not_share_entries() {
        let engine: QueryEngine<Value> = QueryEngine::new();
        let first = Arc::new(json!([1, 2]));
        let second = Arc::new(json!([1, 2]));
        let _ = engine.query(&first, "$[0]").expect("Failed to query");
        let _ = engine.query(&second, "$[0]").expect("Failed to query");

        let stats = engine.cache_stats();
        assert_eq!(stats.size, 2);
        assert_eq!(stats.total_hits, 0);
    }

    #[test]
    fn test_cache_does_not_keep_documents_alive() {
        let engine: QueryEngine<Value> = QueryEngine::new();
        let document = Arc::new(json!({"a": 1}));
        let weak = Arc::downgrade(&document);
        let _ = engine.query(&document, "$.a").expect("Failed to query");
        drop(document);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_engine_never_exceeds_capacity() {
        let config = QueryConfig {
            cache_capacity: 3,
            ..QueryConfig::default()
        };
        let engine: QueryEngine<Value> =
            QueryEngine::with_config(config).expect("Failed to build engine");
        let document = Arc::new(json!({"a": 1, "b": 2, "c": 3, "d": 4, "e": 5}));

        for key in ["a", "b", "c", "d", "e", "a", "c"] {
            let _ = engine.query(&document, key).expect("Failed to query");
            assert!(engine.cache_stats().size <= 3);
        }
        assert_eq!(engine.cache_stats().evictions, 4);
    }

    #[test]
    fn test_eviction_follows_recency_across_touches() {
        let mut ids = DocumentIds::new();
        let document = Arc::new(json!(null));
        let id = ids.id_of(&document);
        let key = |path: &str| CacheKey::new(id, path);

        let mut cache = QueryCache::new(2);
        cache.set(key("$.a"), 1);
        cache.set(key("$.b"), 2);
        assert_eq!(cache.get(&key("$.a")), Some(1));
        cache.set(key("$.c"), 3);
        assert!(cache.contains(&key("$.a")));
        assert!(!cache.contains(&key("$.b")));

        cache.set(key("$.a"), 10);
        cache.set(key("$.d"), 4);
        assert!(cache.contains(&key("$.a")));
        assert!(!cache.contains(&key("$.c")));
    }

    #[test]
    fn test_shared_cache_across_threads() {
        let cache: Arc<SharedQueryCache<Value>> = Arc::new(SharedQueryCache::new(16));
        let document = Arc::new(json!({"n": 1}));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = Arc::clone(&cache);
                let document = Arc::clone(&document);
                std::thread::spawn(move || {
                    let key = cache.key_for(&document, &format!("$.k{i}"));
                    cache.set(key.clone(), QueryOutput::Single(json!(i)));
                    cache.get(&key)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let cached = handle.join().expect("Failed to join thread");
            assert_eq!(cached, Some(QueryOutput::Single(json!(i))));
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_clear_and_stats() {
        let engine: QueryEngine<Value> = QueryEngine::new();
        let document = Arc::new(json!({"a": [1, 2, 3]}));
        for _ in 0..4 {
            let _ = engine.query(&document, "$.a[*]").expect("Failed to query");
        }
        let stats = engine.cache_stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.total_hits, 3);
        assert!((stats.average_hits - 3.0).abs() < f64::EPSILON);
        assert!((stats.hit_rate - 0.75).abs() < f64::EPSILON);

        engine.clear_cache();
        assert_eq!(engine.cache_stats().size, 0);
    }
}
