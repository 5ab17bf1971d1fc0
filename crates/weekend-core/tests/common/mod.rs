use tempfile::TempDir;
use weekend_core::models::{Activity, Category, CostTier, Mood, TimeOfDay};
use weekend_core::{StoreBuilder, WeekendStore};

/// Helper function to create a store persisted into a temp directory
pub fn create_test_store() -> (TempDir, WeekendStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blob_path = temp_dir.path().join("weekend.json");
    let store = StoreBuilder::new()
        .with_storage_path(Some(&blob_path))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Helper function to build a minimal test activity
pub fn test_activity(id: &str, cost: CostTier, duration: f64) -> Activity {
    Activity {
        id: id.to_string(),
        name: format!("Activity {id}"),
        category: Category::Outdoor,
        duration,
        description: "A test activity".to_string(),
        image: "/images/test.jpg".to_string(),
        mood: Mood::Relaxed,
        cost,
        time_of_day: TimeOfDay::Any,
        location: None,
    }
}
