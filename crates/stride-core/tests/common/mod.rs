use stride_core::{
    models::{Goal, Level, Weekday},
    params::{Assignment, CreatePlan},
    PlanLibrary, PlanLibraryBuilder, PlanWizard, StaticCatalog,
};
use tempfile::TempDir;

/// Helper function to create a library backed by a temporary database
pub async fn create_test_library() -> (TempDir, PlanLibrary) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("test.db");
    let library = PlanLibraryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create plan library");
    (temp_dir, library)
}

/// A wizard on the review step holding a beginner strength plan.
pub fn wizard_at_review(catalog: &StaticCatalog, name: &str) -> PlanWizard {
    let params = CreatePlan {
        name: Some(name.to_string()),
        goal: Some(Goal::Strength),
        level: Some(Level::Beginner),
        days: Some(vec![Weekday::Mon, Weekday::Thu]),
        assignments: vec![
            Assignment {
                day: Weekday::Mon,
                workout_id: "push-foundations".to_string(),
            },
            Assignment {
                day: Weekday::Mon,
                workout_id: "core-basics".to_string(),
            },
        ],
        ..Default::default()
    };
    PlanWizard::from_script(&params, catalog).expect("Failed to script wizard")
}
