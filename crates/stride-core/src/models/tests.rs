//! Tests for the models module.

use jiff::Timestamp;

use super::*;
use crate::error::StrideError;

#[test]
fn test_goal_from_str() {
    assert_eq!("strength".parse::<Goal>().unwrap(), Goal::Strength);
    assert_eq!("Skill".parse::<Goal>().unwrap(), Goal::Skill);
    assert_eq!(" MOBILITY ".parse::<Goal>().unwrap(), Goal::Mobility);
    assert!("cardio".parse::<Goal>().is_err());
}

#[test]
fn test_level_ordering_and_parse() {
    assert!(Level::Beginner < Level::Intermediate);
    assert!(Level::Advanced < Level::Expert);
    assert_eq!("expert".parse::<Level>().unwrap(), Level::Expert);
    assert_eq!("Intermediate".parse::<Level>().unwrap(), Level::Intermediate);
    assert!("pro".parse::<Level>().is_err());
}

#[test]
fn test_session_duration_parse() {
    assert_eq!(
        "45 min".parse::<SessionDuration>().unwrap(),
        SessionDuration::Minutes45
    );
    assert_eq!(
        "20min".parse::<SessionDuration>().unwrap(),
        SessionDuration::Minutes20
    );
    assert_eq!(
        "60".parse::<SessionDuration>().unwrap(),
        SessionDuration::Minutes60
    );
    assert!("25 min".parse::<SessionDuration>().is_err());
    assert!("long".parse::<SessionDuration>().is_err());
    assert_eq!(SessionDuration::default(), SessionDuration::Minutes30);
}

#[test]
fn test_session_duration_serde_labels() {
    let json = serde_json::to_string(&SessionDuration::Minutes45).unwrap();
    assert_eq!(json, "\"45 min\"");
    let goal: Goal = serde_json::from_str("\"endurance\"").unwrap();
    assert_eq!(goal, Goal::Endurance);
}

#[test]
fn test_weekday_parse() {
    assert_eq!("Mon".parse::<Weekday>().unwrap(), Weekday::Mon);
    assert_eq!("tuesday".parse::<Weekday>().unwrap(), Weekday::Tue);
    assert_eq!("SUN".parse::<Weekday>().unwrap(), Weekday::Sun);
    assert!("monkey".parse::<Weekday>().is_err());
    assert!("xyz".parse::<Weekday>().is_err());
    assert!("".parse::<Weekday>().is_err());
}

#[test]
fn test_weekday_order_is_week_order() {
    let mut days = vec![Weekday::Sun, Weekday::Wed, Weekday::Mon];
    days.sort();
    assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Sun]);
    assert_eq!(Weekday::ALL.first(), Some(&Weekday::Mon));
}

#[test]
fn test_option_display() {
    assert_eq!(Goal::Strength.to_string(), "Strength");
    assert_eq!(Level::Advanced.to_string(), "Advanced");
    assert_eq!(SessionDuration::Minutes20.to_string(), "20 min");
    assert_eq!(Weekday::Thu.to_string(), "Thu");
}

#[test]
fn test_snapshot_requires_goal_and_level() {
    let mut draft = DraftPlan::default();
    assert!(matches!(
        draft.snapshot(),
        Err(StrideError::InvalidInput { ref field, .. }) if field == "goal"
    ));

    draft.goal = Some(Goal::Skill);
    assert!(matches!(
        draft.snapshot(),
        Err(StrideError::InvalidInput { ref field, .. }) if field == "level"
    ));
}

#[test]
fn test_snapshot_copies_draft() {
    let mut draft = DraftPlan {
        name: "Weekday grind".to_string(),
        goal: Some(Goal::Endurance),
        level: Some(Level::Intermediate),
        ..Default::default()
    };
    draft.day_schedule = vec![
        PlanDay {
            day: Weekday::Mon,
            workout_ids: vec!["a".to_string(), "b".to_string()],
        },
        PlanDay::empty(Weekday::Wed),
    ];

    let snapshot = draft.snapshot().unwrap();
    assert_eq!(snapshot.name, "Weekday grind");
    assert_eq!(
        snapshot.training_days,
        vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
    );
    assert_eq!(snapshot.workout_count(), 2);
    assert_eq!(snapshot.day_schedule, draft.day_schedule);
}

#[test]
fn test_plan_day_helpers() {
    let mut day = PlanDay::empty(Weekday::Fri);
    assert!(!day.contains("core-basics"));
    day.workout_ids.push("core-basics".to_string());
    assert!(day.contains("core-basics"));
}

#[test]
fn test_summary_from_saved_plan() {
    let saved = SavedPlan {
        id: 7,
        plan: PlanSnapshot {
            name: String::new(),
            goal: Goal::Strength,
            level: Level::Beginner,
            training_days: vec![Weekday::Tue, Weekday::Thu],
            session_duration: SessionDuration::Minutes20,
            day_schedule: vec![
                PlanDay {
                    day: Weekday::Tue,
                    workout_ids: vec!["push-foundations".to_string()],
                },
                PlanDay::empty(Weekday::Thu),
            ],
        },
        created_at: Timestamp::from_second(1_700_000_000).unwrap(),
    };

    let summary = PlanSummary::from(&saved);
    assert_eq!(summary.id, 7);
    assert_eq!(summary.days_per_week, 2);
    assert_eq!(summary.total_workouts, 1);

    let text = summary.to_string();
    assert!(text.starts_with("## Untitled plan (ID: 7)"));
    assert!(text.contains("2x/week, 1 workout(s)"));
}

#[test]
fn test_workout_filter_matches() {
    let workout = Workout {
        id: "front-lever-lab".to_string(),
        title: "Front Lever Lab".to_string(),
        level: Level::Expert,
        duration: "45 min".to_string(),
        exercise_count: 6,
        image_url: String::new(),
        muscles: vec!["Back".to_string(), "core".to_string()],
    };

    assert!(WorkoutFilter::default().matches(&workout));
    assert!(WorkoutFilter::for_level(Some(Level::Expert)).matches(&workout));
    assert!(!WorkoutFilter::for_level(Some(Level::Beginner)).matches(&workout));

    let filter = WorkoutFilter {
        muscle: Some("back".to_string()),
        search: Some("LEVER".to_string()),
        ..Default::default()
    };
    assert!(filter.matches(&workout));

    let filter = WorkoutFilter {
        muscle: Some("legs".to_string()),
        ..Default::default()
    };
    assert!(!filter.matches(&workout));
}
