#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use jiff::Timestamp;

    use crate::models::{
        Activity, ActivityFilter, Category, CostTier, Day, Location, Mood, Placement,
        ScheduledActivity, ThemeKind, TimeOfDay, WeekendSummary,
    };

    fn create_test_activity(id: &str, cost: CostTier, duration: f64) -> Activity {
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

    #[test]
    fn test_cost_tier_estimates() {
        assert_eq!(CostTier::Free.estimate(), 0);
        assert_eq!(CostTier::Low.estimate(), 25);
        assert_eq!(CostTier::Medium.estimate(), 75);
        assert_eq!(CostTier::High.estimate(), 150);
    }

    #[test]
    fn test_enum_round_trips() {
        assert_eq!(Category::from_str("food").unwrap(), Category::Food);
        assert_eq!(Category::from_str("CULTURE").unwrap(), Category::Culture);
        assert_eq!(Category::Wellness.as_str(), "wellness");
        assert!(Category::from_str("sports").is_err());

        assert_eq!(Mood::from_str("energetic").unwrap(), Mood::Energetic);
        assert_eq!(Mood::Adventurous.as_str(), "adventurous");

        assert_eq!(Day::from_str("saturday").unwrap(), Day::Saturday);
        assert_eq!(Day::Sunday.as_str(), "sunday");
        assert!(Day::from_str("monday").is_err());

        assert_eq!(TimeOfDay::from_str("any").unwrap(), TimeOfDay::Any);
        assert_eq!(TimeOfDay::Morning.as_str(), "morning");
    }

    #[test]
    fn test_theme_kind_defaults_to_lazy() {
        assert_eq!(ThemeKind::default(), ThemeKind::Lazy);
        assert_eq!(ThemeKind::from_str("romantic").unwrap(), ThemeKind::Romantic);
        assert!(ThemeKind::from_str("chaotic").is_err());
    }

    #[test]
    fn test_placement_defaults_to_unplaced() {
        let entry = ScheduledActivity::new(create_test_activity("a1", CostTier::Free, 1.0));
        assert_eq!(entry.placement, Placement::Unplaced);
        assert!(!entry.placement.is_placed());
        assert_eq!(entry.placement.day(), None);
        assert_eq!(entry.placement.time(), None);
    }

    #[test]
    fn test_placement_accessors_when_placed() {
        let time = Timestamp::from_second(1_756_000_000).unwrap();
        let placement = Placement::Placed {
            day: Day::Sunday,
            time,
        };
        assert!(placement.is_placed());
        assert_eq!(placement.day(), Some(Day::Sunday));
        assert_eq!(placement.time(), Some(time));
    }

    #[test]
    fn test_placement_serde_format() {
        let json = serde_json::to_value(Placement::Unplaced).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "unplaced" }));

        let time = Timestamp::from_second(1_756_000_000).unwrap();
        let json = serde_json::to_value(Placement::Placed {
            day: Day::Saturday,
            time,
        })
        .unwrap();
        assert_eq!(json["state"], "placed");
        assert_eq!(json["day"], "saturday");

        let back: Placement = serde_json::from_value(json).unwrap();
        assert_eq!(
            back,
            Placement::Placed {
                day: Day::Saturday,
                time,
            }
        );
    }

    #[test]
    fn test_scheduled_activity_missing_placement_deserializes_unplaced() {
        // Older persisted blobs may lack the placement field entirely.
        let json = serde_json::json!({
            "activity": {
                "id": "a1",
                "name": "Test",
                "category": "outdoor",
                "duration": 2.0,
                "description": "d",
                "image": "/i.jpg",
                "mood": "relaxed",
                "cost": "free",
                "time_of_day": "any"
            }
        });
        let entry: ScheduledActivity = serde_json::from_value(json).unwrap();
        assert_eq!(entry.placement, Placement::Unplaced);
    }

    #[test]
    fn test_summary_from_list() {
        let scheduled = vec![
            ScheduledActivity::new(create_test_activity("a", CostTier::Low, 2.0)),
            ScheduledActivity::new(create_test_activity("b", CostTier::High, 1.5)),
            ScheduledActivity::new(create_test_activity("c", CostTier::Free, 0.5)),
        ];

        let summary = WeekendSummary::from(scheduled.as_slice());
        assert_eq!(summary.activities, 3);
        assert!((summary.total_hours - 4.0).abs() < f64::EPSILON);
        assert_eq!(summary.estimated_cost, 175);
    }

    #[test]
    fn test_summary_from_empty_list() {
        let summary = WeekendSummary::from(&[] as &[ScheduledActivity]);
        assert_eq!(summary.activities, 0);
        assert_eq!(summary.total_hours, 0.0);
        assert_eq!(summary.estimated_cost, 0);
    }

    #[test]
    fn test_filter_empty_matches_everything() {
        let activity = create_test_activity("a1", CostTier::Low, 2.0);
        assert!(ActivityFilter::default().matches(&activity));
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let activity = create_test_activity("a1", CostTier::Low, 2.0);
        assert!(ActivityFilter::search("ACTIVITY a1").matches(&activity));
        assert!(ActivityFilter::search("test activity").matches(&activity));
        assert!(!ActivityFilter::search("kayak").matches(&activity));
    }

    #[test]
    fn test_filter_criteria() {
        let activity = create_test_activity("a1", CostTier::Low, 2.0);

        let filter = ActivityFilter {
            category: Some(Category::Outdoor),
            mood: Some(Mood::Relaxed),
            cost: Some(CostTier::Low),
            ..ActivityFilter::default()
        };
        assert!(filter.matches(&activity));

        let filter = ActivityFilter {
            category: Some(Category::Food),
            ..ActivityFilter::default()
        };
        assert!(!filter.matches(&activity));
    }

    #[test]
    fn test_filter_any_time_of_day_matches_every_slot() {
        let activity = create_test_activity("a1", CostTier::Low, 2.0);
        for slot in [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening] {
            let filter = ActivityFilter {
                time_of_day: Some(slot),
                ..ActivityFilter::default()
            };
            assert!(filter.matches(&activity), "Any should match {slot:?}");
        }
    }

    #[test]
    fn test_location_is_optional_in_serde() {
        let mut activity = create_test_activity("a1", CostTier::Low, 2.0);
        let json = serde_json::to_value(&activity).unwrap();
        assert!(json.get("location").is_none());

        activity.location = Some(Location {
            name: "City Park".to_string(),
            address: "100 Park Ave".to_string(),
            latitude: 47.62,
            longitude: -122.35,
        });
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["location"]["name"], "City Park");
    }
}
