use chrono::{Duration, TimeZone, Utc};
use proofwork_core::models::{ProjectSubmission, Review, UserReputationCounters};
use proofwork_reputation::*;
use proptest::prelude::*;

fn arb_counters() -> impl Strategy<Value = UserReputationCounters> {
    (
        0i64..10_000,
        0.0f64..500.0,
        0i64..10_000,
        proptest::option::of(0i64..1_000),
        proptest::collection::vec("[a-z]{1,8}", 0..12),
    )
        .prop_map(|(projects, review, bonus, diversity, skills)| {
            let mut counters = UserReputationCounters::new(projects, review, bonus).with_skills(skills);
            counters.skill_diversity = diversity;
            counters
        })
}

// ── Score ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn score_is_deterministic(counters in arb_counters()) {
        prop_assert_eq!(compute_score(&counters), compute_score(&counters.clone()));
    }

    #[test]
    fn score_is_non_negative_for_non_negative_inputs(counters in arb_counters()) {
        prop_assert!(compute_score(&counters) >= 0);
    }

    #[test]
    fn another_completed_project_adds_twenty(counters in arb_counters()) {
        let mut more = counters.clone();
        more.completed_projects += 1;
        prop_assert_eq!(compute_score(&more) - compute_score(&counters), 20);
    }
}

// ── Level ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn tier_is_monotonic(a in -1_000i64..20_000, b in -1_000i64..20_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(resolve_level(lo).tier <= resolve_level(hi).tier);
    }

    #[test]
    fn progress_bounded_and_points_consistent(score in -1_000i64..20_000) {
        let level = resolve_level(score);
        prop_assert!((0.0..=100.0).contains(&level.progress_percent));
        match level.next_tier {
            Some(next) => {
                prop_assert_eq!(level.points_to_next, next.threshold() - score);
                prop_assert!(level.points_to_next > 0);
            }
            None => {
                prop_assert_eq!(level.points_to_next, 0);
                prop_assert_eq!(level.progress_percent, 100.0);
            }
        }
    }

    #[test]
    fn score_reaches_resolved_tier_threshold(score in 0i64..20_000) {
        let tier = resolve_level(score).tier;
        prop_assert!(score >= tier.threshold());
        if let Some(next) = tier.next() {
            prop_assert!(score < next.threshold());
        }
    }
}

// ── Timeline ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn timeline_is_sorted_newest_first(
        sub_offsets in proptest::collection::vec(proptest::option::of(0i64..1_000), 0..20),
        review_offsets in proptest::collection::vec((proptest::option::of(0i64..1_000), 1u8..=5), 0..20),
    ) {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let now = base + Duration::hours(1_000);

        let submissions: Vec<ProjectSubmission> = sub_offsets
            .iter()
            .map(|offset| ProjectSubmission {
                title: "s".to_string(),
                submitted_at: offset.map(|h| base + Duration::hours(h)),
                ..Default::default()
            })
            .collect();
        let reviews: Vec<Review> = review_offsets
            .iter()
            .map(|(offset, rating)| Review {
                created_at: offset.map(|h| base + Duration::hours(h)),
                rating: *rating,
                ..Default::default()
            })
            .collect();

        let entries = build_timeline_at(&submissions, &reviews, now);
        prop_assert_eq!(entries.len(), submissions.len() + reviews.len());
        for pair in entries.windows(2) {
            let a = pair[0].occurred_at.unwrap_or(now);
            let b = pair[1].occurred_at.unwrap_or(now);
            prop_assert!(a >= b);
        }
    }

    #[test]
    fn submission_points_stay_within_bounds(techs in "[A-Za-z, ]{0,80}", with_client in any::<bool>()) {
        let submission = ProjectSubmission {
            technologies: Some(techs),
            client_email: with_client.then(|| "client@example.com".to_string()),
            ..Default::default()
        };
        let points = submission_points(&submission);
        prop_assert!((20..=60).contains(&points));
    }
}
