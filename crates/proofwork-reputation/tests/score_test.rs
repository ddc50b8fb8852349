use proofwork_core::models::UserReputationCounters;
use proofwork_reputation::{compute_breakdown, compute_score, diversity_points, skill_badge_count};

// ── Formula ──────────────────────────────────────────────────────────────

#[test]
fn explicit_counters_sum_all_components() {
    let counters = UserReputationCounters::new(3, 5.0, 10).with_skill_diversity(15);
    let bd = compute_breakdown(&counters);

    assert_eq!(bd.project_points, 60);
    assert_eq!(bd.review_points, 50);
    assert_eq!(bd.complexity_points, 10);
    assert_eq!(bd.diversity_points, 15);
    assert_eq!(bd.total, 135);
    assert_eq!(compute_score(&counters), 135);
}

#[test]
fn breakdown_components_add_up_to_total() {
    let counters = UserReputationCounters::new(7, 3.2, 44).with_skills(["Rust", "Go", "SQL", "K8s"]);
    let bd = compute_breakdown(&counters);
    assert_eq!(
        bd.total,
        bd.project_points + bd.review_points + bd.complexity_points + bd.diversity_points
    );
}

#[test]
fn default_counters_score_zero() {
    assert_eq!(compute_score(&UserReputationCounters::default()), 0);
}

#[test]
fn scoring_is_idempotent() {
    let counters = UserReputationCounters::new(12, 4.4, 30).with_skills(["a", "b"]);
    let first = compute_score(&counters);
    let second = compute_score(&counters);
    assert_eq!(first, second);
    assert_eq!(compute_breakdown(&counters), compute_breakdown(&counters));
}

#[test]
fn negative_counters_pass_through() {
    let counters = UserReputationCounters::new(-2, 0.0, -5);
    assert_eq!(compute_score(&counters), -45);
}

#[test]
fn huge_counters_saturate_instead_of_overflowing() {
    let counters = UserReputationCounters::new(i64::MAX, f64::MAX, i64::MAX);
    assert_eq!(compute_score(&counters), i64::MAX);
}

#[test]
fn non_finite_review_score_reads_as_zero() {
    let counters = UserReputationCounters::new(1, f64::NAN, 0);
    assert_eq!(compute_breakdown(&counters).review_points, 0);
}

// ── Skill diversity ──────────────────────────────────────────────────────

#[test]
fn diversity_derived_from_skills_is_five_per_skill() {
    let counters = UserReputationCounters::default().with_skills(["a", "b", "c"]);
    assert_eq!(diversity_points(&counters), 15);
    assert_eq!(compute_score(&counters), 15);
}

#[test]
fn explicit_diversity_is_not_multiplied() {
    let counters = UserReputationCounters::default()
        .with_skills(["a", "b", "c"])
        .with_skill_diversity(7);
    assert_eq!(diversity_points(&counters), 7);
}

#[test]
fn zero_diversity_falls_back_to_skills() {
    let counters = UserReputationCounters::default()
        .with_skills(["a", "b"])
        .with_skill_diversity(0);
    assert_eq!(diversity_points(&counters), 10);
}

// ── Dashboard badges ─────────────────────────────────────────────────────

#[test]
fn badge_count_falls_back_to_unweighted_skill_count() {
    let mut counters = UserReputationCounters::default().with_skills(["a", "b", "c"]);
    assert_eq!(skill_badge_count(&counters), 3);
    // Same record, different surface: diversity applies the ×5 weight.
    assert_eq!(diversity_points(&counters), 15);

    counters.skill_badges = Some(0);
    assert_eq!(skill_badge_count(&counters), 3);

    counters.skill_badges = Some(9);
    assert_eq!(skill_badge_count(&counters), 9);
}
