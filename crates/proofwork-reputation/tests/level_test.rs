use proofwork_reputation::{resolve_level, ReputationTier, LEVEL_THRESHOLDS};

#[test]
fn zero_is_newcomer_with_no_progress() {
    let level = resolve_level(0);
    assert_eq!(level.tier, ReputationTier::Newcomer);
    assert_eq!(level.tier_name, "Newcomer");
    assert_eq!(level.progress_percent, 0.0);
    assert_eq!(level.points_to_next, 100);
    assert_eq!(level.next_tier, Some(ReputationTier::Apprentice));
}

#[test]
fn exact_threshold_belongs_to_higher_tier() {
    assert_eq!(resolve_level(499).tier, ReputationTier::Apprentice);
    assert_eq!(resolve_level(500).tier, ReputationTier::Professional);
    assert_eq!(resolve_level(500).progress_percent, 0.0);

    for (tier, threshold) in ReputationTier::LADDER.iter().zip(LEVEL_THRESHOLDS) {
        assert_eq!(resolve_level(threshold).tier, *tier, "threshold {threshold}");
    }
}

#[test]
fn legend_is_maxed_out() {
    for score in [5000, 5001, 1_000_000] {
        let level = resolve_level(score);
        assert_eq!(level.tier, ReputationTier::Legend);
        assert_eq!(level.progress_percent, 100.0);
        assert_eq!(level.points_to_next, 0);
        assert!(level.is_max_level());
    }
}

#[test]
fn progress_is_fraction_of_current_bracket() {
    // Expert spans 1000..2500.
    let level = resolve_level(1750);
    assert_eq!(level.tier, ReputationTier::Expert);
    assert!((level.progress_percent - 50.0).abs() < 1e-9);
    assert_eq!(level.points_to_next, 750);

    // Apprentice spans 100..500.
    let level = resolve_level(135);
    assert!((level.progress_percent - 8.75).abs() < 1e-9);
    assert_eq!(level.points_to_next, 365);
}

#[test]
fn negative_scores_resolve_to_newcomer() {
    let level = resolve_level(-40);
    assert_eq!(level.tier, ReputationTier::Newcomer);
    assert_eq!(level.progress_percent, 0.0);
    assert_eq!(level.points_to_next, 140);
}

#[test]
fn metadata_passes_through() {
    let level = resolve_level(2600);
    assert_eq!(level.tier, ReputationTier::Master);
    assert_eq!(level.icon, "👑");
    assert_eq!(level.color, "#f59e0b");

    let level = resolve_level(10);
    assert_eq!(level.icon, "🌱");
    assert_eq!(level.color, "#64748b");
}

#[test]
fn tiers_order_along_the_ladder() {
    assert!(ReputationTier::Newcomer < ReputationTier::Apprentice);
    assert!(ReputationTier::Master < ReputationTier::Legend);
    let mut shuffled = vec![
        ReputationTier::Legend,
        ReputationTier::Newcomer,
        ReputationTier::Expert,
    ];
    shuffled.sort();
    assert_eq!(
        shuffled,
        vec![ReputationTier::Newcomer, ReputationTier::Expert, ReputationTier::Legend]
    );
}
