//! Bucket boundary and ordering properties.

use attrisk::{AgeGroup, SalarySlab};

// ============================================================================
// Age group boundaries
// ============================================================================

#[test]
fn age_group_boundaries() {
    assert_eq!(AgeGroup::from_age(25).as_str(), "18-25");
    assert_eq!(AgeGroup::from_age(26).as_str(), "26-35");
    assert_eq!(AgeGroup::from_age(35).as_str(), "26-35");
    assert_eq!(AgeGroup::from_age(36).as_str(), "36-45");
    assert_eq!(AgeGroup::from_age(45).as_str(), "36-45");
    assert_eq!(AgeGroup::from_age(46).as_str(), "46-55");
    assert_eq!(AgeGroup::from_age(55).as_str(), "46-55");
    assert_eq!(AgeGroup::from_age(56).as_str(), "55+");
}

#[test]
fn age_group_is_total_over_integers() {
    // Everything below the first boundary lands in the lowest bucket
    assert_eq!(AgeGroup::from_age(0), AgeGroup::Under26);
    assert_eq!(AgeGroup::from_age(-40), AgeGroup::Under26);
    assert_eq!(AgeGroup::from_age(i64::MIN), AgeGroup::Under26);
    assert_eq!(AgeGroup::from_age(i64::MAX), AgeGroup::Over55);
}

#[test]
fn age_group_is_monotonic() {
    let mut prev = AgeGroup::from_age(-5);
    for age in -4..=100 {
        let current = AgeGroup::from_age(age);
        assert!(current >= prev, "bucket regressed at age {age}");
        prev = current;
    }
}

#[test]
fn age_group_display_matches_wire_label() {
    assert_eq!(AgeGroup::From36To45.to_string(), "36-45");
    assert_eq!(
        serde_json::to_string(&AgeGroup::Over55).unwrap(),
        "\"55+\""
    );
}

// ============================================================================
// Salary slab boundaries
// ============================================================================

#[test]
fn salary_slab_boundaries() {
    assert_eq!(SalarySlab::from_monthly_income(5000).as_str(), "Upto 5k");
    assert_eq!(SalarySlab::from_monthly_income(5001).as_str(), "5k-10k");
    assert_eq!(SalarySlab::from_monthly_income(10000).as_str(), "5k-10k");
    assert_eq!(SalarySlab::from_monthly_income(10001).as_str(), "10k-15k");
    assert_eq!(SalarySlab::from_monthly_income(15000).as_str(), "10k-15k");
    assert_eq!(SalarySlab::from_monthly_income(15001).as_str(), "15k+");
}

#[test]
fn salary_slab_is_total_over_integers() {
    assert_eq!(SalarySlab::from_monthly_income(0), SalarySlab::UpTo5k);
    assert_eq!(SalarySlab::from_monthly_income(-1), SalarySlab::UpTo5k);
    assert_eq!(SalarySlab::from_monthly_income(i64::MIN), SalarySlab::UpTo5k);
    assert_eq!(
        SalarySlab::from_monthly_income(i64::MAX),
        SalarySlab::Over15k
    );
}

#[test]
fn salary_slab_is_monotonic() {
    let mut prev = SalarySlab::from_monthly_income(-1000);
    for income in (0..=20000).step_by(250) {
        let current = SalarySlab::from_monthly_income(income);
        assert!(current >= prev, "bucket regressed at income {income}");
        prev = current;
    }
}

#[test]
fn salary_slab_roundtrips_wire_label() {
    let slab: SalarySlab = serde_json::from_str("\"Upto 5k\"").unwrap();
    assert_eq!(slab, SalarySlab::UpTo5k);
    assert_eq!(slab.to_string(), "Upto 5k");
}
