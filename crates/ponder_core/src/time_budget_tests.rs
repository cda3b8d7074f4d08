use super::*;

#[test]
fn test_unlimited_budget_never_expires() {
    let budget = TimeBudget::unlimited();
    assert!(!budget.expired());
}

#[test]
fn test_zero_budget_expires_immediately() {
    let budget = TimeBudget::limited(Duration::ZERO);
    assert!(budget.expired());
}

#[test]
fn test_restart_resets_elapsed() {
    let mut budget = TimeBudget::limited(Duration::from_secs(60));
    std::thread::sleep(Duration::from_millis(5));
    assert!(budget.elapsed() >= Duration::from_millis(5));
    budget.restart();
    assert!(budget.elapsed() < Duration::from_millis(5));
    assert!(!budget.expired());
}
