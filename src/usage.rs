use chrono::{NaiveDate, Utc};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct UsageWindow {
    day: Option<NaiveDate>,
    count: u32,
}

/// Per-day cap on calls to a paid collaborator. Safe to share between concurrent requests.
#[derive(Debug)]
pub struct DailyUsageCounter {
    limit: u32,
    window: Mutex<UsageWindow>,
}

impl DailyUsageCounter {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            window: Mutex::new(UsageWindow::default()),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Reserves one call for the current UTC day.
    pub fn try_acquire(&self) -> bool {
        self.try_acquire_on(current_day())
    }

    /// Reserves one call for `day`. Returns false once the cap is hit.
    pub fn try_acquire_on(&self, day: NaiveDate) -> bool {
        let mut window = self.window.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if window.day != Some(day) {
            window.day = Some(day);
            window.count = 0;
        }
        if window.count >= self.limit {
            return false;
        }
        window.count += 1;
        true
    }

    pub fn used_today(&self) -> u32 {
        self.used_on(current_day())
    }

    pub fn used_on(&self, day: NaiveDate) -> u32 {
        let window = self.window.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if window.day == Some(day) { window.count } else { 0 }
    }
}

fn current_day() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_cap_is_enforced() {
        let counter = DailyUsageCounter::new(2);
        assert!(counter.try_acquire_on(day(10)));
        assert!(counter.try_acquire_on(day(10)));
        assert!(!counter.try_acquire_on(day(10)));
        assert_eq!(counter.used_on(day(10)), 2);
    }

    #[test]
    fn test_new_day_resets() {
        let counter = DailyUsageCounter::new(1);
        assert!(counter.try_acquire_on(day(10)));
        assert!(!counter.try_acquire_on(day(10)));
        assert!(counter.try_acquire_on(day(11)));
        assert_eq!(counter.used_on(day(10)), 0);
        assert_eq!(counter.used_on(day(11)), 1);
    }

    #[test]
    fn test_zero_limit_never_grants() {
        let counter = DailyUsageCounter::new(0);
        assert!(!counter.try_acquire());
    }

    #[test]
    fn test_month_boundary_resets() {
        let counter = DailyUsageCounter::new(1);
        let last_of_feb = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert!(counter.try_acquire_on(last_of_feb));
        assert!(!counter.try_acquire_on(last_of_feb));
        assert!(counter.try_acquire_on(last_of_feb.succ_opt().unwrap()));
    }

    #[test]
    fn test_try_acquire_counts_against_today() {
        let counter = DailyUsageCounter::new(3);
        assert!(counter.try_acquire());
        assert_eq!(counter.used_on(Utc::now().date_naive()), 1);
    }

    #[test]
    fn test_concurrent_acquire_respects_limit() {
        let counter = Arc::new(DailyUsageCounter::new(50));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                std::thread::spawn(move || (0..20).filter(|_| counter.try_acquire_on(day(3))).count())
            })
            .collect();
        let granted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(granted, 50);
        assert_eq!(counter.used_on(day(3)), 50);
    }
}
