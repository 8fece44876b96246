//! Balance statistics over the account set

use serde::Serialize;
use tallybank_core::Amount;
use tallybank_ledger::AccountStore;

/// The five balance reductions over the current account set.
///
/// Mean and median use integer (floor) arithmetic; for an even number of
/// accounts the median is the floored midpoint of the two middle
/// balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub accounts: usize,
    pub max: Amount,
    pub min: Amount,
    pub mean: Amount,
    pub median: Amount,
    pub total: Amount,
}

impl BalanceReport {
    /// Compute the report, or None when there are no accounts.
    pub fn compute(store: &AccountStore) -> Option<Self> {
        if store.is_empty() {
            return None;
        }

        let mut balances: Vec<u64> = store.iter().map(|a| a.balance.value()).collect();
        balances.sort_unstable();

        let total: u64 = balances.iter().sum();
        let count = balances.len();
        let median = if count % 2 == 0 {
            (balances[count / 2] + balances[count / 2 - 1]) / 2
        } else {
            balances[count / 2]
        };

        Some(Self {
            accounts: count,
            max: Amount::new(balances[count - 1]),
            min: Amount::new(balances[0]),
            mean: Amount::new(total / count as u64),
            median: Amount::new(median),
            total: Amount::new(total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(balances: &[u64]) -> AccountStore {
        let mut store = AccountStore::new();
        for (i, &balance) in balances.iter().enumerate() {
            store.create(format!("F{i}"), format!("L{i}"), Some(Amount::new(balance)));
        }
        store
    }

    #[test]
    fn test_empty_store_yields_none() {
        assert_eq!(BalanceReport::compute(&AccountStore::new()), None);
    }

    #[test]
    fn test_single_account() {
        let report = BalanceReport::compute(&store_with(&[10000])).unwrap();
        assert_eq!(report.max, Amount::new(10000));
        assert_eq!(report.min, Amount::new(10000));
        assert_eq!(report.mean, Amount::new(10000));
        assert_eq!(report.median, Amount::new(10000));
        assert_eq!(report.total, Amount::new(10000));
    }

    #[test]
    fn test_odd_count() {
        let report = BalanceReport::compute(&store_with(&[300, 100, 200])).unwrap();
        assert_eq!(report.max, Amount::new(300));
        assert_eq!(report.min, Amount::new(100));
        assert_eq!(report.mean, Amount::new(200));
        assert_eq!(report.median, Amount::new(200));
        assert_eq!(report.total, Amount::new(600));
    }

    #[test]
    fn test_even_count_median_floors_midpoint() {
        let report = BalanceReport::compute(&store_with(&[100, 200, 300, 401])).unwrap();
        assert_eq!(report.median, Amount::new(250));
        // 1001 / 4 floors
        assert_eq!(report.mean, Amount::new(250));
        assert_eq!(report.total, Amount::new(1001));
    }

    #[test]
    fn test_mean_floors() {
        let report = BalanceReport::compute(&store_with(&[1, 1, 1, 2])).unwrap();
        assert_eq!(report.mean, Amount::new(1));
    }
}
