//! Report exporters

use crate::balance::BalanceReport;

/// Render a balance report as pretty-printed JSON.
pub fn to_json(report: &BalanceReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tallybank_core::Amount;
    use tallybank_ledger::AccountStore;

    #[test]
    fn test_json_export() {
        let mut store = AccountStore::new();
        store.create("Alice", "Smith", Some(Amount::new(100)));
        store.create("Bob", "Jones", Some(Amount::new(300)));

        let report = BalanceReport::compute(&store).unwrap();
        let json = to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["accounts"], 2);
        assert_eq!(value["max"], 300);
        assert_eq!(value["min"], 100);
        assert_eq!(value["mean"], 200);
        assert_eq!(value["median"], 200);
        assert_eq!(value["total"], 400);
    }
}
