use serde::{Deserialize, Serialize};

/// Cash received at the counter. The check against the total is an
/// operator-facing sanity guard, not a security boundary: the money is
/// physical cash, and the server never sees it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CashPayment {
    pub tendered_cents: i64,
}

impl CashPayment {
    pub fn new(tendered_cents: i64) -> Self {
        Self { tendered_cents }
    }

    pub fn covers(&self, total_cents: i64) -> bool {
        self.tendered_cents >= total_cents
    }

    pub fn change_for(&self, total_cents: i64) -> i64 {
        (self.tendered_cents - total_cents).max(0)
    }
}
