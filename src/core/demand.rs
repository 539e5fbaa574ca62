/// Outstanding downstream demand.
///
/// A plain non-negative counter; it saturates instead of wrapping when a
/// consumer keeps requesting past `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Demand(u64);

impl Demand {
  /// Zero demand.
  pub const ZERO: Self = Self(0);

  /// Creates demand from a raw count.
  #[must_use]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Returns the raw count.
  #[must_use]
  pub const fn value(self) -> u64 {
    self.0
  }

  /// Returns `true` if there is remaining demand.
  #[must_use]
  pub const fn has_demand(self) -> bool {
    self.0 > 0
  }

  /// Adds `amount`, saturating at `u64::MAX`.
  #[must_use]
  pub const fn saturating_add(self, amount: u64) -> Self {
    Self(self.0.saturating_add(amount))
  }

  /// Subtracts `amount`, or `None` when it exceeds the available demand.
  #[must_use]
  pub const fn checked_sub(self, amount: u64) -> Option<Self> {
    match self.0.checked_sub(amount) {
      | Some(rest) => Some(Self(rest)),
      | None => None,
    }
  }
}
