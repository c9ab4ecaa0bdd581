//! Core trait for ranking rules.

/// A criterion that assigns a rank key to an item.
///
/// Keys are `u32` where **lower means visited earlier**. A rule that
/// cannot evaluate an item should return [`crate::parse::UNRANKED`] so
/// the item sorts after everything the rule understands; rules never
/// fail.
///
/// # Examples
///
/// ```ignore
/// struct ByTier;
///
/// impl RankRule<Ticket> for ByTier {
///     fn name(&self) -> &str { "ByTier" }
///     fn key(&self, ticket: &Ticket) -> u32 {
///         ticket.priority.value().unwrap_or(UNRANKED)
///     }
/// }
/// ```
pub trait RankRule<T>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the rank key for the given item. Lower is earlier.
    fn key(&self, item: &T) -> u32;
}
