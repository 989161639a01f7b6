//! End-to-end balancing of pre-grouped categories into one sequence.
//!
//! ## Architecture
//!
//! ```text
//!   categories ──► batches ──► per batch:
//!
//!     ┌──────────────┐   target_count   ┌────────────────────────────┐
//!     │ Category 0   │ ───────────────► │ generate_positions         │──┐
//!     └──────────────┘                  └────────────────────────────┘  │
//!     ┌──────────────┐   target_count   ┌────────────────────────────┐  │  slots
//!     │ Category 1.. │ ───────────────► │ generate_from_candidates   │──┤ [Option<T>]
//!     └──────────────┘                  │ (over still-empty slots)   │  │
//!                                       └────────────────────────────┘  │
//!     unplaced items ──► FillerBuilder ──► fill_gaps(empty_slots) ──────┘
//! ```
//!
//! Every input item appears in the output exactly once. The first category
//! is spread over the whole batch; later categories are spread over whatever
//! slots are still free, so categories never contend for the same slot.
//! Items beyond a category's target count (and items whose slot was already
//! taken) become backlogs for the gap filler.
//!
//! ## Batching
//!
//! Sequences longer than [`BalanceConfig::batch_size`] are cut into batches
//! balanced independently and concatenated in order. Each category
//! contributes a contiguous, proportionally sized chunk to every batch, so a
//! batch holds roughly `batch_size` slots and mirrors the overall mix.
//!
//! ## Default ratios
//!
//! | categories | ratios                                   |
//! |------------|------------------------------------------|
//! | 1          | `[1.0]`                                  |
//! | 2          | `[0.6, 0.4]`                             |
//! | n ≥ 3      | `0.4`, then `0.6 / (n - 1)` for the rest |
//!
//! A category with an explicit ratio overrides its default.

use tracing::{debug, warn};

use crate::builder::{FillStrategy, FillerBuilder};
use crate::error::ConfigError;
use crate::fill::{empty_slots, fill_gaps};
use crate::layout::{
    CandidateSelection, TargetPolicy, generate_from_candidates, generate_positions,
};
use crate::traits::Filler;

/// Default number of slots balanced together.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// A labelled group of items sharing a placement ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct Category<T> {
    label: String,
    items: Vec<T>,
    ratio: Option<f64>,
}

impl<T> Category<T> {
    pub fn new(label: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            label: label.into(),
            items,
            ratio: None,
        }
    }

    /// Overrides the default ratio for this category.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = Some(ratio);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn ratio(&self) -> Option<f64> {
        self.ratio
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Balancer configuration.
///
/// ```
/// use slotweave::balance::BalanceConfig;
/// use slotweave::builder::FillStrategy;
/// use slotweave::layout::TargetPolicy;
///
/// let config = BalanceConfig::try_with_batch_size(100)
///     .unwrap()
///     .with_target_policy(TargetPolicy::RoundAtLeastOne)
///     .with_gap_strategy(FillStrategy::Alternating);
/// assert_eq!(config.batch_size(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceConfig {
    batch_size: usize,
    target_policy: TargetPolicy,
    gap_strategy: FillStrategy,
    candidate_selection: CandidateSelection,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            target_policy: TargetPolicy::Round,
            gap_strategy: FillStrategy::Sequential,
            candidate_selection: CandidateSelection::NearestUnused,
        }
    }
}

impl BalanceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with the given batch size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `batch_size` is zero.
    pub fn try_with_batch_size(batch_size: usize) -> Result<Self, ConfigError> {
        if batch_size == 0 {
            return Err(ConfigError::new("batch_size must be > 0"));
        }
        Ok(Self {
            batch_size,
            ..Self::default()
        })
    }

    /// Sets the batch size, clamping zero to one.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_target_policy(mut self, policy: TargetPolicy) -> Self {
        self.target_policy = policy;
        self
    }

    pub fn with_gap_strategy(mut self, strategy: FillStrategy) -> Self {
        self.gap_strategy = strategy;
        self
    }

    /// Candidate resolution used for every category after the first.
    pub fn with_candidate_selection(mut self, selection: CandidateSelection) -> Self {
        self.candidate_selection = selection;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn target_policy(&self) -> TargetPolicy {
        self.target_policy
    }

    pub fn gap_strategy(&self) -> FillStrategy {
        self.gap_strategy
    }

    pub fn candidate_selection(&self) -> CandidateSelection {
        self.candidate_selection
    }
}

/// Ratios assigned to `count` categories that carry no explicit ratio.
///
/// ```
/// use slotweave::balance::default_ratios;
///
/// assert_eq!(default_ratios(1), vec![1.0]);
/// assert_eq!(default_ratios(2), vec![0.6, 0.4]);
/// assert_eq!(default_ratios(4), vec![0.4, 0.2, 0.2, 0.2]);
/// ```
pub fn default_ratios(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![1.0],
        2 => vec![0.6, 0.4],
        n => {
            let rest = round6(0.6 / (n - 1) as f64);
            std::iter::once(0.4)
                .chain(std::iter::repeat_n(rest, n - 1))
                .collect()
        },
    }
}

#[inline]
fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Interleaves categories into one evenly mixed sequence.
///
/// # Example
///
/// ```
/// use slotweave::balance::{Balancer, Category};
///
/// let balancer = Balancer::default();
/// let out = balancer.balance(vec![
///     Category::new("video", vec!["v1", "v2"]),
///     Category::new("image", vec!["i1", "i2"]),
/// ]);
/// assert_eq!(out, vec!["v1", "i1", "i2", "v2"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Balancer {
    config: BalanceConfig,
}

impl Balancer {
    pub fn new(config: BalanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// Balances `categories`, replacing any explicit ratio outside `[0, 1]`
    /// with the category's default ratio.
    pub fn balance<T>(&self, categories: Vec<Category<T>>) -> Vec<T> {
        let defaults = default_ratios(categories.len());
        let ratios = categories
            .iter()
            .zip(&defaults)
            .map(|(category, &default)| match category.ratio {
                Some(ratio) if ratio_is_valid(ratio) => ratio,
                Some(ratio) => {
                    warn!(
                        label = category.label.as_str(),
                        ratio, default, "invalid ratio replaced by default"
                    );
                    default
                },
                None => default,
            })
            .collect();
        self.run(categories, ratios)
    }

    /// Balances `categories`, rejecting invalid explicit ratios.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any explicit ratio is outside `[0, 1]` or
    /// NaN.
    pub fn try_balance<T>(&self, categories: Vec<Category<T>>) -> Result<Vec<T>, ConfigError> {
        let defaults = default_ratios(categories.len());
        let mut ratios = Vec::with_capacity(categories.len());
        for (category, &default) in categories.iter().zip(&defaults) {
            match category.ratio {
                Some(ratio) if !ratio_is_valid(ratio) => {
                    return Err(ConfigError::new(format!(
                        "ratio {ratio} for category '{}' must be within [0, 1]",
                        category.label
                    )));
                },
                Some(ratio) => ratios.push(ratio),
                None => ratios.push(default),
            }
        }
        Ok(self.run(categories, ratios))
    }

    fn run<T>(&self, categories: Vec<Category<T>>, ratios: Vec<f64>) -> Vec<T> {
        let lens: Vec<usize> = categories.iter().map(Category::len).collect();
        let total: usize = lens.iter().sum();
        if total == 0 {
            return Vec::new();
        }

        let batch_size = self.config.batch_size;
        let batches = total.div_ceil(batch_size);
        debug!(
            categories = categories.len(),
            total, batch_size, batches, "balancing"
        );

        let mut sources: Vec<std::vec::IntoIter<T>> = categories
            .into_iter()
            .map(|category| category.items.into_iter())
            .collect();
        let mut out = Vec::with_capacity(total);

        for batch in 0..batches {
            let start = batch * batch_size;
            let end = (start + batch_size).min(total);
            let chunks: Vec<Vec<T>> = sources
                .iter_mut()
                .zip(&lens)
                .map(|(source, &len)| {
                    let take = share(len, end, total) - share(len, start, total);
                    source.by_ref().take(take).collect()
                })
                .collect();
            out.extend(self.balance_batch(batch, chunks, &ratios));
        }
        out
    }

    fn balance_batch<T>(&self, batch: usize, chunks: Vec<Vec<T>>, ratios: &[f64]) -> Vec<T> {
        let total: usize = chunks.iter().map(Vec::len).sum();
        let mut slots: Vec<Option<T>> = Vec::with_capacity(total);
        slots.resize_with(total, || None);

        let mut backlogs: Vec<Vec<T>> = Vec::with_capacity(chunks.len());
        for (category, (chunk, &ratio)) in chunks.into_iter().zip(ratios).enumerate() {
            let target = self.config.target_policy.target_count(total, chunk.len(), ratio);
            let positions = self.positions_for(&slots, target);

            let mut positions = positions.into_iter();
            let mut placed = 0usize;
            let mut backlog = Vec::new();
            for item in chunk {
                match positions.next() {
                    Some(pos) if slots[pos].is_none() => {
                        slots[pos] = Some(item);
                        placed += 1;
                    },
                    _ => backlog.push(item),
                }
            }
            debug!(
                batch,
                category,
                ratio,
                target,
                placed,
                deferred = backlog.len(),
                "category placed"
            );
            backlogs.push(backlog);
        }

        let filler = FillerBuilder::new(self.config.gap_strategy).build(backlogs);
        let gaps = empty_slots(&slots);
        let report = fill_gaps(&mut slots, &gaps, &filler);
        debug_assert!(report.is_complete() && filler.is_exhausted());

        slots.into_iter().flatten().collect()
    }

    /// Slot indices for the next category's `target` placements.
    fn positions_for<T>(&self, slots: &[Option<T>], target: usize) -> Vec<usize> {
        let total = slots.len();
        if target == 0 || total == 0 {
            return Vec::new();
        }
        let free = empty_slots(slots);
        let result = if free.len() == total {
            generate_positions(total, target)
        } else if free.is_empty() {
            return Vec::new();
        } else {
            generate_from_candidates(
                total,
                target.min(free.len()),
                &free,
                self.config.candidate_selection,
            )
        };
        result.unwrap_or_else(|err| {
            warn!(%err, total, target, "placement failed, deferring to gap fill");
            Vec::new()
        })
    }
}

#[inline]
fn ratio_is_valid(ratio: f64) -> bool {
    (0.0..=1.0).contains(&ratio)
}

/// Items of a `len`-item category that fall before global slot `at`.
#[inline]
fn share(len: usize, at: usize, total: usize) -> usize {
    (len as u128 * at as u128 / total as u128) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
        let mut items = items.to_vec();
        items.sort();
        items
    }

    #[test]
    fn single_category_keeps_order() {
        let out = Balancer::default().balance(vec![Category::new("only", vec![1, 2, 3, 4, 5])]);
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn two_categories_interleave() {
        let out = Balancer::default().balance(vec![
            Category::new("a", vec!["a1", "a2"]),
            Category::new("b", vec!["b1", "b2"]),
        ]);
        assert_eq!(out, vec!["a1", "b1", "b2", "a2"]);
    }

    #[test]
    fn every_item_appears_exactly_once() {
        let categories = vec![
            Category::new("video", (0..30).collect::<Vec<u32>>()),
            Category::new("image", (100..110).collect()),
            Category::new("article", (200..260).collect()),
        ];
        let expected: Vec<u32> = categories.iter().flat_map(|c| c.items().to_vec()).collect();

        let out = Balancer::default().balance(categories);

        assert_eq!(out.len(), expected.len());
        assert_eq!(sorted(&out), sorted(&expected));
    }

    #[test]
    fn first_category_is_spread_across_the_sequence() {
        let out = Balancer::default().balance(vec![
            Category::new("a", vec!['a'; 4]),
            Category::new("b", vec!['b'; 6]),
        ]);
        // 0.6 * 10 = 6, bounded by 4 items: [0, 3, 6, 9]
        let a_positions: Vec<usize> = out
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| (c == 'a').then_some(i))
            .collect();
        assert_eq!(a_positions, vec![0, 3, 6, 9]);
    }

    #[test]
    fn explicit_ratio_overrides_default() {
        let out = Balancer::default().balance(vec![
            Category::new("a", vec!['a'; 5]).with_ratio(0.2),
            Category::new("b", vec!['b'; 5]).with_ratio(0.8),
        ]);
        assert_eq!(out.len(), 10);
        // a gets round(10 * 0.2) = 2 spread slots, the rest of a is backfilled
        assert_eq!(out[0], 'a');
        assert_eq!(out[9], 'a');
        assert_eq!(out.iter().filter(|&&c| c == 'a').count(), 5);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let balancer = Balancer::default();
        assert!(balancer.balance(Vec::<Category<u8>>::new()).is_empty());
        assert!(
            balancer
                .balance(vec![Category::<u8>::new("a", vec![]), Category::new("b", vec![])])
                .is_empty()
        );
    }

    #[test]
    fn empty_category_is_tolerated() {
        let out = Balancer::default().balance(vec![
            Category::new("a", vec![]),
            Category::new("b", vec![1, 2, 3]),
        ]);
        assert_eq!(sorted(&out), vec![1, 2, 3]);
    }

    #[test]
    fn batches_mirror_the_overall_mix() {
        let balancer = Balancer::new(BalanceConfig::new().with_batch_size(10));
        let out = balancer.balance(vec![
            Category::new("a", vec!['a'; 20]),
            Category::new("b", vec!['b'; 10]),
        ]);
        assert_eq!(out.len(), 30);
        // batch boundaries at slots 10 and 20: a contributes 6, 7, 7 items
        // and b 3, 3, 4, so the first batch spans 9 slots
        let first = &out[..9];
        assert_eq!(first.iter().filter(|&&c| c == 'a').count(), 6);
        assert_eq!(first.iter().filter(|&&c| c == 'b').count(), 3);
        assert_eq!(out.iter().filter(|&&c| c == 'b').count(), 10);
    }

    #[test]
    fn try_balance_rejects_bad_ratio() {
        let balancer = Balancer::default();
        let err = balancer
            .try_balance(vec![Category::new("a", vec![1]).with_ratio(1.5)])
            .unwrap_err();
        assert!(err.message().contains("'a'"));

        let err = balancer
            .try_balance(vec![Category::new("nan", vec![1]).with_ratio(f64::NAN)])
            .unwrap_err();
        assert!(err.message().contains("[0, 1]"));
    }

    #[test]
    fn balance_replaces_bad_ratio_with_default() {
        let categories = || {
            vec![
                Category::new("a", vec![1, 2, 3]).with_ratio(-1.0),
                Category::new("b", vec![4, 5]),
            ]
        };
        let lenient = Balancer::default().balance(categories());
        let defaulted = Balancer::default().balance(vec![
            Category::new("a", vec![1, 2, 3]),
            Category::new("b", vec![4, 5]),
        ]);
        assert_eq!(lenient, defaulted);
        assert!(Balancer::default().try_balance(categories()).is_err());
    }

    #[test]
    fn config_validation() {
        let err = BalanceConfig::try_with_batch_size(0).unwrap_err();
        assert!(err.to_string().contains("batch_size"));
        assert_eq!(BalanceConfig::new().with_batch_size(0).batch_size(), 1);
        assert_eq!(BalanceConfig::default().batch_size(), DEFAULT_BATCH_SIZE);
        assert_eq!(
            BalanceConfig::default().candidate_selection(),
            CandidateSelection::NearestUnused
        );
    }

    #[test]
    fn default_ratio_table() {
        assert!(default_ratios(0).is_empty());
        assert_eq!(default_ratios(1), vec![1.0]);
        assert_eq!(default_ratios(2), vec![0.6, 0.4]);
        assert_eq!(default_ratios(3), vec![0.4, 0.3, 0.3]);
        assert_eq!(default_ratios(7)[1], 0.1);
    }

    #[test]
    fn nearest_selection_still_places_every_item() {
        let balancer = Balancer::new(
            BalanceConfig::new().with_candidate_selection(CandidateSelection::Nearest),
        );
        let out = balancer.balance(vec![
            Category::new("a", (0..5).collect::<Vec<u8>>()),
            Category::new("b", (10..14).collect()),
            Category::new("c", (20..23).collect()),
        ]);
        let mut expected: Vec<u8> = (0..5).chain(10..14).chain(20..23).collect();
        expected.sort();
        assert_eq!(sorted(&out), expected);
    }

    #[test]
    fn alternating_gap_strategy_backfills_first_category_first() {
        let balancer = Balancer::new(BalanceConfig::new().with_gap_strategy(FillStrategy::Alternating));
        let out = balancer.balance(vec![
            Category::new("a", vec!["a1", "a2", "a3"]).with_ratio(0.1),
            Category::new("b", vec!["b1", "b2", "b3"]).with_ratio(0.1),
        ]);
        // a1 at 0, b1 nearest free slot to 0; gaps take a2, a3, then b2, b3
        assert_eq!(out, vec!["a1", "b1", "a2", "a3", "b2", "b3"]);
    }
}
