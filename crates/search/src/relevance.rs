//! Relevance ordering for suggestions.

use grocer_catalog::Product;
use std::cmp::Ordering;

/// Ranks products whose name contains the query ahead of the rest.
///
/// Only the name is checked, case-insensitively. Products that were kept
/// because of a typo-tolerant match, or a brand, tag or category hit, rank
/// after the direct name hits. Within each group the order is left to the
/// next comparator.
#[derive(Debug, Clone)]
pub struct NameBoost {
    needle: String,
}

impl NameBoost {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// True when the product name contains the query.
    #[inline]
    pub fn is_boosted(&self, product: &Product) -> bool {
        product.name.to_lowercase().contains(&self.needle)
    }

    /// Boosted products first; everything else compares equal.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        self.is_boosted(b).cmp(&self.is_boosted(a))
    }

    /// Chain a tie-breaker after the boost.
    pub fn then<F>(self, next: F) -> impl Fn(&Product, &Product) -> Ordering
    where
        F: Fn(&Product, &Product) -> Ordering,
    {
        move |a: &Product, b: &Product| self.compare(a, b).then_with(|| next(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::compare_names;
    use grocer_catalog::Category;

    #[test]
    fn test_boost_is_case_insensitive() {
        let boost = NameBoost::new("MILK");
        assert!(boost.is_boosted(&Product::new("1", "Chocolate Milk", Category::Beverages)));
        assert!(!boost.is_boosted(&Product::new("2", "Cheese", Category::DairyAndEggs)));
    }

    #[test]
    fn test_boosted_first() {
        let boost = NameBoost::new("bread");
        let hit = Product::new("1", "Bread - White", Category::Bakery);
        let miss = Product::new("2", "Sourdough", Category::Bakery);
        assert_eq!(boost.compare(&hit, &miss), Ordering::Less);
        assert_eq!(boost.compare(&miss, &hit), Ordering::Greater);
        assert_eq!(boost.compare(&hit, &hit), Ordering::Equal);
    }

    #[test]
    fn test_chained_tie_breaker() {
        let cmp = NameBoost::new("rice").then(|a, b| compare_names(&a.name, &b.name));
        let basmati = Product::new("1", "Rice - Basmati", Category::Pantry);
        let jasmine = Product::new("2", "Rice - Jasmine", Category::Pantry);
        let crackers = Product::new("3", "Crackers", Category::Pantry);

        assert_eq!(cmp(&jasmine, &basmati), Ordering::Greater);
        assert_eq!(cmp(&crackers, &basmati), Ordering::Greater);
        assert_eq!(cmp(&basmati, &crackers), Ordering::Less);
    }
}
