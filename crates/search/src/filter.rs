//! Catalog filtering.
//!
//! A product is kept when it passes all three predicates: text, category and
//! store availability. Filtering preserves catalog order.

use crate::criteria::SearchCriteria;
use crate::fuzzy;
use grocer_catalog::{Category, Product, Store};

/// Lower-cased query, prepared once per filter pass.
struct TextQuery<'q> {
    raw: &'q str,
    lower: String,
}

impl<'q> TextQuery<'q> {
    /// Returns `None` for a blank query, which matches everything.
    fn new(raw: &'q str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self {
            raw,
            lower: raw.to_lowercase(),
        })
    }

    fn contained_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.lower)
    }

    fn accepts(&self, product: &Product) -> bool {
        fuzzy::matches(&product.name, self.raw)
            || self.contained_in(product.category.as_str())
            || product.brands.iter().any(|b| self.contained_in(b))
            || product.tags.iter().any(|t| self.contained_in(t))
    }
}

/// Text predicate on its own.
///
/// The name is matched fuzzily; category, brands and tags by case-insensitive
/// substring. A blank query accepts every product. The query is used as typed,
/// only the blank check trims it.
pub fn matches_text(product: &Product, query: &str) -> bool {
    TextQuery::new(query).is_none_or(|q| q.accepts(product))
}

/// Category predicate: exact equality when a category is selected.
#[inline]
pub fn matches_category(product: &Product, category: Option<Category>) -> bool {
    category.is_none_or(|c| product.category == c)
}

/// Store predicate: the product must be sold and in stock at the selected store.
#[inline]
pub fn matches_store(product: &Product, store: Option<Store>) -> bool {
    store.is_none_or(|s| product.in_stock_at(s))
}

/// Keep the products that satisfy `criteria`, in their original order.
///
/// Sort settings in `criteria` are ignored here.
pub fn filter_catalog<'a, I>(products: I, criteria: &SearchCriteria) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let text = TextQuery::new(&criteria.query);

    products
        .into_iter()
        .filter(|product| {
            matches_category(product, criteria.category)
                && matches_store(product, criteria.store)
                && text.as_ref().is_none_or(|q| q.accepts(product))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_catalog::Unit;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("1", "Milk", Category::DairyAndEggs)
                .with_brands(["Dairy Farmers"])
                .with_offer(Store::Aldi, 2.19, Unit::Litre, true),
            Product::new("2", "Mild Cheese", Category::DairyAndEggs)
                .with_brands(["Bega"])
                .with_offer(Store::Aldi, 5.00, Unit::Gram, false),
            Product::new("3", "Sourdough", Category::Bakery)
                .with_tags(["bread", "artisan"])
                .with_offer(Store::Coles, 5.50, Unit::Each, true),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let products = catalog();
        let criteria = SearchCriteria::new().with_query("  \t");
        assert_eq!(filter_catalog(&products, &criteria).len(), 3);
    }

    #[test]
    fn test_fuzzy_name_match() {
        let products = catalog();
        let criteria = SearchCriteria::new().with_query("milk");
        assert_eq!(ids(&filter_catalog(&products, &criteria)), ["1"]);
    }

    #[test]
    fn test_tag_brand_and_category_substrings() {
        let products = catalog();

        let by_tag = SearchCriteria::new().with_query("BREAD");
        assert_eq!(ids(&filter_catalog(&products, &by_tag)), ["3"]);

        let by_brand = SearchCriteria::new().with_query("bega");
        assert_eq!(ids(&filter_catalog(&products, &by_brand)), ["2"]);

        let by_category = SearchCriteria::new().with_query("& eggs");
        assert_eq!(ids(&filter_catalog(&products, &by_category)), ["1", "2"]);
    }

    #[test]
    fn test_category_is_exact() {
        let products = catalog();
        let criteria = SearchCriteria::new().in_category(Category::Bakery);
        assert_eq!(ids(&filter_catalog(&products, &criteria)), ["3"]);
    }

    #[test]
    fn test_store_requires_stock() {
        let products = catalog();
        let criteria = SearchCriteria::new().at_store(Store::Aldi);
        assert_eq!(ids(&filter_catalog(&products, &criteria)), ["1"]);

        let nowhere = SearchCriteria::new().at_store(Store::Iga);
        assert!(filter_catalog(&products, &nowhere).is_empty());
    }

    #[test]
    fn test_predicates_combine() {
        let products = catalog();
        let criteria = SearchCriteria::new()
            .with_query("cheese")
            .in_category(Category::DairyAndEggs)
            .at_store(Store::Aldi);
        assert!(filter_catalog(&products, &criteria).is_empty());
    }

    #[test]
    fn test_single_predicates() {
        let products = catalog();
        assert!(matches_text(&products[0], ""));
        assert!(matches_text(&products[2], "artisan"));
        assert!(!matches_category(&products[0], Some(Category::Bakery)));
        assert!(matches_category(&products[0], None));
        assert!(!matches_store(&products[1], Some(Store::Aldi)));
    }
}
