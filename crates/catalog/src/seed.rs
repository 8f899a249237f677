//! Seed catalog.
//!
//! Thirty everyday products priced at the four supported stores. Every seeded
//! product is stocked everywhere and priced in the same unit at each store.

use crate::model::{Category, Product, Store, Unit};
use once_cell::sync::Lazy;

static SEED_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        // Fresh Produce
        seed("p1", "Bananas", Category::FreshProduce, Unit::Kilogram, [3.50, 3.90, 3.40, 4.00],
            &["Cavendish", "Lady Finger"],
            &["fruit", "fresh"]),
        seed("p2", "Apples - Pink Lady", Category::FreshProduce, Unit::Kilogram, [5.50, 5.90, 5.20, 6.00],
            &["Aussie Apples"],
            &["fruit", "fresh"]),
        seed("p3", "Avocado - Hass", Category::FreshProduce, Unit::Each, [2.50, 2.70, 2.30, 2.80],
            &["Australian Avocados"],
            &["fruit", "fresh"]),
        seed("p4", "Carrots", Category::FreshProduce, Unit::Kilogram, [2.50, 2.70, 2.30, 2.80],
            &["Odd Bunch"],
            &["vegetable", "fresh"]),
        seed("p5", "Potatoes - Brushed", Category::FreshProduce, Unit::Kilogram, [3.90, 4.00, 3.70, 4.20],
            &["Odd Bunch"],
            &["vegetable", "fresh"]),

        // Dairy & Eggs
        seed("p6", "Milk - Full Cream", Category::DairyAndEggs, Unit::Litre, [2.20, 2.30, 2.19, 2.40],
            &["Dairy Farmers", "Pauls", "Woolworths", "Coles"],
            &["dairy", "refrigerated"]),
        seed("p7", "Eggs - Free Range", Category::DairyAndEggs, Unit::Pack, [4.50, 4.60, 4.20, 4.80],
            &["Pace Farm", "Manning Valley", "Woolworths", "Coles"],
            &["eggs", "refrigerated", "free range"]),
        seed("p8", "Cheese - Tasty Block", Category::DairyAndEggs, Unit::Pack, [8.00, 8.50, 7.50, 9.00],
            &["Bega", "Mainland", "Woolworths", "Coles"],
            &["dairy", "refrigerated", "cheese"]),
        seed("p9", "Yoghurt - Greek Style", Category::DairyAndEggs, Unit::Pack, [5.00, 5.20, 4.80, 5.50],
            &["Chobani", "Jalna", "Farmers Union", "Woolworths"],
            &["dairy", "refrigerated", "yoghurt"]),

        // Meat & Seafood
        seed("p10", "Chicken Breast", Category::MeatAndSeafood, Unit::Kilogram, [9.00, 9.50, 8.50, 10.00],
            &["Lilydale", "Ingham", "Woolworths", "Coles"],
            &["meat", "refrigerated", "chicken"]),
        seed("p11", "Beef Mince", Category::MeatAndSeafood, Unit::Kilogram, [12.00, 12.50, 11.50, 13.00],
            &["Cape Grim", "Woolworths", "Coles"],
            &["meat", "refrigerated", "beef"]),
        seed("p12", "Salmon Fillets", Category::MeatAndSeafood, Unit::Kilogram, [32.00, 33.00, 30.00, 34.00],
            &["Tassal", "Huon", "Woolworths", "Coles"],
            &["seafood", "refrigerated", "fish"]),

        // Bakery
        seed("p13", "Bread - White Sliced", Category::Bakery, Unit::Each, [3.50, 3.40, 3.00, 3.60],
            &["Tip Top", "Helga's", "Wonder White", "Abbott's"],
            &["bread", "bakery"]),
        seed("p14", "Bread - Wholemeal", Category::Bakery, Unit::Each, [3.80, 3.70, 3.30, 3.90],
            &["Tip Top", "Helga's", "Burgen", "Abbott's"],
            &["bread", "bakery", "wholemeal"]),
        seed("p15", "Croissants", Category::Bakery, Unit::Pack, [4.50, 4.60, 4.20, 4.80],
            &["Woolworths", "Coles", "Bakers Delight"],
            &["bakery", "pastry"]),

        // Pantry
        seed("p16", "Pasta - Spaghetti", Category::Pantry, Unit::Pack, [1.80, 1.90, 1.50, 2.00],
            &["Barilla", "San Remo", "Woolworths", "Coles"],
            &["pasta", "pantry", "dry goods"]),
        seed("p17", "Rice - White Long Grain", Category::Pantry, Unit::Kilogram, [3.00, 3.20, 2.80, 3.50],
            &["SunRice", "Tilda", "Woolworths", "Coles"],
            &["rice", "pantry", "dry goods"]),
        seed("p18", "Flour - Plain", Category::Pantry, Unit::Kilogram, [2.00, 2.10, 1.80, 2.30],
            &["White Wings", "Defiance", "Woolworths", "Coles"],
            &["flour", "pantry", "baking"]),
        seed("p19", "Sugar - White", Category::Pantry, Unit::Kilogram, [2.20, 2.30, 2.00, 2.50],
            &["CSR", "Woolworths", "Coles"],
            &["sugar", "pantry", "baking"]),
        seed("p20", "Vegemite", Category::Pantry, Unit::Each, [5.00, 5.20, 4.80, 5.50],
            &["Vegemite"],
            &["spreads", "pantry", "australian"]),

        // Snacks & Confectionery
        seed("p21", "Tim Tams", Category::SnacksAndConfectionery, Unit::Pack, [3.50, 3.65, 3.40, 3.80],
            &["Arnott's"],
            &["biscuits", "chocolate", "australian"]),
        seed("p22", "Shapes - BBQ", Category::SnacksAndConfectionery, Unit::Pack, [3.00, 3.20, 2.80, 3.50],
            &["Arnott's"],
            &["crackers", "savoury", "australian"]),
        seed("p23", "Cadbury Dairy Milk Chocolate", Category::SnacksAndConfectionery, Unit::Each, [4.50, 4.65, 4.30, 4.80],
            &["Cadbury"],
            &["chocolate", "sweet"]),

        // Beverages
        seed("p24", "Coffee - Instant", Category::Beverages, Unit::Each, [8.00, 8.50, 7.50, 9.00],
            &["Nescafé", "Moccona", "Woolworths", "Coles"],
            &["coffee", "hot drinks"]),
        seed("p25", "Tea - Black", Category::Beverages, Unit::Pack, [4.00, 4.20, 3.80, 4.50],
            &["Bushells", "Lipton", "Twinings", "Dilmah"],
            &["tea", "hot drinks"]),
        seed("p26", "Coca-Cola", Category::Beverages, Unit::Litre, [3.15, 3.25, 3.00, 3.40],
            &["Coca-Cola"],
            &["soft drink", "cold drinks"]),

        // Household
        seed("p27", "Toilet Paper", Category::Household, Unit::Pack, [8.00, 8.50, 7.50, 9.00],
            &["Quilton", "Kleenex", "Woolworths", "Coles"],
            &["bathroom", "paper products"]),
        seed("p28", "Laundry Detergent", Category::Household, Unit::Each, [10.00, 10.50, 9.50, 11.00],
            &["Omo", "Cold Power", "Biozet Attack", "Earth Choice"],
            &["laundry", "cleaning"]),

        // Personal Care
        seed("p29", "Toothpaste", Category::PersonalCare, Unit::Each, [4.00, 4.20, 3.80, 4.50],
            &["Colgate", "Sensodyne", "Macleans", "Oral-B"],
            &["dental", "hygiene"]),
        seed("p30", "Shampoo", Category::PersonalCare, Unit::Each, [7.00, 7.20, 6.80, 7.50],
            &["Pantene", "Head & Shoulders", "Tresemmé", "Garnier"],
            &["hair care", "hygiene"]),
    ]
});

/// Builds a seeded product. `prices` follows [`Store::ALL`] order.
fn seed(
    id: &str,
    name: &str,
    category: Category,
    unit: Unit,
    prices: [f64; 4],
    brands: &[&str],
    tags: &[&str],
) -> Product {
    Store::ALL.into_iter().zip(prices).fold(
        Product::new(id, name, category)
            .with_brands(brands.iter().copied())
            .with_tags(tags.iter().copied()),
        |product, (store, price)| product.with_offer(store, price, unit, true),
    )
}

/// A fresh copy of the seed catalog.
pub fn seed_products() -> Vec<Product> {
    SEED_PRODUCTS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_size_and_unique_ids() {
        let products = seed_products();
        assert_eq!(products.len(), 30);

        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_covers_every_store() {
        for product in seed_products() {
            assert_eq!(product.stores.len(), 4, "{} is missing a store", product.name);
            assert_eq!(product.stores_in_stock(), 4);
        }
    }

    #[test]
    fn test_seed_prices_in_store_order() {
        let products = seed_products();
        let milk = products.iter().find(|p| p.id.as_str() == "p6").unwrap();
        assert_eq!(milk.price_at(Store::Woolworths), Some(2.20));
        assert_eq!(milk.price_at(Store::Aldi), Some(2.19));
        assert_eq!(milk.price_at(Store::Iga), Some(2.40));
        assert_eq!(milk.default_unit(), Some(Unit::Litre));
    }
}
