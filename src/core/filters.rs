//! Predicate filters over the product catalog.
//!
//! Every supplied query parameter becomes one independent predicate; a
//! product is kept only when all predicates accept it. Predicates never look
//! at each other's output, so the order they are evaluated in does not
//! change the result.

use crate::domain::model::{FilterParameters, Product};

/// A single constraint on a product.
pub trait ProductPredicate: Send + Sync {
    /// Returns the name of this predicate (for logging/debugging)
    fn name(&self) -> &str;

    fn matches(&self, product: &Product) -> bool;
}

/// Keeps products priced at or above the bound.
pub struct MinPriceFilter {
    min_price: f64,
}

impl MinPriceFilter {
    pub fn new(min_price: f64) -> Self {
        Self { min_price }
    }
}

impl ProductPredicate for MinPriceFilter {
    fn name(&self) -> &str {
        "MinPriceFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        product.price >= self.min_price
    }
}

/// Keeps products priced at or below the bound.
pub struct MaxPriceFilter {
    max_price: f64,
}

impl MaxPriceFilter {
    pub fn new(max_price: f64) -> Self {
        Self { max_price }
    }
}

impl ProductPredicate for MaxPriceFilter {
    fn name(&self) -> &str {
        "MaxPriceFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        product.price <= self.max_price
    }
}

/// Keeps products offering the requested size, ignoring case.
pub struct SizeFilter {
    size: String,
}

impl SizeFilter {
    pub fn new(size: &str) -> Self {
        Self {
            size: size.to_lowercase(),
        }
    }
}

impl ProductPredicate for SizeFilter {
    fn name(&self) -> &str {
        "SizeFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        product
            .sizes
            .iter()
            .any(|size| size.to_lowercase() == self.size)
    }
}

/// Conjunction of all predicates built from one request's parameters.
#[derive(Default)]
pub struct FilterSet {
    predicates: Vec<Box<dyn ProductPredicate>>,
}

impl FilterSet {
    pub fn from_params(params: &FilterParameters) -> Self {
        let mut predicates: Vec<Box<dyn ProductPredicate>> = Vec::new();

        if let Some(min_price) = params.min_price {
            predicates.push(Box::new(MinPriceFilter::new(min_price)));
        }

        if let Some(max_price) = params.max_price {
            predicates.push(Box::new(MaxPriceFilter::new(max_price)));
        }

        // 空白的 size 參數視為未提供
        if let Some(size) = params.size.as_deref().filter(|s| !s.trim().is_empty()) {
            predicates.push(Box::new(SizeFilter::new(size)));
        }

        Self { predicates }
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.predicates.iter().all(|p| p.matches(product))
    }

    /// Keeps the matching products in their original order.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        if self.is_empty() {
            return products;
        }

        products
            .into_iter()
            .filter(|product| self.matches(product))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, price: f64, sizes: &[&str]) -> Product {
        Product {
            title: title.to_string(),
            price,
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Product 1", 10.0, &["Small"]),
            product("Product 2", 20.0, &["Medium"]),
            product("Product 3", 30.0, &["Large", "Medium"]),
        ]
    }

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_no_parameters_keeps_everything_in_order() {
        let filters = FilterSet::from_params(&FilterParameters::default());

        assert!(filters.is_empty());
        assert_eq!(
            titles(&filters.apply(catalog())),
            vec!["Product 1", "Product 2", "Product 3"]
        );
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let params = FilterParameters {
            min_price: Some(20.0),
            max_price: Some(30.0),
            ..Default::default()
        };

        let result = FilterSet::from_params(&params).apply(catalog());

        assert_eq!(titles(&result), vec!["Product 2", "Product 3"]);
    }

    #[test]
    fn test_price_range_between_items() {
        let params = FilterParameters {
            min_price: Some(15.0),
            max_price: Some(25.0),
            ..Default::default()
        };

        let result = FilterSet::from_params(&params).apply(catalog());

        assert_eq!(titles(&result), vec!["Product 2"]);
    }

    #[test]
    fn test_inverted_price_range_matches_nothing() {
        let params = FilterParameters {
            min_price: Some(25.0),
            max_price: Some(15.0),
            ..Default::default()
        };

        assert!(FilterSet::from_params(&params).apply(catalog()).is_empty());
    }

    #[test]
    fn test_size_matches_any_size_case_insensitively() {
        let params = FilterParameters {
            size: Some("medium".to_string()),
            ..Default::default()
        };

        let result = FilterSet::from_params(&params).apply(catalog());

        assert_eq!(titles(&result), vec!["Product 2", "Product 3"]);
    }

    #[test]
    fn test_blank_size_is_ignored() {
        let params = FilterParameters {
            size: Some("   ".to_string()),
            ..Default::default()
        };
        let filters = FilterSet::from_params(&params);

        assert!(filters.is_empty());
        assert_eq!(filters.apply(catalog()).len(), 3);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let params = FilterParameters {
            min_price: Some(25.0),
            size: Some("MEDIUM".to_string()),
            ..Default::default()
        };
        let filters = FilterSet::from_params(&params);

        assert_eq!(filters.names(), vec!["MinPriceFilter", "SizeFilter"]);
        assert_eq!(titles(&filters.apply(catalog())), vec!["Product 3"]);
    }

    #[test]
    fn test_empty_catalog() {
        let params = FilterParameters {
            min_price: Some(1.0),
            ..Default::default()
        };

        assert!(FilterSet::from_params(&params).apply(Vec::new()).is_empty());
    }
}
