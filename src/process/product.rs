use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Product categories offered by the selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProductId {
    #[default]
    Fruit,
    Vegetables,
    Meat,
    Prepared,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product category `{0}`")]
pub struct UnknownProduct(pub String);

impl ProductId {
    /// Stable key used in storage.
    pub fn key(self) -> &'static str {
        match self {
            ProductId::Fruit => "fruit",
            ProductId::Vegetables => "vegetables",
            ProductId::Meat => "meat",
            ProductId::Prepared => "prepared",
        }
    }

    /// Catalog record for this category.
    pub fn product(self) -> &'static Product {
        match self {
            ProductId::Fruit => &CATALOG[0],
            ProductId::Vegetables => &CATALOG[1],
            ProductId::Meat => &CATALOG[2],
            ProductId::Prepared => &CATALOG[3],
        }
    }
}

impl FromStr for ProductId {
    type Err = UnknownProduct;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .map(|p| p.id)
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownProduct(s.to_string()))
    }
}

/// A selectable food category and its display metadata.
#[derive(Debug, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    /// Theme token; maps to a `product--{color}` CSS class
    pub color: &'static str,
    /// First entry is the canonical example used in narrative text.
    pub examples: &'static [&'static str],
    pub description: &'static str,
    pub glyph: &'static str,
    /// "Why freeze-dry" lines shown once the cycle is complete.
    pub benefits: &'static [&'static str],
}

impl Product {
    /// Canonical display example, e.g. "Strawberries".
    pub fn example(&self) -> &'static str {
        self.examples[0]
    }

    /// Comma-separated list of all examples.
    pub fn examples_line(&self) -> String {
        self.examples.join(", ")
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The four product categories, in selector order.
pub static CATALOG: [Product; 4] = [
    Product {
        id: ProductId::Fruit,
        name: "Fruits",
        color: "fruit",
        examples: &["Strawberries", "Apples", "Bananas", "Blueberries"],
        description: "High water content fruits that preserve their shape and nutrition",
        glyph: "\u{1F353}",
        benefits: &[
            "Maintains natural sweetness and vitamins",
            "Perfect for snacks and cereals",
            "Lightweight for hiking and camping",
        ],
    },
    Product {
        id: ProductId::Vegetables,
        name: "Vegetables",
        color: "vegetables",
        examples: &["Carrots", "Peas", "Corn", "Bell Peppers"],
        description: "Nutrient-rich vegetables that maintain their cellular structure",
        glyph: "\u{1F955}",
        benefits: &[
            "Preserves nutrients and minerals",
            "Ideal for soups and instant meals",
            "No additives or preservatives needed",
        ],
    },
    Product {
        id: ProductId::Meat,
        name: "Meat & Protein",
        color: "meat",
        examples: &["Beef", "Chicken", "Fish", "Turkey"],
        description: "Protein-rich foods that retain texture and flavor",
        glyph: "\u{1F969}",
        benefits: &[
            "Retains protein structure and taste",
            "Extended storage without refrigeration",
            "Perfect for emergency food supplies",
        ],
    },
    Product {
        id: ProductId::Prepared,
        name: "Dairy",
        color: "dairy",
        examples: &["Milk", "Cheese", "Yogurt", "Ice Cream"],
        description: "Dairy products that preserve nutritional value and extend shelf life",
        glyph: "\u{1F95B}",
        benefits: &[
            "Complete meals ready in minutes",
            "Maintains complex flavors and textures",
            "Convenient for busy lifestyles",
        ],
    },
];
