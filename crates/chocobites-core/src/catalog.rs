//! The static product catalog.
//!
//! Products are compile-time constants; the menu pages only ever read them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Cookies,
    Brownies,
    SpecialPacks,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cookies, Category::Brownies, Category::SpecialPacks];

    /// Slug used in `/menu?category=` links.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Cookies => "cookies",
            Category::Brownies => "brownies",
            Category::SpecialPacks => "special-packs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Cookies => "Cookies",
            Category::Brownies => "Brownies",
            Category::SpecialPacks => "Special Packs",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NutritionalInfo {
    pub calories: u32,
    /// Grams.
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    /// Price in cents, to keep arithmetic exact.
    pub price_cents: u32,
    pub image: &'static str,
    pub category: Category,
    pub ingredients: &'static [&'static str],
    pub nutrition: Option<NutritionalInfo>,
    pub allergens: &'static [&'static str],
}

impl Product {
    pub fn price(&self) -> String {
        format_price(self.price_cents)
    }

    pub fn allergen_summary(&self) -> Option<String> {
        if self.allergens.is_empty() {
            None
        } else {
            Some(format!("Contains: {}", self.allergens.join(", ")))
        }
    }
}

pub static MENU_ITEMS: [Product; 5] = [
    Product {
        id: 1,
        name: "Classic Chocolate Chip Cookies",
        description: "Our signature cookies made with premium chocolate chips",
        long_description: Some(
            "Indulge in our signature chocolate chip cookies, crafted with premium Belgian chocolate chips and pure vanilla extract. Each cookie is carefully baked to achieve the perfect balance of crispy edges and a soft, chewy center.",
        ),
        price_cents: 1299,
        image: "/images/1KG CHOLATE CHIPS.jpg",
        category: Category::Cookies,
        ingredients: &[
            "Premium flour",
            "Belgian chocolate chips",
            "Brown sugar",
            "Farm-fresh eggs",
            "Pure vanilla extract",
        ],
        nutrition: Some(NutritionalInfo {
            calories: 150,
            protein: 2,
            carbs: 19,
            fat: 8,
        }),
        allergens: &["Wheat", "Eggs", "Milk"],
    },
    Product {
        id: 2,
        name: "Fudgy Brownies",
        description: "Rich, fudgy brownies with a perfect crackly top",
        long_description: Some(
            "Experience pure chocolate bliss with our fudgy brownies. Made with high-quality cocoa and real chocolate, these brownies feature our signature crackly top and dense, rich center.",
        ),
        price_cents: 1599,
        image: "/images/brownies.jpg",
        category: Category::Brownies,
        ingredients: &[
            "Dark chocolate",
            "Premium cocoa",
            "Fresh butter",
            "Farm-fresh eggs",
            "Pure vanilla extract",
        ],
        nutrition: Some(NutritionalInfo {
            calories: 180,
            protein: 3,
            carbs: 21,
            fat: 10,
        }),
        allergens: &["Wheat", "Eggs", "Milk"],
    },
    Product {
        id: 3,
        name: "Butter Cookie Collection",
        description: "Assorted butter cookies in various shapes",
        long_description: Some(
            "A delightful assortment of our classic butter cookies, featuring different shapes and textures. Each cookie is made with premium European butter for that perfect melt-in-your-mouth experience.",
        ),
        price_cents: 1499,
        image: "/images/butter.jpg",
        category: Category::Cookies,
        ingredients: &[
            "European butter",
            "Premium flour",
            "Pure vanilla",
            "Cane sugar",
        ],
        nutrition: Some(NutritionalInfo {
            calories: 140,
            protein: 1,
            carbs: 16,
            fat: 9,
        }),
        allergens: &["Wheat", "Milk"],
    },
    Product {
        id: 4,
        name: "Cinnamon Roll Cookies",
        description: "Swirled cookies with cinnamon sugar filling",
        long_description: Some(
            "Our unique take on classic cinnamon rolls in cookie form. These swirled treats feature a buttery cookie base with a generous cinnamon-sugar filling throughout.",
        ),
        price_cents: 1399,
        image: "/images/cinnamon.jpg",
        category: Category::Cookies,
        ingredients: &[
            "Premium flour",
            "Ceylon cinnamon",
            "Brown sugar",
            "European butter",
            "Pure vanilla extract",
        ],
        nutrition: Some(NutritionalInfo {
            calories: 160,
            protein: 2,
            carbs: 20,
            fat: 8,
        }),
        allergens: &["Wheat", "Milk"],
    },
    Product {
        id: 5,
        name: "Special Pack - 1kg Assortment",
        description: "A curated selection of our most popular treats",
        long_description: Some(
            "The perfect way to experience our best-selling treats. This 1kg assortment includes our classic chocolate chip cookies, butter cookies, and cinnamon roll cookies.",
        ),
        price_cents: 2499,
        image: "/images/1kg ch.jpg",
        category: Category::SpecialPacks,
        ingredients: &["Various premium ingredients from our best-selling items"],
        nutrition: Some(NutritionalInfo {
            calories: 150,
            protein: 2,
            carbs: 18,
            fat: 8,
        }),
        allergens: &["Wheat", "Eggs", "Milk"],
    },
];

pub fn find_product(id: u32) -> Option<&'static Product> {
    MENU_ITEMS.iter().find(|p| p.id == id)
}

/// Selected category on the menu page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse the `category` query parameter. Anything unrecognised shows everything.
    pub fn from_query(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") | Some("all") => CategoryFilter::All,
            Some(slug) => Category::from_slug(slug)
                .map(CategoryFilter::Only)
                .unwrap_or_default(),
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.slug(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Items",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => product.category == c,
        }
    }
}

pub fn filter_products(filter: CategoryFilter) -> Vec<&'static Product> {
    MENU_ITEMS.iter().filter(|p| filter.matches(p)).collect()
}

/// One button in the menu page's category bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub count: usize,
}

/// "All Items" followed by each distinct category in first-appearance order.
pub fn category_tabs() -> Vec<CategoryTab> {
    let mut seen: Vec<Category> = Vec::new();
    for product in MENU_ITEMS.iter() {
        if !seen.contains(&product.category) {
            seen.push(product.category);
        }
    }

    std::iter::once(CategoryFilter::All)
        .chain(seen.into_iter().map(CategoryFilter::Only))
        .map(|filter| CategoryTab {
            filter,
            label: filter.label(),
            count: MENU_ITEMS.iter().filter(|p| filter.matches(p)).count(),
        })
        .collect()
}

pub fn featured_products(n: usize) -> &'static [Product] {
    &MENU_ITEMS[..n.min(MENU_ITEMS.len())]
}

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
