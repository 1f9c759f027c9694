//! Fixed sample menu
//!
//! Written to an empty catalog on first read. Ids are UUID v5 of the item
//! name, so every seeder produces the same records and concurrent seeding
//! converges to a single copy.

use shared::models::{MenuCategory, MenuItem};
use uuid::Uuid;

/// Namespace for seed item ids
const SEED_NAMESPACE: Uuid = Uuid::from_u128(0x5b1c_9a7e_3f2d_4e61_8c0a_b4d2_e7f9_1a36);

const IMAGE_BASE: &str = "https://images.unsplash.com/photo-";

struct SeedItem {
    name: &'static str,
    description: &'static str,
    price: f64,
    category: MenuCategory,
    image: &'static str,
    ingredients: &'static [&'static str],
}

const SEED_ITEMS: &[SeedItem] = &[
    // Bakery
    SeedItem {
        name: "Artisan Croissants",
        description: "Buttery, flaky croissants baked fresh daily with French butter",
        price: 3.50,
        category: MenuCategory::Bakery,
        image: "1555507036-ab1f4038808a",
        ingredients: &["French flour", "Butter", "Yeast", "Milk"],
    },
    SeedItem {
        name: "Pain au Chocolat",
        description: "Classic French pastry with rich dark chocolate",
        price: 4.25,
        category: MenuCategory::Bakery,
        image: "1483695028939-5bb13f8648b0",
        ingredients: &["Pastry dough", "Dark chocolate", "Butter"],
    },
    SeedItem {
        name: "Artisan Sourdough Bread",
        description: "Traditional sourdough with a perfect crust and tangy flavor",
        price: 6.50,
        category: MenuCategory::Bakery,
        image: "1534432182912-63863115e106",
        ingredients: &["Sourdough starter", "Organic flour", "Sea salt"],
    },
    SeedItem {
        name: "French Macarons",
        description: "Delicate almond cookies with smooth ganache filling",
        price: 2.75,
        category: MenuCategory::Bakery,
        image: "1556742059-47b93231f536",
        ingredients: &["Almond flour", "Sugar", "Egg whites", "Various flavors"],
    },
    SeedItem {
        name: "Cinnamon Danish",
        description: "Flaky pastry swirled with cinnamon sugar and glaze",
        price: 4.00,
        category: MenuCategory::Bakery,
        image: "1534432182912-63863115e106",
        ingredients: &["Danish dough", "Cinnamon", "Sugar", "Glaze"],
    },
    SeedItem {
        name: "Chocolate Eclair",
        description: "Choux pastry filled with vanilla cream, topped with chocolate",
        price: 4.75,
        category: MenuCategory::Bakery,
        image: "1483695028939-5bb13f8648b0",
        ingredients: &["Choux pastry", "Vanilla cream", "Chocolate glaze"],
    },
    // Cafe
    SeedItem {
        name: "Signature Latte",
        description: "Expertly crafted with our house blend and steamed milk",
        price: 4.50,
        category: MenuCategory::Cafe,
        image: "1509042239860-f550ce710b93",
        ingredients: &["Espresso", "Steamed milk", "Latte art"],
    },
    SeedItem {
        name: "Cappuccino",
        description: "Rich espresso topped with velvety microfoam",
        price: 4.25,
        category: MenuCategory::Cafe,
        image: "1506619216599-9d16d0903dfd",
        ingredients: &["Double espresso", "Steamed milk", "Microfoam"],
    },
    SeedItem {
        name: "Cold Brew Coffee",
        description: "Smooth, refreshing cold brew steeped for 24 hours",
        price: 3.75,
        category: MenuCategory::Cafe,
        image: "1447933601403-0c6688de566e",
        ingredients: &["Cold brew concentrate", "Ice", "Optional milk"],
    },
    SeedItem {
        name: "Caramel Macchiato",
        description: "Vanilla syrup, steamed milk, espresso, and caramel drizzle",
        price: 5.25,
        category: MenuCategory::Cafe,
        image: "1518057111178-44a106bad636",
        ingredients: &["Espresso", "Vanilla syrup", "Steamed milk", "Caramel"],
    },
    SeedItem {
        name: "Green Tea Latte",
        description: "Premium matcha powder with steamed milk and honey",
        price: 4.75,
        category: MenuCategory::Cafe,
        image: "1509042239860-f550ce710b93",
        ingredients: &["Matcha powder", "Steamed milk", "Honey"],
    },
    SeedItem {
        name: "Hot Chocolate",
        description: "Rich Belgian chocolate with whipped cream and marshmallows",
        price: 4.00,
        category: MenuCategory::Cafe,
        image: "1506619216599-9d16d0903dfd",
        ingredients: &["Belgian chocolate", "Steamed milk", "Whipped cream"],
    },
    SeedItem {
        name: "Spiced Meat Patty Burger",
        description: "Juicy beef patty seasoned with our secret spice blend, served on fresh brioche",
        price: 8.99,
        category: MenuCategory::Cafe,
        image: "1518057111178-44a106bad636",
        ingredients: &["Beef patty", "Brioche bun", "Secret spices", "Fresh lettuce"],
    },
    SeedItem {
        name: "Garden Veggie Patty",
        description: "House-made quinoa and black bean patty with avocado and fresh herbs",
        price: 7.99,
        category: MenuCategory::Cafe,
        image: "1509042239860-f550ce710b93",
        ingredients: &["Quinoa", "Black beans", "Avocado", "Fresh herbs"],
    },
    SeedItem {
        name: "Grilled Chicken Sandwich",
        description: "Tender grilled chicken breast with pesto and sundried tomatoes",
        price: 9.50,
        category: MenuCategory::Cafe,
        image: "1447933601403-0c6688de566e",
        ingredients: &["Chicken breast", "Pesto sauce", "Sundried tomatoes", "Ciabatta"],
    },
    SeedItem {
        name: "Fresh Breakfast Wrap",
        description: "Scrambled eggs, crispy bacon, and cheese wrapped in a warm tortilla",
        price: 6.75,
        category: MenuCategory::Cafe,
        image: "1518057111178-44a106bad636",
        ingredients: &["Eggs", "Bacon", "Cheese", "Tortilla wrap"],
    },
];

/// Deterministic id for a seed item
pub fn seed_id(name: &str) -> String {
    Uuid::new_v5(&SEED_NAMESPACE, name.as_bytes()).to_string()
}

/// The full sample menu, bakery items first
pub fn sample_menu() -> Vec<MenuItem> {
    SEED_ITEMS
        .iter()
        .map(|s| MenuItem {
            id: seed_id(s.name),
            name: s.name.to_string(),
            description: s.description.to_string(),
            price: s.price,
            category: s.category,
            image: format!("{}{}", IMAGE_BASE, s.image),
            ingredients: s.ingredients.iter().map(|i| i.to_string()).collect(),
            available: true,
        })
        .collect()
}
