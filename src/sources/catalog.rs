use crate::model::PairingInput;

/// Well-known pairings shipped with the importer
const CATALOG: &[(&str, &[&str])] = &[
    (
        "Chicken Biryani",
        &[
            "Cucumber Raita",
            "Garlic Naan",
            "Onion Salad",
            "Mint Chutney",
            "Papadum",
            "Mango Lassi",
            "Pickled Vegetables",
            "Basmati Rice Pulao",
            "Dal Tadka",
            "Vegetable Korma",
            "Tandoori Roti",
            "Kachumber Salad",
            "Roasted Cashews",
            "Saffron Rice",
            "Aloo Gobi",
        ],
    ),
    (
        "Grilled Salmon",
        &[
            "Asparagus",
            "Lemon Rice",
            "Caesar Salad",
            "Roasted Potatoes",
            "Garlic Butter Green Beans",
            "Quinoa Salad",
            "Coleslaw",
            "Grilled Vegetables",
            "Mashed Sweet Potatoes",
            "Spinach Salad",
            "Wild Rice Pilaf",
            "Roasted Brussels Sprouts",
            "Cucumber Dill Salad",
            "Herb Roasted Carrots",
            "Caprese Salad",
        ],
    ),
    (
        "BBQ Ribs",
        &[
            "Coleslaw",
            "Baked Beans",
            "Corn on the Cob",
            "Mac and Cheese",
            "Potato Salad",
            "Cornbread",
            "French Fries",
            "Onion Rings",
            "Pickles",
            "Grilled Vegetables",
            "Sweet Potato Fries",
            "Garden Salad",
            "Jalapeño Poppers",
            "Fried Okra",
            "Watermelon Salad",
        ],
    ),
    (
        "Pasta Carbonara",
        &[
            "Caesar Salad",
            "Garlic Bread",
            "Bruschetta",
            "Caprese Salad",
            "Arugula Salad",
            "Focaccia",
            "Roasted Tomatoes",
            "Italian Green Beans",
            "Antipasto Platter",
            "Grilled Asparagus",
            "Minestrone Soup",
            "Olive Tapenade",
            "Roasted Red Peppers",
            "Zucchini Fritti",
            "Tiramisu",
        ],
    ),
    (
        "Beef Tacos",
        &[
            "Mexican Rice",
            "Refried Beans",
            "Guacamole",
            "Pico de Gallo",
            "Corn Salad",
            "Chips and Salsa",
            "Black Beans",
            "Elote",
            "Cilantro Lime Rice",
            "Nachos",
            "Quesadillas",
            "Mexican Street Corn",
            "Churros",
            "Flan",
            "Margaritas",
        ],
    ),
    (
        "Pad Thai",
        &[
            "Spring Rolls",
            "Tom Yum Soup",
            "Papaya Salad",
            "Coconut Rice",
            "Thai Cucumber Salad",
            "Satay Skewers",
            "Mango Sticky Rice",
            "Tom Kha Gai",
            "Thai Fish Cakes",
            "Larb Salad",
            "Fried Wontons",
            "Thai Iced Tea",
            "Green Curry",
            "Pad See Ew",
            "Thai Basil Stir Fry",
        ],
    ),
    (
        "Roast Chicken",
        &[
            "Roasted Potatoes",
            "Green Beans",
            "Gravy",
            "Yorkshire Pudding",
            "Roasted Carrots",
            "Stuffing",
            "Cranberry Sauce",
            "Mashed Potatoes",
            "Garden Salad",
            "Roasted Root Vegetables",
            "Bread Rolls",
            "Corn Pudding",
            "Glazed Carrots",
            "Rice Pilaf",
            "Apple Sauce",
        ],
    ),
    (
        "Sushi",
        &[
            "Miso Soup",
            "Edamame",
            "Seaweed Salad",
            "Tempura",
            "Gyoza",
            "Agedashi Tofu",
            "Sunomono",
            "Chicken Karaage",
            "Takoyaki",
            "Yakitori",
            "Shrimp Tempura",
            "Cucumber Salad",
            "Green Tea Ice Cream",
            "Mochi",
            "Sake",
        ],
    ),
    (
        "Lamb Curry",
        &[
            "Basmati Rice",
            "Naan Bread",
            "Raita",
            "Mango Chutney",
            "Papadum",
            "Samosas",
            "Bhindi Masala",
            "Aloo Paratha",
            "Dal Makhani",
            "Paneer Tikka",
            "Mint Chutney",
            "Onion Bhaji",
            "Lassi",
            "Kulfi",
            "Gulab Jamun",
        ],
    ),
    (
        "Pizza",
        &[
            "Caesar Salad",
            "Garlic Knots",
            "Buffalo Wings",
            "Mozzarella Sticks",
            "Breadsticks",
            "Antipasto Salad",
            "Bruschetta",
            "Fried Calamari",
            "Caprese Skewers",
            "Zucchini Sticks",
            "Greek Salad",
            "Jalapeño Poppers",
            "Onion Rings",
            "Tiramisu",
            "Gelato",
        ],
    ),
    (
        "Steak",
        &[
            "Baked Potato",
            "Asparagus",
            "Caesar Salad",
            "Garlic Mashed Potatoes",
            "Creamed Spinach",
            "Mac and Cheese",
            "Grilled Mushrooms",
            "Onion Rings",
            "Wedge Salad",
            "Roasted Brussels Sprouts",
            "Sweet Potato Fries",
            "Lobster Tail",
            "Red Wine Reduction",
            "Béarnaise Sauce",
            "Chocolate Lava Cake",
        ],
    ),
    (
        "Fish and Chips",
        &[
            "Mushy Peas",
            "Tartar Sauce",
            "Coleslaw",
            "Pickled Onions",
            "Curry Sauce",
            "Lemon Wedges",
            "Malt Vinegar",
            "Bread and Butter",
            "Baked Beans",
            "Chip Shop Curry",
            "Pickled Gherkins",
            "Garden Peas",
            "Onion Rings",
            "Scotch Egg",
            "Sticky Toffee Pudding",
        ],
    ),
    (
        "Beef Wellington",
        &[
            "Roasted Potatoes",
            "Yorkshire Pudding",
            "Glazed Carrots",
            "Green Beans",
            "Horseradish Sauce",
            "Creamed Spinach",
            "Red Wine Gravy",
            "Potato Gratin",
            "Roasted Parsnips",
            "Steamed Asparagus",
        ],
    ),
    (
        "Coq au Vin",
        &[
            "Crusty Bread",
            "Mashed Potatoes",
            "Buttered Egg Noodles",
            "Green Beans Almondine",
            "Garden Salad",
            "Roasted Carrots",
            "Potato Gratin",
            "Steamed Rice",
        ],
    ),
];

/// Fallback side families, checked in order against the lowercased main dish name
const STANDARD_SIDES: &[(&[&str], [&str; 5])] = &[
    (
        &["parmesan", "marsala", "cacciatore", "alfredo"],
        [
            "Garlic Bread",
            "Caesar Salad",
            "Roasted Vegetables",
            "Caprese Salad",
            "Focaccia",
        ],
    ),
    (
        &["tikka", "masala", "curry"],
        [
            "Basmati Rice",
            "Naan Bread",
            "Cucumber Raita",
            "Mango Chutney",
            "Papadum",
        ],
    ),
    (
        &["enchiladas", "fajitas", "tacos"],
        [
            "Spanish Rice",
            "Refried Beans",
            "Guacamole",
            "Corn Salad",
            "Tortilla Chips",
        ],
    ),
    (
        &["teriyaki", "sushi"],
        [
            "Steamed Rice",
            "Miso Soup",
            "Edamame",
            "Cucumber Salad",
            "Tempura Vegetables",
        ],
    ),
    (
        &["brisket", "ribs", "bbq"],
        [
            "Coleslaw",
            "Baked Beans",
            "Cornbread",
            "Mac and Cheese",
            "Potato Salad",
        ],
    ),
    (
        &["roast", "prime rib", "wellington"],
        [
            "Roasted Potatoes",
            "Yorkshire Pudding",
            "Green Beans",
            "Glazed Carrots",
            "Horseradish Sauce",
        ],
    ),
];

const DEFAULT_SIDES: [&str; 5] = [
    "Mashed Potatoes",
    "Green Salad",
    "Roasted Vegetables",
    "Dinner Rolls",
    "Rice Pilaf",
];

/// Five generic sides suited to a main dish
pub fn standard_sides(main_dish: &str) -> [&'static str; 5] {
    let lower = main_dish.to_lowercase();
    STANDARD_SIDES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, sides)| *sides)
        .unwrap_or(DEFAULT_SIDES)
}

/// The built-in pairing table as importer inputs
pub fn catalog_inputs() -> Vec<PairingInput> {
    CATALOG
        .iter()
        .map(|(main, sides)| PairingInput::for_dish(*main, sides.iter().copied()))
        .collect()
}
