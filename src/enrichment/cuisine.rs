/// Label returned when no keyword matches
pub const INTERNATIONAL: &str = "International";

/// Keyword → cuisine table. Order matters: the first keyword found in the name wins,
/// regardless of where in the name it occurs.
const CUISINE_KEYWORDS: &[(&str, &str)] = &[
    // British
    ("wellington", "British"),
    ("shepherd", "British"),
    ("cottage pie", "British"),
    ("fish and chips", "British"),
    ("roast beef", "British"),
    ("yorkshire", "British"),
    // French
    ("coq au vin", "French"),
    ("bourguignon", "French"),
    ("ratatouille", "French"),
    ("cassoulet", "French"),
    ("cordon bleu", "French"),
    ("nicoise", "French"),
    // Italian
    ("pasta", "Italian"),
    ("lasagna", "Italian"),
    ("risotto", "Italian"),
    ("parmesan", "Italian"),
    ("marsala", "Italian"),
    ("alfredo", "Italian"),
    ("carbonara", "Italian"),
    ("bolognese", "Italian"),
    ("piccata", "Italian"),
    ("cacciatore", "Italian"),
    ("pizza", "Italian"),
    // Indian
    ("tikka", "Indian"),
    ("masala", "Indian"),
    ("biryani", "Indian"),
    ("curry", "Indian"),
    ("tandoori", "Indian"),
    ("korma", "Indian"),
    ("vindaloo", "Indian"),
    ("dal", "Indian"),
    // Japanese
    ("teriyaki", "Japanese"),
    ("sushi", "Japanese"),
    ("tempura", "Japanese"),
    // Thai
    ("pad thai", "Thai"),
    ("satay", "Thai"),
    ("tom yum", "Thai"),
    // Chinese
    ("stir fry", "Chinese"),
    ("kung pao", "Chinese"),
    ("sweet and sour", "Chinese"),
    // Mexican
    ("tacos", "Mexican"),
    ("enchiladas", "Mexican"),
    ("fajitas", "Mexican"),
    ("burrito", "Mexican"),
    ("quesadilla", "Mexican"),
    ("carnitas", "Mexican"),
    // American
    ("bbq", "American"),
    ("ribs", "American"),
    ("burger", "American"),
    ("meatloaf", "American"),
    ("fried chicken", "American"),
    ("mac and cheese", "American"),
    ("brisket", "American"),
    ("pulled pork", "American"),
    // Other
    ("paella", "Spanish"),
    ("tapas", "Spanish"),
    ("moussaka", "Greek"),
    ("souvlaki", "Greek"),
    ("schnitzel", "German"),
    ("sauerbraten", "German"),
    ("stroganoff", "Russian"),
    ("borscht", "Russian"),
];

/// Classify a dish name into a cuisine label, falling back to [`INTERNATIONAL`].
pub fn classify_cuisine(dish_name: &str) -> &'static str {
    let lower = dish_name.to_lowercase();
    CUISINE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, cuisine)| *cuisine)
        .unwrap_or(INTERNATIONAL)
}
