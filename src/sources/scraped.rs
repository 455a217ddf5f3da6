use crate::assembler::{capitalize_words, resolve_main_dish};
use crate::error::ImportError;
use crate::model::{PairingInput, SideCandidate};
use crate::sources::catalog::standard_sides;
use log::debug;
use serde_json::Value;

/// Items with fewer side candidates are topped up with standard sides
pub const DEFAULT_MIN_SIDES: usize = 5;

const SIDE_LIST_KEYS: &[&str] = &["side_dishes", "sideDishes", "searchResults"];

const MARKDOWN_SIDE_KEYWORDS: &[&str] = &[
    "salad", "bread", "rice", "potatoes", "beans", "vegetables", "asparagus", "broccoli",
    "carrots", "corn", "pasta", "noodles", "soup", "rolls", "pilaf", "coleslaw", "quinoa",
    "couscous",
];

/// Parse a JSON array of scrape results, one input per array item
pub fn parse_scraped(
    json: &str,
    min_sides: usize,
) -> Result<Vec<Result<PairingInput, ImportError>>, ImportError> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(_) => vec![value],
        _ => {
            return Err(ImportError::MalformedRow(
                "expected a JSON array of scrape results".to_string(),
            ))
        }
    };

    Ok(items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_item(index, item, min_sides))
        .collect())
}

/// First non-blank string among `keys`
fn text_field<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| item.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
}

fn side_candidate(value: &Value) -> Option<SideCandidate> {
    match value {
        Value::String(name) if !name.trim().is_empty() => Some(SideCandidate::named(name.trim())),
        Value::Object(_) => {
            let name = text_field(value, &["name", "title"])?;
            Some(SideCandidate {
                name: name.to_string(),
                description: text_field(value, &["description", "summary"]).map(str::to_string),
            })
        }
        _ => None,
    }
}

fn parse_item(index: usize, item: &Value, min_sides: usize) -> Result<PairingInput, ImportError> {
    if !item.is_object() {
        return Err(ImportError::MalformedRow(format!(
            "scrape result {} is not an object",
            index + 1
        )));
    }

    let mut sides: Vec<SideCandidate> = SIDE_LIST_KEYS
        .iter()
        .filter_map(|key| item.get(key).and_then(Value::as_array))
        .flatten()
        .filter_map(side_candidate)
        .collect();

    if let Some(markdown) = item.get("markdown").and_then(Value::as_str) {
        sides.extend(
            extract_sides_from_markdown(markdown)
                .into_iter()
                .map(SideCandidate::named),
        );
    }

    let mut input = PairingInput {
        keyword: text_field(item, &["query", "keyword"]).map(str::to_string),
        main_dish: text_field(item, &["main_dish", "mainDish", "name"]).map(str::to_string),
        sides,
        infer_dish_types: true,
    };

    if input.sides.len() < min_sides {
        if let Some(main) = resolve_main_dish(&input) {
            debug!(
                "Topping up {} scraped sides for {} with standard sides",
                input.sides.len(),
                main
            );
            input
                .sides
                .extend(standard_sides(&main).into_iter().map(SideCandidate::named));
        }
    }

    Ok(input)
}

/// Strip a leading bullet or `1.` / `1)` numbering; `None` when the line is not a list item
fn strip_list_marker(line: &str) -> Option<&str> {
    let line = line.trim_start();
    if let Some(rest) = line.strip_prefix(&['-', '*', '•', '+'][..]) {
        return Some(rest);
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(&['.', ')'][..])
}

/// Keep the text of a markdown link and drop emphasis and bracket characters
fn clean_list_text(text: &str) -> String {
    let text = match (text.find('['), text.find("](")) {
        (Some(open), Some(close)) if open < close => &text[open + 1..close],
        _ => text,
    };
    text.chars()
        .filter(|c| !matches!(c, '*' | '_' | '#' | '[' | ']' | '(' | ')'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Side dish names mentioned as list items in a markdown page
pub fn extract_sides_from_markdown(markdown: &str) -> Vec<String> {
    markdown
        .lines()
        .filter(|line| line.chars().count() < 100)
        .filter(|line| {
            let lower = line.to_lowercase();
            MARKDOWN_SIDE_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .filter_map(strip_list_marker)
        .map(clean_list_text)
        .filter(|name| {
            let len = name.chars().count();
            len > 3 && len < 50 && !name.to_lowercase().contains("http")
        })
        .map(|name| capitalize_words(&name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(input: &PairingInput) -> Vec<&str> {
        input.sides.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_parse_strings_and_objects() {
        let json = r#"[
            {
                "query": "what to serve with chicken biryani",
                "searchResults": [
                    {"title": "Cucumber Raita", "description": "Cool vegetarian yogurt dip"},
                    "Garlic Naan",
                    {"name": "Onion Salad"},
                    {"description": "no name"},
                    "Mint Chutney",
                    "Papadum"
                ]
            }
        ]"#;

        let rows = parse_scraped(json, DEFAULT_MIN_SIDES).unwrap();
        let input = rows[0].as_ref().unwrap();
        assert_eq!(
            input.keyword.as_deref(),
            Some("what to serve with chicken biryani")
        );
        assert!(input.infer_dish_types);
        assert_eq!(
            names(input),
            vec![
                "Cucumber Raita",
                "Garlic Naan",
                "Onion Salad",
                "Mint Chutney",
                "Papadum"
            ]
        );
        assert_eq!(
            input.sides[0].description.as_deref(),
            Some("Cool vegetarian yogurt dip")
        );
    }

    #[test]
    fn test_short_lists_are_topped_up() {
        let json = r#"[{"main_dish": "Beef Wellington", "side_dishes": ["Creamed Spinach"]}]"#;
        let rows = parse_scraped(json, DEFAULT_MIN_SIDES).unwrap();
        let input = rows[0].as_ref().unwrap();
        assert_eq!(input.sides.len(), 6);
        assert_eq!(input.sides[0].name, "Creamed Spinach");
        assert_eq!(input.sides[1].name, "Roasted Potatoes");
    }

    #[test]
    fn test_no_top_up_without_main_dish() {
        let json = r#"[{"sideDishes": ["Rice"]}]"#;
        let rows = parse_scraped(json, DEFAULT_MIN_SIDES).unwrap();
        let input = rows[0].as_ref().unwrap();
        assert_eq!(input.sides.len(), 1);
        assert!(input.label().is_none());
    }

    #[test]
    fn test_non_object_items_are_errors() {
        let json = r#"[{"name": "Pizza", "side_dishes": []}, 42]"#;
        let rows = parse_scraped(json, 0).unwrap();
        assert!(rows[0].is_ok());
        assert!(matches!(rows[1], Err(ImportError::MalformedRow(_))));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            parse_scraped("not json", 5),
            Err(ImportError::JsonError(_))
        ));
        assert!(matches!(
            parse_scraped("\"text\"", 5),
            Err(ImportError::MalformedRow(_))
        ));
    }

    #[test]
    fn test_markdown_extraction() {
        let markdown = "\
# Best Side Dishes for Beef Stroganoff
Rice is a classic choice for many reasons.
- Buttered egg noodles
* **Steamed Rice**
1. [Roasted Carrots](https://example.com/carrots)
2) green beans with almonds
- see https://example.com/salad
- rice
";
        let sides = extract_sides_from_markdown(markdown);
        assert_eq!(
            sides,
            vec![
                "Buttered Egg Noodles",
                "Steamed Rice",
                "Roasted Carrots",
                "Green Beans With Almonds",
                "Rice",
            ]
        );
    }

    #[test]
    fn test_markdown_sides_join_item() {
        let json = r##"[{
            "query": "what to serve with beef stroganoff",
            "markdown": "- Mashed Potatoes\n- Egg Noodles\n- Steamed Broccoli\n- Green Salad\n- Dinner Rolls"
        }]"##;
        let rows = parse_scraped(json, DEFAULT_MIN_SIDES).unwrap();
        let input = rows[0].as_ref().unwrap();
        assert_eq!(input.sides.len(), 5);
        assert_eq!(input.sides[1].name, "Egg Noodles");
    }
}
