use crate::model::{PairingInput, SideCandidate};
use log::debug;
use scraper::{ElementRef, Html, Selector};

/// Heading phrases that introduce a list of side dishes
const SECTION_MARKERS: &[&str] = &["side", "serve with", "accompaniment"];

const MIN_NAME_CHARS: usize = 3;
const MAX_NAME_CHARS: usize = 100;

/// Side dish names found on one saved page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlSides {
    /// Text of the page's first `h1`
    pub title: Option<String>,
    pub sides: Vec<String>,
}

fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_heading(element: &ElementRef) -> bool {
    matches!(element.value().name(), "h1" | "h2" | "h3")
}

fn keep_name(name: &str) -> bool {
    (MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&name.chars().count())
}

/// Collect the list items that follow side dish headings (h2/h3)
pub fn extract_side_dishes(html: &str) -> HtmlSides {
    let document = Html::parse_document(html);

    let title = Selector::parse("h1")
        .ok()
        .and_then(|selector| document.select(&selector).next().map(element_text))
        .filter(|text| !text.is_empty());

    let (Ok(headings), Ok(items)) = (Selector::parse("h2, h3"), Selector::parse("li")) else {
        return HtmlSides {
            title,
            sides: Vec::new(),
        };
    };

    let mut sides = Vec::new();
    for heading in document.select(&headings) {
        let heading_text = element_text(heading).to_lowercase();
        if !SECTION_MARKERS.iter().any(|m| heading_text.contains(m)) {
            continue;
        }
        debug!("Found side dish section: {}", heading_text);

        for sibling in heading.next_siblings().filter_map(ElementRef::wrap) {
            if is_heading(&sibling) {
                break;
            }
            if sibling.value().name() == "li" {
                sides.push(element_text(sibling));
            } else {
                sides.extend(sibling.select(&items).map(element_text));
            }
        }
    }
    sides.retain(|name| keep_name(name));

    HtmlSides { title, sides }
}

/// Turn parsed pages into importer inputs.
///
/// With an explicit `dish` all pages feed a single pairing; otherwise each page becomes its
/// own pairing keyed by its title.
pub fn pages_to_inputs(pages: Vec<HtmlSides>, dish: Option<&str>) -> Vec<PairingInput> {
    let to_candidates =
        |sides: Vec<String>| sides.into_iter().map(SideCandidate::named).collect::<Vec<_>>();

    match dish {
        Some(dish) => {
            let sides = pages.into_iter().flat_map(|page| page.sides).collect();
            let mut input = PairingInput::for_dish(dish, to_candidates(sides));
            input.infer_dish_types = true;
            vec![input]
        }
        None => pages
            .into_iter()
            .map(|page| PairingInput {
                keyword: page.title,
                main_dish: None,
                sides: to_candidates(page.sides),
                infer_dish_types: true,
            })
            .collect(),
    }
}
