//! Templated descriptions and SEO fields.
//!
//! Template choice is a fixed FNV-1a over the input bytes, so the same pairing always
//! produces the same text.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
const UNIT_SEPARATOR: u8 = 0x1f;

/// 64-bit FNV-1a over the parts, separated by a unit-separator byte
pub fn stable_hash(parts: &[&str]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            hash ^= u64::from(UNIT_SEPARATOR);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        for byte in part.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    hash
}

fn pick(parts: &[&str], template_count: usize) -> usize {
    (stable_hash(parts) % template_count as u64) as usize
}

pub fn describe_main(name: &str, cuisine: &str) -> String {
    match pick(&[name, cuisine], 4) {
        0 => format!(
            "Indulge in this exquisite {name}, a beloved {cuisine} classic that brings elegance and flavor to any dining table."
        ),
        1 => format!(
            "This traditional {name} represents the finest of {cuisine} cuisine, offering a perfect balance of flavors and textures."
        ),
        2 => format!(
            "A sophisticated {cuisine} masterpiece, this {name} combines time-honored techniques with premium ingredients."
        ),
        _ => format!(
            "Experience the rich culinary heritage of {cuisine} cuisine with this authentic {name}, perfect for special occasions."
        ),
    }
}

pub fn describe_side(name: &str, main_dish: &str) -> String {
    match pick(&[name, main_dish], 4) {
        0 => format!(
            "This delightful {name} perfectly complements {main_dish}, adding wonderful texture and flavor to your meal."
        ),
        1 => format!(
            "A classic accompaniment that enhances the flavors of {main_dish}, this {name} brings balance to your plate."
        ),
        2 => format!(
            "Elevate your {main_dish} with this expertly crafted {name}, a side dish that truly completes the dining experience."
        ),
        _ => format!(
            "The perfect partner for {main_dish}, this {name} adds a delicious dimension to your meal."
        ),
    }
}

pub fn seo_title(name: &str, side_count: usize, site_name: &str) -> String {
    format!("What to Serve with {name} - {side_count} Best Side Dishes | {site_name}")
}

pub fn seo_description(name: &str, cuisine: &str) -> String {
    format!(
        "Discover the perfect side dishes to serve with {name}. From classic {cuisine} pairings to creative modern options, find the best accompaniments for your meal."
    )
}

/// Search keywords for a main dish page. The search query leads when known.
pub fn seo_keywords(name: &str, cuisine: &str, query: Option<&str>) -> Vec<String> {
    let name = name.to_lowercase();
    let lead = match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(query) => query.to_string(),
        None => format!("what to serve with {name}"),
    };

    let candidates = [
        lead,
        format!("{name} side dishes"),
        format!("best sides for {name}"),
        format!("what goes with {name}"),
        format!("{name} accompaniments"),
        format!("{} side dishes", cuisine.to_lowercase()),
    ];

    let mut keywords: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !keywords.iter().any(|k| k.eq_ignore_ascii_case(&candidate)) {
            keywords.push(candidate);
        }
    }
    keywords
}
