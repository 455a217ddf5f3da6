use crate::error::ImportError;
use crate::model::{PairingInput, SideCandidate, MAX_SIDE_DISHES};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::io::Read;
use std::path::Path;

const CANDIDATE_DELIMITERS: &[u8] = b",;\t|";
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Pick the candidate delimiter occurring most often in the header line
fn detect_delimiter(header_line: &[u8]) -> u8 {
    CANDIDATE_DELIMITERS
        .iter()
        .copied()
        .map(|d| (d, header_line.iter().filter(|b| **b == d).count()))
        .filter(|(_, count)| *count > 0)
        // first candidate wins a tie
        .fold(None, |best: Option<(u8, usize)>, (d, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((d, count)),
        })
        .map(|(d, _)| d)
        .unwrap_or(b',')
}

struct Columns {
    keyword: Option<usize>,
    main_dish: Option<usize>,
    sides: Vec<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, ImportError> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let keyword = position("keyword");
        let main_dish = position("main_dish");
        if keyword.is_none() && main_dish.is_none() {
            return Err(ImportError::MalformedRow(
                "CSV header needs a keyword or main_dish column".to_string(),
            ));
        }

        let sides = (1..=MAX_SIDE_DISHES)
            .filter_map(|n| position(&format!("side_dish_{n}")))
            .collect();

        Ok(Self {
            keyword,
            main_dish,
            sides,
        })
    }

    fn to_input(&self, record: &StringRecord) -> PairingInput {
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        PairingInput {
            keyword: field(self.keyword),
            main_dish: field(self.main_dish),
            sides: self
                .sides
                .iter()
                .filter_map(|i| field(Some(*i)))
                .map(SideCandidate::named)
                .collect(),
            infer_dish_types: false,
        }
    }
}

/// Read a CSV master list.
///
/// The outer error covers an unreadable source or header; each record then yields its own
/// `Result`, so a record with bad bytes fails alone.
pub fn read_csv<R: Read>(mut reader: R) -> Result<Vec<Result<PairingInput, ImportError>>, ImportError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(&data[..]);

    let header_line = data.split(|b| *b == b'\n').next().unwrap_or_default();
    let delimiter = detect_delimiter(header_line);
    debug!("Detected CSV delimiter {:?}", delimiter as char);

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(data);

    let columns = Columns::from_headers(csv_reader.headers()?)?;

    Ok(csv_reader
        .records()
        .map(|record| record.map(|r| columns.to_input(&r)).map_err(ImportError::from))
        .collect())
}

pub fn read_csv_path(path: &Path) -> Result<Vec<Result<PairingInput, ImportError>>, ImportError> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(input: &PairingInput) -> Vec<&str> {
        input.sides.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter(b"keyword,side_dish_1,side_dish_2"), b',');
        assert_eq!(detect_delimiter(b"keyword;side_dish_1;side_dish_2"), b';');
        assert_eq!(detect_delimiter(b"keyword\tside_dish_1"), b'\t');
        assert_eq!(detect_delimiter(b"keyword|side_dish_1"), b'|');
        assert_eq!(detect_delimiter(b"keyword"), b',');
    }

    #[test]
    fn test_read_comma_separated() {
        let data = "keyword,side_dish_1,side_dish_2,side_dish_3\n\
                    what to serve with beef wellington,Roasted Potatoes,Yorkshire Pudding,\n\
                    what to serve with pad thai,Spring Rolls,,Papaya Salad\n";

        let rows = read_csv(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);

        let first = rows[0].as_ref().unwrap();
        assert_eq!(
            first.keyword.as_deref(),
            Some("what to serve with beef wellington")
        );
        assert_eq!(names(first), vec!["Roasted Potatoes", "Yorkshire Pudding"]);

        let second = rows[1].as_ref().unwrap();
        assert_eq!(names(second), vec!["Spring Rolls", "Papaya Salad"]);
    }

    #[test]
    fn test_side_columns_follow_numbering() {
        let data = "side_dish_2;keyword;side_dish_1\nBeans;sides for steak;Fries\n";
        let rows = read_csv(data.as_bytes()).unwrap();
        let input = rows[0].as_ref().unwrap();
        assert_eq!(names(input), vec!["Fries", "Beans"]);
    }

    #[test]
    fn test_main_dish_column_and_blank_row() {
        let data = "keyword\tmain_dish\tside_dish_1\n\
                    what to serve with coq au vin\tCoq au Vin\tCrusty Bread\n\
                    \t\tRice\n";
        let rows = read_csv(data.as_bytes()).unwrap();

        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.main_dish.as_deref(), Some("Coq au Vin"));

        let blank = rows[1].as_ref().unwrap();
        assert!(blank.keyword.is_none());
        assert!(blank.main_dish.is_none());
        assert!(blank.label().is_none());
    }

    #[test]
    fn test_missing_identifier_columns() {
        let data = "dish,side_dish_1\nSteak,Fries\n";
        assert!(matches!(
            read_csv(data.as_bytes()),
            Err(ImportError::MalformedRow(_))
        ));
    }

    #[test]
    fn test_bom_is_ignored() {
        let data = "\u{feff}keyword,side_dish_1\nsides for pizza,Garlic Knots\n";
        let rows = read_csv(data.as_bytes()).unwrap();
        assert_eq!(
            rows[0].as_ref().unwrap().keyword.as_deref(),
            Some("sides for pizza")
        );
    }

    #[test]
    fn test_invalid_utf8_row_fails_alone() {
        let data: &[u8] = b"keyword,side_dish_1\n\
                            sides for steak,Fries\n\
                            sides for \xff pizza,Garlic Knots\n\
                            sides for sushi,Miso Soup\n";
        let rows = read_csv(data).unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(
            rows[0].as_ref().unwrap().keyword.as_deref(),
            Some("sides for steak")
        );
        assert!(matches!(rows[1], Err(ImportError::CsvError(_))));
        assert_eq!(
            rows[2].as_ref().unwrap().keyword.as_deref(),
            Some("sides for sushi")
        );
    }

    #[test]
    fn test_invalid_utf8_header_is_an_error() {
        let data: &[u8] = b"key\xffword\nsides for steak\n";
        assert!(read_csv(data).is_err());
    }
}
