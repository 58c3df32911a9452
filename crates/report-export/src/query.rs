use std::fmt;

use url::{form_urlencoded, Url};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touchpoint {
    First,
    Last,
}

impl Touchpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Touchpoint::First => "first",
            Touchpoint::Last => "last",
        }
    }
}

impl fmt::Display for Touchpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report types requested for every export.
const REPORT_TYPES: [(&str, &str); 5] = [
    ("types[0]", "1"),
    ("types[1]", "4"),
    ("types[2]", "7"),
    ("types[3]", "6"),
    ("types[4]", "5"),
];

/// Parameters of one acquisition export, sorted by key.
///
/// The device filter and search term are left out entirely rather than sent blank.
pub fn query_pairs(
    platform: &str,
    range: &str,
    touchpoint: Touchpoint,
) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("group", "wh_filters.campaign".to_string()),
        ("report", "acquisition".to_string()),
        ("filters[wh_filters.platform]", platform.to_string()),
        ("filters[touchpoint]", touchpoint.to_string()),
        ("range", range.to_string()),
    ];
    pairs.extend(REPORT_TYPES.iter().map(|(k, v)| (*k, v.to_string())));
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
}

pub fn encode_query(platform: &str, range: &str, touchpoint: Touchpoint) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query_pairs(platform, range, touchpoint))
        .finish()
}

pub fn report_url(
    base: &str,
    platform: &str,
    range: &str,
    touchpoint: Touchpoint,
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.set_query(Some(&encode_query(platform, range, touchpoint)));
    Ok(url)
}
