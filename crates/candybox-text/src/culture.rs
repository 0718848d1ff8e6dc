//! Culture identifiers (`language[-Script][-REGION]`).
//!
//! Only the shape and the subtags are checked, against static ISO tables.
//! Nothing is loaded from the host.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// ISO 639-1 two-letter language codes, sorted.
const ISO_639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh",
    "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", "da",
    "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj",
    "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb",
    "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi",
    "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti",
    "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo",
    "wa", "wo", "xh", "yi", "yo", "za", "zh", "zu",
];

/// Three-letter languages that have no two-letter code, sorted.
const ISO_639_2: &[&str] = &[
    "arn", "ast", "ceb", "chr", "ckb", "dsb", "fil", "gsw", "haw", "hsb", "kok", "moh", "nso", "prs",
    "quc", "quz", "sah", "sma", "smj", "smn", "sms", "syr", "tzm", "yue", "zgh",
];

/// ISO 3166-1 alpha-2 region codes, sorted.
const ISO_3166: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

/// UN M.49 area codes used as regions, sorted.
const UN_M49: &[&str] = &["001", "002", "019", "029", "142", "150", "419"];

/// Order of the numeric fields in a short date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture {
    name:     String,
    language: String,
    script:   Option<String>,
    region:   Option<String>,
}

impl Culture {
    /// The culture-neutral culture, with an empty name.
    pub fn invariant() -> Self {
        Self {
            name:     String::new(),
            language: String::new(),
            script:   None,
            region:   None,
        }
    }

    /// Parses an identifier such as `en-US`, `zh-Hans-CN` or `es_419`.
    ///
    /// Subtags are case-insensitive and normalized: lowercase language,
    /// titlecase script, uppercase region.
    pub fn parse(identifier: &str) -> Result<Self> {
        let not_found = || Error::CultureNotFound(identifier.to_string());

        let mut parts = identifier.trim().split(['-', '_']);
        let language = parts
            .next()
            .map(str::to_ascii_lowercase)
            .filter(|l| is_known_language(l))
            .ok_or_else(not_found)?;

        let mut script = None;
        let mut region = None;
        for part in parts {
            if script.is_none() && region.is_none() && is_script(part) {
                script = Some(titlecase(part));
            } else if region.is_none() && is_known_region(&part.to_ascii_uppercase()) {
                region = Some(part.to_ascii_uppercase());
            } else {
                tracing::debug!(identifier, subtag = part, "unknown culture subtag");
                return Err(not_found());
            }
        }

        let mut name = language.clone();
        for subtag in script.iter().chain(region.iter()) {
            name.push('-');
            name.push_str(subtag);
        }

        Ok(Self { name, language, script, region })
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn language(&self) -> &str { &self.language }

    pub fn script(&self) -> Option<&str> { self.script.as_deref() }

    pub fn region(&self) -> Option<&str> { self.region.as_deref() }

    pub fn is_invariant(&self) -> bool { self.language.is_empty() }

    pub fn date_order(&self) -> DateOrder {
        match (self.language.as_str(), self.region.as_deref()) {
            ("", _) => DateOrder::MonthDayYear,
            ("en", None | Some("US" | "PH" | "UM" | "AS" | "GU" | "PR" | "VI" | "MP")) => {
                DateOrder::MonthDayYear
            }
            ("zh" | "ja" | "ko" | "hu" | "lt" | "mn" | "sv", _) => DateOrder::YearMonthDay,
            _ => DateOrder::DayMonthYear,
        }
    }
}

impl Default for Culture {
    fn default() -> Self { Self::invariant() }
}

impl FromStr for Culture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.name) }
}

fn is_known_language(code: &str) -> bool {
    match code.len() {
        2 => ISO_639_1.binary_search(&code).is_ok(),
        3 => ISO_639_2.binary_search(&code).is_ok(),
        _ => false,
    }
}

fn is_known_region(code: &str) -> bool {
    ISO_3166.binary_search(&code).is_ok() || UN_M49.binary_search(&code).is_ok()
}

fn is_script(subtag: &str) -> bool {
    subtag.len() == 4 && subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn titlecase(subtag: &str) -> String {
    let lower = subtag.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        for table in [ISO_639_1, ISO_639_2, ISO_3166, UN_M49] {
            assert!(table.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn parses_and_normalizes() {
        let culture = Culture::parse("ZH_hans_cn").unwrap();
        assert_eq!(culture.name(), "zh-Hans-CN");
        assert_eq!(culture.script(), Some("Hans"));
        assert_eq!(culture.region(), Some("CN"));

        assert_eq!(Culture::parse("es-419").unwrap().region(), Some("419"));
        assert_eq!("fil-PH".parse::<Culture>().unwrap().language(), "fil");
    }

    #[test]
    fn rejects_unknown_subtags() {
        for identifier in ["", "xx", "en-XX", "en-US-GB", "english", "en--US"] {
            assert!(
                matches!(Culture::parse(identifier), Err(Error::CultureNotFound(_))),
                "{}",
                identifier
            );
        }
    }

    #[test]
    fn date_order_by_culture() {
        assert_eq!(Culture::invariant().date_order(), DateOrder::MonthDayYear);
        assert_eq!(Culture::parse("en-US").unwrap().date_order(), DateOrder::MonthDayYear);
        assert_eq!(Culture::parse("en-GB").unwrap().date_order(), DateOrder::DayMonthYear);
        assert_eq!(Culture::parse("zh-CN").unwrap().date_order(), DateOrder::YearMonthDay);
        assert_eq!(Culture::parse("de").unwrap().date_order(), DateOrder::DayMonthYear);
    }
}
