//! Translation coverage and boundary-value text checks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI phrases of the English storefront that should not survive translation.
pub const ENGLISH_UI_PHRASES: [&str; 26] = [
    "Add to cart",
    "Sign in",
    "My account",
    "Search our catalog",
    "PRODUCTS",
    "OUR COMPANY",
    "YOUR ACCOUNT",
    "STORE INFORMATION",
    "Promotions",
    "New products",
    "Best sales",
    "Delivery",
    "Legal Notice",
    "Terms and conditions",
    "About us",
    "Secure payment",
    "Contact us",
    "Sitemap",
    "Stores",
    "Order tracking",
    "Create account",
    "My alerts",
    "Free shipping",
    "Discount",
    "Quick view",
    "Add to wishlist",
];

pub const TEXT_LENGTH_WARNING_THRESHOLD: usize = 50;
pub const TEXT_LENGTH_ERROR_THRESHOLD: usize = 80;

/// Overflow needs the content to exceed the box by more than this many pixels.
pub const OVERFLOW_TOLERANCE_PX: u32 = 5;
pub const OVERFLOW_RATIO_THRESHOLD: f64 = 1.0;

/// Elements with shorter text are not judged for overflow.
pub const MIN_OVERFLOW_TEXT_CHARS: usize = 5;

const LONG_TEXT_LANGUAGES: [&str; 12] = [
    "de", "pl", "hu", "fi", "nl", "cs", "sk", "lt", "lv", "et", "hr", "sl",
];

/// English phrases found verbatim in `text`. Always empty for English.
pub fn find_untranslated_english_text(text: &str, language_code: &str) -> Vec<&'static str> {
    if language_code == "en" {
        return Vec::new();
    }

    ENGLISH_UI_PHRASES
        .iter()
        .copied()
        .filter(|phrase| text.contains(phrase))
        .collect()
}

/// Case-insensitive presence of each keyword, in input order.
///
/// A keyword listed twice is reported once, at its first position.
pub fn check_expected_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<(String, bool)> {
    let lower_text = text.to_lowercase();
    let mut results: Vec<(String, bool)> = Vec::with_capacity(keywords.len());

    for keyword in keywords {
        let keyword = keyword.as_ref();
        if results.iter().any(|(existing, _)| existing == keyword) {
            continue;
        }
        let found = lower_text.contains(&keyword.to_lowercase());
        results.push((keyword.to_string(), found));
    }

    results
}

/// Fraction of keywords found; 0.0 when there are none.
pub fn calculate_keyword_coverage(results: &[(String, bool)]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let found = results.iter().filter(|(_, found)| *found).count();
    found as f64 / results.len() as f64
}

pub fn is_long_text_language(language_code: &str) -> bool {
    LONG_TEXT_LANGUAGES.contains(&language_code)
}

/// `(warning, error)` character thresholds, raised by 30% for
/// languages whose translations run long.
pub fn length_thresholds(language_code: &str) -> (usize, usize) {
    if is_long_text_language(language_code) {
        (
            TEXT_LENGTH_WARNING_THRESHOLD * 13 / 10,
            TEXT_LENGTH_ERROR_THRESHOLD * 13 / 10,
        )
    } else {
        (TEXT_LENGTH_WARNING_THRESHOLD, TEXT_LENGTH_ERROR_THRESHOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextLengthStatus {
    Ok,
    Empty,
    Warning,
    TooLong,
}

impl fmt::Display for TextLengthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextLengthStatus::Ok => "OK",
            TextLengthStatus::Empty => "EMPTY",
            TextLengthStatus::Warning => "WARNING",
            TextLengthStatus::TooLong => "TOO_LONG",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLengthResult {
    pub original_text: String,
    pub element_id: Option<String>,
    /// Unicode scalar values, not bytes.
    pub length: usize,
    pub status: TextLengthStatus,
    pub message: Option<String>,
}

impl fmt::Display for TextLengthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (len={})",
            self.status,
            self.element_id.as_deref().unwrap_or("unknown"),
            self.length
        )?;
        if let Some(message) = &self.message {
            write!(f, " - {}", message)?;
        }
        Ok(())
    }
}

/// Boundary value analysis of a text's length.
///
/// Precedence: empty, then too long, then warning, then ok. Both
/// comparisons are strict, so a text exactly at a threshold passes it.
///
/// # Arguments
/// * `text` - The element text
/// * `language_code` - Language whose thresholds apply
///
/// # Returns
/// A `TextLengthResult` without an element id; see [`perform_bva_check`].
pub fn check_text_length(text: &str, language_code: &str) -> TextLengthResult {
    let length = text.chars().count();
    let mut result = TextLengthResult {
        original_text: text.to_string(),
        element_id: None,
        length,
        status: TextLengthStatus::Ok,
        message: None,
    };

    if length == 0 {
        result.status = TextLengthStatus::Empty;
        return result;
    }

    let (warning_threshold, error_threshold) = length_thresholds(language_code);

    if length > error_threshold {
        result.status = TextLengthStatus::TooLong;
        result.message = Some(format!(
            "Text too long ({} chars > {})",
            length, error_threshold
        ));
    } else if length > warning_threshold {
        result.status = TextLengthStatus::Warning;
        result.message = Some(format!(
            "Text is long ({} chars > {})",
            length, warning_threshold
        ));
    }

    result
}

/// Run [`check_text_length`] over `(element_id, text)` pairs.
pub fn perform_bva_check<I, K, T>(entries: I, language_code: &str) -> Vec<TextLengthResult>
where
    I: IntoIterator<Item = (K, T)>,
    K: Into<String>,
    T: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(element_id, text)| {
            let mut result = check_text_length(text.as_ref(), language_code);
            result.element_id = Some(element_id.into());
            result
        })
        .collect()
}

/// Expected length of `english_text` once translated, floored.
pub fn predict_translated_length(english_text: &str, target_language: &str) -> usize {
    let percent = match target_language {
        "de" => 135,
        "fi" => 140,
        "pl" => 130,
        "ru" => 125,
        "ja" | "zh" | "ko" => 60,
        _ => 115,
    };
    english_text.chars().count() * percent / 100
}

/// Rendered widths of one UI element, measured by the page driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMeasurement {
    pub selector: String,
    pub text: String,
    pub offset_width: u32,
    pub scroll_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOverflowResult {
    pub selector: String,
    pub text: String,
    pub offset_width: u32,
    pub scroll_width: u32,
    pub overflow_ratio: f64,
    pub is_overflowing: bool,
}

impl fmt::Display for TextOverflowResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown: String = if self.text.chars().count() > 30 {
            format!("{}...", self.text.chars().take(30).collect::<String>())
        } else {
            self.text.clone()
        };
        write!(
            f,
            "[{}] '{}' - offsetWidth={}, scrollWidth={} (ratio={:.2})",
            if self.is_overflowing { "OVERFLOW" } else { "OK" },
            shown,
            self.offset_width,
            self.scroll_width,
            self.overflow_ratio
        )
    }
}

/// Judge two measured widths.
///
/// The ratio is 0 for a zero-width box. Overflow requires both a ratio
/// above 1.0 and a scroll width more than 5px past the box.
pub fn check_text_overflow(
    selector: &str,
    text: &str,
    offset_width: u32,
    scroll_width: u32,
) -> TextOverflowResult {
    let overflow_ratio = if offset_width > 0 {
        f64::from(scroll_width) / f64::from(offset_width)
    } else {
        0.0
    };

    let is_overflowing = overflow_ratio > OVERFLOW_RATIO_THRESHOLD
        && u64::from(scroll_width) > u64::from(offset_width) + u64::from(OVERFLOW_TOLERANCE_PX);

    TextOverflowResult {
        selector: selector.to_string(),
        text: text.to_string(),
        offset_width,
        scroll_width,
        overflow_ratio,
        is_overflowing,
    }
}

/// Overflow judgement for a measured element; `None` when its trimmed
/// text is too short to matter.
pub fn check_element_overflow(measurement: &ElementMeasurement) -> Option<TextOverflowResult> {
    let text = measurement.text.trim();
    if text.chars().count() < MIN_OVERFLOW_TEXT_CHARS {
        return None;
    }
    Some(check_text_overflow(
        &measurement.selector,
        text,
        measurement.offset_width,
        measurement.scroll_width,
    ))
}

// ==================== Page Direction ====================

/// Outcome of [`check_text_direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionCheckResult {
    pub expected_rtl: bool,
    pub page_is_rtl: bool,
    pub is_valid: bool,
}

/// Compare the page's `dir` attributes with the language's direction.
///
/// The page counts as right-to-left when either the `<html>` or the
/// `<body>` `dir` attribute is `rtl` (case-insensitive).
///
/// # Arguments
/// * `html_dir` - `dir` attribute of the root element, if any
/// * `body_dir` - `dir` attribute of the body, if any
/// * `expected_rtl` - Whether the language is written right to left
///
/// # Returns
/// A `DirectionCheckResult`, valid when page and language agree.
pub fn check_text_direction(
    html_dir: Option<&str>,
    body_dir: Option<&str>,
    expected_rtl: bool,
) -> DirectionCheckResult {
    let is_rtl = |dir: Option<&str>| dir.is_some_and(|d| d.trim().eq_ignore_ascii_case("rtl"));
    let page_is_rtl = is_rtl(html_dir) || is_rtl(body_dir);

    DirectionCheckResult {
        expected_rtl,
        page_is_rtl,
        is_valid: page_is_rtl == expected_rtl,
    }
}

// ==================== Language Analysis ====================

/// Lower-case words that mark a text as English storefront copy.
const COMMON_ENGLISH_WORDS: [&str; 33] = [
    "add to cart", "cart", "home", "search", "sign in", "login", "register", "contact", "about",
    "delivery", "shipping", "payment", "terms", "conditions", "privacy", "policy", "legal",
    "notice", "new products", "best sellers", "on sale", "price", "quantity", "description",
    "details", "reviews", "category", "categories", "clothes", "accessories", "art", "view",
    "more",
];

/// Brand and currency names that stay English in every language.
const ALLOWED_ENGLISH_TEXTS: [&str; 18] = [
    "PrestaShop", "PayPal", "Facebook", "Twitter", "Instagram", "YouTube", "Google", "Email",
    "Newsletter", "RSS", "Blog", "USD", "EUR", "GBP", "Visa", "MasterCard", "American Express",
    "Discover",
];

/// Samples shorter than this many characters are ignored.
pub const MIN_SAMPLE_CHARS: usize = 3;

/// English share above which a page counts as untranslated.
pub const MAX_ENGLISH_RATE: f64 = 0.2;

/// More non-allowed English samples than this also count as untranslated.
pub const MAX_ENGLISH_SAMPLES: usize = 5;

const ENGLISH_SAMPLE_LIMIT: usize = 10;

/// Heuristic: does `text` read as English?
///
/// True when it contains a common storefront word, or when it is plain
/// ASCII prose with at least one purely alphabetic word longer than four
/// letters.
pub fn is_english_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    if COMMON_ENGLISH_WORDS.iter().any(|word| lower.contains(word)) {
        return true;
    }

    let plain_ascii = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || ".,!?'\"()-".contains(c));

    plain_ascii
        && text
            .split_whitespace()
            .any(|word| word.len() > 4 && word.chars().all(|c| c.is_ascii_alphabetic()))
}

/// Brand names and the like, acceptable in English on any page.
pub fn is_allowed_english_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    ALLOWED_ENGLISH_TEXTS
        .iter()
        .any(|allowed| lower.contains(&allowed.to_lowercase()))
}

/// Whether `text` shows characters typical of the language: its script
/// for non-Latin languages, its accented letters for a few Latin ones.
/// Always false for languages without a known signature.
pub fn is_text_in_expected_language(text: &str, language_code: &str) -> bool {
    let in_range = |lo: char, hi: char| text.chars().any(|c| (lo..=hi).contains(&c));
    let any_of = |set: &str| text.chars().any(|c| set.contains(c));

    match language_code {
        "ar" => in_range('\u{0600}', '\u{06FF}'),
        "he" => in_range('\u{0590}', '\u{05FF}'),
        "ja" => {
            in_range('\u{3040}', '\u{309F}')
                || in_range('\u{30A0}', '\u{30FF}')
                || in_range('\u{4E00}', '\u{9FFF}')
        }
        "zh" => in_range('\u{4E00}', '\u{9FFF}'),
        "ko" => in_range('\u{AC00}', '\u{D7AF}'),
        "ru" => in_range('\u{0400}', '\u{04FF}'),
        "hi" => in_range('\u{0900}', '\u{097F}'),
        "th" => in_range('\u{0E00}', '\u{0E7F}'),
        "fr" => any_of("àâäéèêëïîôùûüÿçœæÀÂÄÉÈÊËÏÎÔÙÛÜŸÇŒÆ"),
        "de" => any_of("äöüßÄÖÜ"),
        "es" => any_of("áéíóúüñÁÉÍÓÚÜÑ¿¡"),
        "vi" => any_of("àáảãạăằắẳẵặâầấẩẫậèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵđ"),
        _ => false,
    }
}

/// Language make-up of sampled page texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageAnalysis {
    pub language_code: String,
    /// Samples long enough to judge
    pub total: usize,
    pub english: usize,
    pub expected_language: usize,
    /// Up to ten English samples that are not allowed brand names
    pub english_samples: Vec<String>,
}

impl LanguageAnalysis {
    /// English samples over judged samples; 0.0 when nothing was judged.
    pub fn english_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.english as f64 / self.total as f64
    }

    /// Never true for English. Otherwise true when some English was found and
    /// either the rate is above 20% or more than five disallowed samples
    /// were collected.
    pub fn is_untranslated(&self) -> bool {
        self.language_code != "en"
            && self.english > 0
            && (self.english_rate() > MAX_ENGLISH_RATE
                || self.english_samples.len() > MAX_ENGLISH_SAMPLES)
    }
}

/// Classify sampled element texts as English, expected language, or neither.
///
/// # Arguments
/// * `texts` - Visible texts of headings, buttons, labels and the like
/// * `language_code` - Language the page should be in
///
/// # Returns
/// A `LanguageAnalysis` with counts and English samples.
pub fn analyze_page_language<S: AsRef<str>>(texts: &[S], language_code: &str) -> LanguageAnalysis {
    let mut analysis = LanguageAnalysis {
        language_code: language_code.to_string(),
        total: 0,
        english: 0,
        expected_language: 0,
        english_samples: Vec::new(),
    };

    for text in texts {
        let text = text.as_ref().trim();
        if text.chars().count() < MIN_SAMPLE_CHARS {
            continue;
        }
        analysis.total += 1;

        if is_english_text(text) {
            analysis.english += 1;
            let room = analysis.english_samples.len() < ENGLISH_SAMPLE_LIMIT;
            if room && !is_allowed_english_text(text) {
                analysis.english_samples.push(text.to_string());
            }
        } else if is_text_in_expected_language(text, language_code) {
            analysis.expected_language += 1;
        }
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(text: &str, offset: u32, scroll: u32) -> ElementMeasurement {
        ElementMeasurement {
            selector: ".add-to-cart".to_string(),
            text: text.to_string(),
            offset_width: offset,
            scroll_width: scroll,
        }
    }

    // ==================== Untranslated Text Tests ====================

    #[test]
    fn test_untranslated_in_french_page() {
        let found = find_untranslated_english_text("Ajouter au panier | Sign in | Contact us", "fr");
        assert_eq!(found, vec!["Sign in", "Contact us"]);
    }

    #[test]
    fn test_untranslated_ignored_for_english() {
        assert!(find_untranslated_english_text("Add to cart", "en").is_empty());
    }

    #[test]
    fn test_untranslated_is_case_sensitive() {
        assert!(find_untranslated_english_text("add to cart", "fr").is_empty());
    }

    #[test]
    fn test_untranslated_overlapping_phrases() {
        let found = find_untranslated_english_text("Add to wishlist", "de");
        assert_eq!(found, vec!["Add to wishlist"]);

        let found = find_untranslated_english_text("Add to cart, Add to wishlist", "de");
        assert_eq!(found, vec!["Add to cart", "Add to wishlist"]);
    }

    #[test]
    fn test_untranslated_empty_text() {
        assert!(find_untranslated_english_text("", "fr").is_empty());
    }

    // ==================== Keyword Tests ====================

    #[test]
    fn test_keywords_case_insensitive() {
        let results = check_expected_keywords(
            "AJOUTER AU PANIER - livraison",
            &["Ajouter", "Livraison", "Panier", "Compte"],
        );
        assert_eq!(
            results,
            vec![
                ("Ajouter".to_string(), true),
                ("Livraison".to_string(), true),
                ("Panier".to_string(), true),
                ("Compte".to_string(), false),
            ]
        );
        assert_eq!(calculate_keyword_coverage(&results), 0.75);
    }

    #[test]
    fn test_keywords_unicode_lowercase() {
        let results = check_expected_keywords("КОРЗИНА", &["Корзина"]);
        assert_eq!(results, vec![("Корзина".to_string(), true)]);
    }

    #[test]
    fn test_keywords_duplicates_reported_once() {
        let results = check_expected_keywords("panier", &["Panier", "Compte", "Panier"]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "Panier");
        assert_eq!(results[1].0, "Compte");
    }

    #[test]
    fn test_keywords_owned_strings() {
        let keywords = vec!["Warenkorb".to_string()];
        let results = check_expected_keywords("In den Warenkorb", &keywords);
        assert_eq!(calculate_keyword_coverage(&results), 1.0);
    }

    #[test]
    fn test_coverage_empty() {
        assert_eq!(calculate_keyword_coverage(&[]), 0.0);
        let results = check_expected_keywords::<&str>("anything", &[]);
        assert!(results.is_empty());
    }

    // ==================== Text Length Tests ====================

    #[test]
    fn test_length_boundaries_default_language() {
        assert_eq!(check_text_length(&"a".repeat(50), "fr").status, TextLengthStatus::Ok);
        assert_eq!(check_text_length(&"a".repeat(51), "fr").status, TextLengthStatus::Warning);
        assert_eq!(check_text_length(&"a".repeat(80), "fr").status, TextLengthStatus::Warning);
        assert_eq!(check_text_length(&"a".repeat(81), "fr").status, TextLengthStatus::TooLong);
    }

    #[test]
    fn test_length_boundaries_long_text_language() {
        assert_eq!(length_thresholds("de"), (65, 104));
        assert_eq!(check_text_length(&"a".repeat(65), "de").status, TextLengthStatus::Ok);
        assert_eq!(check_text_length(&"a".repeat(66), "de").status, TextLengthStatus::Warning);
        assert_eq!(check_text_length(&"a".repeat(104), "de").status, TextLengthStatus::Warning);
        assert_eq!(check_text_length(&"a".repeat(105), "de").status, TextLengthStatus::TooLong);
    }

    #[test]
    fn test_length_empty() {
        let result = check_text_length("", "fr");
        assert_eq!(result.status, TextLengthStatus::Empty);
        assert_eq!(result.length, 0);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let text = "é".repeat(50);
        let result = check_text_length(&text, "fr");
        assert_eq!(result.length, 50);
        assert_eq!(result.status, TextLengthStatus::Ok);
    }

    #[test]
    fn test_length_message() {
        let result = check_text_length(&"a".repeat(90), "en");
        assert_eq!(result.message.as_deref(), Some("Text too long (90 chars > 80)"));
        assert_eq!(result.to_string(), "[TOO_LONG] unknown (len=90) - Text too long (90 chars > 80)");
    }

    #[test]
    fn test_long_text_languages() {
        for code in ["de", "pl", "hu", "fi", "nl", "cs", "sk", "lt", "lv", "et", "hr", "sl"] {
            assert!(is_long_text_language(code), "{} should be long-text", code);
        }
        assert!(!is_long_text_language("fr"));
        assert!(!is_long_text_language("ja"));
    }

    #[test]
    fn test_perform_bva_check_stamps_element_ids() {
        let results = perform_bva_check(
            vec![("btn-cart", "In den Warenkorb"), ("title", "")],
            "de",
        );
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].element_id.as_deref(), Some("btn-cart"));
        assert_eq!(results[0].status, TextLengthStatus::Ok);
        assert_eq!(results[1].status, TextLengthStatus::Empty);
    }

    // ==================== Prediction Tests ====================

    #[test]
    fn test_predict_translated_length() {
        let text = "a".repeat(100);
        assert_eq!(predict_translated_length(&text, "de"), 135);
        assert_eq!(predict_translated_length(&text, "fi"), 140);
        assert_eq!(predict_translated_length(&text, "pl"), 130);
        assert_eq!(predict_translated_length(&text, "ru"), 125);
        assert_eq!(predict_translated_length(&text, "ja"), 60);
        assert_eq!(predict_translated_length(&text, "zh"), 60);
        assert_eq!(predict_translated_length(&text, "ko"), 60);
        assert_eq!(predict_translated_length(&text, "fr"), 115);
    }

    #[test]
    fn test_predict_floors() {
        // 11 * 1.35 = 14.85
        assert_eq!(predict_translated_length("Add to cart", "de"), 14);
        assert_eq!(predict_translated_length("", "de"), 0);
    }

    // ==================== Overflow Tests ====================

    #[test]
    fn test_overflow_detected() {
        let result = check_text_overflow(".btn", "In den Warenkorb legen", 100, 130);
        assert!(result.is_overflowing);
        assert!((result.overflow_ratio - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_overflow_within_tolerance() {
        assert!(!check_text_overflow(".btn", "Warenkorb", 100, 105).is_overflowing);
        assert!(check_text_overflow(".btn", "Warenkorb", 100, 106).is_overflowing);
    }

    #[test]
    fn test_overflow_zero_width_box() {
        let result = check_text_overflow(".btn", "Warenkorb", 0, 50);
        assert_eq!(result.overflow_ratio, 0.0);
        assert!(!result.is_overflowing);
    }

    #[test]
    fn test_overflow_fits() {
        let result = check_text_overflow(".btn", "Warenkorb", 120, 80);
        assert!(!result.is_overflowing);
        assert!(result.to_string().starts_with("[OK] 'Warenkorb'"));
    }

    #[test]
    fn test_overflow_display_truncates() {
        let text = "x".repeat(40);
        let result = check_text_overflow(".btn", &text, 100, 200);
        let shown = result.to_string();
        assert!(shown.starts_with("[OVERFLOW]"));
        assert!(shown.contains(&format!("'{}...'", "x".repeat(30))));
    }

    #[test]
    fn test_element_overflow_skips_short_text() {
        assert!(check_element_overflow(&measurement("OK", 10, 100)).is_none());
        assert!(check_element_overflow(&measurement("  Buy ", 10, 100)).is_none());
    }

    #[test]
    fn test_element_overflow_judges_long_text() {
        let result = check_element_overflow(&measurement(" Warenkorb ", 60, 90)).unwrap();
        assert!(result.is_overflowing);
        assert_eq!(result.selector, ".add-to-cart");
        assert_eq!(result.text, "Warenkorb");
    }

    #[test]
    fn test_measurement_deserializes_camel_case() {
        let json = r#"{"selector":".btn","text":"Kaufen","offsetWidth":80,"scrollWidth":95}"#;
        let parsed: ElementMeasurement = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.offset_width, 80);
        assert_eq!(parsed.scroll_width, 95);
    }

    // ==================== Direction Tests ====================

    #[test]
    fn test_direction_rtl_language() {
        assert!(check_text_direction(Some("rtl"), None, true).is_valid);
        assert!(check_text_direction(None, Some("RTL"), true).is_valid);
        let result = check_text_direction(Some("ltr"), None, true);
        assert!(!result.is_valid);
        assert!(!result.page_is_rtl);
    }

    #[test]
    fn test_direction_ltr_language() {
        assert!(check_text_direction(Some("ltr"), Some("ltr"), false).is_valid);
        assert!(check_text_direction(None, None, false).is_valid);
        assert!(!check_text_direction(None, Some("rtl"), false).is_valid);
    }

    // ==================== Language Analysis Tests ====================

    #[test]
    fn test_is_english_text() {
        assert!(is_english_text("Add to cart"));
        assert!(is_english_text("Popular items"));
        assert!(!is_english_text("Créer un compte"));
        assert!(!is_english_text("Le prix"));
        assert!(!is_english_text("カートに入れる"));
    }

    #[test]
    fn test_plain_ascii_words_count_as_english() {
        // "art" is a common word, so "Startseite" counts as English
        assert!(is_english_text("Startseite"));
        assert!(is_english_text("Panier"));
    }

    #[test]
    fn test_is_allowed_english_text() {
        assert!(is_allowed_english_text("Pay with PayPal"));
        assert!(is_allowed_english_text("newsletter"));
        assert!(!is_allowed_english_text("Popular items"));
    }

    #[test]
    fn test_is_text_in_expected_language() {
        assert!(is_text_in_expected_language("مرحبا", "ar"));
        assert!(is_text_in_expected_language("Корзина", "ru"));
        assert!(is_text_in_expected_language("カート", "ja"));
        assert!(is_text_in_expected_language("Vêtements", "fr"));
        assert!(is_text_in_expected_language("Zubehör", "de"));
        assert!(!is_text_in_expected_language("Panier", "fr"));
        assert!(!is_text_in_expected_language("Korpa", "sr"));
    }

    #[test]
    fn test_analysis_counts() {
        let texts = ["Vêtements", "Popular items", "Pay with PayPal", "ok", "Le prix"];
        let analysis = analyze_page_language(&texts, "fr");

        assert_eq!(analysis.total, 4, "short samples are skipped");
        assert_eq!(analysis.english, 2);
        assert_eq!(analysis.expected_language, 1);
        assert_eq!(analysis.english_samples, vec!["Popular items"]);
        assert_eq!(analysis.english_rate(), 0.5);
        assert!(analysis.is_untranslated());
    }

    #[test]
    fn test_analysis_below_threshold() {
        let texts = [
            "Vêtements",
            "Créer un compte",
            "Déconnexion",
            "Numéro de commande",
            "Popular items",
        ];
        let analysis = analyze_page_language(&texts, "fr");
        assert_eq!(analysis.english, 1);
        assert!((analysis.english_rate() - 0.2).abs() < 1e-9);
        assert!(!analysis.is_untranslated());
    }

    #[test]
    fn test_analysis_never_untranslated_for_english() {
        let analysis = analyze_page_language(&["Popular items", "Add to cart"], "en");
        assert_eq!(analysis.english, 2);
        assert!(!analysis.is_untranslated());
    }

    #[test]
    fn test_analysis_empty() {
        let analysis = analyze_page_language::<&str>(&[], "fr");
        assert_eq!(analysis.english_rate(), 0.0);
        assert!(!analysis.is_untranslated());
    }
}
