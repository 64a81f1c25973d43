/// Languages the Google TTS endpoint speaks, with its own casing
const TTS_LANGUAGES: &[&str] = &[
    "af", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "eo", "es", "et",
    "fi", "fr", "gu", "hi", "hr", "hu", "hy", "id", "is", "it", "iw", "ja", "jw", "km", "kn",
    "ko", "la", "lv", "mk", "ml", "mr", "ms", "my", "ne", "nl", "no", "pl", "pt", "ro", "ru",
    "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th", "tl", "tr", "uk", "ur", "vi",
    "zh-CN", "zh-TW",
];

/// Regional or alternate codes that the TTS endpoint spells differently
const TTS_ALIASES: &[(&str, &str)] = &[
    ("zh", "zh-CN"),
    ("zh-cn", "zh-CN"),
    ("zh-hans", "zh-CN"),
    ("zh-sg", "zh-CN"),
    ("zh-tw", "zh-TW"),
    ("zh-hant", "zh-TW"),
    ("zh-hk", "zh-TW"),
    ("he", "iw"),
    ("fil", "tl"),
    ("nb", "no"),
    ("pt-br", "pt"),
    ("pt-pt", "pt"),
    ("en-us", "en"),
    ("en-gb", "en"),
    ("en-au", "en"),
    ("en-in", "en"),
    ("es-es", "es"),
    ("es-mx", "es"),
    ("es-us", "es"),
    ("fr-fr", "fr"),
    ("fr-ca", "fr"),
];

/// Locales the recognizer expects for each two-letter hint
const RECOGNITION_LOCALES: &[(&str, &str)] = &[
    ("en", "en-US"),
    ("hi", "hi-IN"),
    ("es", "es-ES"),
    ("fr", "fr-FR"),
    ("de", "de-DE"),
    ("zh", "zh-CN"),
    ("ja", "ja-JP"),
    ("ko", "ko-KR"),
    ("it", "it-IT"),
    ("ru", "ru-RU"),
];

pub const DEFAULT_RECOGNITION_LOCALE: &str = "en-US";

fn lookup_tts(code: &str) -> Option<&'static str> {
    TTS_ALIASES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, target)| *target)
        .or_else(|| {
            TTS_LANGUAGES
                .iter()
                .find(|lang| lang.eq_ignore_ascii_case(code))
                .copied()
        })
}

/// Map a language code to one the TTS endpoint accepts.
///
/// Unknown regional codes fall back to their primary subtag (`de-at` -> `de`).
pub fn resolve_tts_lang(code: &str) -> Option<&'static str> {
    let code = code.trim().to_lowercase();

    lookup_tts(&code).or_else(|| {
        let (primary, _) = code.split_once('-')?;
        lookup_tts(primary)
    })
}

/// Map a language hint to a recognizer locale, defaulting to `en-US`
pub fn recognition_locale(hint: &str) -> &'static str {
    let hint = hint.trim().to_lowercase();
    let primary = hint.split('-').next().unwrap_or_default();

    RECOGNITION_LOCALES
        .iter()
        .find(|(code, _)| *code == hint || *code == primary)
        .map(|(_, locale)| *locale)
        .unwrap_or(DEFAULT_RECOGNITION_LOCALE)
}
