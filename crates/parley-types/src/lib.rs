pub mod types;

pub use types::{AUTO_DETECT, LanguageCode, ProviderKind, TranslationRecord, UnknownProvider};
