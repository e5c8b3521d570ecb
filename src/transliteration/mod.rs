pub mod rules;
pub mod transliterate;

pub use self::transliterate::*;
