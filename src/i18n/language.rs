use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportedLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "mr")]
    Marathi,
    #[serde(rename = "pa")]
    Punjabi,
    #[serde(rename = "bn")]
    Bengali,
}

impl SupportedLanguage {
    /// Get all supported languages
    pub fn all() -> &'static [SupportedLanguage] {
        &[
            SupportedLanguage::English,
            SupportedLanguage::Hindi,
            SupportedLanguage::Marathi,
            SupportedLanguage::Punjabi,
            SupportedLanguage::Bengali,
        ]
    }

    /// Language code, also the stem of the dictionary file name
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLanguage::English => "en",
            SupportedLanguage::Hindi => "hi",
            SupportedLanguage::Marathi => "mr",
            SupportedLanguage::Punjabi => "pa",
            SupportedLanguage::Bengali => "bn",
        }
    }

    /// Translation key under which the language's own label is stored
    pub fn key(&self) -> &'static str {
        match self {
            SupportedLanguage::English => "english",
            SupportedLanguage::Hindi => "hindi",
            SupportedLanguage::Marathi => "marathi",
            SupportedLanguage::Punjabi => "punjabi",
            SupportedLanguage::Bengali => "bengali",
        }
    }
}

impl Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SupportedLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" | "english" => Ok(SupportedLanguage::English),
            "hi" | "hindi" => Ok(SupportedLanguage::Hindi),
            "mr" | "marathi" => Ok(SupportedLanguage::Marathi),
            "pa" | "punjabi" => Ok(SupportedLanguage::Punjabi),
            "bn" | "bengali" => Ok(SupportedLanguage::Bengali),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
