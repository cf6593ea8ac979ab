//! Translation options and their request parameters.
//!
//! Only options that are set end up in the parameter map; the API applies
//! its own defaults for everything else.

use serde::{Deserialize, Serialize};

use crate::http::Params;

/// How the engine splits input into sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitSentences {
    #[serde(rename = "0")]
    None,
    #[serde(rename = "1")]
    All,
    #[serde(rename = "nonewlines")]
    NoNewlines,
}

impl SplitSentences {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitSentences::None => "0",
            SplitSentences::All => "1",
            SplitSentences::NoNewlines => "nonewlines",
        }
    }
}

/// Whether the engine keeps the original formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreserveFormatting {
    #[serde(rename = "0")]
    Off,
    #[serde(rename = "1")]
    On,
}

impl PreserveFormatting {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreserveFormatting::Off => "0",
            PreserveFormatting::On => "1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Default,
    More,
    Less,
    PreferMore,
    PreferLess,
}

impl Formality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Default => "default",
            Formality::More => "more",
            Formality::Less => "less",
            Formality::PreferMore => "prefer_more",
            Formality::PreferLess => "prefer_less",
        }
    }
}

/// Options shared by plain text and XML translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateOptions {
    pub target_lang: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_sentences: Option<SplitSentences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_formatting: Option<PreserveFormatting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality: Option<Formality>,
}

impl TranslateOptions {
    pub fn new(target_lang: impl Into<String>) -> Self {
        Self {
            target_lang: target_lang.into(),
            source_lang: None,
            split_sentences: None,
            preserve_formatting: None,
            formality: None,
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }

    pub fn with_split_sentences(mut self, split: SplitSentences) -> Self {
        self.split_sentences = Some(split);
        self
    }

    pub fn with_preserve_formatting(mut self, preserve: PreserveFormatting) -> Self {
        self.preserve_formatting = Some(preserve);
        self
    }

    pub fn with_formality(mut self, formality: Formality) -> Self {
        self.formality = Some(formality);
        self
    }

    /// Fresh parameter map for translating `text`.
    pub fn text_params(&self, text: &str) -> Params {
        let mut params = Params::new();
        params.insert("text".to_string(), text.to_string());
        params.insert("target_lang".to_string(), self.target_lang.clone());
        if let Some(source_lang) = &self.source_lang {
            params.insert("source_lang".to_string(), source_lang.clone());
        }
        if let Some(split) = self.split_sentences {
            params.insert("split_sentences".to_string(), split.as_str().to_string());
        }
        if let Some(preserve) = self.preserve_formatting {
            params.insert("preserve_formatting".to_string(), preserve.as_str().to_string());
        }
        if let Some(formality) = self.formality {
            params.insert("formality".to_string(), formality.as_str().to_string());
        }
        params
    }
}

/// Extra options for translating XML markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_detection: Option<bool>,
    #[serde(default)]
    pub splitting_tags: Vec<String>,
    #[serde(default)]
    pub non_splitting_tags: Vec<String>,
    #[serde(default)]
    pub ignore_tags: Vec<String>,
}

impl XmlOptions {
    /// Parameters for translating `text` as XML; empty tag lists are omitted.
    pub fn xml_params(&self, text: &str, options: &TranslateOptions) -> Params {
        let mut params = options.text_params(text);
        params.insert("tag_handling".to_string(), "xml".to_string());
        if let Some(outline) = self.outline_detection {
            let flag = if outline { "1" } else { "0" };
            params.insert("outline_detection".to_string(), flag.to_string());
        }
        for (name, tags) in [
            ("splitting_tags", &self.splitting_tags),
            ("non_splitting_tags", &self.non_splitting_tags),
            ("ignore_tags", &self.ignore_tags),
        ] {
            if !tags.is_empty() {
                params.insert(name.to_string(), tags.join(","));
            }
        }
        params
    }
}
