//! High-level translation facade over an adapter.

use deepl_core::{DeeplError, TranslateOptions, XmlOptions};
use serde_json::{Map, Value};

use crate::adapter::{Adapter, AsyncAdapter};

/// Blocking translator.
pub struct Translator<A> {
    adapter: A,
}

impl<A: Adapter> Translator<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn translate(&self, text: &str, options: &TranslateOptions) -> Result<String, DeeplError> {
        self.adapter.get_translated_text(options.text_params(text))
    }

    /// Translate XML markup with `tag_handling=xml`.
    pub fn translate_xml(
        &self,
        text: &str,
        options: &TranslateOptions,
        xml: &XmlOptions,
    ) -> Result<String, DeeplError> {
        self.adapter.get_translated_text(xml.xml_params(text, options))
    }

    pub fn usage(&self) -> Result<Map<String, Value>, DeeplError> {
        self.adapter.get_usage()
    }

    pub fn supported_languages(&self) -> Result<Vec<Map<String, Value>>, DeeplError> {
        self.adapter.get_supported_languages()
    }
}

/// Cooperative translator; every method must be awaited.
pub struct AsyncTranslator<A> {
    adapter: A,
}

impl<A: AsyncAdapter> AsyncTranslator<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub async fn translate(
        &self,
        text: &str,
        options: &TranslateOptions,
    ) -> Result<String, DeeplError> {
        self.adapter
            .get_translated_text(options.text_params(text))
            .await
    }

    pub async fn translate_xml(
        &self,
        text: &str,
        options: &TranslateOptions,
        xml: &XmlOptions,
    ) -> Result<String, DeeplError> {
        self.adapter
            .get_translated_text(xml.xml_params(text, options))
            .await
    }

    pub async fn usage(&self) -> Result<Map<String, Value>, DeeplError> {
        self.adapter.get_usage().await
    }

    pub async fn supported_languages(&self) -> Result<Vec<Map<String, Value>>, DeeplError> {
        self.adapter.get_supported_languages().await
    }
}
