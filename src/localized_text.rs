use core::fmt;

use crate::{BinaryCodec, Decoder, Encoder, Result};

const LOCALE_FLAG: u8 = 0x01;
const TEXT_FLAG: u8 = 0x02;

/// Human readable text with an optional locale such as `en-US`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalizedText {
    pub locale: Option<String>,
    pub text: Option<String>,
}

impl LocalizedText {
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self { locale: Some(locale.into()), text: Some(text.into()) }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self { locale: None, text: Some(text.into()) }
    }

    /// The text, or `""` when absent.
    pub fn as_str(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BinaryCodec for LocalizedText {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let mask = decoder.read_u8()?;
        let locale = if mask & LOCALE_FLAG != 0 {
            Some(decoder.read_string()?)
        } else {
            None
        };
        let text = if mask & TEXT_FLAG != 0 {
            Some(decoder.read_string()?)
        } else {
            None
        };
        Ok(Self { locale, text })
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        let mut mask = 0;
        if self.locale.is_some() {
            mask |= LOCALE_FLAG;
        }
        if self.text.is_some() {
            mask |= TEXT_FLAG;
        }
        encoder.write_u8(mask)?;
        if let Some(locale) = &self.locale {
            encoder.write_string(locale)?;
        }
        if let Some(text) = &self.text {
            encoder.write_string(text)?;
        }
        Ok(())
    }
}
