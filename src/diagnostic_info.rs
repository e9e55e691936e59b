use crate::{BinaryCodec, Decoder, Encoder, Result, StatusCode};

const SYMBOLIC_ID_FLAG: u8 = 0x01;
const NAMESPACE_URI_FLAG: u8 = 0x02;
const LOCALIZED_TEXT_FLAG: u8 = 0x04;
const LOCALE_FLAG: u8 = 0x08;
const ADDITIONAL_INFO_FLAG: u8 = 0x10;
const INNER_STATUS_CODE_FLAG: u8 = 0x20;
const INNER_DIAGNOSTIC_INFO_FLAG: u8 = 0x40;

/// Vendor diagnostics attached to a status code.
///
/// The integer fields are indexes into a string table carried elsewhere in
/// the enclosing message. `inner_diagnostic_info` makes the type recursive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DiagnosticInfo {
    pub symbolic_id: Option<i32>,
    pub namespace_uri: Option<i32>,
    pub locale: Option<i32>,
    pub localized_text: Option<i32>,
    pub additional_info: Option<String>,
    pub inner_status_code: Option<StatusCode>,
    pub inner_diagnostic_info: Option<Box<DiagnosticInfo>>,
}

impl DiagnosticInfo {
    fn mask(&self) -> u8 {
        let mut mask = 0;
        if self.symbolic_id.is_some() {
            mask |= SYMBOLIC_ID_FLAG;
        }
        if self.namespace_uri.is_some() {
            mask |= NAMESPACE_URI_FLAG;
        }
        if self.localized_text.is_some() {
            mask |= LOCALIZED_TEXT_FLAG;
        }
        if self.locale.is_some() {
            mask |= LOCALE_FLAG;
        }
        if self.additional_info.is_some() {
            mask |= ADDITIONAL_INFO_FLAG;
        }
        if self.inner_status_code.is_some() {
            mask |= INNER_STATUS_CODE_FLAG;
        }
        if self.inner_diagnostic_info.is_some() {
            mask |= INNER_DIAGNOSTIC_INFO_FLAG;
        }
        mask
    }
}

impl BinaryCodec for DiagnosticInfo {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        decoder.nested(|decoder| {
            let mask = decoder.read_u8()?;
            let mut out = Self::default();
            if mask & SYMBOLIC_ID_FLAG != 0 {
                out.symbolic_id = Some(decoder.read_i32()?);
            }
            if mask & NAMESPACE_URI_FLAG != 0 {
                out.namespace_uri = Some(decoder.read_i32()?);
            }
            if mask & LOCALE_FLAG != 0 {
                out.locale = Some(decoder.read_i32()?);
            }
            if mask & LOCALIZED_TEXT_FLAG != 0 {
                out.localized_text = Some(decoder.read_i32()?);
            }
            if mask & ADDITIONAL_INFO_FLAG != 0 {
                out.additional_info = Some(decoder.read_string()?);
            }
            if mask & INNER_STATUS_CODE_FLAG != 0 {
                out.inner_status_code = Some(decoder.read()?);
            }
            if mask & INNER_DIAGNOSTIC_INFO_FLAG != 0 {
                out.inner_diagnostic_info = Some(Box::new(decoder.read()?));
            }
            Ok(out)
        })
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_u8(self.mask())?;
        if let Some(id) = self.symbolic_id {
            encoder.write_i32(id)?;
        }
        if let Some(uri) = self.namespace_uri {
            encoder.write_i32(uri)?;
        }
        if let Some(locale) = self.locale {
            encoder.write_i32(locale)?;
        }
        if let Some(text) = self.localized_text {
            encoder.write_i32(text)?;
        }
        if let Some(info) = &self.additional_info {
            encoder.write_string(info)?;
        }
        if let Some(code) = &self.inner_status_code {
            encoder.write(code)?;
        }
        if let Some(inner) = &self.inner_diagnostic_info {
            encoder.write(inner.as_ref())?;
        }
        Ok(())
    }
}
