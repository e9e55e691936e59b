use crate::{
    BinaryCodec, DateTime, Decoder, Encoder, Result, StatusCode, Variant,
};

const VALUE_FLAG: u8 = 0x01;
const STATUS_FLAG: u8 = 0x02;
const SOURCE_TIMESTAMP_FLAG: u8 = 0x04;
const SERVER_TIMESTAMP_FLAG: u8 = 0x08;
const SOURCE_PICOSECONDS_FLAG: u8 = 0x10;
const SERVER_PICOSECONDS_FLAG: u8 = 0x20;

/// A value together with its quality and timestamps.
///
/// Every field is optional on the wire; a leading mask records which ones
/// follow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataValue {
    pub value: Option<Variant>,
    pub status: Option<StatusCode>,
    pub source_timestamp: Option<DateTime>,
    pub source_picoseconds: Option<u16>,
    pub server_timestamp: Option<DateTime>,
    pub server_picoseconds: Option<u16>,
}

impl DataValue {
    pub fn new(value: Variant) -> Self {
        Self { value: Some(value), ..Self::default() }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_source_timestamp(mut self, timestamp: DateTime) -> Self {
        self.source_timestamp = Some(timestamp);
        self
    }

    pub fn with_server_timestamp(mut self, timestamp: DateTime) -> Self {
        self.server_timestamp = Some(timestamp);
        self
    }

    fn mask(&self) -> u8 {
        let mut mask = 0;
        if self.value.is_some() {
            mask |= VALUE_FLAG;
        }
        if self.status.is_some() {
            mask |= STATUS_FLAG;
        }
        if self.source_timestamp.is_some() {
            mask |= SOURCE_TIMESTAMP_FLAG;
        }
        if self.server_timestamp.is_some() {
            mask |= SERVER_TIMESTAMP_FLAG;
        }
        if self.source_picoseconds.is_some() {
            mask |= SOURCE_PICOSECONDS_FLAG;
        }
        if self.server_picoseconds.is_some() {
            mask |= SERVER_PICOSECONDS_FLAG;
        }
        mask
    }
}

impl BinaryCodec for DataValue {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        decoder.nested(|decoder| {
            let mask = decoder.read_u8()?;
            let mut out = Self::default();
            if mask & VALUE_FLAG != 0 {
                out.value = Some(decoder.read()?);
            }
            if mask & STATUS_FLAG != 0 {
                out.status = Some(decoder.read()?);
            }
            if mask & SOURCE_TIMESTAMP_FLAG != 0 {
                out.source_timestamp = Some(decoder.read_date_time()?);
            }
            if mask & SOURCE_PICOSECONDS_FLAG != 0 {
                out.source_picoseconds = Some(decoder.read_u16()?);
            }
            if mask & SERVER_TIMESTAMP_FLAG != 0 {
                out.server_timestamp = Some(decoder.read_date_time()?);
            }
            if mask & SERVER_PICOSECONDS_FLAG != 0 {
                out.server_picoseconds = Some(decoder.read_u16()?);
            }
            Ok(out)
        })
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_u8(self.mask())?;
        if let Some(value) = &self.value {
            encoder.write(value)?;
        }
        if let Some(status) = &self.status {
            encoder.write(status)?;
        }
        if let Some(timestamp) = self.source_timestamp {
            encoder.write_date_time(timestamp)?;
        }
        if let Some(picoseconds) = self.source_picoseconds {
            encoder.write_u16(picoseconds)?;
        }
        if let Some(timestamp) = self.server_timestamp {
            encoder.write_date_time(timestamp)?;
        }
        if let Some(picoseconds) = self.server_picoseconds {
            encoder.write_u16(picoseconds)?;
        }
        Ok(())
    }
}
