use core::fmt;

use chrono::{SecondsFormat, Utc};

use crate::{BinaryCodec, Decoder, Encoder, Result};

const TICKS_PER_SECOND: i64 = 10_000_000;
const NANOS_PER_TICK: i64 = 100;

/// Ticks between 1601-01-01 and the Unix epoch.
const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;

/// A timestamp counted in 100 ns ticks since 1601-01-01 00:00:00 UTC.
///
/// The raw tick count is kept as read from the wire, so every encoded value
/// survives a decode/encode cycle unchanged. Conversions to and from
/// [`chrono::DateTime`] clamp to the representable range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(i64);

impl DateTime {
    /// The zero timestamp, also used on the wire for "no time".
    pub const MIN: DateTime = DateTime(0);
    pub const MAX: DateTime = DateTime(i64::MAX);

    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    pub const fn ticks(self) -> i64 {
        self.0
    }

    pub fn now() -> Self {
        Self::from_chrono(Utc::now())
    }

    pub fn is_min(self) -> bool {
        self.0 == 0
    }

    /// Converts from a chrono timestamp, clamping anything before 1601 to
    /// [`DateTime::MIN`] and anything past the tick range to
    /// [`DateTime::MAX`].
    pub fn from_chrono(time: chrono::DateTime<Utc>) -> Self {
        let ticks = i128::from(time.timestamp()) * i128::from(TICKS_PER_SECOND)
            + i128::from(time.timestamp_subsec_nanos()) / i128::from(NANOS_PER_TICK)
            + i128::from(UNIX_EPOCH_TICKS);
        match i64::try_from(ticks) {
            Ok(ticks) if ticks >= 0 => Self(ticks),
            Ok(_) => Self::MIN,
            Err(_) if ticks < 0 => Self::MIN,
            Err(_) => Self::MAX,
        }
    }

    pub fn to_chrono(self) -> Option<chrono::DateTime<Utc>> {
        let unix_ticks = i128::from(self.0) - i128::from(UNIX_EPOCH_TICKS);
        let secs = unix_ticks.div_euclid(i128::from(TICKS_PER_SECOND));
        let nanos = unix_ticks.rem_euclid(i128::from(TICKS_PER_SECOND))
            * i128::from(NANOS_PER_TICK);
        chrono::DateTime::from_timestamp(
            i64::try_from(secs).ok()?,
            u32::try_from(nanos).ok()?,
        )
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(time: chrono::DateTime<Utc>) -> Self { Self::from_chrono(time) }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_chrono() {
            Some(time) => {
                f.write_str(&time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => write!(f, "{} ticks", self.0),
        }
    }
}

impl BinaryCodec for DateTime {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        decoder.read_date_time()
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_date_time(*self)
    }
}
