//! Raw Register Words and Status-Bit Classification
//!
//! ## Register Layout
//!
//! The supported sensors pack a 2-bit status field into the top of every
//! output register. The layouts are bit-exact per the datasheets:
//!
//! ```text
//! 16-bit pressure word:
//! ┌──────┬──────────────────────────────┐
//! │ S S  │ 14-bit pressure count        │
//! └──────┴──────────────────────────────┘
//!  15 14   13 ........................ 0
//!
//! 32-bit temperature word:
//! ┌──────┬────────────────┬─────────────────┬───────┐
//! │ S S  │ pressure count │ 11-bit temp cnt │ x x x │
//! └──────┴────────────────┴─────────────────┴───────┘
//!  31 30   29 .......... 16  15 ........... 5  4 .. 0
//! ```
//!
//! ## Status Policy
//!
//! | bits | status   | decoder treatment                      |
//! |------|----------|----------------------------------------|
//! | `00` | Normal   | usable                                 |
//! | `10` | Stale    | usable, flagged as not fresh           |
//! | `01` | Error    | rejected, count field must not be used |
//! | `11` | Reserved | rejected                               |
//!
//! Stale means the sensor has not finished a new conversion since the last
//! read; the value is the previous conversion and is accepted at full weight,
//! matching the reference behavior. Only the tag differs so callers can apply
//! their own confidence policy.
//!
//! Everything in this module is a pure function of the raw bits.

/// Mask for the 14-bit pressure count in a 16-bit register word
pub const PRESSURE_COUNT_MASK: u16 = 0x3FFF;

/// Mask for the 11-bit temperature count field in a 32-bit register word
pub const TEMPERATURE_COUNT_MASK: u32 = 0x0000_FFE0;

/// Bit position of the temperature count field
pub const TEMPERATURE_COUNT_SHIFT: u32 = 5;

/// 2-bit sensor status field, decoded from the top of a register word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// `00` - fresh conversion, value usable
    Normal = 0b00,
    /// `01` - device fault, count field unusable
    Error = 0b01,
    /// `10` - previous conversion re-read, value usable but not fresh
    Stale = 0b10,
    /// `11` - reserved by the datasheet, treated as a fault
    Reserved = 0b11,
}

impl Status {
    /// Classify a 2-bit status field. Bits above the low two are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Status::Normal,
            0b01 => Status::Error,
            0b10 => Status::Stale,
            _ => Status::Reserved,
        }
    }

    /// Whether the count field may be decoded (Normal or Stale)
    pub const fn is_usable(self) -> bool {
        matches!(self, Status::Normal | Status::Stale)
    }

    /// Whether the value is a re-read of the previous conversion
    pub const fn is_stale(self) -> bool {
        matches!(self, Status::Stale)
    }
}

/// A raw register word read from the sensor, produced once per bus transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawSample {
    /// 16-bit pressure register word
    Word(u16),
    /// 32-bit pressure + temperature register word
    Long(u32),
}

impl RawSample {
    /// Extract the status field (bits 14-15 of a word, 30-31 of a longword)
    pub const fn status(self) -> Status {
        match self {
            RawSample::Word(w) => Status::from_bits((w >> 14) as u8),
            RawSample::Long(l) => Status::from_bits((l >> 30) as u8),
        }
    }

    /// Extract the count field: 14-bit pressure count from a word,
    /// 11-bit temperature count (bits 5-15) from a longword.
    ///
    /// The count is returned regardless of status; callers gate on
    /// [`Status::is_usable`] first.
    pub const fn count(self) -> u16 {
        match self {
            RawSample::Word(w) => w & PRESSURE_COUNT_MASK,
            RawSample::Long(l) => ((l & TEMPERATURE_COUNT_MASK) >> TEMPERATURE_COUNT_SHIFT) as u16,
        }
    }
}
