use bytemuck::{Pod, Zeroable};

use crate::domain::entity::BacklightSettings;

/// Marks a record as written by this firmware (erased storage reads 0xFF)
const RECORD_MAGIC: u8 = 0xB1;

const FLAG_BREATHING: u8 = 1 << 0;

/// Error type for decoding a stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// Byte slice does not have the record size
    InvalidLength,
    /// Storage holds something else, or was never written
    InvalidMagic,
}

/// Byte layout of the backlight settings in non-volatile storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct BacklightRecord {
    magic: u8,
    level: u8,
    flags: u8,
    breathing_period: u8,
}

impl BacklightRecord {
    /// Size of the encoded record in bytes
    pub const SIZE: usize = core::mem::size_of::<Self>();

    pub const fn from_settings(settings: &BacklightSettings) -> Self {
        Self {
            magic: RECORD_MAGIC,
            level: settings.level,
            flags: if settings.breathing { FLAG_BREATHING } else { 0 },
            breathing_period: settings.breathing_period,
        }
    }

    /// Decode a record read from storage
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        let record = *bytemuck::try_from_bytes::<Self>(bytes)
            .map_err(|_| RecordError::InvalidLength)?;
        if record.magic != RECORD_MAGIC {
            return Err(RecordError::InvalidMagic);
        }
        Ok(record)
    }

    /// Encoded record, ready to be written to storage
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Settings held by the record.
    ///
    /// The level is clamped to `levels` and a zero breathing period is
    /// raised to 1, so a record from a board with more levels still loads.
    pub fn to_settings(&self, levels: u8) -> BacklightSettings {
        BacklightSettings {
            level: self.level.min(levels),
            breathing: self.flags & FLAG_BREATHING != 0,
            breathing_period: self.breathing_period.max(1),
        }
    }
}

impl From<BacklightSettings> for BacklightRecord {
    fn from(settings: BacklightSettings) -> Self {
        Self::from_settings(&settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_flags_and_fields() {
        let record = BacklightRecord::from_settings(&BacklightSettings {
            level: 2,
            breathing: true,
            breathing_period: 6,
        });
        assert_eq!(record.as_bytes(), &[RECORD_MAGIC, 2, FLAG_BREATHING, 6]);
    }

    #[test]
    fn decodes_written_record() {
        let settings = BacklightSettings {
            level: 1,
            breathing: false,
            breathing_period: 4,
        };
        let stored = BacklightRecord::from(settings);
        let loaded = BacklightRecord::from_bytes(stored.as_bytes()).unwrap();
        assert_eq!(loaded.to_settings(3), settings);
    }

    #[test]
    fn rejects_erased_storage() {
        let erased = [0xFF; BacklightRecord::SIZE];
        assert_eq!(
            BacklightRecord::from_bytes(&erased),
            Err(RecordError::InvalidMagic)
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            BacklightRecord::from_bytes(&[RECORD_MAGIC, 1, 0]),
            Err(RecordError::InvalidLength)
        );
    }

    #[test]
    fn sanitizes_out_of_range_values() {
        let record = BacklightRecord::from_bytes(&[RECORD_MAGIC, 9, 0, 0]).unwrap();
        let settings = record.to_settings(3);
        assert_eq!(settings.level, 3);
        assert_eq!(settings.breathing_period, 1);
    }
}
