use crate::{bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, MAX_STRING_BYTES};

/// A type that can be written to & read from a packet
pub trait Serde: Sized {
    /// Writes `self`. After an error `writer` may hold a partial value and
    /// should be discarded.
    fn ser(&self, writer: &mut dyn BitWrite) -> Result<(), SerdeErr>;
    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr>;
}

impl Serde for bool {
    fn ser(&self, writer: &mut dyn BitWrite) -> Result<(), SerdeErr> {
        writer.write_bit(*self);
        Ok(())
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        reader.read_bit()
    }
}

impl Serde for u8 {
    fn ser(&self, writer: &mut dyn BitWrite) -> Result<(), SerdeErr> {
        writer.write_byte(*self);
        Ok(())
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        reader.read_byte()
    }
}

impl Serde for u16 {
    fn ser(&self, writer: &mut dyn BitWrite) -> Result<(), SerdeErr> {
        for byte in self.to_le_bytes() {
            writer.write_byte(byte);
        }
        Ok(())
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let bytes = [reader.read_byte()?, reader.read_byte()?];
        Ok(u16::from_le_bytes(bytes))
    }
}

impl Serde for u32 {
    fn ser(&self, writer: &mut dyn BitWrite) -> Result<(), SerdeErr> {
        for byte in self.to_le_bytes() {
            writer.write_byte(byte);
        }
        Ok(())
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let mut bytes = [0u8; 4];
        for byte in bytes.iter_mut() {
            *byte = reader.read_byte()?;
        }
        Ok(u32::from_le_bytes(bytes))
    }
}

impl Serde for f32 {
    fn ser(&self, writer: &mut dyn BitWrite) -> Result<(), SerdeErr> {
        self.to_bits().ser(writer)
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(f32::from_bits(u32::de(reader)?))
    }
}

impl Serde for String {
    /// Strings longer than `MAX_STRING_BYTES` are refused whole, never cut
    fn ser(&self, writer: &mut dyn BitWrite) -> Result<(), SerdeErr> {
        let length = self.len();
        if length > MAX_STRING_BYTES {
            return Err(SerdeErr::StringTooLong {
                length,
                limit: MAX_STRING_BYTES,
            });
        }
        // MAX_STRING_BYTES fits in a u16
        (length as u16).ser(writer)?;
        for byte in self.as_bytes() {
            writer.write_byte(*byte);
        }
        Ok(())
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length = u16::de(reader)? as usize;
        if length > MAX_STRING_BYTES {
            return Err(SerdeErr::StringTooLong {
                length,
                limit: MAX_STRING_BYTES,
            });
        }
        let mut bytes = Vec::with_capacity(length);
        for _ in 0..length {
            bytes.push(reader.read_byte()?);
        }
        String::from_utf8(bytes).map_err(|_| SerdeErr::InvalidUtf8)
    }
}
