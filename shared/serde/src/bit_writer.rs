/// Sink for bit-level serialization
pub trait BitWrite {
    fn write_bit(&mut self, bit: bool);
    fn write_byte(&mut self, byte: u8);
    fn bits_written(&self) -> u32;
}

/// Packs bits LSB first: the first bit written lands in bit 0 of the first
/// byte, matching [`BitReader`](crate::BitReader).
#[derive(Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bits_written: u32,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The packed buffer. A trailing partial byte is zero-padded.
    pub fn to_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl BitWrite for BitWriter {
    fn write_bit(&mut self, bit: bool) {
        let offset = self.bits_written % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 1 << offset;
            }
        }
        self.bits_written += 1;
    }

    fn write_byte(&mut self, byte: u8) {
        if self.bits_written % 8 == 0 {
            self.bytes.push(byte);
            self.bits_written += 8;
            return;
        }
        for index in 0..8 {
            self.write_bit((byte >> index) & 1 != 0);
        }
    }

    fn bits_written(&self) -> u32 {
        self.bits_written
    }
}
