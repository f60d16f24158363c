use crate::error::SerdeErr;

/// Reads bits back out of a buffer produced by [`BitWriter`](crate::BitWriter)
pub struct BitReader<'b> {
    buffer: &'b [u8],
    position: u32,
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    fn available(&self) -> u32 {
        (self.buffer.len() as u32) * 8
    }

    fn ensure(&self, bits: u32) -> Result<(), SerdeErr> {
        if self.position + bits > self.available() {
            return Err(SerdeErr::UnexpectedEnd {
                requested: bits,
                offset: self.position,
                available: self.available(),
            });
        }
        Ok(())
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        self.ensure(1)?;
        let byte = self.buffer[(self.position / 8) as usize];
        let bit = (byte >> (self.position % 8)) & 1 != 0;
        self.position += 1;
        Ok(bit)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        self.ensure(8)?;
        let mut output: u8 = 0;
        for index in 0..8 {
            if self.read_bit()? {
                output |= 1 << index;
            }
        }
        Ok(output)
    }
}
