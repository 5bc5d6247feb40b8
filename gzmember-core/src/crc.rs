//! CRC-32 (ISO 3309) as used by GZIP.
//!
//! GZIP stores a CRC-32 of the uncompressed data in every member trailer and,
//! when FHCRC is set, the low 16 bits of a CRC-32 over the header bytes.
//!
//! Inputs of 16 bytes or more are processed with slicing-by-8 (eight lookup
//! tables, eight bytes per step); shorter inputs use the single-table loop.

const POLY: u32 = 0xEDB88320;

/// Slicing-by-8 tables. `CRC32_TABLES[0]` is the classic byte-at-a-time table.
const CRC32_TABLES: [[u32; 256]; 8] = {
    let mut tables = [[0u32; 256]; 8];

    let mut i = 0usize;
    while i < 256 {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ POLY } else { crc >> 1 };
            j += 1;
        }
        tables[0][i] = crc;
        i += 1;
    }

    let mut t = 1;
    while t < 8 {
        let mut i = 0usize;
        while i < 256 {
            let prev = tables[t - 1][i];
            tables[t][i] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
            i += 1;
        }
        t += 1;
    }

    tables
};

/// Incremental CRC-32 calculator.
///
/// - Polynomial: 0x04C11DB7 (reflected: 0xEDB88320)
/// - Initial value and final XOR: 0xFFFFFFFF
///
/// The value is a native `u32`; trailer comparisons are always unsigned.
///
/// # Example
///
/// ```
/// use gzmember_core::crc::Crc32;
///
/// let mut crc = Crc32::new();
/// crc.update(b"Hello, ");
/// crc.update(b"World!");
/// assert_eq!(crc.finalize(), 0xEC4AC3D0);
/// ```
#[derive(Debug, Clone)]
pub struct Crc32 {
    state: u32,
}

impl Crc32 {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self { state: 0xFFFFFFFF }
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        self.state = 0xFFFFFFFF;
    }

    /// Feed more data.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        if data.len() >= 16 {
            self.state = update_slice8(self.state, data);
        } else {
            self.state = update_bytewise(self.state, data);
        }
    }

    /// Checksum of the data seen so far.
    #[inline(always)]
    pub fn value(&self) -> u32 {
        self.state ^ 0xFFFFFFFF
    }

    /// Consume the calculator and return the checksum.
    #[inline(always)]
    pub fn finalize(self) -> u32 {
        self.value()
    }

    /// One-shot checksum of `data`.
    #[inline]
    pub fn compute(data: &[u8]) -> u32 {
        let mut crc = Self::new();
        crc.update(data);
        crc.finalize()
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn update_bytewise(mut crc: u32, data: &[u8]) -> u32 {
    for &byte in data {
        crc = CRC32_TABLES[0][((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
    }
    crc
}

#[inline]
fn update_slice8(mut crc: u32, data: &[u8]) -> u32 {
    let mut chunks = data.chunks_exact(8);
    for chunk in &mut chunks {
        let low = crc ^ u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        crc = CRC32_TABLES[7][(low & 0xFF) as usize]
            ^ CRC32_TABLES[6][((low >> 8) & 0xFF) as usize]
            ^ CRC32_TABLES[5][((low >> 16) & 0xFF) as usize]
            ^ CRC32_TABLES[4][(low >> 24) as usize]
            ^ CRC32_TABLES[3][chunk[4] as usize]
            ^ CRC32_TABLES[2][chunk[5] as usize]
            ^ CRC32_TABLES[1][chunk[6] as usize]
            ^ CRC32_TABLES[0][chunk[7] as usize];
    }
    update_bytewise(crc, chunks.remainder())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_empty() {
        // Identity value: nothing fed, nothing changed.
        assert_eq!(Crc32::compute(b""), 0x00000000);
    }

    #[test]
    fn test_crc32_check() {
        assert_eq!(Crc32::compute(b"123456789"), 0xCBF43926);
    }

    #[test]
    fn test_crc32_hello() {
        assert_eq!(Crc32::compute(b"hello"), 0x3610A686);
    }

    #[test]
    fn test_crc32_incremental() {
        let mut crc = Crc32::new();
        crc.update(b"Hello");
        crc.update(b", ");
        crc.update(b"World!");
        assert_eq!(crc.finalize(), 0xEC4AC3D0);
    }

    #[test]
    fn test_crc32_reset() {
        let mut crc = Crc32::new();
        crc.update(b"garbage");
        crc.reset();
        crc.update(b"123456789");
        assert_eq!(crc.value(), 0xCBF43926);
    }

    #[test]
    fn test_crc32_table_correctness() {
        assert_eq!(CRC32_TABLES[0][0], 0x00000000);
        assert_eq!(CRC32_TABLES[0][1], 0x77073096);
        assert_eq!(CRC32_TABLES[0][255], 0x2D02EF8D);
    }

    #[test]
    fn test_slice8_matches_bytewise() {
        let data: Vec<u8> = (0..1027u32).map(|i| (i * 31 % 251) as u8).collect();
        for len in [16, 17, 23, 64, 1000, 1027] {
            let expected = update_bytewise(0xFFFFFFFF, &data[..len]) ^ 0xFFFFFFFF;
            assert_eq!(Crc32::compute(&data[..len]), expected, "len {len}");
        }
    }

    #[test]
    fn test_matches_flate2_crc() {
        let data = b"The quick brown fox jumps over the lazy dog. ".repeat(100);
        let mut reference = flate2::Crc::new();
        reference.update(&data);
        assert_eq!(Crc32::compute(&data), reference.sum());
    }
}
