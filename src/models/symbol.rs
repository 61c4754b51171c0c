use super::Region;

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Get error correction level from the format bits (01=L, 00=M, 11=Q, 10=H)
    pub fn from_format_bits(bits: u16) -> Option<Self> {
        match bits & 0x03 {
            0b01 => Some(ECLevel::L),
            0b00 => Some(ECLevel::M),
            0b11 => Some(ECLevel::Q),
            0b10 => Some(ECLevel::H),
            _ => None,
        }
    }
}

/// Symbol properties reported alongside the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    /// QR version (1-40)
    pub version: u8,
    /// Error correction level
    pub ec_level: Option<ECLevel>,
    /// Mask pattern (0-7)
    pub mask: u8,
}

impl SymbolInfo {
    /// Size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.version as usize + 17
    }
}

/// One symbol as reported by the detector, before any validation
#[derive(Debug, Clone, PartialEq)]
pub struct RawDecodeResult {
    /// Payload bytes exactly as stored in the symbol
    pub data: Vec<u8>,
    /// Where the symbol sits in the detected image
    pub region: Region,
    /// Version, EC level and mask, when the detector provides them
    pub info: Option<SymbolInfo>,
}

impl RawDecodeResult {
    /// Create a result with no symbol metadata
    pub fn new(data: Vec<u8>, region: Region) -> Self {
        Self {
            data,
            region,
            info: None,
        }
    }

    /// Attach symbol metadata
    pub fn with_info(mut self, info: SymbolInfo) -> Self {
        self.info = Some(info);
        self
    }
}
