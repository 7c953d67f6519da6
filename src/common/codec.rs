use std::borrow::Cow;

use encoding_rs::mem::{decode_latin1, encode_latin1_lossy, is_str_latin1};
use tracing::trace;

use super::bitstream::BitStream;
use super::error::{QRError, QRResult};
use super::metadata::{Mode, Version};

pub const TERMINATOR_BITS: usize = 4;

// Payload
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    mode: Mode,
    data: Vec<u8>,
}

impl Payload {
    pub fn new(mode: Mode, data: impl Into<Vec<u8>>) -> Self {
        Self { mode, data: data.into() }
    }

    pub fn bytes(data: &[u8]) -> Self {
        Self::new(Mode::Byte, data)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Byte count written into the length field.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Bits `pack` emits for this payload in `ver`, padding included.
    pub fn bit_len(&self, ver: Version) -> usize {
        let raw = Mode::INDICATOR_BITS + ver.length_bits() + (self.len() << 3) + TERMINATOR_BITS;
        (raw + 7) & !7
    }
}

// Packing
//------------------------------------------------------------------------------

/// Serializes `payload` as mode indicator, length, data, terminator and zero
/// padding to a byte boundary. The length field width depends on `ver`, so
/// the version must already be selected. Callers check capacity first.
pub fn pack(payload: &Payload, ver: Version) -> BitStream {
    let len_bits = ver.length_bits();
    debug_assert!(
        payload.len() < 1 << len_bits,
        "Length {} doesn't fit in {len_bits} bits",
        payload.len()
    );

    let mut bs = BitStream::with_capacity(payload.bit_len(ver));
    bs.push_bits(payload.mode().indicator(), Mode::INDICATOR_BITS);
    bs.push_bits(payload.len(), len_bits);
    for &b in payload.data() {
        bs.push_bits(b, 8);
    }
    bs.push_bits(0_u8, TERMINATOR_BITS);
    bs.align_to_byte();

    trace!(bits = bs.len(), version = *ver, "Packed payload");
    bs
}

// Unpacking
//------------------------------------------------------------------------------

/// Parses a stream produced by [`pack`]. Only the mode indicator, the length
/// field and `length` bytes are consumed; terminator and padding are left.
pub fn unpack(bs: &mut BitStream, ver: Version) -> QRResult<Payload> {
    let mode = take(bs, Mode::INDICATOR_BITS)?;
    let mode = Mode::try_from(mode as u8)?;

    let len = take(bs, ver.length_bits())? as usize;
    let requested = len << 3;
    if bs.remaining() < requested {
        return Err(QRError::TruncatedStream { requested, available: bs.remaining() });
    }

    let mut data = Vec::with_capacity(len);
    for _ in 0..len {
        data.push(take(bs, 8)? as u8);
    }

    trace!(len, version = *ver, "Unpacked payload");
    Ok(Payload::new(mode, data))
}

fn take(bs: &mut BitStream, n: usize) -> QRResult<u16> {
    bs.take_bits(n)
        .ok_or_else(|| QRError::TruncatedStream { requested: n, available: bs.remaining() })
}

// Text
//------------------------------------------------------------------------------

/// Maps each character to the byte of its code point. Fails with
/// [`QRError::InvalidChar`] when a character is above U+00FF.
pub fn encode_text(text: &str) -> QRResult<Cow<'_, [u8]>> {
    if !is_str_latin1(text) {
        return Err(QRError::InvalidChar);
    }
    Ok(encode_latin1_lossy(text))
}

/// Inverse of [`encode_text`]; every byte is a valid code point.
pub fn decode_text(data: &[u8]) -> String {
    decode_latin1(data).into_owned()
}
