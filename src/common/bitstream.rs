use std::fmt::{Display, Formatter};

use num_traits::PrimInt;

// Bit stream
//------------------------------------------------------------------------------

/// Ordered bit sequence, written and consumed strictly left to right.
/// Bits are stored MSB first within each byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
    // Pointer to take bits
    cursor: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        Self { data: Vec::with_capacity((bit_capacity + 7) >> 3), len: 0, cursor: 0 }
    }

    pub fn from_bytes(inp: &[u8]) -> Self {
        Self { data: inp.to_vec(), len: inp.len() << 3, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bits not yet taken.
    pub fn remaining(&self) -> usize {
        self.len - self.cursor
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bit at `pos` regardless of the cursor.
    pub fn get(&self, pos: usize) -> Option<bool> {
        if pos >= self.len {
            return None;
        }
        Some(self.data[pos >> 3] & (0b10000000 >> (pos & 7)) != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).filter_map(|i| self.get(i))
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    /// Appends the low `size` bits of `bits`, most significant first.
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Display,
    {
        let max_bits = std::mem::size_of::<T>() * 8;
        debug_assert!(size <= max_bits, "Bit count {size} exceeds width of type {max_bits}");
        debug_assert!(
            size >= max_bits - bits.leading_zeros() as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );

        for i in (0..size).rev() {
            self.push((bits >> i) & T::one() == T::one());
        }
    }

    pub fn push(&mut self, bit: bool) {
        let offset = self.len & 7;
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }
        self.len += 1;
    }

    pub fn extend(&mut self, arr: &[u8]) {
        if self.len & 7 == 0 {
            self.data.extend_from_slice(arr);
            self.len += arr.len() << 3;
        } else {
            arr.iter().for_each(|b| self.push_bits(*b, 8));
        }
    }

    /// Pads with zero bits up to the next byte boundary.
    pub fn align_to_byte(&mut self) {
        while self.len & 7 != 0 {
            self.push(false);
        }
    }
}


// Take bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    /// Takes the next `n` bits, MSB first. `None` if fewer than `n` remain.
    pub fn take_bits(&mut self, n: usize) -> Option<u16> {
        debug_assert!(n <= 16, "Cannot take more than 16 bits: N {n}");

        if n > self.remaining() {
            return None;
        }
        let mut res = 0_u16;
        for _ in 0..n {
            res = (res << 1) | self.take()? as u16;
        }
        Some(res)
    }

    pub fn take(&mut self) -> Option<bool> {
        let bit = self.get(self.cursor)?;
        self.cursor += 1;
        Some(bit)
    }
}

impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.take()
    }
}

impl FromIterator<bool> for BitStream {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bs = BitStream::new();
        iter.into_iter().for_each(|b| bs.push(b));
        bs
    }
}

impl Display for BitStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.iter().try_for_each(|b| f.write_str(if b { "1" } else { "0" }))
    }
}
