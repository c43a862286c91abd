//! SHA3-256 as a streaming sponge over [`keccak_f`].

use core::fmt;

use digest::{
    consts::U32, FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

use crate::keccak::{keccak_f, State};

/// The rate of SHA3-256 in bytes: 1088 of the 1600 state bits per block.
pub const RATE_BYTES: usize = 136;

/// SHA3-256 hasher.
///
/// Feed it with [`Update::update`] (any chunking) and consume it with
/// [`FixedOutput::finalize_fixed`] or the [`digest::Digest`] front end; the
/// output is always exactly 32 bytes.
#[derive(Clone)]
pub struct Sha3_256 {
    state: State,
    buffer: [u8; RATE_BYTES],
    buffered: usize,
}

impl Sha3_256 {
    /// Create a hasher with an all-zero state.
    pub fn new() -> Self {
        Self {
            state: [[0u64; 5]; 5],
            buffer: [0u8; RATE_BYTES],
            buffered: 0,
        }
    }

    // XOR one rate-sized block into the state as 17 little-endian lanes
    // (lane i lands at state[i / 5][i % 5]), then permute. The capacity
    // lanes are never touched by input.
    fn absorb_block(&mut self, block: &[u8; RATE_BYTES]) {
        for (i, chunk) in block.chunks_exact(8).enumerate() {
            self.state[i / 5][i % 5] ^= u64::from_le_bytes(chunk.try_into().unwrap());
        }
        keccak_f(&mut self.state);
    }

    // Multi-rate padding: suffix byte 0x06, zero fill, 0x80 OR'd into the
    // final byte. With 135 bytes buffered the two collapse into one 0x86.
    fn pad_and_absorb_final(&mut self) {
        let mut block = [0u8; RATE_BYTES];
        block[..self.buffered].copy_from_slice(&self.buffer[..self.buffered]);
        block[self.buffered] = 0x06;
        block[RATE_BYTES - 1] |= 0x80;
        self.absorb_block(&block);
    }

    // Emit lanes row-major (y outer, x inner), 8 little-endian bytes each,
    // truncated to the 32-byte output.
    fn squeeze(&self, out: &mut [u8; 32]) {
        for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&self.state[i / 5][i % 5].to_le_bytes());
        }
    }
}

impl Default for Sha3_256 {
    fn default() -> Self {
        Self::new()
    }
}

impl HashMarker for Sha3_256 {}

impl OutputSizeUser for Sha3_256 {
    type OutputSize = U32;
}

impl Update for Sha3_256 {
    fn update(&mut self, mut data: &[u8]) {
        if self.buffered > 0 {
            let take = (RATE_BYTES - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered == RATE_BYTES {
                let block = self.buffer;
                self.absorb_block(&block);
                self.buffered = 0;
            }
        }
        while data.len() >= RATE_BYTES {
            let block: &[u8; RATE_BYTES] = data[..RATE_BYTES].try_into().unwrap();
            self.absorb_block(block);
            data = &data[RATE_BYTES..];
        }
        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buffered = data.len();
        }
    }
}

impl FixedOutput for Sha3_256 {
    fn finalize_into(mut self, out: &mut Output<Self>) {
        self.pad_and_absorb_final();
        let mut digest = [0u8; 32];
        self.squeeze(&mut digest);
        out.copy_from_slice(&digest);
    }
}

impl Reset for Sha3_256 {
    fn reset(&mut self) {
        *self = Self::new();
    }
}

impl FixedOutputReset for Sha3_256 {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        self.pad_and_absorb_final();
        let mut digest = [0u8; 32];
        self.squeeze(&mut digest);
        out.copy_from_slice(&digest);
        Reset::reset(self);
    }
}

impl fmt::Debug for Sha3_256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sha3_256 { .. }")
    }
}
