// =============================================================================
// PNG.RS — Minimal PNG writer built from first principles
//
// Serializes a finished Canvas into a standalone PNG byte stream:
// signature, IHDR, one zlib-deflated IDAT, IEND. Chunk framing, CRC-32 and
// the per-scanline filter-byte layout are implemented here; only the DEFLATE
// step itself delegates to `flate2`. There is no decode path.
// =============================================================================

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use thiserror::Error;

use crate::canvas::Canvas;

/// Fixed 8-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// 8 bits per channel.
const BIT_DEPTH: u8 = 8;
/// Color type 6: truecolor with alpha.
const COLOR_TYPE_RGBA: u8 = 6;

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum EncodeError {
    /// A zero-area canvas cannot be represented as a well-formed PNG, so it
    /// is rejected up front instead of emitting a malformed container.
    #[error("canvas dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },

    /// The deflate stream failed mid-write.
    #[error("compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

// ── Encoder ───────────────────────────────────────────────────────────────────

/// Serialize `canvas` into a complete PNG byte stream.
///
/// Pure function of `(width, height, pixels)`: no hidden state, byte-identical
/// output for identical input (the compression level is pinned). Safe to call
/// concurrently on independent canvases.
pub fn encode(canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (canvas.width(), canvas.height());
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Raw scanline stream: per row, one filter-type byte (0 = no filtering)
    // followed by the row's pixels as R,G,B,A.
    let mut raw = Vec::with_capacity(height as usize * (1 + width as usize * 4));
    for row in canvas.pixels().chunks_exact(width as usize) {
        raw.push(0);
        for px in row {
            raw.extend_from_slice(&px.channels());
        }
    }

    // Level 9, matching the fixed level the determinism contract assumes.
    let mut deflater = ZlibEncoder::new(Vec::new(), Compression::best());
    deflater.write_all(&raw)?;
    let idat = deflater.finish()?;

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGBA, 0, 0, 0]);

    let mut out = Vec::with_capacity(SIGNATURE.len() + ihdr.len() + idat.len() + 3 * 12);
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr);
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

/// Frame one chunk: `length ++ type ++ data ++ crc`, integers big-endian.
///
/// Length and CRC are derived from the tag and payload at write time — they
/// are never cached anywhere. The CRC covers `type ++ data`, never the
/// length field.
fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc32(tag, data).to_be_bytes());
}

// ── CRC-32 ────────────────────────────────────────────────────────────────────

const CRC_TABLE: [u32; 256] = crc_table();

const fn crc_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 {
                0xEDB8_8320 ^ (c >> 1)
            } else {
                c >> 1
            };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// CRC-32 over `tag ++ data` (reflected polynomial `0xEDB88320`, initial
/// value and final xor all-ones — the PNG/zlib variant).
fn crc32(tag: &[u8; 4], data: &[u8]) -> u32 {
    let mut c = 0xFFFF_FFFF_u32;
    for &byte in tag.iter().chain(data) {
        c = CRC_TABLE[((c ^ u32::from(byte)) & 0xFF) as usize] ^ (c >> 8);
    }
    c ^ 0xFFFF_FFFF
}

// ── Tests ─────────────────────────────────────────────────────────────────────
