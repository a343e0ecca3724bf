use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::{OtpError, Result};

// HOTP https://datatracker.ietf.org/doc/html/rfc4226

type HmacSha1 = Hmac<Sha1>;

pub fn hotp(secret: &[u8], counter: u64, digits: u32) -> Result<u32> {
    let hmac = make_hmac(secret, counter)?;
    Ok(truncate(&hmac, digits))
}

// HMAC_SHA-1 -> 20 byte string
fn make_hmac(secret: &[u8], counter: u64) -> Result<Vec<u8>> {
    let mut mac = HmacSha1::new_from_slice(secret).map_err(|_| OtpError::InvalidKey)?;
    mac.update(&counter.to_be_bytes());
    let result = mac.finalize();

    Ok(result.into_bytes().to_vec())
}

// reduce to 4 byte string
// then s to num mod 10^Digit
fn truncate(hmac: &[u8], digits: u32) -> u32 {
    let base_code = dynamic_truncation(hmac);

    // 10^digits past u64 range is already larger than any 31-bit code
    match u64::checked_pow(10, digits) {
        Some(modulus) => (base_code as u64 % modulus) as u32,
        None => base_code,
    }
}

// DT(String) // String = String[0]...String[19]
// Let OffsetBits be the low-order 4 bits of String[19]
// Offset = StToNum(OffsetBits) // 0 <= OffSet <= 15
// Let P = String[OffSet]...String[OffSet+3]
// Return the Last 31 bits of P
fn dynamic_truncation(hmac: &[u8]) -> u32 {
    let offset = (hmac[19] & 0xf) as usize;
    (hmac[offset] as u32 & 0x7f) << 24
        | (hmac[offset + 1] as u32 & 0xff) << 16
        | (hmac[offset + 2] as u32 & 0xff) << 8
        | (hmac[offset + 3] as u32 & 0xff)
}
