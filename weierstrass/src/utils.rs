use crate::{Error, Result};
use num_bigint::BigUint;

/// Serialize `value` as a big-endian integer, left-padded with zeros to
/// exactly `width` bytes.
///
/// Returns [`Error::Encoding`] if `value` does not fit.
pub(crate) fn to_be_bytes_padded(value: &BigUint, width: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; width];

    // `to_bytes_be` renders zero as a single zero byte
    let bytes = value.to_bytes_be();
    let bytes = match bytes.iter().position(|&b| b != 0) {
        Some(start) => &bytes[start..],
        None => return Ok(buf),
    };

    if bytes.len() > width {
        return Err(Error::Encoding);
    }

    buf[width - bytes.len()..].copy_from_slice(bytes);
    Ok(buf)
}

/// Split `bytes` into two equal big-endian integers. `bytes` must be exactly
/// `2 * width` long.
pub(crate) fn split_pair(bytes: &[u8], width: usize) -> Result<(BigUint, BigUint)> {
    if width == 0 || bytes.len() != 2 * width {
        return Err(Error::Decoding);
    }

    let (hi, lo) = bytes.split_at(width);
    Ok((BigUint::from_bytes_be(hi), BigUint::from_bytes_be(lo)))
}

/// Concatenate two integers, each padded to `width` bytes.
pub(crate) fn join_pair(hi: &BigUint, lo: &BigUint, width: usize) -> Result<Vec<u8>> {
    let mut bytes = to_be_bytes_padded(hi, width)?;
    bytes.extend_from_slice(&to_be_bytes_padded(lo, width)?);
    Ok(bytes)
}
