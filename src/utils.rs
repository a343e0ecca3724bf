use data_encoding::{DecodeError, BASE32};

// Decode a stored secret, standard alphabet with `=` padding
pub fn decode_secret(value: &str) -> Result<Vec<u8>, DecodeError> {
    BASE32.decode(value.as_bytes())
}

// Validate a numeric flag is a positive integer
pub fn is_positive_int(value: &str) -> Result<(), String> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err(String::from("the value must be a positive integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::constants::{RFC_SECRET, RFC_SECRET_BASE32};

    #[test]
    fn decodes_unpadded_full_block() {
        let decoded = decode_secret(RFC_SECRET_BASE32).unwrap();
        assert_eq!(decoded, RFC_SECRET.as_bytes());
    }

    #[test]
    fn decodes_padded_secret() {
        assert_eq!(decode_secret("MZXW6===").unwrap(), b"foo");
    }

    #[test]
    fn rejects_missing_padding_and_lowercase() {
        assert!(decode_secret("MZXW6").is_err());
        assert!(decode_secret("mzxw6===").is_err());
        assert!(decode_secret("not base32!").is_err());
    }

    #[test]
    fn validates_positive_integers() {
        assert!(is_positive_int("30").is_ok());
        assert!(is_positive_int("0").is_err());
        assert!(is_positive_int("-1").is_err());
        assert!(is_positive_int("six").is_err());
    }
}
