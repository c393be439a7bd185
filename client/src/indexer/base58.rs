use solana_sdk::pubkey::Pubkey;

use crate::indexer::IndexerError;

pub fn decode_base58_to_fixed_array<const N: usize>(input: &str) -> Result<[u8; N], IndexerError> {
    let mut buffer = [0u8; N];
    let decoded_len = bs58::decode(input.trim())
        .onto(&mut buffer)
        .map_err(|_| IndexerError::InvalidBase58(input.to_string()))?;

    if decoded_len != N {
        return Err(IndexerError::InvalidLength {
            expected: N,
            actual: decoded_len,
        });
    }

    Ok(buffer)
}

/// Decodes an indexer-returned hash into the 32-byte form the program expects.
pub fn decode_hash(value: &str) -> Result<[u8; 32], IndexerError> {
    decode_base58_to_fixed_array(value)
}

pub fn decode_pubkey(value: &str) -> Result<Pubkey, IndexerError> {
    decode_base58_to_fixed_array(value).map(Pubkey::new_from_array)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_hash_round_trips() {
        let key = Pubkey::new_unique();
        let encoded = key.to_string();
        let bytes = decode_hash(&encoded).unwrap();
        assert_eq!(bytes, key.to_bytes());
        assert_eq!(bs58::encode(bytes).into_string(), encoded);
    }

    #[test]
    fn decode_hash_trims_whitespace() {
        let key = Pubkey::new_unique();
        let padded = format!("  {} ", key);
        assert_eq!(decode_hash(&padded).unwrap(), key.to_bytes());
    }

    #[test]
    fn decode_hash_rejects_invalid_base58() {
        let result = decode_hash("not-base58-0OIl");
        assert!(matches!(result, Err(IndexerError::InvalidBase58(_))));
    }

    #[test]
    fn decode_hash_rejects_wrong_length() {
        let short = bs58::encode([1u8; 16]).into_string();
        let result = decode_hash(&short);
        assert!(matches!(
            result,
            Err(IndexerError::InvalidLength {
                expected: 32,
                actual: 16
            })
        ));
    }
}
