use crate::domain::model::SecretResponse;
use chrono::{SecondsFormat, Utc};
use rand::rngs::OsRng;
use rand::RngCore;

pub const SECRET_BYTES: usize = 32;

/// 32 bytes from the OS random source, hex encoded (64 characters).
pub fn generate_secret() -> SecretResponse {
    let mut bytes = [0u8; SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    let secret_key = hex::encode(bytes);

    SecretResponse {
        length: secret_key.len(),
        secret_key,
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_64_hex_chars() {
        for _ in 0..16 {
            let secret = generate_secret();
            assert_eq!(secret.secret_key.len(), 64);
            assert_eq!(secret.length, 64);
            assert!(secret
                .secret_key
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_successive_secrets_differ() {
        let first = generate_secret();
        let second = generate_secret();
        assert_ne!(first.secret_key, second.secret_key);
    }

    #[test]
    fn test_generated_at_is_utc_timestamp() {
        let secret = generate_secret();
        let parsed = chrono::DateTime::parse_from_rfc3339(&secret.generated_at).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }
}
