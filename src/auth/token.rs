use rand::RngCore;

pub(crate) const TOKEN_LEN: usize = 16;

/// Fresh opaque token: 16 lowercase hex characters, not derived from the
/// request and never stored anywhere.
pub(crate) fn generate() -> String {
    let mut bytes = [0u8; TOKEN_LEN / 2];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_16_lowercase_hex_chars() {
        let token = generate();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn tokens_differ_between_calls() {
        assert_ne!(generate(), generate());
    }
}
