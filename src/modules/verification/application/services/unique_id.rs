use rand::rngs::OsRng;
use rand::RngCore;

/// Generates a public verification id: `VU-` followed by 12 uppercase hex
/// characters (48 random bits) from the OS entropy source.
///
/// Collisions are not checked or retried; at 48 bits the residual
/// probability is accepted.
pub fn generate_unique_id() -> String {
    let mut raw = [0u8; 6];
    OsRng.fill_bytes(&mut raw);

    let hex: String = raw.iter().map(|byte| format!("{:02X}", byte)).collect();
    format!("VU-{}", hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_has_expected_format() {
        let id = generate_unique_id();

        assert_eq!(id.len(), 15);
        assert!(id.starts_with("VU-"));
        assert!(id[3..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn sequential_ids_differ() {
        let first = generate_unique_id();
        let second = generate_unique_id();

        assert_ne!(first, second);
    }
}
