use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Millisecond timestamp followed by nine random base-36 characters.
///
/// Not collision-proof; adequate for a single process with low write volume.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..9)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{}{}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::generate_id;

    #[test]
    fn id_is_timestamp_plus_suffix() {
        let id = generate_id();
        assert_eq!(id.len(), 13 + 9);
        let (ts, suffix) = id.split_at(id.len() - 9);
        assert!(ts.chars().all(|c| c.is_ascii_digit()));
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn consecutive_ids_differ() {
        assert_ne!(generate_id(), generate_id());
    }
}
