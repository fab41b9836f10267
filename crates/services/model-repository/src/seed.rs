//! Demo data seeding.

use rand::Rng;

use common::AppResult;
use domain::{ResponseCode, SystemRequest};

use crate::service::SystemGateway;

const SEED_FIELD_LENGTH: usize = 10;

/// Wipe all Systems and insert `count` with random names and organizations.
///
/// Returns how many were created.
pub async fn seed_systems(gateway: &SystemGateway, count: usize) -> AppResult<usize> {
    let wiped = gateway.delete_all().await?;
    tracing::info!("{}", wiped.message());

    let mut created = 0;
    for _ in 0..count {
        let request = SystemRequest {
            name: random_alphabetic(SEED_FIELD_LENGTH),
            organization: random_alphabetic(SEED_FIELD_LENGTH),
            ..Default::default()
        };

        let envelope = gateway.create(request).await?;
        if envelope.code() == ResponseCode::Success {
            created += 1;
        } else {
            tracing::warn!("Seeding stopped: {}", envelope.message());
            break;
        }
    }

    Ok(created)
}

/// Random ASCII letters, upper and lower case.
fn random_alphabetic(len: usize) -> String {
    const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Envelope, SystemResponse};

    use crate::service::MockPersistenceGateway;

    #[test]
    fn test_random_alphabetic() {
        let value = random_alphabetic(SEED_FIELD_LENGTH);
        assert_eq!(value.len(), SEED_FIELD_LENGTH);
        assert!(value.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_random_alphabetic_longer_than_sixteen() {
        let value = random_alphabetic(64);
        assert_eq!(value.len(), 64);
        assert!(value.chars().all(|c| c.is_ascii_alphabetic()));
        assert!(random_alphabetic(0).is_empty());
    }

    #[tokio::test]
    async fn test_seed_wipes_then_creates() {
        let mut gateway = MockPersistenceGateway::<SystemRequest, SystemResponse>::new();
        gateway
            .expect_delete_all()
            .times(1)
            .returning(|| Ok(Envelope::acknowledged("0 Systems have been deleted.")));
        gateway.expect_create().times(3).returning(|dto: SystemRequest| {
            assert!(!dto.name.is_empty());
            Ok(Envelope::acknowledged("created"))
        });

        let created = seed_systems(&gateway, 3).await.unwrap();
        assert_eq!(created, 3);
    }
}
