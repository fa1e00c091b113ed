use proptest::prelude::*;
use sipdigest::backend::{Backend, Portable, Unrolled};
use sipdigest::{digest, digest_with, hexdigest, Key, Rounds, SipHash};

const SEQUENTIAL_KEY: Key = Key::new([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);

#[test]
fn test_chunked_alphabet_matches_one_shot() {
    let mut hasher = SipHash::sip13(Key::DEFAULT);
    hasher
        .update("abcd")
        .update("efgh")
        .update("ijkl")
        .update("mnop");
    assert_eq!(hasher.finish(), digest(b"abcdefghijklmnop", &Key::DEFAULT));
}

#[test]
fn test_uneven_splits_across_word_boundaries() {
    let message = b"digest-sip_hash, split at awkward places";
    let expected = digest_with(message, &SEQUENTIAL_KEY, Rounds::SIP_2_4);

    for first in 0..message.len() {
        for second in first..message.len() {
            let mut hasher = SipHash::sip24(SEQUENTIAL_KEY);
            hasher
                .update(&message[..first])
                .update(&message[first..second])
                .update(&message[second..]);
            assert_eq!(hasher.digest(), expected, "split at {} / {}", first, second);
        }
    }
}

#[test]
fn test_multiple_digests_with_reset() {
    let mut hasher = SipHash::sip13(Key::DEFAULT);
    hasher.update("first");
    let first = hasher.hexdigest();
    hasher.reset();
    hasher.update("second");
    let second = hasher.hexdigest();

    assert_eq!(first, hexdigest(b"first", &Key::DEFAULT));
    assert_eq!(second, hexdigest(b"second", &Key::DEFAULT));
}

#[test]
fn test_empty_instance_hashes_empty_message() {
    assert_eq!(SipHash::default().hexdigest(), "d1fba762150c532c");
    assert_eq!(SipHash::sip24(Key::DEFAULT).hexdigest(), "1e924b9d737700d7");
    assert_eq!(SipHash::sip13(SEQUENTIAL_KEY).hexdigest(), "abac0158050fc4dc");
}

#[test]
fn test_custom_rounds_instance() {
    let mut hasher = SipHash::new(Key::DEFAULT, Rounds::new(3, 5));
    hasher.update(vec![b'x'; 1000]);
    assert_eq!(hasher.hexdigest(), "f344baf915afc13a");
}

#[test]
fn test_digest_is_hexdigest_bytes() {
    let mut hasher = SipHash::sip13(SEQUENTIAL_KEY);
    hasher.update("test");
    let digest = hasher.digest();
    assert_eq!(digest.len(), 8);
    assert_eq!(hex::encode(digest), hasher.hexdigest());
}

#[test]
fn test_instances_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SipHash>();
}

proptest! {
    #[test]
    fn chunking_never_changes_digest(
        message in proptest::collection::vec(any::<u8>(), 0..200),
        cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0..6),
        key in any::<[u8; 16]>()
    ) {
        let key = Key::new(key);
        let mut points: Vec<usize> = cuts.iter().map(|i| i.index(message.len() + 1)).collect();
        points.sort_unstable();

        let mut hasher = SipHash::sip13(key);
        let mut start = 0;
        for point in points {
            hasher.update(&message[start..point]);
            start = point;
        }
        hasher.update(&message[start..]);

        prop_assert_eq!(hasher.digest(), digest(&message, &key));
    }

    #[test]
    fn reset_forgets_previous_input(
        before in proptest::collection::vec(any::<u8>(), 0..64),
        after in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let mut hasher = SipHash::sip24(SEQUENTIAL_KEY);
        hasher.update(&before).reset().update(&after);
        prop_assert_eq!(
            hasher.digest(),
            digest_with(&after, &SEQUENTIAL_KEY, Rounds::SIP_2_4)
        );
    }

    #[test]
    fn backends_agree(
        message in proptest::collection::vec(any::<u8>(), 0..300),
        key in any::<[u8; 16]>(),
        c in 0u32..5,
        d in 0u32..6
    ) {
        let key = Key::new(key);
        for rounds in [Rounds::new(c, d), Rounds::SIP_1_3, Rounds::SIP_2_4] {
            prop_assert_eq!(
                Unrolled::hash(&message, &key, rounds),
                Portable::hash(&message, &key, rounds)
            );
        }
    }
}
