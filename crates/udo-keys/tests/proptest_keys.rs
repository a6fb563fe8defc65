use proptest::prelude::*;

use udo_keys::{Address, Ed25519Keypair, SignatureScheme, WalletSignature};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn seed_to_address_is_stable(seed in prop::array::uniform32(any::<u8>())) {
        let a = Ed25519Keypair::from_bytes(&seed).unwrap();
        let b = Ed25519Keypair::from_bytes(&seed).unwrap();
        prop_assert_eq!(a.public_key(), b.public_key());
        prop_assert_eq!(a.address(), b.address());

        // Display form parses back to the same address
        let parsed = Address::from_hex(&a.address().to_string()).unwrap();
        prop_assert_eq!(parsed, a.address());
    }

    #[test]
    fn sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let keypair = Ed25519Keypair::from_bytes(&seed).unwrap();

        let sig = keypair.sign_personal_message(&msg);
        prop_assert!(sig.verify_personal_message(&keypair.public_key(), &msg).unwrap());

        let tx_sig = keypair.sign_transaction_bytes(&msg);
        prop_assert!(tx_sig.verify_transaction(&keypair.public_key(), &msg).unwrap());

        // Scopes never cross-verify
        prop_assert!(!sig.verify_transaction(&keypair.public_key(), &msg).unwrap());
    }

    #[test]
    fn corrupted_signature_never_verifies(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 1..128),
        flip_bit in 0usize..512,
    ) {
        let keypair = Ed25519Keypair::from_bytes(&seed).unwrap();
        let sig = keypair.sign_personal_message(&msg);

        // Corrupt one bit of the 64-byte signature body
        let mut bytes = sig.to_bytes();
        bytes[1 + flip_bit / 8] ^= 1 << (flip_bit % 8);

        let corrupted = WalletSignature::from_bytes(&bytes).unwrap();
        prop_assert_eq!(corrupted.scheme(), SignatureScheme::Ed25519);
        prop_assert!(!corrupted.verify_personal_message(&keypair.public_key(), &msg).unwrap());
    }

    #[test]
    fn signature_base64_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let keypair = Ed25519Keypair::from_bytes(&seed).unwrap();
        let sig = keypair.sign_transaction_bytes(&msg);
        let restored = WalletSignature::from_base64(&sig.to_base64()).unwrap();
        prop_assert_eq!(restored, sig);
    }
}
