use sipdigest::{siphash13, siphash24, Key, DIGEST_LEN};

// Helper function to calculate Hamming distance between two byte slices
fn hamming_distance(a: &[u8], b: &[u8]) -> u32 {
    assert_eq!(
        a.len(),
        b.len(),
        "Slices must have the same length for Hamming distance"
    );
    let mut distance = 0;
    for (byte_a, byte_b) in a.iter().zip(b.iter()) {
        distance += (byte_a ^ byte_b).count_ones();
    }
    distance
}

// BLAKE3 keyed mode truncated to the SipHash output size, as a yardstick.
fn blake3_64(key: &[u8; 32], data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&blake3::keyed_hash(key, data).as_bytes()[..DIGEST_LEN]);
    out
}

// --- Avalanche Effect Comparison Test ---
#[test]
fn test_avalanche_comparison() {
    let input_data = [0x5Au8; 64]; // Arbitrary pattern
    let num_bytes_to_flip = 16; // Limit flips to first 16 bytes (128 bits) for speed
    let num_bits_to_flip = num_bytes_to_flip * 8;

    let key = Key::new(*b"avalanche-key-16");
    let blake_key = [0x42u8; 32];

    // Calculate baseline hashes
    let baseline_sip13 = siphash13(&input_data, &key);
    let baseline_sip24 = siphash24(&input_data, &key);
    let baseline_blake3 = blake3_64(&blake_key, &input_data);

    // Accumulators for total Hamming distance
    let mut total_dist_sip13: u64 = 0;
    let mut total_dist_sip24: u64 = 0;
    let mut total_dist_blake3: u64 = 0;

    for byte_index in 0..num_bytes_to_flip {
        for bit_index in 0..8 {
            let mut modified_input = input_data;
            modified_input[byte_index] ^= 1 << bit_index; // Flip the bit

            total_dist_sip13 +=
                hamming_distance(&baseline_sip13, &siphash13(&modified_input, &key)) as u64;
            total_dist_sip24 +=
                hamming_distance(&baseline_sip24, &siphash24(&modified_input, &key)) as u64;
            total_dist_blake3 +=
                hamming_distance(&baseline_blake3, &blake3_64(&blake_key, &modified_input)) as u64;
        }
    }

    // Calculate average Hamming distances
    let avg_dist_sip13 = total_dist_sip13 as f64 / num_bits_to_flip as f64;
    let avg_dist_sip24 = total_dist_sip24 as f64 / num_bits_to_flip as f64;
    let avg_dist_blake3 = total_dist_blake3 as f64 / num_bits_to_flip as f64;

    println!(
        "\n--- Avalanche Test Results (Average Hamming Distance over {} bit flips) ---",
        num_bits_to_flip
    );
    println!("SipHash-1-3: {:.2}", avg_dist_sip13);
    println!("SipHash-2-4: {:.2}", avg_dist_sip24);
    println!("BLAKE3/64:   {:.2}", avg_dist_blake3);
    println!("Ideal (64-bit output): 32.00");

    // +/- 12.5% around the ideal 32 bits
    for (name, avg) in [("SipHash-1-3", avg_dist_sip13), ("SipHash-2-4", avg_dist_sip24)] {
        assert!(
            avg > 28.0 && avg < 36.0,
            "{} average Hamming distance ({:.2}) is outside the acceptable range [28.0, 36.0]",
            name,
            avg
        );
        assert!(
            avg > avg_dist_blake3 - 3.0,
            "{} avg dist significantly lower than BLAKE3",
            name
        );
    }
}

#[test]
fn test_key_sensitivity() {
    let message = b"same message, different keys";
    let base = siphash24(message, &Key::DEFAULT);

    for byte_index in 0..16 {
        let mut key_bytes = [0u8; 16];
        key_bytes[byte_index] = 1;
        let flipped = siphash24(message, &Key::new(key_bytes));
        let distance = hamming_distance(&base, &flipped);
        assert!(
            distance >= 8,
            "flipping key byte {} changed only {} output bits",
            byte_index,
            distance
        );
    }
}
