use sipdigest::{hexdigest, Key, SipHash};

fn main() {
    let input = "Hello, world!";
    println!("Input: {}", input);
    println!("Input hex: {}", hex::encode(input.as_bytes()));
    println!("SipHash-1-3: {}", hexdigest(input.as_bytes(), &Key::DEFAULT));

    let mut hasher = SipHash::sip24(Key::new(*b"0123456789abcdef"));
    hasher.update("Hello, ").update("world");
    println!("Input 2: Hello, world (streamed, keyed)");
    println!("SipHash-2-4: {} [{}]", hasher.hexdigest(), hasher.backend());
}
