// Demo driver: generates a key pair from two hardcoded large primes and
// round-trips a short message through both codecs, printing every step.

use anyhow::Result;
use textbook_rsa::{decrypt, encrypt, generate_keypair_from_decimal, CodecKind};

const P: &str = "106697219132480173106064317148705638676529121742557567770857687729397446898790451577487723991083173010242416863238099716044775658681981821407922722052778958942891831033512463262741053961681512908218003840408526915629689432111480588966800949428079015682624591636010678691927285321708935076221951173426894836169";
const Q: &str = "144819424465842307806353672547344125290716753535239658417883828941232509622838692761917211806963011168822281666033695157426515864265527046213326145174398018859056439431422867957079149967592078894410082695714160599647180947207504108618794637872261572262805565517756922288320779308895819726074229154002310375209";

fn main() -> Result<()> {
    let keypair = generate_keypair_from_decimal(P, Q)?;
    println!("n = {}", keypair.n);
    println!("e = {}", keypair.e);
    println!("d = {}", keypair.d);

    let message = "The Magic Words are Squeamish Ossifrage";
    println!("\nmessage: {message}");

    for (name, kind) in [
        ("symbol-offset", CodecKind::SymbolOffset),
        ("bitstring", CodecKind::Bitstring),
    ] {
        let ciphertext = encrypt(message.as_bytes(), &keypair.n, &keypair.e, kind)?;
        let plaintext = decrypt(&ciphertext, &keypair.n, &keypair.d, kind)?;

        println!("\n[{name}]");
        println!("ciphertext = {ciphertext}");
        println!("ciphertext (hex) = {}", hex::encode(ciphertext.to_bytes_be()));
        println!("decrypted  = {}", String::from_utf8_lossy(&plaintext));
    }

    Ok(())
}
