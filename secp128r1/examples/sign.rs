use secp128r1::{
    ecdsa::{SigningKey, VerifyingKey, generate_keypair},
    rand_core::OsRng,
};

fn main() -> Result<(), secp128r1::Error> {
    let (secret_scalar, public_point) = generate_keypair(&mut OsRng);
    println!("public key: ({:x}, {:x})", public_point.x(), public_point.y());

    let signing_key = SigningKey::from_scalar(secret_scalar)?;
    let signature = signing_key.sign_message(&mut OsRng, b"Hello!")?;
    println!("signature: ({:x}, {:x})", signature.r(), signature.s());

    let verifying_key = VerifyingKey::from_affine(public_point)?;
    for message in ["Hello!", "Hi there!", "Hello"] {
        let valid = verifying_key.verify_message(message.as_bytes(), &signature)?;
        println!("verify {message:?}: {valid}");
    }

    Ok(())
}
