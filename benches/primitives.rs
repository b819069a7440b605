use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pq_bench::{
    algorithms::{AESWrapper, AesKeySize, RSAWrapper, SphincsWrapper},
    Primitive, SecureRandom,
};

const MESSAGE_LEN: usize = 100;

fn bench_key_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Key Generation");
    group.sample_size(10);
    let mut rng = SecureRandom::from_entropy();

    group.bench_function("AES-256", |b| {
        let mut aes = AESWrapper::new(AesKeySize::Aes256);
        b.iter(|| aes.setup(&mut rng).unwrap())
    });

    group.bench_function("RSA-2048", |b| {
        let mut rsa = RSAWrapper::new(2048);
        b.iter(|| rsa.setup(&mut rng).unwrap())
    });

    group.bench_function("SPHINCS+-SHAKE-128f", |b| {
        let mut sphincs = SphincsWrapper::new();
        b.iter(|| sphincs.setup(&mut rng).unwrap())
    });

    group.finish();
}

fn bench_encrypt_or_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encrypt or Sign");
    group.sample_size(10);
    let mut rng = SecureRandom::from_entropy();
    let message = rng.random_bytes(MESSAGE_LEN).unwrap();

    {
        let mut aes = AESWrapper::new(AesKeySize::Aes256);
        let key = aes.setup(&mut rng).unwrap();
        group.bench_function("AES-256", |b| {
            b.iter(|| aes.forward(&key, black_box(&message), &mut rng).unwrap())
        });
    }

    {
        let mut rsa = RSAWrapper::new(2048);
        let keys = rsa.setup(&mut rng).unwrap();
        group.bench_function("RSA-2048", |b| {
            b.iter(|| rsa.forward(&keys, black_box(&message), &mut rng).unwrap())
        });
    }

    {
        let mut sphincs = SphincsWrapper::new();
        let keys = sphincs.setup(&mut rng).unwrap();
        group.bench_function("SPHINCS+-SHAKE-128f", |b| {
            b.iter(|| sphincs.forward(&keys, black_box(&message), &mut rng).unwrap())
        });
    }

    group.finish();
}

fn bench_decrypt_or_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decrypt or Verify");
    group.sample_size(10);
    let mut rng = SecureRandom::from_entropy();
    let message = rng.random_bytes(MESSAGE_LEN).unwrap();

    {
        let mut aes = AESWrapper::new(AesKeySize::Aes256);
        let key = aes.setup(&mut rng).unwrap();
        let ciphertext = aes.forward(&key, &message, &mut rng).unwrap();
        group.bench_function("AES-256", |b| {
            b.iter(|| aes.inverse(&key, black_box(&ciphertext), &message).unwrap())
        });
    }

    {
        let mut rsa = RSAWrapper::new(2048);
        let keys = rsa.setup(&mut rng).unwrap();
        let ciphertext = rsa.forward(&keys, &message, &mut rng).unwrap();
        group.bench_function("RSA-2048", |b| {
            b.iter(|| rsa.inverse(&keys, black_box(&ciphertext), &message).unwrap())
        });
    }

    {
        let mut sphincs = SphincsWrapper::new();
        let keys = sphincs.setup(&mut rng).unwrap();
        let signature = sphincs.forward(&keys, &message, &mut rng).unwrap();
        group.bench_function("SPHINCS+-SHAKE-128f", |b| {
            b.iter(|| sphincs.inverse(&keys, black_box(&signature), &message).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_key_generation,
    bench_encrypt_or_sign,
    bench_decrypt_or_verify
);
criterion_main!(benches);
