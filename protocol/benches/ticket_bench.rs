// Ticket benchmarks for the KeyTicket protocol.
//
// Covers keypair derivation (dominated by PBKDF2), ticket creation and its
// signing step, verification, and decoding across a range of name lengths.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use keyticket_protocol::identity::{derive_keypair, generate_random_challenge};
use keyticket_protocol::ticket::{
    create_identity_ticket, decode, sign_identity_ticket, verify_identity_ticket,
};

const PASSWORD: &str = "correct horse battery staple";

fn bench_derive_keypair(c: &mut Criterion) {
    c.bench_function("identity/derive_keypair", |b| {
        b.iter(|| derive_keypair("alice", PASSWORD));
    });
}

fn bench_create_ticket(c: &mut Criterion) {
    let challenge = generate_random_challenge(32);

    c.bench_function("ticket/create", |b| {
        b.iter(|| create_identity_ticket("alice", PASSWORD, &challenge));
    });
}

fn bench_signing_step(c: &mut Criterion) {
    // Ticket creation minus key derivation, to separate the two costs.
    let keypair = derive_keypair("alice", PASSWORD);
    let challenge = generate_random_challenge(32);

    c.bench_function("ticket/signing_step", |b| {
        b.iter(|| sign_identity_ticket(b"alice", &keypair, &challenge));
    });
}

fn bench_verify_ticket(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticket/verify");
    let keypair = derive_keypair("alice", PASSWORD);
    let challenge = generate_random_challenge(32);

    for name_len in [0usize, 16, 256, 4096] {
        let name = vec![b'n'; name_len];
        let ticket = sign_identity_ticket(&name, &keypair, &challenge);

        group.throughput(Throughput::Bytes(ticket.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name_len), &ticket, |b, ticket| {
            b.iter(|| verify_identity_ticket(ticket.as_bytes(), &challenge));
        });
    }

    group.finish();
}

fn bench_decode_ticket(c: &mut Criterion) {
    let challenge = generate_random_challenge(32);
    let ticket = create_identity_ticket("alice", PASSWORD, &challenge);

    c.bench_function("ticket/decode", |b| {
        b.iter(|| decode(ticket.as_bytes()).unwrap());
    });
}

criterion_group!(
    benches,
    bench_derive_keypair,
    bench_create_ticket,
    bench_signing_step,
    bench_verify_ticket,
    bench_decode_ticket,
);
criterion_main!(benches);
