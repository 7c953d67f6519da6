use std::time::{Duration, Instant};

use rand::Rng;

use qrlite::{max_capacity, ECLevel, Mode, QRBuilder, QRReader, Version};

const ROUNDS: usize = 200;

struct Timing {
    build: Duration,
    read: Duration,
    failures: usize,
}

fn benchmark_level(ecl: ECLevel, rng: &mut impl Rng) -> Timing {
    let max_len = max_capacity(Mode::Byte, ecl);
    let mut timing = Timing { build: Duration::ZERO, read: Duration::ZERO, failures: 0 };

    for _ in 0..ROUNDS {
        let len = rng.random_range(0..=max_len);
        let data = (0..len).map(|_| rng.random::<u8>()).collect::<Vec<_>>();

        let start = Instant::now();
        let qr = match QRBuilder::new(&data).ec_level(ecl).build() {
            Ok(qr) => qr,
            Err(e) => {
                eprintln!("Failed to build {len} bytes at {ecl}: {e}");
                timing.failures += 1;
                continue;
            }
        };
        timing.build += start.elapsed();

        let start = Instant::now();
        match QRReader::read(qr.grid()) {
            Ok(decoded) if decoded == data => {}
            Ok(_) => timing.failures += 1,
            Err(e) => {
                eprintln!("Failed to read {len} bytes at {ecl}: {e}");
                timing.failures += 1;
            }
        }
        timing.read += start.elapsed();
    }
    timing
}

fn benchmark_largest_symbol() -> Duration {
    let data = vec![0xA5; max_capacity(Mode::Byte, ECLevel::L)];
    let Ok(ver) = Version::from_number(15) else {
        return Duration::ZERO;
    };
    let start = Instant::now();
    for _ in 0..ROUNDS {
        if let Ok(qr) = QRBuilder::new(&data).version(ver).ec_level(ECLevel::L).build() {
            let _ = QRReader::read(qr.grid());
        }
    }
    start.elapsed()
}

fn main() {
    println!("🚀 Running qrlite Benchmark Suite");
    println!("==================================\n");

    let total_start = Instant::now();
    let mut rng = rand::rng();

    let cell_w = 12;
    let divider = "-".repeat(4 * (cell_w + 2) + 1);
    println!("{divider}");
    println!("| {:<cell_w$}| {:<cell_w$}| {:<cell_w$}| {:<cell_w$}|", "Level", "Build", "Read", "Failures");
    println!("{divider}");
    for ecl in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
        let t = benchmark_level(ecl, &mut rng);
        let build = format!("{:?}", t.build / ROUNDS as u32);
        let read = format!("{:?}", t.read / ROUNDS as u32);
        println!("| {:<cell_w$}| {build:<cell_w$}| {read:<cell_w$}| {:<cell_w$}|", ecl.to_string(), t.failures);
    }
    println!("{divider}\n");

    let largest = benchmark_largest_symbol();
    println!("Version 15 round trip: {:?} per symbol\n", largest / ROUNDS as u32);

    println!("✅ All benchmarks completed!");
    println!("Total time elapsed: {:?}", total_start.elapsed());
}
