use std::io::Write;

use log::{debug, info};

use crate::algorithms::{AESWrapper, AesKeySize, RSAWrapper, SphincsWrapper};
use crate::{
    BenchConfig, BenchResult, Clock, CryptoError, MonotonicClock, Primitive, Report, Result,
    SecureRandom,
};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

#[derive(Default)]
struct PhaseTotals {
    key_gen_ms: f64,
    forward_ms: f64,
    inverse_ms: f64,
}

impl PhaseTotals {
    fn add(&mut self, t0: u64, t1: u64, t2: u64, t3: u64) -> (f64, f64, f64) {
        let key_gen = elapsed_ms(t0, t1);
        let forward = elapsed_ms(t1, t2);
        let inverse = elapsed_ms(t2, t3);
        self.key_gen_ms += key_gen;
        self.forward_ms += forward;
        self.inverse_ms += inverse;
        (key_gen, forward, inverse)
    }
}

fn elapsed_ms(start: u64, end: u64) -> f64 {
    end.saturating_sub(start) as f64 / NANOS_PER_MILLI
}

/// Fixed-iteration measurement loop. Owns the clock and the RNG of a run
/// and drives one primitive at a time through setup, forward and inverse.
pub struct BenchmarkRunner<C: Clock> {
    clock: C,
    rng: SecureRandom,
    iterations: usize,
    message_len: usize,
}

impl<C: Clock> BenchmarkRunner<C> {
    pub fn new(clock: C, rng: SecureRandom, iterations: usize, message_len: usize) -> Self {
        Self {
            clock,
            rng,
            iterations,
            message_len,
        }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Benchmarks `primitive`, tagging any failure with its algorithm.
    pub fn measure<P: Primitive>(&mut self, primitive: &mut P) -> Result<BenchResult> {
        let algorithm = primitive.algorithm();
        self.run_iterations(primitive)
            .map_err(|e| CryptoError::Benchmark {
                algorithm,
                source: Box::new(e),
            })
    }

    fn run_iterations<P: Primitive>(&mut self, primitive: &mut P) -> Result<BenchResult> {
        if self.iterations == 0 {
            return Err(CryptoError::ConfigError(
                "iteration count must be at least 1".to_string(),
            ));
        }

        let algorithm = primitive.algorithm();
        info!("Benchmarking {} over {} iterations", algorithm, self.iterations);

        // One message per primitive, reused by every iteration.
        let message = self.rng.random_bytes(self.message_len)?;
        let mut totals = PhaseTotals::default();
        let mut result = BenchResult::new(algorithm, primitive.key_size_bits());

        for i in 0..self.iterations {
            let t0 = self.clock.now_nanos();
            let key = primitive.setup(&mut self.rng)?;
            let t1 = self.clock.now_nanos();
            let output = primitive.forward(&key, &message, &mut self.rng)?;
            let t2 = self.clock.now_nanos();
            let outcome = primitive.inverse(&key, &output, &message)?;
            let t3 = self.clock.now_nanos();

            outcome.check(&message)?;

            if i == 0 {
                let sizes = primitive.sizes(&key, &output)?;
                debug!("{} artifact sizes: {:?}", algorithm, sizes);
                result.set_sizes(sizes);
            }

            let (key_gen, forward, inverse) = totals.add(t0, t1, t2, t3);
            debug!(
                "{} iteration {}: setup {:.3} ms, forward {:.3} ms, inverse {:.3} ms",
                algorithm, i, key_gen, forward, inverse
            );
        }

        let n = self.iterations as f64;
        result.key_gen_time_ms = totals.key_gen_ms / n;
        result.encrypt_time_ms = totals.forward_ms / n;
        result.decrypt_time_ms = totals.inverse_ms / n;

        info!(
            "{} done: key setup {:.3} ms, forward {:.3} ms, inverse {:.3} ms",
            algorithm, result.key_gen_time_ms, result.encrypt_time_ms, result.decrypt_time_ms
        );
        Ok(result)
    }
}

/// Measures the three primitives in report order. Nothing is emitted here,
/// so a failure in any of them leaves the output untouched.
pub fn run_suite<C, A, R, S>(
    runner: &mut BenchmarkRunner<C>,
    aes: &mut A,
    rsa: &mut R,
    sphincs: &mut S,
) -> Result<Report>
where
    C: Clock,
    A: Primitive,
    R: Primitive,
    S: Primitive,
{
    let aes_result = runner.measure(aes)?;
    let rsa_result = runner.measure(rsa)?;
    let sphincs_result = runner.measure(sphincs)?;
    Ok(Report::new(vec![aes_result, rsa_result, sphincs_result]))
}

/// Full run: validates `config`, benchmarks AES, RSA and SPHINCS+, then
/// writes the CSV report to `out`.
pub fn run<W: Write>(config: &BenchConfig, out: &mut W) -> Result<()> {
    config.validate()?;

    let mut runner = BenchmarkRunner::new(
        MonotonicClock::new(),
        config.rng(),
        config.iterations,
        config.message_len,
    );
    let mut aes = AESWrapper::new(AesKeySize::from_bits(config.aes_key_bits)?);
    let mut rsa = RSAWrapper::new(config.rsa_modulus_bits);
    let mut sphincs = SphincsWrapper::new();

    let report = run_suite(&mut runner, &mut aes, &mut rsa, &mut sphincs)?;
    report.write_to(out)?;
    out.flush()?;
    Ok(())
}
