#![no_main]

use libfuzzer_sys::fuzz_target;

use subsum_core::bucketed::FftSolver;
use subsum_core::naive::DynamicProgrammingSolver;
use subsum_core::options::SolverOptions;
use subsum_core::solver::SubsetSumSolver;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First two bytes are the bound, the rest are values capped for speed.
    let bound = i64::from(u16::from_le_bytes([data[0], data[1]]) % 2048);
    let values: Vec<u64> = data[2..].iter().take(64).map(|&b| u64::from(b)).collect();

    let opts = SolverOptions::default();
    let fft = FftSolver::new().solve(&values, bound, &opts);
    let dp = DynamicProgrammingSolver::new().solve(&values, bound, &opts);

    match (fft, dp) {
        (Ok(f), Ok(d)) => assert_eq!(f, d, "FFT != DP for bound={bound}"),
        (f, d) => panic!("solver failed: fft={f:?} dp={d:?}"),
    }
});
