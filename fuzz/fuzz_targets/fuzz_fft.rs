#![no_main]

use libfuzzer_sys::fuzz_target;

use subsum_fft::{direct_convolution, multiply_polynomials, round_coefficients, Complex64};

fuzz_target!(|data: &[u8]| {
    // Small coefficients keep the rounded product exact.
    let half = (data.len() / 2).min(256);
    if half == 0 {
        return;
    }
    let coeffs = |bytes: &[u8]| -> Vec<Complex64> {
        bytes.iter().map(|&b| Complex64::new(f64::from(b % 16), 0.0)).collect()
    };
    let a = coeffs(&data[..half]);
    let b = coeffs(&data[half..2 * half]);

    let n = (2 * half).next_power_of_two();
    let pad = |c: &[Complex64]| {
        let mut out = c.to_vec();
        out.resize(n, Complex64::new(0.0, 0.0));
        out
    };

    let product = multiply_polynomials(&pad(&a), &pad(&b)).expect("power-of-two operands");
    let got = round_coefficients(&product);
    let expected = round_coefficients(&direct_convolution(&a, &b));

    assert_eq!(&got[..expected.len()], expected.as_slice(), "FFT product != schoolbook");
    assert!(got[expected.len()..].iter().all(|&c| c == 0));
});
