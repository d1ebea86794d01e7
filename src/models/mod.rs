pub mod bs;

/// Standard normal distribution helpers shared by the pricing models
pub mod utils {
    use std::f64::consts::{PI, SQRT_2};

    /// Standard normal cumulative distribution function Φ(x).
    ///
    /// Written in terms of `erfc` rather than `1 + erf` so the lower tail keeps
    /// full relative precision instead of cancelling to zero.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x / SQRT_2)
    }

    /// Standard normal probability density function φ(x)
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

}
