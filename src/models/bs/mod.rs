// Black-Scholes closed-form pricing for European options. One evaluation
// returns both sides and the full first/second-order Greek set; implied
// volatility is not provided.

pub mod bs_greeks;
pub mod bs_model;

pub use bs_greeks::{OptionGreeks, SensitivityReport};
pub use bs_model::{black_scholes, evaluate, MarketInputs, OptionKind};
