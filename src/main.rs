use c3p::slope_subset;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[slope_subset]
#[derive(Debug, Clone, Copy, PartialEq)]
enum EasySlope {
    BeginnersParadise,
    PracticeRun,
}

#[slope_subset]
#[derive(Debug, Clone, PartialEq)]
enum Run {
    Groomed { length_m: u32 },
    Mogul(u8),
    Closed,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let a = 17;
    let b = 25;
    let (result, code) = c3p::stringify!(a + b);
    tracing::info!(result, code, "stringify");

    let greeting = c3p::stringify!(format!("Hello, {}", "world"));
    tracing::info!(value = %greeting.0, code = greeting.1, "stringify");

    for slope in [EasySlope::BeginnersParadise, EasySlope::PracticeRun] {
        tracing::info!(from = ?slope, to = ?EasySlope::new(slope), "slope_subset");
    }

    for run in [
        Run::Groomed { length_m: 1200 },
        Run::Mogul(3),
        Run::Closed,
    ] {
        let to = Run::new(run.clone());
        tracing::info!(from = ?run, ?to, "slope_subset");
    }
}
