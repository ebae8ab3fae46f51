use rsimplex::{Problem, RatioTest, Simplex, SimplexResult, SolverOptions, Solver};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> SimplexResult<()> {
    let level = match std::env::var("RSIMPLEX_LOG").as_deref() {
        Ok("trace") => Level::TRACE,
        Ok("debug") => Level::DEBUG,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let opts = SolverOptions::new()
        .with_max_iterations(10)
        .with_trace_tableau(level == Level::TRACE);

    let model = Problem::maximize(&[7, 8, 10], &[[2, 3, 2, 1000], [1, 1, 2, 800]])?;
    println!("model:\n{}", model);
    println!("initial tableau:\n{}", model.as_tableau()?);

    let solver = Solver::new(model, Simplex::with_options(opts));
    let solution = solver.solve()?;
    println!("solution:\n{}", solution);

    let model = Problem::minimize(&[3, 9], &[[2, 1, 8], [1, 2, 8]])?;
    println!("model:\n{}", model);
    println!("dual:\n{}", model.dual()?);

    let strict = opts.with_ratio_test(RatioTest::PositiveDivisor);
    let solver = Solver::new(model, Simplex::with_options(strict));
    let solution = solver.solve()?;
    println!("solution:\n{}", solution);

    Ok(())
}
