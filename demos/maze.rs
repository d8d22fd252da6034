//! Terminal maze demo: generate, solve, draw, and walk the path.
//!
//! Run: cargo run --bin maze -- 31 15 --seed 7 --weighted
//! Set `RUST_LOG=debug` to see generation attempts and searches.

use maze_demos::{Options, Walker};

fn main() {
    env_logger::init();

    let opts = match Options::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("usage: maze [WIDTH HEIGHT] [--seed N] [--weighted]");
            std::process::exit(2);
        }
    };
    if let Err(e) = run(&opts) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(opts: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = opts.session()?;
    session.generate()?;
    log::info!("solving with {}", session.strategy());

    let Some(path) = session.request_path().cloned() else {
        return Err("goal unreachable".into());
    };

    let snapshot = session.grid_snapshot();
    print!("{snapshot}");
    println!(
        "{}x{} maze, {} attempt(s), {} steps, cost {}",
        snapshot.width(),
        snapshot.height(),
        session.attempts(),
        path.steps(),
        path.cost(snapshot.grid()).unwrap_or_default(),
    );

    let mut walker = Walker::new(&path);
    println!("start at {}", walker.position());
    while let Some(cell) = walker.step() {
        let terrain = snapshot.terrain(cell)?;
        println!("  -> {cell} ({terrain})");
    }
    println!("reached goal {}", walker.position());
    Ok(())
}
