use shotsize::{batch, config::BatchConfig, error::BatchError, init};

fn main() {
    init::init();

    if let Err(e) = real_main() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), BatchError> {
    // Per-file failures are already reported; only a failed setup changes the exit code.
    batch::run(&BatchConfig::default())?;
    Ok(())
}
