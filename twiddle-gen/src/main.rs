use twiddle_gen::{init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_with_legacy_flags(std::env::args_os());
    init_logging();
    run(&cli)?;
    Ok(())
}
