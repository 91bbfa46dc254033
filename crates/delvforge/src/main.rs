use clap::Parser;
use delvforge::{init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}
