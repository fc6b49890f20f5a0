mod commands;
mod terminal;

use commands::{CommandLine, scan};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = commands.to_config();

    print::header("getting ready for sweep", cfg.quiet);
    scan::scan(&commands.file, &cfg).await?;
    print::end_of_program(cfg.quiet);

    Ok(())
}
