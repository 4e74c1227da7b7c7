use anyhow::Result;
use clap::Parser;

use snake_tui::app::App;
use snake_tui::game::GameConfig;

#[derive(Parser)]
#[command(name = "snake-tui", version, about = "Classic snake in the terminal")]
struct Cli {
    /// Arena width in cells
    #[arg(long, default_value_t = 20)]
    width: usize,

    /// Arena height in cells
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Game speed in ticks per second
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=60))]
    fps: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.width, cli.height);
    config.tick_interval_ms = 1000 / cli.fps;

    App::new(config).run().await
}
