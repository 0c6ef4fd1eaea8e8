use anyhow::Result;
use clap::Parser;
use serpent::game::GameConfig;
use serpent::session::GameSession;

#[derive(Parser)]
#[command(name = "serpent")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = GameConfig::default().grid_width)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = GameConfig::default().grid_height)]
    height: usize,

    /// Simulation period in milliseconds
    #[arg(long, default_value_t = GameConfig::default().tick_interval_ms)]
    tick_ms: u64,

    /// Initial snake length
    #[arg(long, default_value_t = GameConfig::default().initial_snake_length)]
    snake_length: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        tick_interval_ms: cli.tick_ms,
        initial_snake_length: cli.snake_length,
        ..Default::default()
    };

    let mut session = GameSession::new(config)?;
    session.run().await
}
