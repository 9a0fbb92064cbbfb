use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct VersionArgs {
    /// Show detailed version information
    #[arg(short = 'd', long)]
    pub detailed: bool,
}

pub async fn execute(args: VersionArgs) -> Result<()> {
    if args.detailed {
        println!("spellsweep {}", env!("CARGO_PKG_VERSION"));
        println!("Rust Edition: 2024");
        println!("License: {}", env!("CARGO_PKG_LICENSE"));
        println!("Description: {}", env!("CARGO_PKG_DESCRIPTION"));
    } else {
        println!("spellsweep {}", env!("CARGO_PKG_VERSION"));
    }
    Ok(())
}
