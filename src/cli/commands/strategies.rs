//! List strategies command.

use anyhow::Result;

pub async fn run() -> Result<()> {
    println!("Available Strategies");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for info in signalx_strategies::available() {
        println!("  {} ", info.name);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", info.description);
        println!();
    }

    println!("Strategies run together on each analyze pass; use");
    println!("--with-channel-break to include the optional heuristic.");

    Ok(())
}
