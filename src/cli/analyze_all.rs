use console::style;

use crate::cli::analyze::run_analysis;
use crate::cli::commands::AnalyzeAllArgs;
use crate::errors::CracklabError;
use crate::models::HashAlgorithm;

/// Run the single-algorithm pipeline for every algorithm in turn. A
/// failure is reported and the loop moves on; there is no retry and no
/// rollback of earlier outputs.
pub async fn handle_analyze_all(args: AnalyzeAllArgs) -> Result<(), CracklabError> {
    let plots_dir = args.out.join("plots");

    println!("Analyzing all hash algorithms...");
    println!("{}", "=".repeat(60));

    for algorithm in HashAlgorithm::ALL {
        println!("\nProcessing {}...", algorithm.label());
        let json_path = args.out.join(format!("summary_{algorithm}.json"));

        match run_analysis(algorithm, Some(&plots_dir), Some(&json_path)).await {
            Ok(_) => {
                println!("{} Generated {}", style("✓").green(), json_path.display());
                println!("{} Plots saved to {}", style("✓").green(), plots_dir.display());
            }
            Err(e) => {
                println!(
                    "{} Error processing {}: {}",
                    style("✗").red(),
                    algorithm,
                    e
                );
                continue;
            }
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Analysis complete!");
    println!("\nOutput files:");
    println!("  - JSON summaries: {}/summary_*.json", args.out.display());
    println!("  - Plots: {}/php_latency_*.png", plots_dir.display());
    println!("  - Plots: {}/hashcat_crack_times_*.png", plots_dir.display());

    Ok(())
}
