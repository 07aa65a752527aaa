use clap::Parser;
use teams_post::{Args, logging, run};

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(a) => a,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    logging::init(args.verbose);

    match run(&args).await {
        Ok(result) => {
            println!("✅ Posted to {}", args.channel);
            println!("   URL: {result}");
        }
        Err(e) => {
            eprintln!("❌ Error: {e}");
            std::process::exit(1);
        }
    }
}
