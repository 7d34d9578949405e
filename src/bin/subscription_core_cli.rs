use subscription_core::{cli::run_cli, init};

fn main() {
    init();

    if let Err(err) = run_cli() {
        tracing::warn!(error = %err, "subscription request rejected");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
