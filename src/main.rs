fn main() {
    if let Err(e) = inventory_visuals::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
