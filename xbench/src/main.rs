fn main() {
    if let Err(e) = xbench::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
