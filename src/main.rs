fn main() {
    armada::app::cli::run();
}
