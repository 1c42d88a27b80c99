fn main() {
    pubsync::app::cli::run();
}
