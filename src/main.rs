fn main() {
    entrykit::app::cli::run();
}
