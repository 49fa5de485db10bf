fn main() {
    yorku_probe::cli::run()
}
