fn main() -> anyhow::Result<()> {
    bookmark_parser::cli::run()
}
