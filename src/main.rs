fn main() -> anyhow::Result<()> {
    arc_scrape::cli::run()
}
