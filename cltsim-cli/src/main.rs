fn main() -> anyhow::Result<()> {
    cltsim_cli::run()
}
