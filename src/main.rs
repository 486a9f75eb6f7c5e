use anyhow::Result;

fn main() -> Result<()> {
    convo_browser::cli::run()
}
