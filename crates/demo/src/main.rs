fn main() -> anyhow::Result<()> {
    bookshelf_observability::init();

    let config = bookshelf_demo::DemoConfig::from_env();
    tracing::info!(sections = config.sections.len(), "starting sets demo");

    for line in bookshelf_demo::transcript(&config)? {
        println!("{line}");
    }
    Ok(())
}
