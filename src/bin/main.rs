use locview::config::{parse_config, Config};
use locview::page::{ConsolePage, Page};
use locview::service::DisplayService;

async fn async_main(config: Config) -> anyhow::Result<()> {
    simple_logger::init_with_level(config.log_level)?;

    let service = DisplayService::from_config(config);
    let mut page = Page::from(ConsolePage::new());
    service.run(&mut page).await?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "locview.toml".to_owned());

    let config = parse_config(&config_path)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async_main(config))
}
