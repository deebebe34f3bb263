use eyre::{Context, Result};
use goaltrack::app::services::EventService;
use goaltrack::app::{App, destruct_terminal_for_panic};
use goaltrack::cli::{Command, init_logger};
use goaltrack::config::constants::FAREWELL_MESSAGE;
use goaltrack::config::{Configuration, verbose};
use goaltrack::models::Registry;
use goaltrack::storage::new_store;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cmd = Command::new();
    if cmd.version() {
        cmd.print_version();
        return Ok(());
    }

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let config = cmd.get_config()?;
    Configuration::init(config.clone())?;
    init_logger(&config.log)?;
    verbose!("[+] Logger initialized");

    verbose!("[+] Initializing store...");
    let store = new_store(&config.storage)
        .await
        .wrap_err("initializing store")?;

    let registry = Registry::new(store.load().await.wrap_err("loading goals")?);
    verbose!("[+] Loaded {} goal(s)", registry.len());

    let mut events = EventService::default();
    let mut app = App::new(store, registry, &mut events);
    app.run().await?;

    println!("{}", FAREWELL_MESSAGE);
    Ok(())
}
