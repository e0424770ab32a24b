use lineup_core::{Roster, utils::TimeEstimation};
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::{info, warn};
use web::{AppData, CoachManagerServer, ServerConfig, SquadSource};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let catalog = DatabaseGenerator::catalog(&database)?;
    let calendar = DatabaseGenerator::calendar(&database, &catalog);

    let squad = SquadSource::embedded(database.squad.json);

    // the squad can be reloaded later through the api
    let roster = Roster::fetch(&squad).await.unwrap_or_else(|e| {
        warn!("starting with an empty squad: {}", e);
        Roster::default()
    });

    let data = AppData::new(catalog, calendar, roster, squad);

    CoachManagerServer::new(data, ServerConfig::from_env()).run().await?;

    Ok(())
}
