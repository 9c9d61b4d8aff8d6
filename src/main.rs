use anyhow::Result;
use log::{info, warn};
use recipe_catalog::catalog_config::{CatalogConfig, VideoSearchConfig};
use recipe_catalog::enrichment::EnrichmentService;
use recipe_catalog::recipe_store::RecipeStore;
use recipe_catalog::user_state::UserStateManager;
use recipe_catalog::video_search::VideoSearchClient;
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting recipe catalog service");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Dataset location, overridable via environment
    let mut config = CatalogConfig::default();
    if let Ok(path) = env::var("RECIPES_PATH") {
        config.recipes_path = path;
    }

    info!("Loading recipe dataset from: {}", config.recipes_path);

    // A load failure is fatal: the process must not start without a catalog
    let store = Arc::new(RecipeStore::load(&config.recipes_path)?);

    info!("Recipe catalog ready with {} recipes", store.len());

    let _enrichment = EnrichmentService::new();
    let _user_state = UserStateManager::new(Arc::clone(&store));

    // The video lookup is optional; without a key every lookup yields None
    let _video_client = match env::var("YOUTUBE_API_KEY") {
        Ok(api_key) => Some(VideoSearchClient::new(VideoSearchConfig::new(api_key))?),
        Err(_) => {
            warn!("YOUTUBE_API_KEY not set, video lookups disabled");
            None
        }
    };

    info!("Core components initialized; transport adapter may now be mounted");

    Ok(())
}
