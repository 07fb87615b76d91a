use std::env;

use crate::store::StoreVariant;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub variant: StoreVariant,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3001);

    let variant = env::var("STORE_VARIANT")
        .ok()
        .and_then(|s| s.parse::<StoreVariant>().ok())
        .unwrap_or(StoreVariant::Synced);

    Settings {
        host,
        port,
        variant,
    }
}
