use serde::Deserialize;

use crate::grid::EntityKind;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Copy)]
pub struct SpawnParams {
    pub count: usize,
    pub min_distance: f64,
    pub y: f64,
    pub max_tries: u32,
}

#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub chunk_size: f64,
    pub active_radius: i32,
    pub expiry_ms: u64,
    pub evict_interval_ms: u64,
    pub gen_interval_ms: u64,
    pub containers: SpawnParams,
    pub coins: SpawnParams,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            chunk_size: 16.0,
            active_radius: 1,
            expiry_ms: 5000,
            evict_interval_ms: 1000,
            gen_interval_ms: 5000,
            containers: SpawnParams {
                count: 2,
                min_distance: 4.0,
                y: 0.5,
                max_tries: 20,
            },
            coins: SpawnParams {
                count: 5,
                min_distance: 3.0,
                y: 1.0,
                max_tries: 50,
            },
        }
    }
}

impl ServerConfig {
    pub fn params(&self, kind: EntityKind) -> &SpawnParams {
        match kind {
            EntityKind::Container => &self.containers,
            EntityKind::Coin => &self.coins,
        }
    }
}

#[derive(Deserialize, Default)]
struct FileConfig {
    port: Option<u16>,
    chunk_size: Option<f64>,
    active_radius: Option<i32>,
    expiry_ms: Option<u64>,
    evict_interval_ms: Option<u64>,
    gen_interval_ms: Option<u64>,
    containers: Option<FileSpawnParams>,
    coins: Option<FileSpawnParams>,
}

#[derive(Deserialize, Default)]
struct FileSpawnParams {
    count: Option<usize>,
    min_distance: Option<f64>,
    y: Option<f64>,
    max_tries: Option<u32>,
}

/// Defaults, overlaid with the optional JSON config file, then the
/// `WAYPOST_PORT` env var.
pub fn load() -> ServerConfig {
    let path = std::env::var("WAYPOST_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "waypost.json".to_string());
    let file = match std::fs::read_to_string(&path) {
        Ok(contents) => match serde_json::from_str::<FileConfig>(&contents) {
            Ok(cfg) => {
                println!("[Waypost] Loaded config from {}", path);
                cfg
            }
            Err(e) => {
                eprintln!("[Waypost] Failed to parse {}: {}", path, e);
                FileConfig::default()
            }
        },
        Err(_) => FileConfig::default(),
    };

    let mut config = apply_file(ServerConfig::default(), &file);
    if let Some(port) = std::env::var("WAYPOST_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
    {
        config.port = port;
    }
    config
}

fn apply_file(mut config: ServerConfig, file: &FileConfig) -> ServerConfig {
    if let Some(v) = file.port {
        config.port = v;
    }
    if let Some(v) = file.chunk_size {
        config.chunk_size = v;
    }
    if let Some(v) = file.active_radius {
        config.active_radius = v;
    }
    if let Some(v) = file.expiry_ms {
        config.expiry_ms = v;
    }
    if let Some(v) = file.evict_interval_ms {
        config.evict_interval_ms = v;
    }
    if let Some(v) = file.gen_interval_ms {
        config.gen_interval_ms = v;
    }
    if let Some(ref p) = file.containers {
        config.containers = apply_spawn(config.containers, p);
    }
    if let Some(ref p) = file.coins {
        config.coins = apply_spawn(config.coins, p);
    }
    config
}

fn apply_spawn(mut params: SpawnParams, file: &FileSpawnParams) -> SpawnParams {
    if let Some(v) = file.count {
        params.count = v;
    }
    if let Some(v) = file.min_distance {
        params.min_distance = v;
    }
    if let Some(v) = file.y {
        params.y = v;
    }
    if let Some(v) = file.max_tries {
        params.max_tries = v;
    }
    params
}
