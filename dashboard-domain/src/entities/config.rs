// Runtime configuration handed from the config layer to the rest of the app

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub dataset_path: String,
    pub map_zoom: u32,
    pub default_center_lat: f64,
    pub default_center_lon: f64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}
