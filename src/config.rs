use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Upper bound on the suggestions a single completion returns.
    #[config(env = "NTQL_MAX_SUGGESTIONS")]
    pub max_suggestions: Option<usize>,
    /// Table the tag sub-selects read from.
    #[config(env = "NTQL_TAG_TABLE", default = "atomic_tags")]
    pub tag_table: String,
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}
