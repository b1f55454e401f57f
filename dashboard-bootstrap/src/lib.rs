pub mod context;
pub mod lifecycle;

pub use context::AppContext;
pub use lifecycle::run_standalone;

pub async fn run() -> anyhow::Result<()> {
    run_standalone().await
}
