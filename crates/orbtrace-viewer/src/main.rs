use orbtrace_engine::device::GpuInit;
use orbtrace_engine::logging::{init_logging, LoggingConfig};
use orbtrace_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig::default();
    log::info!("starting {}", config.title);

    Runtime::run(config, GpuInit::default())
}
