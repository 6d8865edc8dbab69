use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use feishu_blog::blog::Blog;
use feishu_blog::config::loader::{self, Args};
use feishu_blog::server;
use feishu_blog::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Read environment-backed arguments and build settings
    let args = Args::parse();
    let settings = Arc::new(loader::build(&args)?);

    // 2. Install tracing
    logging::run(&settings, args.log_level);
    loader::report_startup_state(&settings);

    // 3. Build the query facade (owns the TTL cache)
    let blog = Arc::new(Blog::new(settings.clone()));

    // 4. Serve
    info!("feishu-blog starting...");
    server::server::start(&settings, blog).await
}
