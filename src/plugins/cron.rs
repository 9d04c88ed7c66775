//! Background maintenance - evicts idle admin sessions

use std::sync::Arc;

use crate::{prelude::*, state::AppState};

const GC_PERIOD: Duration = Duration::from_secs(60);

pub struct Plugin;

#[async_trait::async_trait]
impl super::Plugin for Plugin {
  async fn start(&self, app: Arc<AppState>) -> anyhow::Result<()> {
    let mut interval = tokio::time::interval(GC_PERIOD);

    loop {
      interval.tick().await;
      app.gc_sessions();
    }
  }
}
