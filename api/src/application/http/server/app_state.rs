use std::sync::Arc;

use jobly_core::application::JoblyService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: JoblyService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: JoblyService) -> Self {
        Self { args, service }
    }
}
