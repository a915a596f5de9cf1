use std::sync::Arc;

use crate::{
    application::{access::ArticleGate, ports::time::Clock},
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    /// Only used to record detail views.
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) gate: ArticleGate,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        clock: Arc<dyn Clock>,
        gate: ArticleGate,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            clock,
            gate,
        }
    }
}
