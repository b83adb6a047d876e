use crate::loader::error::LoadError;
use crate::pipeline::PipelineError;
use crate::scales::ScaleError;
use crate::types::calendar::CalendarError;
use crate::types::layout::UnknownLayout;
use crate::types::metric::UnknownMetric;
use crate::validation::error::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationTempsError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    UnknownMetric(#[from] UnknownMetric),

    #[error(transparent)]
    UnknownLayout(#[from] UnknownLayout),
}
