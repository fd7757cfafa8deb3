use thiserror::Error;

pub type GanttResult<T> = Result<T, GanttError>;

#[derive(Debug, Error)]
pub enum GanttError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid interval on lane `{label}`: started_at={started_at} must be < ended_at={ended_at}")]
    InvalidInterval {
        label: String,
        started_at: f64,
        ended_at: f64,
    },
}
