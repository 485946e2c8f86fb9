use kafka_peek::error::PeekError;
use tonic::Status;
use tracing::error;

#[derive(Debug)]
pub enum ApplicationError {
    InvalidArgument(anyhow::Error),
    Unavailable(anyhow::Error),
}

impl From<PeekError> for ApplicationError {
    fn from(value: PeekError) -> Self {
        match value {
            PeekError::InvalidArgument(e) => ApplicationError::InvalidArgument(e),
            PeekError::BrokerUnavailable(e) => ApplicationError::Unavailable(e),
        }
    }
}

impl From<ApplicationError> for Status {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::InvalidArgument(e) => {
                error!("{e:?}");
                Status::invalid_argument(format!("{e:#}"))
            }
            ApplicationError::Unavailable(e) => {
                error!("{e:?}");
                Status::unavailable(format!("{e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use tonic::Code;

    #[test]
    fn peek_errors_map_to_status_codes() {
        let invalid: Status =
            ApplicationError::from(PeekError::InvalidArgument(anyhow!("Topic can't be empty")))
                .into();
        let unavailable: Status =
            ApplicationError::from(PeekError::BrokerUnavailable(anyhow!("Connection refused")))
                .into();

        assert_eq!(invalid.code(), Code::InvalidArgument);
        assert_eq!(invalid.message(), "Topic can't be empty");
        assert_eq!(unavailable.code(), Code::Unavailable);
    }
}
