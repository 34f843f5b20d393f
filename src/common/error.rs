// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum EssError<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying bus error from the transport implementation.
    #[error("Bus error: {0:?}")]
    Io(E),

    /// An operation needed the bus before a configuration was applied.
    #[error("Session is not configured")]
    NotConfigured,

    /// A configuration was required but none was supplied.
    #[error("No configuration supplied")]
    MissingConfiguration,

    /// Received checksum does not match the one calculated over the data word.
    #[error("CRC mismatch: expected {expected:#04x}, calculated {calculated:#04x}")]
    CrcMismatch { expected: u8, calculated: u8 },
}

// Allow mapping from the underlying bus error
impl<E: core::fmt::Debug> From<E> for EssError<E> {
    fn from(e: E) -> Self {
        EssError::Io(e)
    }
}

/// Flat status codes exposed to hosts that speak the numeric driver ABI.
///
/// Only `Success` and `Fail` are ever produced by this driver; the remaining
/// codes are part of the shared status set.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum EssStatus {
    Success = 0x00,
    Fail = 0x01,
    AlreadyInitialized = 0x02,
    Invalid = 0x03,
    NotSupported = 0x04,
}

impl EssStatus {
    /// Collapses a driver result into its status code.
    pub fn from_result<T, E: core::fmt::Debug>(result: &Result<T, EssError<E>>) -> Self {
        match result {
            Ok(_) => EssStatus::Success,
            Err(_) => EssStatus::Fail,
        }
    }
}

impl<E: core::fmt::Debug> From<&EssError<E>> for EssStatus {
    fn from(_: &EssError<E>) -> Self {
        EssStatus::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct MockBusError;

    #[test]
    fn test_every_error_collapses_to_fail() {
        let errors: [EssError<MockBusError>; 4] = [
            EssError::Io(MockBusError),
            EssError::NotConfigured,
            EssError::MissingConfiguration,
            EssError::CrcMismatch { expected: 0x81, calculated: 0x00 },
        ];
        for e in &errors {
            assert_eq!(EssStatus::from(e), EssStatus::Fail);
        }
    }

    #[test]
    fn test_status_from_result() {
        let ok: Result<f32, EssError<MockBusError>> = Ok(21.5);
        let err: Result<f32, EssError<MockBusError>> = Err(EssError::NotConfigured);
        assert_eq!(EssStatus::from_result(&ok), EssStatus::Success);
        assert_eq!(EssStatus::from_result(&err), EssStatus::Fail);
        assert_eq!(EssStatus::Fail as u8, 0x01);
    }

    #[test]
    fn test_bus_error_converts_into_io() {
        let e: EssError<MockBusError> = MockBusError.into();
        assert!(matches!(e, EssError::Io(MockBusError)));
    }
}
